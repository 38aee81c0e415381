use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TicketId;

/// A purchasable ticket type. Attached to a `RaceEvent` it acts as a
/// template; inside a `Booking` it is an independent value copy taken at
/// booking time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub name: String,
    pub price: Decimal,
    pub validity: String,
    pub features: String,
    pub discount_available: bool,
}

impl Ticket {
    pub fn new(id: TicketId, name: &str, price: Decimal, validity: &str, features: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            validity: validity.to_string(),
            features: features.to_string(),
            discount_available: true,
        }
    }
}
