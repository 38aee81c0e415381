use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BookingId, PaymentId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub booking_id: BookingId,
    pub amount: Decimal,
    pub paid_at: DateTime<Utc>,
    pub method: String,
}

impl Payment {
    pub fn new(id: PaymentId, booking_id: BookingId, amount: Decimal, method: &str) -> Self {
        Self {
            id,
            booking_id,
            amount,
            paid_at: Utc::now(),
            method: method.to_string(),
        }
    }
}
