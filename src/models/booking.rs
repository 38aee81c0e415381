use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BookingId, EventId, Ticket, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub event_id: EventId,
    pub booked_at: DateTime<Utc>,
    pub status: BookingStatus,
    pub tickets: Vec<Ticket>,
    pub total: Decimal,
}

impl Booking {
    pub fn new(id: BookingId, user_id: UserId, event_id: EventId) -> Self {
        Self {
            id,
            user_id,
            event_id,
            booked_at: Utc::now(),
            status: BookingStatus::Pending,
            tickets: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    /// Appends an independent ticket copy and refreshes the stored total.
    pub fn add_ticket(&mut self, ticket: Ticket) {
        self.tickets.push(ticket);
        self.total = self.total();
    }

    /// Sum of the ticket prices, recomputed on every call.
    pub fn total(&self) -> Decimal {
        self.tickets.iter().map(|ticket| ticket.price).sum()
    }
}
