use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{EventId, Ticket};
use crate::utils::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceEvent {
    pub id: EventId,
    pub name: String,
    pub date: String,
    pub location: String,
    pub capacity: u32,
    pub tickets: BTreeMap<String, Ticket>,
}

impl RaceEvent {
    pub fn new(id: EventId, name: &str, date: &str, location: &str, capacity: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            date: date.to_string(),
            location: location.to_string(),
            capacity,
            tickets: BTreeMap::new(),
        }
    }

    /// Registers a ticket template. Ticket names are unique per event.
    pub fn add_ticket(&mut self, ticket: Ticket) -> Result<(), AppError> {
        if self.tickets.contains_key(&ticket.name) {
            return Err(AppError::DuplicateTicket(ticket.name.clone()));
        }
        self.tickets.insert(ticket.name.clone(), ticket);
        Ok(())
    }

    pub fn ticket(&self, name: &str) -> Option<&Ticket> {
        self.tickets.get(name)
    }

    pub fn ticket_mut(&mut self, name: &str) -> Option<&mut Ticket> {
        self.tickets.get_mut(name)
    }

    pub fn available_tickets(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.values()
    }

    /// Seats sold are not tracked; availability is the configured capacity.
    pub fn availability(&self) -> u32 {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn duplicate_ticket_name_is_rejected() {
        let mut event = RaceEvent::new(1, "Grand National", "2025-06-10", "Aintree", 500);
        event
            .add_ticket(Ticket::new(101, "Single Race", Decimal::new(5000, 2), "One race", "General"))
            .unwrap();

        let err = event
            .add_ticket(Ticket::new(102, "Single Race", Decimal::new(9900, 2), "One race", "VIP"))
            .unwrap_err();

        assert!(matches!(err, AppError::DuplicateTicket(_)));
        assert_eq!(event.tickets.len(), 1);
        assert_eq!(event.ticket("Single Race").unwrap().id, 101);
    }

    #[test]
    fn availability_reports_capacity() {
        let event = RaceEvent::new(2, "Royal Ascot", "2025-07-15", "Ascot", 1000);
        assert_eq!(event.availability(), 1000);
    }
}
