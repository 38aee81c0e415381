use std::collections::BTreeMap;

use crate::models::{Booking, EventId, RaceEvent};

/// Counts sold ticket copies per event, per ticket name. Pure; recomputed
/// from scratch on every call.
pub fn build_sales_report<'a, I>(bookings: I) -> BTreeMap<EventId, BTreeMap<String, u32>>
where
    I: IntoIterator<Item = &'a Booking>,
{
    let mut report: BTreeMap<EventId, BTreeMap<String, u32>> = BTreeMap::new();
    for booking in bookings {
        for ticket in &booking.tickets {
            *report
                .entry(booking.event_id)
                .or_default()
                .entry(ticket.name.clone())
                .or_default() += 1;
        }
    }
    report
}

/// Flips the discount flag on an event's ticket template. Returns false and
/// leaves the event untouched when the name is unknown. Does not persist;
/// write-back is the caller's call.
pub fn set_discount_availability(event: &mut RaceEvent, ticket_name: &str, available: bool) -> bool {
    match event.ticket_mut(ticket_name) {
        Some(ticket) => {
            ticket.discount_available = available;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Booking, Ticket};
    use rust_decimal::Decimal;

    fn booking_with_tickets(id: u64, event_id: EventId, names: &[&str]) -> Booking {
        let mut booking = Booking::new(id, 1, event_id);
        for (i, name) in names.iter().enumerate() {
            booking.add_ticket(Ticket::new(
                100 + i as u64,
                name,
                Decimal::new(5000, 2),
                "One race",
                "General",
            ));
        }
        booking
    }

    #[test]
    fn report_counts_per_event_per_ticket_name() {
        let bookings = vec![
            booking_with_tickets(1, 1, &["Single Race", "Single Race"]),
            booking_with_tickets(2, 2, &["VIP"]),
        ];

        let report = build_sales_report(&bookings);

        assert_eq!(report.len(), 2);
        assert_eq!(report[&1]["Single Race"], 2);
        assert_eq!(report[&2]["VIP"], 1);
    }

    #[test]
    fn report_over_no_bookings_is_empty() {
        let bookings: Vec<Booking> = Vec::new();
        let report = build_sales_report(&bookings);
        assert!(report.is_empty());
    }

    #[test]
    fn discount_toggle_fails_on_unknown_name() {
        let mut event = RaceEvent::new(1, "Grand National", "2025-06-10", "Aintree", 500);
        event
            .add_ticket(Ticket::new(101, "Single Race", Decimal::new(5000, 2), "One race", "General"))
            .unwrap();

        assert!(!set_discount_availability(&mut event, "Helipad Package", false));
        assert!(event.ticket("Single Race").unwrap().discount_available);
    }

    #[test]
    fn discount_toggle_flips_known_ticket() {
        let mut event = RaceEvent::new(1, "Grand National", "2025-06-10", "Aintree", 500);
        event
            .add_ticket(Ticket::new(101, "Single Race", Decimal::new(5000, 2), "One race", "General"))
            .unwrap();

        assert!(set_discount_availability(&mut event, "Single Race", false));
        assert!(!event.ticket("Single Race").unwrap().discount_available);

        assert!(set_discount_availability(&mut event, "Single Race", true));
        assert!(event.ticket("Single Race").unwrap().discount_available);
    }
}
