use dotenvy::dotenv;
use rust_decimal::Decimal;

use raceday::config::Config;
use raceday::models::{RaceEvent, Ticket};
use raceday::reporting;
use raceday::store::DataStore;

fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let mut store = DataStore::open(&config).expect("Failed to open data stores");

    tracing::info!(
        users = store.accounts().len(),
        events = store.events().count(),
        bookings = store.bookings().count(),
        payments = store.payments().count(),
        "Data stores loaded"
    );

    if store.events().next().is_none() {
        seed_demo_events(&mut store);
        tracing::info!("Seeded demo events");
    }

    println!("Upcoming race events:");
    for event in store.events() {
        println!(
            "  [{}] {} — {} at {} (capacity {})",
            event.id, event.name, event.date, event.location, event.capacity
        );
        for ticket in event.available_tickets() {
            println!("      {} (${})", ticket.name, ticket.price);
        }
    }

    let report = reporting::build_sales_report(store.bookings());
    if report.is_empty() {
        println!("No ticket sales recorded yet.");
        return;
    }
    println!("Ticket sales report:");
    for (event_id, sales) in &report {
        let event_name = store
            .event(*event_id)
            .map(|event| event.name.as_str())
            .unwrap_or("Unknown Event");
        println!("  Event: {event_name}");
        for (ticket_name, count) in sales {
            println!("    - {ticket_name}: {count}");
        }
    }
}

fn seed_demo_events(store: &mut DataStore) {
    let mut grand_national =
        RaceEvent::new(1, "Grand National", "2025-06-10", "Aintree Racecourse", 500);
    grand_national
        .add_ticket(Ticket::new(
            101,
            "Single Race",
            Decimal::new(5000, 2),
            "Valid for one race",
            "Access to general areas",
        ))
        .expect("seed ticket");
    grand_national
        .add_ticket(Ticket::new(
            102,
            "Weekend Package",
            Decimal::new(12000, 2),
            "Valid for all weekend races",
            "Access to VIP lounge",
        ))
        .expect("seed ticket");
    grand_national
        .add_ticket(Ticket::new(
            103,
            "Group Discount",
            Decimal::new(4500, 2),
            "Per person for groups of 5+",
            "General access, group booking only",
        ))
        .expect("seed ticket");
    store.add_event(grand_national);

    let mut royal_ascot = RaceEvent::new(2, "Royal Ascot", "2025-07-15", "Ascot Racecourse", 1000);
    royal_ascot
        .add_ticket(Ticket::new(
            201,
            "Queen Anne Enclosure",
            Decimal::new(8000, 2),
            "Access to Queen Anne Enclosure",
            "Dress code applies",
        ))
        .expect("seed ticket");
    royal_ascot
        .add_ticket(Ticket::new(
            202,
            "Village Enclosure",
            Decimal::new(6000, 2),
            "Access to Village Enclosure",
            "Lively atmosphere",
        ))
        .expect("seed ticket");
    store.add_event(royal_ascot);
}
