use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use rust_decimal::Decimal;

use crate::config::Config;
use crate::gateway::PaymentGateway;
use crate::models::{
    Booking, BookingId, EventId, Payment, PaymentId, RaceEvent, UserId,
};
use crate::store::accounts::AccountStore;
use crate::store::persist;
use crate::utils::error::AppError;

/// Owns the event, booking, and payment collections, and the account store.
/// Each collection persists to its own file; every mutation rewrites the
/// affected document wholesale. No write spans more than one collection.
pub struct DataStore {
    accounts: AccountStore,
    events: BTreeMap<EventId, RaceEvent>,
    bookings: BTreeMap<BookingId, Booking>,
    payments: BTreeMap<PaymentId, Payment>,
    next_booking_id: BookingId,
    next_payment_id: PaymentId,
    events_path: PathBuf,
    bookings_path: PathBuf,
    payments_path: PathBuf,
}

fn next_id<T>(collection: &BTreeMap<u64, T>) -> u64 {
    collection
        .last_key_value()
        .map(|(&id, _)| id + 1)
        .unwrap_or(1)
}

impl DataStore {
    pub fn open(config: &Config) -> Result<Self, AppError> {
        fs::create_dir_all(&config.data_dir)?;

        let accounts = AccountStore::open(config.users_file());
        let events: BTreeMap<EventId, RaceEvent> = persist::load_or_default(&config.events_file());
        let bookings: BTreeMap<BookingId, Booking> =
            persist::load_or_default(&config.bookings_file());
        let payments: BTreeMap<PaymentId, Payment> =
            persist::load_or_default(&config.payments_file());

        Ok(Self {
            next_booking_id: next_id(&bookings),
            next_payment_id: next_id(&payments),
            accounts,
            events,
            bookings,
            payments,
            events_path: config.events_file(),
            bookings_path: config.bookings_file(),
            payments_path: config.payments_file(),
        })
    }

    pub fn accounts(&self) -> &AccountStore {
        &self.accounts
    }

    pub fn accounts_mut(&mut self) -> &mut AccountStore {
        &mut self.accounts
    }

    pub fn add_event(&mut self, event: RaceEvent) {
        self.events.insert(event.id, event);
        self.save_events();
    }

    pub fn event(&self, id: EventId) -> Option<&RaceEvent> {
        self.events.get(&id)
    }

    pub fn event_mut(&mut self, id: EventId) -> Option<&mut RaceEvent> {
        self.events.get_mut(&id)
    }

    pub fn events(&self) -> impl Iterator<Item = &RaceEvent> {
        self.events.values()
    }

    /// Creates a booking from a ticket-name → quantity selection.
    ///
    /// Selected names missing from the event are skipped, so the booking may
    /// end up empty. An unknown event or user yields `None` and persists
    /// nothing, though a booking id is consumed either way.
    pub fn create_booking(
        &mut self,
        user_id: UserId,
        event_id: EventId,
        selections: &BTreeMap<String, u32>,
    ) -> Option<Booking> {
        let booking_id = self.next_booking_id;
        self.next_booking_id += 1;

        let event = self.events.get(&event_id)?;
        let mut booking = Booking::new(booking_id, user_id, event_id);
        for (ticket_name, &quantity) in selections {
            if let Some(template) = event.ticket(ticket_name) {
                for _ in 0..quantity {
                    // Value copy: later template edits must not reach this booking.
                    booking.add_ticket(template.clone());
                }
            }
        }

        let user = self.accounts.user_mut(user_id)?;
        user.add_booking(booking_id);
        self.bookings.insert(booking_id, booking.clone());
        self.accounts.persist();
        self.save_bookings();
        Some(booking)
    }

    pub fn booking(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.get(&id)
    }

    pub fn bookings(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.values()
    }

    pub fn bookings_for_user(&self, user_id: UserId) -> Vec<&Booking> {
        self.bookings
            .values()
            .filter(|booking| booking.user_id == user_id)
            .collect()
    }

    /// Always succeeds: neither the booking id nor the amount is checked.
    pub fn create_payment(
        &mut self,
        booking_id: BookingId,
        amount: Decimal,
        method: &str,
    ) -> Payment {
        let payment_id = self.next_payment_id;
        self.next_payment_id += 1;
        let payment = Payment::new(payment_id, booking_id, amount, method);
        self.payments.insert(payment_id, payment.clone());
        self.save_payments();
        payment
    }

    pub fn payments(&self) -> impl Iterator<Item = &Payment> {
        self.payments.values()
    }

    /// The full purchase flow: book, record a payment for the computed
    /// total, then run it through the gateway.
    pub fn checkout(
        &mut self,
        user_id: UserId,
        event_id: EventId,
        selections: &BTreeMap<String, u32>,
        method: &str,
        gateway: &dyn PaymentGateway,
    ) -> Result<(Booking, Payment), AppError> {
        let booking = self
            .create_booking(user_id, event_id, selections)
            .ok_or_else(|| {
                AppError::NotFound(format!("user {user_id} or event {event_id}"))
            })?;
        let payment = self.create_payment(booking.id, booking.total(), method);
        gateway.charge(&payment)?;
        Ok((booking, payment))
    }

    fn save_events(&self) {
        persist::save_or_report(&self.events_path, &self.events);
    }

    fn save_bookings(&self) {
        persist::save_or_report(&self.bookings_path, &self.bookings);
    }

    fn save_payments(&self) {
        persist::save_or_report(&self.payments_path, &self.payments);
    }
}
