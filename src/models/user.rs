use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BookingId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub balance: Decimal,
    pub bookings: Vec<BookingId>,
}

impl User {
    pub fn new(id: UserId, name: &str, email: &str, password: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            balance: Decimal::ZERO,
            bookings: Vec::new(),
        }
    }

    /// Applies only the provided fields; `None` leaves a field untouched.
    pub fn update_profile(
        &mut self,
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) {
        if let Some(name) = name {
            self.name = name.to_string();
        }
        if let Some(email) = email {
            self.email = email.to_string();
        }
        if let Some(password) = password {
            self.password = password.to_string();
        }
    }

    pub fn add_booking(&mut self, booking_id: BookingId) {
        self.bookings.push(booking_id);
    }

    pub fn booking_history(&self) -> &[BookingId] {
        &self.bookings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_profile_applies_only_provided_fields() {
        let mut user = User::new(1, "Ada", "ada@example.com", "secret");

        user.update_profile(Some("Ada Lovelace"), None, None);

        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.password, "secret");
    }

    #[test]
    fn booking_history_preserves_insertion_order() {
        let mut user = User::new(1, "Ada", "ada@example.com", "secret");
        user.add_booking(7);
        user.add_booking(3);

        assert_eq!(user.booking_history(), &[7, 3]);
    }
}
