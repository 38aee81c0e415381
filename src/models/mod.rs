pub mod booking;
pub mod event;
pub mod payment;
pub mod ticket;
pub mod user;

pub use booking::{Booking, BookingStatus};
pub use event::RaceEvent;
pub use payment::Payment;
pub use ticket::Ticket;
pub use user::User;

pub type UserId = u64;
pub type TicketId = u64;
pub type EventId = u64;
pub type BookingId = u64;
pub type PaymentId = u64;
