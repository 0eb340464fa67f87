//! The seven marketplace entity types
//!
//! Each entity implements [`crate::core::Record`]: a searchable field list,
//! a dotted-path field accessor, and a fixed export column order. The query
//! engine itself never changes from one entity to the next.

pub mod booking;
pub mod category;
pub mod customer;
pub mod payment;
pub mod provider;
pub mod review;
pub mod ticket;

pub use booking::{Booking, ContactRef, ServiceRef};
pub use category::Category;
pub use customer::Customer;
pub use payment::Payment;
pub use provider::Provider;
pub use review::Review;
pub use ticket::SupportTicket;
