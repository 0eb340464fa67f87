//! Shared server state

use crate::core::session::{NotificationService, SessionService};
use crate::entities::{Booking, Category, Customer, Payment, Provider, Review, SupportTicket};
use std::sync::Arc;

/// The record collections served by the list endpoints.
///
/// Collections are supplied whole and read-only; every query evaluates
/// against the full collection, so there is nothing to invalidate.
#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub bookings: Vec<Booking>,
    pub payments: Vec<Payment>,
    pub reviews: Vec<Review>,
    pub tickets: Vec<SupportTicket>,
    pub categories: Vec<Category>,
    pub customers: Vec<Customer>,
    pub providers: Vec<Provider>,
}

/// Application state handed to every handler
pub struct AppState {
    pub collections: Collections,
    pub sessions: Arc<dyn SessionService>,
    pub notifications: Arc<dyn NotificationService>,
    /// Default page size when a request does not specify `limit`
    pub page_size: usize,
}

pub type SharedState = Arc<AppState>;
