//! Seed data for the dev server
//!
//! The dashboard ships with a fixed in-memory dataset so every page has
//! something to show. Collections are built once at startup; the admin
//! account comes from configuration.

use crate::config::ServerConfig;
use crate::core::session::{Notification, User};
use crate::entities::{Booking, Category, Customer, Payment, Provider, Review, SupportTicket};
use crate::server::{AppState, Collections, SharedState};
use crate::storage::{InMemoryNotificationStore, InMemoryUserStore};
use anyhow::Result;
use std::sync::Arc;
use uuid::Uuid;

/// Build the sample collections served by the list endpoints
pub fn sample_collections() -> Collections {
    Collections {
        bookings: vec![
            Booking::sample("BK-001", "Sarah Johnson", "Electrician", Some("Alex Martinez"), "2024-01-15", 150.0, "completed"),
            Booking::sample("BK-002", "Mike Wilson", "Plumber", Some("Lisa Cooper"), "2024-01-16", 85.0, "in-progress"),
            Booking::sample("BK-003", "Emily Davis", "House Cleaning", None, "2024-01-17", 120.0, "pending"),
            Booking::sample("BK-004", "John Smith", "AC Repair", Some("David Brown"), "2024-01-14", 200.0, "completed"),
            Booking::sample("BK-005", "Anna Garcia", "Painter", Some("Tom Anderson"), "2024-01-18", 300.0, "cancelled"),
            Booking::sample("BK-006", "Robert Lee", "Carpenter", Some("James White"), "2024-01-19", 175.0, "in-progress"),
            Booking::sample("BK-007", "Maria Rodriguez", "Electrician", Some("Alex Martinez"), "2024-01-20", 95.0, "completed"),
            Booking::sample("BK-008", "Chris Taylor", "Plumber", None, "2024-01-21", 110.0, "pending"),
            Booking::sample("BK-009", "Jennifer Moore", "House Cleaning", Some("Emma Wilson"), "2024-01-12", 130.0, "completed"),
            Booking::sample("BK-010", "Daniel Harris", "AC Repair", Some("David Brown"), "2024-01-22", 250.0, "pending"),
        ],
        payments: vec![
            Payment::sample("TXN-78901", "Sarah Johnson", "Alex Martinez", "Electrician", 150.0, "completed", "Credit Card", "2024-01-15"),
            Payment::sample("TXN-78902", "Mike Wilson", "Lisa Cooper", "Plumber", 85.0, "pending", "PayPal", "2024-01-16"),
            Payment::sample("TXN-78903", "John Smith", "David Brown", "AC Repair", 200.0, "completed", "Credit Card", "2024-01-14"),
            Payment::sample("TXN-78904", "Anna Garcia", "Tom Anderson", "Painter", 300.0, "refunded", "Debit Card", "2024-01-18"),
            Payment::sample("TXN-78905", "Maria Rodriguez", "Alex Martinez", "Electrician", 95.0, "completed", "Cash", "2024-01-20"),
            Payment::sample("TXN-78906", "Jennifer Moore", "Emma Wilson", "House Cleaning", 130.0, "completed", "Credit Card", "2024-01-12"),
            Payment::sample("TXN-78907", "Robert Lee", "James White", "Carpenter", 175.0, "failed", "Credit Card", "2024-01-19"),
            Payment::sample("TXN-78908", "Daniel Harris", "David Brown", "AC Repair", 250.0, "pending", "Bank Transfer", "2024-01-22"),
        ],
        reviews: vec![
            Review::sample("RV-001", "Sarah Johnson", "Alex Martinez", "Electrician", 5, "Excellent work, fixed the wiring quickly and cleanly.", "2024-01-15"),
            Review::sample("RV-002", "John Smith", "David Brown", "AC Repair", 4, "Good service, arrived a bit late.", "2024-01-14"),
            Review::sample("RV-003", "Maria Rodriguez", "Alex Martinez", "Electrician", 5, "Very professional, highly recommended.", "2024-01-20"),
            Review::sample("RV-004", "Jennifer Moore", "Emma Wilson", "House Cleaning", 3, "Decent job but missed a few spots.", "2024-01-12"),
            Review::sample("RV-005", "Anna Garcia", "Tom Anderson", "Painter", 2, "Work was sloppy, had to ask for touch-ups.", "2024-01-18"),
            Review::sample("RV-006", "Mike Wilson", "Lisa Cooper", "Plumber", 4, "Solid work on the kitchen sink.", "2024-01-16"),
        ],
        tickets: vec![
            SupportTicket::sample("TK-001", "Sarah Johnson", "customer", "Payment not reflected", "open", "high", "2024-01-21"),
            SupportTicket::sample("TK-002", "Alex Martinez", "provider", "Unable to update availability", "in-progress", "medium", "2024-01-20"),
            SupportTicket::sample("TK-003", "Mike Wilson", "customer", "Booking cancellation refund", "resolved", "high", "2024-01-18"),
            SupportTicket::sample("TK-004", "Emma Wilson", "provider", "Profile photo upload fails", "open", "low", "2024-01-22"),
            SupportTicket::sample("TK-005", "Daniel Harris", "customer", "Wrong service charged", "closed", "medium", "2024-01-15"),
        ],
        categories: vec![
            Category::sample("CAT-001", "Electrician", "Electrical repairs and installations", 24, true),
            Category::sample("CAT-002", "Plumber", "Plumbing services and pipe repairs", 18, true),
            Category::sample("CAT-003", "House Cleaning", "Home and office cleaning services", 31, true),
            Category::sample("CAT-004", "AC Repair", "Air conditioner servicing and repair", 12, true),
            Category::sample("CAT-005", "Painter", "Interior and exterior painting", 9, false),
            Category::sample("CAT-006", "Carpenter", "Furniture and woodwork services", 15, true),
        ],
        customers: vec![
            Customer::sample("CU-001", "Sarah Johnson", "sarah.johnson@example.com", "2023-08-02", 12, 1840.0, "active"),
            Customer::sample("CU-002", "Mike Wilson", "mike.wilson@example.com", "2023-10-15", 5, 520.0, "active"),
            Customer::sample("CU-003", "Emily Davis", "emily.davis@example.com", "2024-01-05", 1, 120.0, "active"),
            Customer::sample("CU-004", "John Smith", "john.smith@example.com", "2023-06-21", 8, 1260.0, "inactive"),
            Customer::sample("CU-005", "Anna Garcia", "anna.garcia@example.com", "2023-11-30", 3, 610.0, "blocked"),
            Customer::sample("CU-006", "Robert Lee", "robert.lee@example.com", "2023-09-12", 6, 930.0, "active"),
        ],
        providers: vec![
            Provider::sample("PR-001", "Alex Martinez", "Electrician", 8, 4.9, 156, "active"),
            Provider::sample("PR-002", "Lisa Cooper", "Plumber", 5, 4.6, 98, "active"),
            Provider::sample("PR-003", "David Brown", "AC Repair", 10, 4.8, 203, "active"),
            Provider::sample("PR-004", "Tom Anderson", "Painter", 3, 3.9, 41, "suspended"),
            Provider::sample("PR-005", "Emma Wilson", "House Cleaning", 6, 4.7, 134, "active"),
            Provider::sample("PR-006", "James White", "Carpenter", 12, 4.5, 187, "pending"),
        ],
    }
}

/// Assemble a fully seeded application state: sample collections, the
/// configured admin account, and a starter set of notifications.
pub fn build_state(config: &ServerConfig) -> Result<SharedState> {
    let users = InMemoryUserStore::new();
    let admin_id = Uuid::new_v4();
    users.insert_user(User {
        id: admin_id,
        email: config.admin.email.clone(),
        name: config.admin.name.clone(),
        role: "admin".to_string(),
        password: config.admin.password.clone(),
        is_active: true,
    })?;

    let notifications = InMemoryNotificationStore::new();
    notifications.insert(Notification::new(
        admin_id,
        "New Service Provider",
        "Alex Martinez registered as an Electrician",
        "info",
    ))?;
    notifications.insert(Notification::new(
        admin_id,
        "Payment Received",
        "Payment of $150.00 received for booking BK-001",
        "success",
    ))?;
    notifications.insert(Notification::new(
        admin_id,
        "Support Ticket",
        "New high priority ticket TK-001 opened",
        "warning",
    ))?;
    notifications.insert(Notification::new(
        admin_id,
        "System Update",
        "Platform maintenance scheduled for Sunday 2 AM",
        "info",
    ))?;

    Ok(Arc::new(AppState {
        collections: sample_collections(),
        sessions: Arc::new(users),
        notifications: Arc::new(notifications),
        page_size: config.page_size,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collections_are_non_empty() {
        let c = sample_collections();
        assert!(!c.bookings.is_empty());
        assert!(!c.payments.is_empty());
        assert!(!c.reviews.is_empty());
        assert!(!c.tickets.is_empty());
        assert!(!c.categories.is_empty());
        assert!(!c.customers.is_empty());
        assert!(!c.providers.is_empty());
    }

    #[tokio::test]
    async fn test_admin_can_login_after_seed() {
        let config = ServerConfig::default();
        let state = build_state(&config).unwrap();
        let (_, user) = state
            .sessions
            .login(&config.admin.email, &config.admin.password)
            .await
            .unwrap();
        assert_eq!(user.role, "admin");
    }
}
