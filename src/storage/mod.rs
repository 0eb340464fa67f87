//! Storage backends for the session and notification stores

pub mod in_memory;

pub use in_memory::{InMemoryNotificationStore, InMemoryUserStore};
