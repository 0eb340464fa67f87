//! marketdesk - admin dashboard backend for a services marketplace
//!
//! The core of the crate is a generic record query engine: free-text
//! search, typed filters, stable sorting, windowed pagination, aggregate
//! statistics, and delimited export, all driven through the [`Record`]
//! trait. Seven marketplace entities implement the trait; the axum server
//! exposes one list and one export endpoint per entity plus a dashboard
//! summary and a small session/notification surface.
//!
//! [`Record`]: core::record::Record

pub mod config;
pub mod core;
pub mod entities;
pub mod query;
pub mod seed;
pub mod server;
pub mod storage;

/// Common imports for downstream code and tests
pub mod prelude {
    pub use crate::config::ServerConfig;
    pub use crate::core::error::{ApiError, AuthError};
    pub use crate::core::field::FieldValue;
    pub use crate::core::record::{NOT_ASSIGNED, Record};
    pub use crate::core::session::{
        Notification, NotificationService, SessionService, SessionToken, User, UserSummary,
    };
    pub use crate::query::{
        AggregateSpec, FilterSpec, PageItem, PageRequest, Query, SortSpec, evaluate,
        export_filename, to_delimited,
    };
    pub use crate::server::{AppState, Collections, SharedState, build_router};
}
