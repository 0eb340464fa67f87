//! Core module containing fundamental traits and types

pub mod error;
pub mod field;
pub mod record;
pub mod session;

pub use error::{ApiError, AuthError};
pub use field::FieldValue;
pub use record::{NOT_ASSIGNED, Record};
pub use session::{Notification, NotificationService, SessionService, SessionToken, User, UserSummary};
