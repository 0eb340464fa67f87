//! Session and notification boundary
//!
//! The query engine never touches authentication; these traits describe the
//! two external collaborators the dashboard shell talks to. Session identity
//! is an opaque token — the engine and handlers never inspect credentials.

use crate::core::error::AuthError;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dashboard user as stored. The password stays inside the store and is
/// never serialized out.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub password: String,
    pub is_active: bool,
}

/// The public view of a user returned from login and `current_user`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        UserSummary {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role.clone(),
        }
    }
}

/// Opaque session token handed to the client at login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(pub Uuid);

impl SessionToken {
    pub fn generate() -> Self {
        SessionToken(Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(SessionToken)
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session store: login, logout, and session lookup
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Authenticate and open a session.
    ///
    /// Unknown email and wrong password both yield
    /// [`AuthError::InvalidCredentials`]; a store failure yields
    /// [`AuthError::Unavailable`] so clients can tell the two apart.
    async fn login(&self, email: &str, password: &str)
    -> Result<(SessionToken, UserSummary), AuthError>;

    /// Close a session. Unknown tokens are a no-op.
    async fn logout(&self, token: &SessionToken) -> Result<(), AuthError>;

    /// Resolve the user behind a session token, if any
    async fn current_user(&self, token: &SessionToken) -> Result<Option<UserSummary>, AuthError>;
}

/// A notification shown in the dashboard top bar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub message: String,
    /// "info", "success", or "warning"
    pub kind: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(user_id: Uuid, title: &str, message: &str, kind: &str) -> Self {
        Notification {
            id: Uuid::new_v4(),
            user_id,
            title: title.to_string(),
            message: message.to_string(),
            kind: kind.to_string(),
            is_read: false,
            created_at: Utc::now(),
        }
    }
}

/// Notification store, consumed only by the surrounding shell
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// List a user's notifications, newest first
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Notification>>;

    /// Mark a notification read. Returns false if the id is unknown.
    async fn mark_read(&self, id: Uuid) -> Result<bool>;
}
