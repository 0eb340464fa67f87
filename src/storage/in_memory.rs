//! In-memory implementations of the session and notification stores
//!
//! Used by the dev server and tests. Both use RwLock for thread-safe access;
//! a poisoned lock surfaces as a store-unavailable condition rather than a
//! credentials failure.

use crate::core::error::AuthError;
use crate::core::session::{
    Notification, NotificationService, SessionService, SessionToken, User, UserSummary,
};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory user and session store
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    sessions: Arc<RwLock<HashMap<SessionToken, Uuid>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user (seed-time only; there is no signup flow)
    pub fn insert_user(&self, user: User) -> Result<()> {
        let mut users = self
            .users
            .write()
            .map_err(|e| anyhow!("failed to acquire write lock: {}", e))?;
        users.insert(user.id, user);
        Ok(())
    }
}

#[async_trait]
impl SessionService for InMemoryUserStore {
    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(SessionToken, UserSummary), AuthError> {
        let users = self
            .users
            .read()
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;

        // Unknown email and wrong password are indistinguishable to the
        // client, but both differ from a store failure.
        let user = users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email) && u.is_active)
            .ok_or(AuthError::InvalidCredentials)?;
        if user.password != password {
            return Err(AuthError::InvalidCredentials);
        }

        let summary = UserSummary::from(user);
        let user_id = user.id;
        drop(users);

        let token = SessionToken::generate();
        let mut sessions = self
            .sessions
            .write()
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;
        sessions.insert(token, user_id);
        Ok((token, summary))
    }

    async fn logout(&self, token: &SessionToken) -> Result<(), AuthError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;
        sessions.remove(token);
        Ok(())
    }

    async fn current_user(&self, token: &SessionToken) -> Result<Option<UserSummary>, AuthError> {
        let sessions = self
            .sessions
            .read()
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;
        let Some(user_id) = sessions.get(token).copied() else {
            return Ok(None);
        };
        drop(sessions);

        let users = self
            .users
            .read()
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;
        Ok(users.get(&user_id).map(UserSummary::from))
    }
}

/// In-memory notification store
#[derive(Clone, Default)]
pub struct InMemoryNotificationStore {
    notifications: Arc<RwLock<HashMap<Uuid, Notification>>>,
}

impl InMemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, notification: Notification) -> Result<()> {
        let mut notifications = self
            .notifications
            .write()
            .map_err(|e| anyhow!("failed to acquire write lock: {}", e))?;
        notifications.insert(notification.id, notification);
        Ok(())
    }
}

#[async_trait]
impl NotificationService for InMemoryNotificationStore {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Notification>> {
        let notifications = self
            .notifications
            .read()
            .map_err(|e| anyhow!("failed to acquire read lock: {}", e))?;
        let mut list: Vec<Notification> = notifications
            .values()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn mark_read(&self, id: Uuid) -> Result<bool> {
        let mut notifications = self
            .notifications
            .write()
            .map_err(|e| anyhow!("failed to acquire write lock: {}", e))?;
        match notifications.get_mut(&id) {
            Some(notification) => {
                notification.is_read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
