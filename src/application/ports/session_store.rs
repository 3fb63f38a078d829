use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::domain::{Session, SessionId};

use super::RepositoryError;

/// Shared handle to one live session. Holding its lock serializes turns.
pub type SessionHandle = Arc<Mutex<Session>>;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the session for `id`, creating it in the not-started phase on first contact.
    async fn get_or_create(&self, id: SessionId) -> Result<SessionHandle, RepositoryError>;

    async fn get(&self, id: SessionId) -> Result<Option<SessionHandle>, RepositoryError>;

    /// Drops sessions whose last update is older than `cutoff`. Returns how many were removed.
    async fn evict_idle(&self, cutoff: DateTime<Utc>) -> Result<usize, RepositoryError>;

    async fn len(&self) -> Result<usize, RepositoryError>;
}
