use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};

use crate::application::ports::{RepositoryError, SessionHandle, SessionStore};
use crate::domain::{Session, SessionId};

/// Process-local session map. Sessions do not survive a restart.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, SessionHandle>>,
    max_sessions: Option<usize>,
}

impl InMemorySessionStore {
    /// Unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuses to create sessions beyond `max_sessions` until idle ones are evicted.
    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::default(),
            max_sessions: Some(max_sessions),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_or_create(&self, id: SessionId) -> Result<SessionHandle, RepositoryError> {
        if let Some(handle) = self.sessions.read().await.get(&id) {
            return Ok(Arc::clone(handle));
        }

        let mut sessions = self.sessions.write().await;
        if let Some(handle) = sessions.get(&id) {
            return Ok(Arc::clone(handle));
        }

        if let Some(limit) = self.max_sessions {
            if sessions.len() >= limit {
                tracing::warn!(session_id = %id, limit, "Session limit reached");
                return Err(RepositoryError::CapacityExceeded(limit));
            }
        }

        tracing::debug!(session_id = %id, "Creating session");
        let handle = Arc::new(Mutex::new(Session::new(id)));
        sessions.insert(id, Arc::clone(&handle));
        Ok(handle)
    }

    async fn get(&self, id: SessionId) -> Result<Option<SessionHandle>, RepositoryError> {
        Ok(self.sessions.read().await.get(&id).map(Arc::clone))
    }

    async fn evict_idle(&self, cutoff: DateTime<Utc>) -> Result<usize, RepositoryError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        // Any handle cloned out of the map belongs to an in-flight request,
        // which may not have taken the session lock yet.
        sessions.retain(|_, handle| {
            if Arc::strong_count(handle) > 1 {
                return true;
            }
            match handle.try_lock() {
                Ok(session) => session.updated_at >= cutoff,
                Err(_) => true,
            }
        });

        Ok(before - sessions.len())
    }

    async fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.sessions.read().await.len())
    }
}
