//! In-memory session storage, keyed by the cookie token.
//!
//! Sessions live only as long as the process (no persistence across
//! restarts). The lock guards the map itself; callers are expected to
//! serialize submissions for a single session.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::interview::session::InterviewSession;

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, InterviewSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a session under a fresh token and returns the token.
    pub fn insert(&self, session: InterviewSession) -> Uuid {
        let token = Uuid::new_v4();
        self.inner.write().insert(token, session);
        token
    }

    /// Drops the session for a token, if any. Used when a caller starts a
    /// new interview over an old one.
    pub fn remove(&self, token: Uuid) {
        self.inner.write().remove(&token);
    }

    /// Snapshot of a session for read-only operations (summary).
    pub fn get(&self, token: Uuid) -> Option<InterviewSession> {
        self.inner.read().get(&token).cloned()
    }

    /// Applies a transition to a stored session under the write lock.
    /// Returns `None` when the token resolves to no session.
    pub fn with_session<T>(
        &self,
        token: Uuid,
        f: impl FnOnce(&mut InterviewSession) -> T,
    ) -> Option<T> {
        self.inner.write().get_mut(&token).map(f)
    }
}
