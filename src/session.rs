//! Session lifecycle: created on successful login, read on every guarded
//! route, removed on logout.
//!
//! A session is presence-checked only; there is no expiry or signature
//! validation. The token is an opaque v4 UUID handed to the client, which
//! sends it back as a bearer token.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use uuid::Uuid;

use crate::model::User;

/// A logged-in user. Carries the full user record, matching what the
/// client caches.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: String,
    pub user: User,
    pub created_at: DateTime<Utc>,
}

/// Token -> session map shared across all guarded routes.
#[derive(Default)]
pub struct SessionManager {
    sessions: DashMap<String, Session>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for a freshly verified user.
    pub fn create(&self, user: User) -> Session {
        let session = Session {
            token: Uuid::new_v4().to_string(),
            user,
            created_at: Utc::now(),
        };
        self.sessions.insert(session.token.clone(), session.clone());
        session
    }

    /// Presence check; the only validation guarded routes perform.
    pub fn get(&self, token: &str) -> Option<Session> {
        self.sessions.get(token).map(|s| s.clone())
    }

    /// Tear down on logout. Returns false if the token was already gone.
    pub fn remove(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    pub fn count(&self) -> usize {
        self.sessions.len()
    }
}
