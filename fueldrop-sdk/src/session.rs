//! Session state: one canonical schema, one provider.
//!
//! The original frontend read its bearer token from two different storage
//! shapes depending on the file. Here there is exactly one schema and one
//! accessor; anything that needs a token asks the store.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// Who the session belongs to. Informational; the server enforces
/// authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Customer,
    Station,
    Admin,
}

/// The canonical session payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub role: UserRole,
}

/// Shared handle to the current session, if any.
///
/// Cloning is cheap; all clones observe the same login/logout. Reads are
/// sync and short-lived, so a std `RwLock` is enough.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    /// An empty store (logged out).
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with a session.
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(session))),
        }
    }

    /// Replace the current session (login).
    pub fn set(&self, session: Session) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(session);
        }
    }

    /// Drop the current session (logout).
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = None;
        }
    }

    /// The bearer token, or `None` when logged out.
    pub fn token(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|s| s.access_token.clone()))
    }

    /// The logged-in user's id, if any.
    pub fn user_id(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|s| s.user_id.clone()))
    }

    /// A copy of the full session payload.
    pub fn session(&self) -> Option<Session> {
        self.inner.read().ok().and_then(|guard| guard.clone())
    }
}
