//! Wire types exchanged with the session server.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `GET /api/status`.
///
/// Missing fields read as `false` / absent. The server omits `session_id`
/// entirely when no session matches the cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub cookie_present: bool,
}

impl StatusSnapshot {
    /// Snapshot for an authenticated session.
    pub fn authenticated(session_id: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            session_id: Some(session_id.into()),
            cookie_present: true,
        }
    }

    /// Snapshot for a client with no matching session.
    pub fn anonymous(cookie_present: bool) -> Self {
        Self {
            authenticated: false,
            session_id: None,
            cookie_present,
        }
    }
}

/// Body of `POST /login`.
///
/// Values are passed through exactly as read from the inputs, empty strings
/// included.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
