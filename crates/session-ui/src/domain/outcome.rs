//! Results of controller operations.

use crate::error::ClientError;

use super::StatusSnapshot;

/// Notice shown when the server rejects the credentials.
pub const LOGIN_FAILED_NOTICE: &str = "Login failed";

/// What the server answered to `POST /login`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginStatus {
    /// Any 2xx response.
    Accepted,
    /// Non-2xx response, with the server's `error` field when it sent one.
    Rejected { status: u16, reason: Option<String> },
}

/// What a login attempt did to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Status section shown, refresh loop started.
    LoggedIn,
    /// "Login failed" notice shown, UI unchanged.
    Rejected { status: u16 },
    /// "Login error: ..." notice shown, UI unchanged.
    Failed { message: String },
}

impl LoginOutcome {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, LoginOutcome::LoggedIn)
    }

    /// Notice to display for this outcome, if any.
    pub fn notice(&self) -> Option<String> {
        match self {
            LoginOutcome::LoggedIn => None,
            LoginOutcome::Rejected { .. } => Some(LOGIN_FAILED_NOTICE.to_string()),
            LoginOutcome::Failed { message } => Some(format!("Login error: {}", message)),
        }
    }
}

/// Result of one best-effort poll tick.
///
/// A skipped tick leaves the display untouched; the next scheduled tick is
/// the only retry.
#[derive(Debug)]
pub enum TickOutcome {
    Rendered(StatusSnapshot),
    Skipped(ClientError),
}

impl TickOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, TickOutcome::Rendered(_))
    }

    pub fn snapshot(&self) -> Option<&StatusSnapshot> {
        match self {
            TickOutcome::Rendered(snapshot) => Some(snapshot),
            TickOutcome::Skipped(_) => None,
        }
    }
}
