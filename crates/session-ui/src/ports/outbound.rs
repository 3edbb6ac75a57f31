//! Outbound Ports (Driven Ports)
//!
//! The controller talks to the server and to the page only through these
//! traits, so either side can be replaced by a double.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{Credentials, LoginStatus, StatusDisplay, StatusSnapshot};
use crate::error::ClientError;

/// Session server endpoints (Driven Port).
///
/// | Endpoint      | Method | Used for     |
/// |---------------|--------|--------------|
/// | `/login`      | POST   | authenticate |
/// | `/logout`     | POST   | end session  |
/// | `/api/status` | GET    | poll loop    |
#[async_trait]
pub trait SessionApi: Send + Sync {
    /// Submit credentials. `Err` means the request itself failed.
    async fn login(&self, credentials: &Credentials) -> Result<LoginStatus, ClientError>;

    /// End the session. The response is not inspected.
    async fn logout(&self) -> Result<(), ClientError>;

    /// Fetch the current session status.
    async fn status(&self) -> Result<StatusSnapshot, ClientError>;
}

/// The page the controller drives (Driven Port).
///
/// Implementations own their own synchronization: ticks running on spawned
/// tasks call `render_status` while the controller toggles sections.
pub trait SessionView: Send + Sync {
    /// Current contents of the username and password inputs.
    fn credentials(&self) -> Credentials;

    /// Reveal the login section and hide the status section.
    fn show_login_section(&self);

    /// Hide the login section and reveal the status section.
    fn show_status_section(&self);

    /// Whether the status section is currently shown.
    fn is_status_section_visible(&self) -> bool;

    /// Update the auth, session id and cookie fields.
    fn render_status(&self, display: &StatusDisplay);

    /// Show a blocking notice to the user.
    fn notify(&self, message: &str);
}

// =============================================================================
// Mock Implementation for Testing and Demo Mode
// =============================================================================

#[derive(Debug, Default)]
struct MockServerState {
    session_id: Option<String>,
    cookie_present: bool,
    offline: bool,
    malformed_status: bool,
    last_credentials: Option<Credentials>,
}

/// In-memory session server.
///
/// Accepts one username/password pair and mirrors the real server's
/// status shape. Can be switched offline or made to return garbage for
/// `/api/status`.
#[derive(Debug)]
pub struct MockSessionApi {
    username: String,
    password: String,
    latency: Option<Duration>,
    state: Mutex<MockServerState>,
    login_calls: AtomicUsize,
    logout_calls: AtomicUsize,
    status_calls: AtomicUsize,
}

impl MockSessionApi {
    /// Create a mock that accepts the given credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            latency: None,
            state: Mutex::new(MockServerState::default()),
            login_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
            status_calls: AtomicUsize::new(0),
        }
    }

    /// Mock with the demo server's account (`admin` / `password`).
    pub fn demo() -> Self {
        Self::new("admin", "password")
    }

    /// Delay every `/api/status` response.
    pub fn with_status_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Start with an established session, as if logged in earlier.
    pub fn with_session(self, session_id: impl Into<String>) -> Self {
        {
            let mut state = self.state.lock();
            state.session_id = Some(session_id.into());
            state.cookie_present = true;
        }
        self
    }

    /// Make every request fail at the transport level.
    pub fn set_offline(&self, offline: bool) {
        self.state.lock().offline = offline;
    }

    /// Make `/api/status` return an unparseable body.
    pub fn set_malformed_status(&self, malformed: bool) {
        self.state.lock().malformed_status = malformed;
    }

    /// Drop the server-side session and the client cookie.
    pub fn expire_session(&self) {
        let mut state = self.state.lock();
        state.session_id = None;
        state.cookie_present = false;
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    /// Credentials of the most recent login attempt.
    pub fn last_credentials(&self) -> Option<Credentials> {
        self.state.lock().last_credentials.clone()
    }

    /// Current server-side session id, if any.
    pub fn session_id(&self) -> Option<String> {
        self.state.lock().session_id.clone()
    }
}

#[async_trait]
impl SessionApi for MockSessionApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginStatus, ClientError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);

        let mut state = self.state.lock();
        state.last_credentials = Some(credentials.clone());

        if state.offline {
            return Err(ClientError::Unavailable("mock server offline".to_string()));
        }

        if credentials.username != self.username || credentials.password != self.password {
            return Ok(LoginStatus::Rejected {
                status: 401,
                reason: Some("Invalid credentials".to_string()),
            });
        }

        state.session_id = Some(uuid::Uuid::new_v4().simple().to_string());
        state.cookie_present = true;
        Ok(LoginStatus::Accepted)
    }

    async fn logout(&self) -> Result<(), ClientError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);

        let mut state = self.state.lock();
        if state.offline {
            return Err(ClientError::Unavailable("mock server offline".to_string()));
        }
        state.session_id = None;
        state.cookie_present = false;
        Ok(())
    }

    async fn status(&self) -> Result<StatusSnapshot, ClientError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let state = self.state.lock();
        if state.offline {
            return Err(ClientError::Unavailable("mock server offline".to_string()));
        }
        if state.malformed_status {
            return Err(ClientError::Parse("expected value at line 1 column 1".to_string()));
        }

        Ok(match &state.session_id {
            Some(id) => StatusSnapshot::authenticated(id.clone()),
            None => StatusSnapshot::anonymous(state.cookie_present),
        })
    }
}
