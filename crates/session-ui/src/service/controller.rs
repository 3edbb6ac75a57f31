//! Session UI Controller
//!
//! Drives the login/logout/poll flow over a [`SessionView`] and a
//! [`SessionApi`]. Constructed once per page session; owns the poll handle.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{LoginOutcome, LoginStatus, TickOutcome};
use crate::error::ClientError;
use crate::ports::{SessionApi, SessionView};

use super::refresh::{refresh_status, RefreshLoop};

/// Session UI Controller.
pub struct SessionController<A: SessionApi + ?Sized, V: SessionView + ?Sized> {
    /// Session server (driven port)
    api: Arc<A>,
    /// Page document (driven port)
    view: Arc<V>,
    /// The single tracked poll handle
    refresh: RefreshLoop,
}

impl<A, V> SessionController<A, V>
where
    A: SessionApi + ?Sized + 'static,
    V: SessionView + ?Sized + 'static,
{
    pub fn new(api: Arc<A>, view: Arc<V>) -> Self {
        Self {
            api,
            view,
            refresh: RefreshLoop::new(),
        }
    }

    /// Load-time hook: resume polling if the document already shows the
    /// status section (reload with a still-valid session).
    ///
    /// Returns whether the loop was started.
    pub fn initialize(&mut self) -> bool {
        if !self.view.is_status_section_visible() {
            return false;
        }
        info!("Status section visible on load, resuming refresh loop");
        self.start_refresh_loop();
        true
    }

    /// Submit the credentials currently in the inputs.
    pub async fn login(&mut self) -> LoginOutcome {
        let credentials = self.view.credentials();

        let outcome = match self.api.login(&credentials).await {
            Ok(LoginStatus::Accepted) => {
                info!(username = %credentials.username, "Login accepted");
                self.view.show_status_section();
                self.start_refresh_loop();
                LoginOutcome::LoggedIn
            }
            Ok(LoginStatus::Rejected { status, reason }) => {
                warn!(
                    username = %credentials.username,
                    status,
                    reason = reason.as_deref().unwrap_or(""),
                    "Login rejected"
                );
                LoginOutcome::Rejected { status }
            }
            Err(e) => {
                warn!(error = %e, "Login request failed");
                LoginOutcome::Failed {
                    message: e.to_string(),
                }
            }
        };

        if let Some(notice) = outcome.notice() {
            self.view.notify(&notice);
        }
        outcome
    }

    /// End the session.
    ///
    /// The UI is reset and polling stopped whatever the request did; a
    /// transport error is then handed back to the caller.
    pub async fn logout(&mut self) -> Result<(), ClientError> {
        let result = self.api.logout().await;

        self.view.show_login_section();
        self.stop_refresh_loop();

        match &result {
            Ok(()) => info!("Logged out"),
            Err(e) => warn!(error = %e, "Logout request failed"),
        }
        result
    }

    /// Run one poll tick on the caller's task.
    pub async fn refresh_status(&self) -> TickOutcome {
        refresh_status(self.api.as_ref(), self.view.as_ref()).await
    }

    /// Tick now, then every 2000 ms.
    pub fn start_refresh_loop(&mut self) {
        self.refresh.start(self.api.clone(), self.view.clone());
    }

    /// Cancel the loop. No-op when none is active.
    pub fn stop_refresh_loop(&mut self) {
        self.refresh.stop();
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh.is_active()
    }

    pub fn view(&self) -> &Arc<V> {
        &self.view
    }
}
