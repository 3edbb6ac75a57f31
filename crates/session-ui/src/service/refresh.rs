//! Status refresh loop.
//!
//! One tick fires immediately on start, then one every [`REFRESH_INTERVAL`].
//! Every tick runs as its own task: a slow response does not delay the next
//! tick, and ticks may overlap in flight. Whichever response resolves last
//! wins the display.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::domain::{StatusDisplay, TickOutcome};
use crate::ports::{SessionApi, SessionView};

/// Fixed poll interval.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(2000);

/// Run one poll tick.
///
/// Never fails: request and parse errors come back as
/// [`TickOutcome::Skipped`] and leave the view untouched.
pub async fn refresh_status<A, V>(api: &A, view: &V) -> TickOutcome
where
    A: SessionApi + ?Sized,
    V: SessionView + ?Sized,
{
    match api.status().await {
        Ok(snapshot) => {
            view.render_status(&StatusDisplay::from(&snapshot));
            TickOutcome::Rendered(snapshot)
        }
        Err(e) => {
            debug!(error = %e, "Status tick skipped");
            TickOutcome::Skipped(e)
        }
    }
}

fn spawn_tick<A, V>(api: Arc<A>, view: Arc<V>)
where
    A: SessionApi + ?Sized + 'static,
    V: SessionView + ?Sized + 'static,
{
    tokio::spawn(async move {
        let _ = refresh_status(api.as_ref(), view.as_ref()).await;
    });
}

/// Owner of the single poll handle.
///
/// `start` while a loop is already tracked does not stop the earlier loop:
/// its handle is detached and it keeps ticking until the runtime shuts
/// down. This is logged at warn level.
#[derive(Debug, Default)]
pub struct RefreshLoop {
    handle: Option<JoinHandle<()>>,
}

impl RefreshLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a loop is currently tracked.
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Tick now, then every [`REFRESH_INTERVAL`].
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<A, V>(&mut self, api: Arc<A>, view: Arc<V>)
    where
        A: SessionApi + ?Sized + 'static,
        V: SessionView + ?Sized + 'static,
    {
        if self.handle.take().is_some() {
            warn!("Refresh loop started while another is active; previous loop left running");
        }

        spawn_tick(api.clone(), view.clone());

        let handle = tokio::spawn(async move {
            let mut interval =
                tokio::time::interval_at(Instant::now() + REFRESH_INTERVAL, REFRESH_INTERVAL);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                spawn_tick(api.clone(), view.clone());
            }
        });

        self.handle = Some(handle);
        info!(interval_ms = REFRESH_INTERVAL.as_millis() as u64, "Refresh loop started");
    }

    /// Cancel the tracked loop, if any. In-flight ticks are not cancelled.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Refresh loop stopped");
        }
    }
}

impl Drop for RefreshLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
