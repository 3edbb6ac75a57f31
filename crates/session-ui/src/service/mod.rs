//! Service Layer
//!
//! Orchestrates the view and the session server.

mod controller;
mod refresh;

pub use controller::SessionController;
pub use refresh::{refresh_status, RefreshLoop, REFRESH_INTERVAL};
