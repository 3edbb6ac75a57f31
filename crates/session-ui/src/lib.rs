//! # Session UI
//!
//! Controller for a cookie-session login page: submits credentials, toggles
//! the login/status sections, and polls the status endpoint while logged in.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure data and rendering rules, no I/O
//!   - `StatusSnapshot`: Parsed `/api/status` body
//!   - `StatusDisplay`: What the three status fields show for a snapshot
//!   - `TickOutcome`: Explicit result of a best-effort poll tick
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `SessionApi`: Driven port for the `/login`, `/logout`, `/api/status` endpoints
//!   - `SessionView`: Driven port for the document (sections, inputs, notices)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `SessionController`: Login, logout, refresh loop, load-time resume
//!   - `RefreshLoop`: Owns the single poll handle
//!
//! - **Adapters Layer** (`adapters/`): External connections
//!   - `HttpSessionApi`: reqwest client with a cookie jar
//!   - `CookieFile`: Persists the session cookie between runs
//!   - `DocumentView`: In-memory model of the page's element contract
//!
//! ## Refresh Loop
//!
//! ```text
//! login ok ──► show status ──► tick ──► every 2000 ms: tick ──► ... ──► logout ──► stop
//!                                │                      │
//!                                └─ failure: skipped ───┘  (stale display, no notice)
//! ```
//!
//! ## Usage Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use session_ui::{ClientConfig, DocumentView, HttpSessionApi, SessionController};
//!
//! let api = Arc::new(HttpSessionApi::new(&ClientConfig::from_env())?);
//! let view = Arc::new(DocumentView::new(false));
//! let mut controller = SessionController::new(api, view.clone());
//!
//! controller.initialize();
//! view.set_input_value(session_ui::adapters::USERNAME_INPUT, "admin");
//! view.set_input_value(session_ui::adapters::PASSWORD_INPUT, "password");
//! controller.login().await;
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod telemetry;

// Re-exports for convenience
pub use adapters::{CookieFile, Document, DocumentView, HttpSessionApi};
pub use config::{ClientConfig, LogConfig};
pub use domain::{
    Credentials, Indicator, LoginOutcome, LoginStatus, StatusClass, StatusDisplay,
    StatusSnapshot, TickOutcome,
};
pub use error::{ClientError, TelemetryError};
pub use ports::{MockSessionApi, SessionApi, SessionView};
pub use service::{refresh_status, RefreshLoop, SessionController, REFRESH_INTERVAL};
pub use telemetry::init_logging;
