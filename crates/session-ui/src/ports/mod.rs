//! Ports Layer
//!
//! Defines the interfaces (traits) the controller depends on:
//! - `SessionApi` - the session server endpoints
//! - `SessionView` - the document the controller reads and writes

pub mod outbound;

pub use outbound::{MockSessionApi, SessionApi, SessionView};
