//! Domain Layer
//!
//! Pure data types and rendering rules. No I/O.

mod display;
mod outcome;
mod snapshot;

pub use display::{Indicator, StatusClass, StatusDisplay, SESSION_ID_PLACEHOLDER};
pub use outcome::{LoginOutcome, LoginStatus, TickOutcome, LOGIN_FAILED_NOTICE};
pub use snapshot::{Credentials, StatusSnapshot};
