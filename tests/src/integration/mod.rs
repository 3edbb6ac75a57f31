//! Integration flows over real HTTP.
//!
//! - `http_adapter`: the reqwest adapter against the fake server
//! - `controller_flows`: login, poll and logout through the document view
//! - `cookie_persistence`: resuming a session from a saved cookie file

pub mod controller_flows;
pub mod http_adapter;
