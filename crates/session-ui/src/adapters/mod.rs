//! Adapters Layer
//!
//! - `http`: `SessionApi` over reqwest with a cookie jar
//! - `cookie_file`: session cookie persistence between runs
//! - `document`: `SessionView` over an in-memory page document

pub mod cookie_file;
pub mod document;
pub mod http;

pub use cookie_file::CookieFile;
pub use document::{
    Document, DocumentView, Element, AUTH_STATUS, COOKIE_STATUS, HIDDEN_CLASS, LOGIN_SECTION,
    PASSWORD_INPUT, SESSION_ID, STATUS_SECTION, USERNAME_INPUT,
};
pub use http::HttpSessionApi;
