//! Display rules for the three status fields.

use super::StatusSnapshot;

/// Text shown in the session id field when there is no session.
pub const SESSION_ID_PLACEHOLDER: &str = "--";

/// Style classification of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Ok,
    Warn,
}

impl StatusClass {
    fn from_flag(flag: bool) -> Self {
        if flag {
            StatusClass::Ok
        } else {
            StatusClass::Warn
        }
    }

    /// CSS class name used by the document.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusClass::Ok => "ok",
            StatusClass::Warn => "warn",
        }
    }
}

/// A text + style pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub text: &'static str,
    pub class: StatusClass,
}

/// Rendered form of a [`StatusSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDisplay {
    pub auth: Indicator,
    pub session_id: String,
    pub cookie: Indicator,
}

impl From<&StatusSnapshot> for StatusDisplay {
    fn from(snapshot: &StatusSnapshot) -> Self {
        let auth = Indicator {
            text: if snapshot.authenticated { "Yes" } else { "No" },
            class: StatusClass::from_flag(snapshot.authenticated),
        };

        let session_id = match snapshot.session_id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => SESSION_ID_PLACEHOLDER.to_string(),
        };

        let cookie = Indicator {
            text: if snapshot.cookie_present {
                "Yes"
            } else {
                "No (expired)"
            },
            class: StatusClass::from_flag(snapshot.cookie_present),
        };

        Self {
            auth,
            session_id,
            cookie,
        }
    }
}
