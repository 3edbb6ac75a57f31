//! In-memory page document.
//!
//! Models the element contract the controller reads and writes:
//!
//! | Element          | Kind    | Touched by                         |
//! |------------------|---------|------------------------------------|
//! | `login-section`  | section | login / logout (`hidden` class)    |
//! | `status-section` | section | login / logout / load check        |
//! | `username`       | input   | read at login                      |
//! | `password`       | input   | read at login                      |
//! | `auth-status`    | field   | every tick (text + `value ok/warn`)|
//! | `session-id`     | field   | every tick (text)                  |
//! | `cookie-status`  | field   | every tick (text + `value ok/warn`)|

use std::collections::{BTreeMap, VecDeque};

use parking_lot::Mutex;
use tracing::warn;

use crate::domain::{Credentials, Indicator, StatusDisplay, SESSION_ID_PLACEHOLDER};
use crate::ports::SessionView;

pub const LOGIN_SECTION: &str = "login-section";
pub const STATUS_SECTION: &str = "status-section";
pub const USERNAME_INPUT: &str = "username";
pub const PASSWORD_INPUT: &str = "password";
pub const AUTH_STATUS: &str = "auth-status";
pub const SESSION_ID: &str = "session-id";
pub const COOKIE_STATUS: &str = "cookie-status";

/// Class that hides a section.
pub const HIDDEN_CLASS: &str = "hidden";

const VALUE_CLASS: &str = "value";

/// A single addressable element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub classes: Vec<String>,
    pub text: String,
    pub value: String,
}

impl Element {
    fn with_classes(classes: &[&str]) -> Self {
        Self {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }

    fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Space-joined class list.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    fn set_class_name(&mut self, class_name: &str) {
        self.classes = class_name.split_whitespace().map(str::to_string).collect();
    }
}

/// The page: elements keyed by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    elements: BTreeMap<String, Element>,
}

impl Document {
    /// Render the page. `logged_in` picks which section starts visible,
    /// as the server-side template does.
    pub fn new(logged_in: bool) -> Self {
        let (login_classes, status_classes): (&[&str], &[&str]) = if logged_in {
            (&["card", HIDDEN_CLASS], &["card"])
        } else {
            (&["card"], &["card", HIDDEN_CLASS])
        };

        let elements = [
            (LOGIN_SECTION, Element::with_classes(login_classes)),
            (STATUS_SECTION, Element::with_classes(status_classes)),
            (USERNAME_INPUT, Element::default()),
            (PASSWORD_INPUT, Element::default()),
            (
                AUTH_STATUS,
                Element::with_classes(&[VALUE_CLASS]).with_text(SESSION_ID_PLACEHOLDER),
            ),
            (
                SESSION_ID,
                Element::with_classes(&[VALUE_CLASS]).with_text(SESSION_ID_PLACEHOLDER),
            ),
            (
                COOKIE_STATUS,
                Element::with_classes(&[VALUE_CLASS]).with_text(SESSION_ID_PLACEHOLDER),
            ),
        ]
        .into_iter()
        .map(|(id, element)| (id.to_string(), element))
        .collect();

        Self { elements }
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        let element = self.elements.get_mut(id);
        if element.is_none() {
            warn!(id, "Document has no such element");
        }
        element
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_class(HIDDEN_CLASS))
    }

    pub fn text(&self, id: &str) -> &str {
        self.element(id).map(|e| e.text.as_str()).unwrap_or("")
    }

    pub fn value(&self, id: &str) -> &str {
        self.element(id).map(|e| e.value.as_str()).unwrap_or("")
    }

    pub fn class_name(&self, id: &str) -> String {
        self.element(id).map(Element::class_name).unwrap_or_default()
    }

    fn hide(&mut self, id: &str) {
        if let Some(element) = self.element_mut(id) {
            element.add_class(HIDDEN_CLASS);
        }
    }

    fn reveal(&mut self, id: &str) {
        if let Some(element) = self.element_mut(id) {
            element.remove_class(HIDDEN_CLASS);
        }
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.element_mut(id) {
            element.text = text.to_string();
        }
    }

    fn set_indicator(&mut self, id: &str, indicator: &Indicator) {
        if let Some(element) = self.element_mut(id) {
            element.text = indicator.text.to_string();
            element.set_class_name(&format!("{} {}", VALUE_CLASS, indicator.class.css_class()));
        }
    }
}

#[derive(Debug, Default)]
struct Notices {
    shown: Vec<String>,
    pending: VecDeque<String>,
}

/// [`SessionView`] over a [`Document`].
///
/// Notices queue up until acknowledged, so a front-end can present them one
/// at a time as blocking popups.
#[derive(Debug)]
pub struct DocumentView {
    document: Mutex<Document>,
    notices: Mutex<Notices>,
}

impl DocumentView {
    pub fn new(logged_in: bool) -> Self {
        Self::from_document(Document::new(logged_in))
    }

    pub fn from_document(document: Document) -> Self {
        Self {
            document: Mutex::new(document),
            notices: Mutex::new(Notices::default()),
        }
    }

    /// Copy of the current document.
    pub fn document(&self) -> Document {
        self.document.lock().clone()
    }

    /// Set an input's value, as typing would.
    pub fn set_input_value(&self, id: &str, value: &str) {
        if let Some(element) = self.document.lock().element_mut(id) {
            element.value = value.to_string();
        }
    }

    /// Apply `edit` to an input's value in place.
    pub fn edit_input_value(&self, id: &str, edit: impl FnOnce(&mut String)) {
        if let Some(element) = self.document.lock().element_mut(id) {
            edit(&mut element.value);
        }
    }

    /// Every notice shown so far, oldest first.
    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().shown.clone()
    }

    /// Oldest notice not yet acknowledged.
    pub fn pending_notice(&self) -> Option<String> {
        self.notices.lock().pending.front().cloned()
    }

    /// Acknowledge the oldest pending notice.
    pub fn dismiss_notice(&self) -> Option<String> {
        self.notices.lock().pending.pop_front()
    }
}

impl SessionView for DocumentView {
    fn credentials(&self) -> Credentials {
        let document = self.document.lock();
        Credentials::new(document.value(USERNAME_INPUT), document.value(PASSWORD_INPUT))
    }

    fn show_login_section(&self) {
        let mut document = self.document.lock();
        document.reveal(LOGIN_SECTION);
        document.hide(STATUS_SECTION);
    }

    fn show_status_section(&self) {
        let mut document = self.document.lock();
        document.hide(LOGIN_SECTION);
        document.reveal(STATUS_SECTION);
    }

    fn is_status_section_visible(&self) -> bool {
        !self.document.lock().is_hidden(STATUS_SECTION)
    }

    fn render_status(&self, display: &StatusDisplay) {
        let mut document = self.document.lock();
        document.set_indicator(AUTH_STATUS, &display.auth);
        document.set_text(SESSION_ID, &display.session_id);
        document.set_indicator(COOKIE_STATUS, &display.cookie);
    }

    fn notify(&self, message: &str) {
        let mut notices = self.notices.lock();
        notices.shown.push(message.to_string());
        notices.pending.push_back(message.to_string());
    }
}
