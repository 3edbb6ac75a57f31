//! Application state and key handling.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use session_ui::adapters::{PASSWORD_INPUT, USERNAME_INPUT};
use session_ui::{Document, DocumentView, SessionView};

/// Input that receives typed characters on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Username,
    Password,
}

impl Focus {
    /// Document id of the focused input.
    pub fn input_id(self) -> &'static str {
        match self {
            Focus::Username => USERNAME_INPUT,
            Focus::Password => PASSWORD_INPUT,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Focus::Username => Focus::Password,
            Focus::Password => Focus::Username,
        }
    }
}

/// What the main loop must do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Login,
    Logout,
    Quit,
}

/// Front-end state. The page itself lives in the shared [`DocumentView`].
pub struct App {
    view: Arc<DocumentView>,

    /// Focused login input.
    pub focus: Focus,

    /// Whether the app should quit.
    pub should_quit: bool,

    /// Server label for the header.
    pub server: String,
}

impl App {
    pub fn new(view: Arc<DocumentView>, server: impl Into<String>) -> Self {
        Self {
            view,
            focus: Focus::Username,
            should_quit: false,
            server: server.into(),
        }
    }

    /// Snapshot of the page for one frame.
    pub fn document(&self) -> Document {
        self.view.document()
    }

    pub fn pending_notice(&self) -> Option<String> {
        self.view.pending_notice()
    }

    /// Handle a key press.
    ///
    /// A pending notice swallows the key that dismisses it, like a modal
    /// alert. Ctrl-C always quits.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return self.quit();
        }

        if self.view.dismiss_notice().is_some() {
            return Action::None;
        }

        if key.code == KeyCode::Esc {
            return self.quit();
        }

        if self.view.is_status_section_visible() {
            self.on_status_key(key.code)
        } else {
            self.on_login_key(key.code)
        }
    }

    fn on_status_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Char('l') | KeyCode::Char('L') => Action::Logout,
            _ => Action::None,
        }
    }

    fn on_login_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::Enter => Action::Login,
            KeyCode::Backspace => {
                self.view.edit_input_value(self.focus.input_id(), |value| {
                    value.pop();
                });
                Action::None
            }
            KeyCode::Char(c) => {
                self.view
                    .edit_input_value(self.focus.input_id(), |value| value.push(c));
                Action::None
            }
            _ => Action::None,
        }
    }

    fn quit(&mut self) -> Action {
        self.should_quit = true;
        Action::Quit
    }
}
