//! Login section.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use session_ui::adapters::{PASSWORD_INPUT, USERNAME_INPUT};
use session_ui::Document;

use crate::app::Focus;

pub fn render(frame: &mut Frame, document: &Document, focus: Focus, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Login ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [username_area, password_area, _] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(inner);

    render_input(
        frame,
        " Username ",
        document.value(USERNAME_INPUT).to_string(),
        focus == Focus::Username,
        username_area,
    );
    render_input(
        frame,
        " Password ",
        mask(document.value(PASSWORD_INPUT)),
        focus == Focus::Password,
        password_area,
    );
}

fn render_input(frame: &mut Frame, title: &str, text: String, focused: bool, area: Rect) {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    );
    frame.render_widget(input, area);
}

/// One `*` per character.
fn mask(password: &str) -> String {
    "*".repeat(password.chars().count())
}
