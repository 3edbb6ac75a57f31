//! Status section: the three polled fields.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use session_ui::adapters::{AUTH_STATUS, COOKIE_STATUS, SESSION_ID};
use session_ui::{Document, StatusClass};

pub fn render(frame: &mut Frame, document: &Document, area: Rect) {
    let rows = [
        ("Authenticated:  ", AUTH_STATUS),
        ("Session ID:     ", SESSION_ID),
        ("Cookie present: ", COOKIE_STATUS),
    ];

    let mut text = vec![Line::raw("")];
    text.extend(rows.iter().map(|(label, id)| {
        Line::from(vec![
            Span::raw(format!(" {}", label)),
            Span::styled(
                document.text(id).to_string(),
                value_style(&document.class_name(id)),
            ),
        ])
    }));

    let section = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Session Status "),
    );
    frame.render_widget(section, area);
}

/// Color for a field from its class list.
fn value_style(class_name: &str) -> Style {
    let has = |class: StatusClass| class_name.split_whitespace().any(|c| c == class.css_class());

    if has(StatusClass::Ok) {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if has(StatusClass::Warn) {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}
