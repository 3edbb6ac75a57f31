//! UI module for TUI rendering.

pub mod login;
pub mod notice;
pub mod status;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use session_ui::adapters::{LOGIN_SECTION, STATUS_SECTION};

use crate::app::App;

/// Render whichever section the document shows, plus any pending notice.
pub fn render(frame: &mut Frame, app: &App) {
    let document = app.document();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Section
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    let status_visible = !document.is_hidden(STATUS_SECTION);
    if status_visible {
        status::render(frame, &document, chunks[1]);
    } else if !document.is_hidden(LOGIN_SECTION) {
        login::render(frame, &document, app.focus, chunks[1]);
    }

    render_footer(frame, status_visible, chunks[2]);

    if let Some(message) = app.pending_notice() {
        notice::render(frame, &message);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::raw(" Server: "),
        Span::styled(app.server.as_str(), Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                " SESSION UI ",
                Style::default().add_modifier(Modifier::BOLD),
            )),
    );

    frame.render_widget(header, area);
}

fn render_footer(frame: &mut Frame, status_visible: bool, area: Rect) {
    let hints: &[(&str, &str)] = if status_visible {
        &[("L", "Logout"), ("Q/Esc", "Quit")]
    } else {
        &[("Tab", "Switch field"), ("Enter", "Login"), ("Esc", "Quit")]
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" {} ", key), Style::default().fg(Color::Yellow)),
                Span::raw(format!("{}  ", label)),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
