//! Blocking notice popup.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render `message` in a centered box over the current screen.
pub fn render(frame: &mut Frame, message: &str) {
    let popup_area = centered_rect(50, 30, frame.area());

    frame.render_widget(Clear, popup_area);

    let text = vec![
        Line::raw(""),
        Line::styled(message, Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::styled("Press any key", Style::default().fg(Color::DarkGray)),
    ];

    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Notice "),
        );
    frame.render_widget(popup, popup_area);
}

/// Helper function to create a centered rect.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
