//! Loading screen shown between sign-in and form arrival

use super::layout::centered_rect;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the "Loading form..." indicator
pub fn draw(frame: &mut Frame, area: Rect) {
    let box_area = centered_rect(area, 40, 5);
    let lines = vec![
        Line::from(Span::styled(
            "Loading form...",
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            "Ctrl+C to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, box_area);
}
