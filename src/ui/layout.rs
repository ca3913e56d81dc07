//! Layout helpers (content area, status bar, centering)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the main content area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// A `width` x `height` rectangle centered in `area`, clipped to it
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the status bar: session identity, wizard progress, last message
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();

    match &app.state.roll_number {
        Some(roll) => spans.push(Span::styled(
            format!(" Roll {roll} "),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )),
        None => spans.push(Span::styled(
            " Not signed in ",
            Style::default().fg(Color::Black).bg(Color::DarkGray),
        )),
    }

    if app.state.current_view == View::Wizard {
        if let Some(wizard) = &app.state.wizard {
            if wizard.section_count() > 0 {
                spans.push(Span::styled(
                    format!(
                        " Section {}/{} ",
                        wizard.current_section_index() + 1,
                        wizard.section_count()
                    ),
                    Style::default().fg(Color::Cyan),
                ));
            }
        }
        if app.state.submitted {
            spans.push(Span::styled(
                " Submitted ",
                Style::default().fg(Color::Black).bg(Color::Green),
            ));
        }
    }

    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Green),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
