//! Login / registration screen

use super::field_renderer::{draw_help_text, draw_text_input};
use crate::app::App;
use crate::state::LoginFocus;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the login screen
pub fn draw_login(frame: &mut Frame, area: Rect, app: &App) {
    let login = &app.state.login;
    let busy = app.state.is_busy();

    let outer = centered_rect(area, 56, 18);
    let block = Block::default()
        .title(" Dynamic Forms ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(outer);
    frame.render_widget(block, outer);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Intro
            Constraint::Length(3),             // Roll number
            Constraint::Length(3),             // Name
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(1),             // In-flight status
            Constraint::Min(0),                // Help text
        ])
        .margin(1)
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from("Enter the following details")),
        chunks[0],
    );

    draw_text_input(
        frame,
        chunks[1],
        "Roll Number",
        &login.roll_number,
        "Roll Number",
        login.focus == LoginFocus::RollNumber,
    );
    draw_text_input(
        frame,
        chunks[2],
        "Name",
        &login.name,
        "Name",
        login.focus == LoginFocus::Name,
    );

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);

    render_action_button(
        frame,
        buttons[0],
        "Register",
        login.focus == LoginFocus::Register,
        login.can_register(busy),
        Some(Color::Blue),
    );
    render_action_button(
        frame,
        buttons[1],
        "Login",
        login.focus == LoginFocus::Login,
        login.can_login(busy),
        Some(Color::Green),
    );

    if let Some(op) = app.state.in_flight {
        frame.render_widget(
            Paragraph::new(format!("{}...", op.label())).style(Style::default().fg(Color::Yellow)),
            chunks[4],
        );
    }

    draw_help_text(
        frame,
        chunks[5],
        "Tab: next | Shift+Tab: previous | Enter: activate button | Ctrl+C: quit",
    );
}
