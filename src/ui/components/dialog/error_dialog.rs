//! Error dialog component

use super::base::{render_dialog, DialogStyle};
use ratatui::{style::Color, Frame};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    render_dialog(
        frame,
        DialogStyle {
            title: "Error",
            color: Color::Red,
        },
        error_message,
    );
}
