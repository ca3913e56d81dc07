//! Confirmation dialog component

use super::base::{render_dialog, DialogStyle};
use ratatui::{style::Color, Frame};

/// Render a confirmation dialog overlay centered on the screen
pub fn render_info_dialog(frame: &mut Frame, message: &str) {
    render_dialog(
        frame,
        DialogStyle {
            title: "Done",
            color: Color::Green,
        },
        message,
    );
}
