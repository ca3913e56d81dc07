//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod loading;

pub use forms::{control_for, cycle_select, Control};

use crate::app::App;
use crate::state::{NoticeKind, View};
use components::{render_error_dialog, render_info_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match app.state.current_view {
        View::Login => forms::draw_login(frame, main_area, app),
        View::Loading => loading::draw(frame, main_area),
        View::Wizard => forms::draw_wizard(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Alerts are modal and drawn last
    if let Some(notice) = app.state.current_notice() {
        match notice.kind {
            NoticeKind::Error => render_error_dialog(frame, &notice.message),
            NoticeKind::Info => render_info_dialog(frame, &notice.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::GatewayEvent;
    use crate::gateway::MockGatewayApi;
    use crate::state::forms::fixtures::*;
    use crate::state::forms::{FieldKind, FormStructure};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        App::with_gateway(Arc::new(MockGatewayApi::new()))
    }

    #[test]
    fn test_login_screen_renders() {
        let screen = render(&app());
        assert!(screen.contains("Dynamic Forms"));
        assert!(screen.contains("Register"));
        assert!(screen.contains("Not signed in"));
    }

    #[test]
    fn test_wizard_renders_section_and_error_dialog() {
        let mut app = app();
        app.apply_gateway_event(GatewayEvent::FormFetched {
            roll_number: "42".to_string(),
            result: Ok(Some(FormStructure {
                sections: vec![section(
                    "Personal",
                    vec![
                        required_text("name"),
                        choice_field("color", FieldKind::Dropdown, &["red"]),
                    ],
                )],
            })),
        });

        let screen = render(&app);
        assert!(screen.contains("Personal"));
        assert!(screen.contains("Select..."));
        assert!(screen.contains("Submit"));
        assert!(screen.contains("Roll 42"));

        app.state.push_error("Login error".to_string());
        assert!(render(&app).contains("Login error"));
    }

    #[test]
    fn test_status_bar_marks_submission() {
        let mut app = app();
        app.apply_gateway_event(GatewayEvent::FormFetched {
            roll_number: "42".to_string(),
            result: Ok(Some(FormStructure {
                sections: vec![section("Notes", vec![text_field("note")])],
            })),
        });
        assert!(!render(&app).contains("Submitted"));

        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert!(!app.state.has_notices());
        assert!(render(&app).contains("Submitted"));
    }

    #[test]
    fn test_loading_screen_renders() {
        let mut app = app();
        app.apply_gateway_event(GatewayEvent::FormFetched {
            roll_number: "42".to_string(),
            result: Ok(None),
        });
        assert!(render(&app).contains("Loading form..."));
    }
}
