//! Application state definitions

use super::forms::{SectionWizard, WizardCursor};
use super::login_form::LoginForm;
use std::collections::VecDeque;

/// Current screen of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Not authenticated
    #[default]
    Login,
    /// Authenticated, form not received yet
    Loading,
    /// Authenticated with a form to fill in
    Wizard,
}

/// Gateway request that can be in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayOp {
    Register,
    Login,
}

impl GatewayOp {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Register => "Registering",
            Self::Login => "Signing in",
        }
    }
}

/// Severity of a modal notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
}

/// A modal alert waiting to be dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Login screen
    pub login: LoginForm,
    /// Single in-flight guard shared by register and login
    pub in_flight: Option<GatewayOp>,
    /// Roll number of the authenticated session
    pub roll_number: Option<String>,

    // Wizard screen
    pub wizard: Option<SectionWizard>,
    pub cursor: WizardCursor,
    pub submitted: bool,

    // Alerts
    notices: VecDeque<Notice>,
}

impl AppState {
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_authenticated(&self) -> bool {
        self.roll_number.is_some()
    }

    /// Queue an error alert
    pub fn push_error(&mut self, message: String) {
        self.notices.push_back(Notice {
            kind: NoticeKind::Error,
            message,
        });
    }

    /// Queue an informational alert
    pub fn push_info(&mut self, message: String) {
        self.notices.push_back(Notice {
            kind: NoticeKind::Info,
            message,
        });
    }

    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }

    /// The alert currently on screen
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_login() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Login);
        assert!(!state.is_busy());
        assert!(!state.is_authenticated());
        assert!(state.wizard.is_none());
    }

    #[test]
    fn test_notices_are_fifo() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_info("second".to_string());

        assert_eq!(state.current_notice().unwrap().message, "first");
        assert_eq!(state.current_notice().unwrap().kind, NoticeKind::Error);
        state.dismiss_notice();
        assert_eq!(state.current_notice().unwrap().kind, NoticeKind::Info);
        state.dismiss_notice();
        assert!(!state.has_notices());
    }

    #[test]
    fn test_dismiss_on_empty_queue_is_noop() {
        let mut state = AppState::default();
        state.dismiss_notice();
        assert!(state.current_notice().is_none());
    }
}
