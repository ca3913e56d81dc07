//! Application state and core logic

use crate::config::TuiConfig;
use crate::gateway::{GatewayApi, GatewayClient, GatewayError};
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::forms::{
    ControlEvent, FieldKind, FormField, FormStructure, FormValueMap, SectionWizard,
    SubmissionSink, WizardButton,
};
use crate::state::{AppState, GatewayOp, LoginFocus, View};
use crate::ui::cycle_select;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Completion of a gateway request, delivered back to the event loop
#[derive(Debug)]
pub enum GatewayEvent {
    Registered {
        result: Result<(), GatewayError>,
    },
    FormFetched {
        roll_number: String,
        result: Result<Option<FormStructure>, GatewayError>,
    },
}

/// Submission sink that records the payload in the log
struct LogSubmissionSink<'a> {
    roll_number: &'a str,
}

impl SubmissionSink for LogSubmissionSink<'_> {
    fn submit(&mut self, values: &FormValueMap) {
        let payload = serde_json::to_string(values).unwrap_or_else(|e| format!("<{e}>"));
        tracing::info!(
            roll_number = self.roll_number,
            submitted_at = %chrono::Utc::now().to_rfc3339(),
            %payload,
            "Form submitted"
        );
    }
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Gateway used for registration and form retrieval
    gateway: Arc<dyn GatewayApi>,
    events_tx: UnboundedSender<GatewayEvent>,
    events_rx: UnboundedReceiver<GatewayEvent>,
    /// Whether the app should quit
    quit: bool,
    /// One-line feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App talking to the configured gateway
    pub fn new(config: &TuiConfig) -> Self {
        let client = GatewayClient::new(config.resolve_gateway_url());
        tracing::info!("Using form gateway at {}", client.base_url());
        Self::with_gateway(Arc::new(client))
    }

    /// Create an App around any gateway implementation
    pub fn with_gateway(gateway: Arc<dyn GatewayApi>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            gateway,
            events_tx,
            events_rx,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Apply every gateway completion that has arrived since the last call
    pub fn poll_gateway_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_gateway_event(event);
        }
    }

    /// Fold one gateway completion into the state
    pub fn apply_gateway_event(&mut self, event: GatewayEvent) {
        self.state.in_flight = None;

        match event {
            GatewayEvent::Registered { result: Ok(()) } => {
                tracing::info!("Registration succeeded");
                self.state.push_info("User registered successfully!".to_string());
            }
            GatewayEvent::Registered { result: Err(err) } => {
                tracing::warn!("Registration failed: {err}");
                self.state.push_error(err.alert_text(GatewayOp::Register));
            }
            GatewayEvent::FormFetched {
                roll_number,
                result,
            } => {
                if self.state.is_authenticated() {
                    // The shell leaves the login screen once per session
                    tracing::debug!("Ignoring late form response for {roll_number}");
                    return;
                }
                match result {
                    Ok(form) => {
                        tracing::info!("Signed in as {roll_number}");
                        self.state.roll_number = Some(roll_number);
                        match form {
                            Some(form) => self.enter_wizard(form),
                            None => self.state.current_view = View::Loading,
                        }
                    }
                    Err(err) => {
                        tracing::warn!("Login failed: {err}");
                        self.state.push_error(err.alert_text(GatewayOp::Login));
                    }
                }
            }
        }
    }

    fn enter_wizard(&mut self, form: FormStructure) {
        let duplicates = form.duplicate_field_ids();
        if !duplicates.is_empty() {
            tracing::warn!("Form reuses field ids {duplicates:?}; their values are shared");
        }
        tracing::info!("Loaded form with {} sections", form.sections.len());

        self.state.wizard = Some(SectionWizard::new(form));
        self.state.cursor.reset();
        self.state.submitted = false;
        self.state.current_view = View::Wizard;
        self.sync_option_cursor();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Alerts are modal
        if self.state.has_notices() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return;
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::Login => self.handle_login_key(key),
            View::Loading => {}
            View::Wizard => self.handle_wizard_key(key),
        }
    }

    // ----- Login screen -----

    fn handle_login_key(&mut self, key: KeyEvent) {
        let login = &mut self.state.login;
        match key.code {
            KeyCode::Tab | KeyCode::Down => login.focus = login.focus.next(),
            KeyCode::BackTab | KeyCode::Up => login.focus = login.focus.prev(),
            KeyCode::Left | KeyCode::Right if login.focus.is_button() => {
                login.focus = match login.focus {
                    LoginFocus::Register => LoginFocus::Login,
                    _ => LoginFocus::Register,
                };
            }
            KeyCode::Enter => match login.focus {
                LoginFocus::Register => self.start_register(),
                LoginFocus::Login => self.start_login(),
                focus => login.focus = focus.next(),
            },
            KeyCode::Char(c) => login.input_char(c),
            KeyCode::Backspace => login.backspace(),
            _ => {}
        }
    }

    fn start_register(&mut self) {
        if !self.state.login.can_register(self.state.is_busy()) {
            return;
        }
        let roll_number = self.state.login.roll_number.clone();
        let name = self.state.login.name.clone();
        tracing::info!("Registering {roll_number}");
        self.state.in_flight = Some(GatewayOp::Register);

        let gateway = Arc::clone(&self.gateway);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = gateway.create_user(&roll_number, &name).await;
            let _ = tx.send(GatewayEvent::Registered { result });
        });
    }

    fn start_login(&mut self) {
        if !self.state.login.can_login(self.state.is_busy()) {
            return;
        }
        let roll_number = self.state.login.roll_number.clone();
        tracing::info!("Fetching form for {roll_number}");
        self.state.in_flight = Some(GatewayOp::Login);

        let gateway = Arc::clone(&self.gateway);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = gateway.fetch_form(&roll_number).await;
            let _ = tx.send(GatewayEvent::FormFetched {
                roll_number,
                result,
            });
        });
    }

    // ----- Wizard screen -----

    fn field_count(&self) -> usize {
        self.state
            .wizard
            .as_ref()
            .and_then(SectionWizard::current_section)
            .map_or(0, |s| s.fields.len())
    }

    fn focused_field(&self) -> Option<FormField> {
        let index = self.state.cursor.field_index(self.field_count())?;
        self.state
            .wizard
            .as_ref()?
            .current_section()?
            .fields
            .get(index)
            .cloned()
    }

    /// Point the radio cursor at the stored option of the focused field
    fn sync_option_cursor(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if !field.kind.has_options() {
            return;
        }
        if let Some(wizard) = &self.state.wizard {
            let stored = wizard.value(&field);
            self.state.cursor.option = field.option_index(stored.as_text()).unwrap_or(0);
        }
    }

    /// Focus the first field of the section that has an error
    fn focus_first_error(&mut self) {
        let Some(wizard) = &self.state.wizard else {
            return;
        };
        let Some(section) = wizard.current_section() else {
            return;
        };
        let first_error = section
            .fields
            .iter()
            .position(|f| wizard.errors().contains_key(&f.field_id));
        if let Some(index) = first_error {
            self.state.cursor.position = index;
            self.sync_option_cursor();
            self.status_message = Some("Please fix the highlighted fields".to_string());
        }
    }

    fn handle_wizard_key(&mut self, key: KeyEvent) {
        if self.state.wizard.is_none() {
            return;
        }

        if key.modifiers.contains(SHORTCUT_MODIFIER) {
            match key.code {
                KeyCode::Char('n') => return self.go_next(),
                KeyCode::Char('p') => return self.go_prev(),
                KeyCode::Char('s') => return self.submit(),
                _ => {}
            }
        }

        let field_count = self.field_count();
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.state.cursor.next(field_count);
                self.sync_option_cursor();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.cursor.prev(field_count);
                self.sync_option_cursor();
            }
            _ if self.state.cursor.on_buttons(field_count) => self.handle_button_key(key),
            _ => {
                if let Some(field) = self.focused_field() {
                    self.handle_field_key(&field, key);
                }
            }
        }
    }

    fn handle_button_key(&mut self, key: KeyEvent) {
        let has_prev = self
            .state
            .wizard
            .as_ref()
            .is_some_and(|w| !w.is_first_section());
        match key.code {
            KeyCode::Left | KeyCode::Right => self.state.cursor.toggle_button(has_prev),
            KeyCode::Enter | KeyCode::Char(' ') => match self.state.cursor.button {
                WizardButton::Prev if has_prev => self.go_prev(),
                WizardButton::Prev => {}
                WizardButton::Forward => {
                    let on_last = self
                        .state
                        .wizard
                        .as_ref()
                        .is_some_and(SectionWizard::is_last_section);
                    if on_last {
                        self.submit();
                    } else {
                        self.go_next();
                    }
                }
            },
            _ => {}
        }
    }

    fn handle_field_key(&mut self, field: &FormField, key: KeyEvent) {
        let field_count = self.field_count();
        let Some(wizard) = self.state.wizard.as_mut() else {
            return;
        };
        let cursor = &mut self.state.cursor;

        match &field.kind {
            FieldKind::Text
            | FieldKind::Email
            | FieldKind::Tel
            | FieldKind::Date
            | FieldKind::Textarea => {
                let mut text = wizard.value(field).as_text().to_string();
                match key.code {
                    KeyCode::Char(c) => text.push(c),
                    KeyCode::Backspace => {
                        text.pop();
                    }
                    KeyCode::Enter if field.kind == FieldKind::Textarea => text.push('\n'),
                    KeyCode::Enter => {
                        cursor.next(field_count);
                        return self.sync_option_cursor();
                    }
                    _ => return,
                }
                wizard.set_value(field, ControlEvent::value(text));
            }
            FieldKind::Dropdown => match key.code {
                KeyCode::Left | KeyCode::Right => {
                    let current = wizard.value(field);
                    let next = cycle_select(field, current.as_text(), key.code == KeyCode::Right);
                    wizard.set_value(field, ControlEvent::value(next));
                }
                KeyCode::Enter => {
                    cursor.next(field_count);
                    self.sync_option_cursor();
                }
                _ => {}
            },
            FieldKind::Radio => match key.code {
                KeyCode::Left => cursor.prev_option(field.options.len()),
                KeyCode::Right => cursor.next_option(field.options.len()),
                KeyCode::Char(' ') | KeyCode::Enter => {
                    if let Some(option) = field.options.get(cursor.option) {
                        wizard.set_option_value(field, &option.value);
                    }
                }
                _ => {}
            },
            FieldKind::Checkbox => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    let checked = wizard.value(field).as_bool();
                    wizard.set_value(field, ControlEvent::checked(!checked));
                }
            }
            FieldKind::Unsupported(_) => {}
        }
    }

    fn go_next(&mut self) {
        let Some(wizard) = self.state.wizard.as_mut() else {
            return;
        };
        if wizard.is_last_section() {
            return;
        }
        if wizard.go_next() {
            self.state.cursor.reset();
            self.sync_option_cursor();
        } else {
            self.focus_first_error();
        }
    }

    fn go_prev(&mut self) {
        let Some(wizard) = self.state.wizard.as_mut() else {
            return;
        };
        if wizard.is_first_section() {
            return;
        }
        wizard.go_prev();
        self.state.cursor.reset();
        self.sync_option_cursor();
    }

    fn submit(&mut self) {
        let roll_number = self.state.roll_number.clone().unwrap_or_default();
        let Some(wizard) = self.state.wizard.as_mut() else {
            return;
        };
        if !wizard.is_last_section() {
            return;
        }
        let mut sink = LogSubmissionSink {
            roll_number: &roll_number,
        };
        if wizard.submit(&mut sink) {
            self.state.submitted = true;
            self.state.push_info("Form submitted successfully!".to_string());
        } else {
            self.focus_first_error();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockGatewayApi;
    use crate::state::forms::fixtures::*;
    use crate::state::forms::{FieldValue, FormSection};
    use crate::state::NoticeKind;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn app_with(mock: MockGatewayApi) -> App {
        App::with_gateway(Arc::new(mock))
    }

    async fn settle(app: &mut App) {
        let event = app.events_rx.recv().await.expect("gateway event");
        app.apply_gateway_event(event);
    }

    fn two_section_form() -> FormStructure {
        FormStructure {
            sections: vec![
                section("Basics", vec![required_text("name")]),
                section(
                    "Extras",
                    vec![
                        choice_field("answer", FieldKind::Radio, &["y", "n"]),
                        checkbox("agree"),
                    ],
                ),
            ],
        }
    }

    fn signed_in(form: FormStructure) -> App {
        let mut app = app_with(MockGatewayApi::new());
        app.apply_gateway_event(GatewayEvent::FormFetched {
            roll_number: "42".to_string(),
            result: Ok(Some(form)),
        });
        app
    }

    fn fill_login(app: &mut App) {
        type_text(app, "42");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "Ada");
    }

    mod login {
        use super::*;

        #[tokio::test]
        async fn test_login_success_opens_wizard() {
            let mut mock = MockGatewayApi::new();
            mock.expect_fetch_form().times(1).returning(|roll| {
                assert_eq!(roll, "42");
                Ok(Some(two_section_form()))
            });
            let mut app = app_with(mock);

            fill_login(&mut app);
            app.state.login.focus = LoginFocus::Login;
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.state.in_flight, Some(GatewayOp::Login));

            settle(&mut app).await;

            assert_eq!(app.state.current_view, View::Wizard);
            assert_eq!(app.state.roll_number.as_deref(), Some("42"));
            assert!(app.state.in_flight.is_none());
            assert_eq!(app.state.wizard.as_ref().unwrap().section_count(), 2);
        }

        #[tokio::test]
        async fn test_login_requires_name() {
            let mut mock = MockGatewayApi::new();
            mock.expect_fetch_form().never();
            let mut app = app_with(mock);

            type_text(&mut app, "42");
            app.state.login.focus = LoginFocus::Login;
            app.handle_key(key(KeyCode::Enter));

            assert!(app.state.in_flight.is_none());
            assert_eq!(app.state.current_view, View::Login);
        }

        #[tokio::test]
        async fn test_login_without_form_shows_loading() {
            let mut mock = MockGatewayApi::new();
            mock.expect_fetch_form().returning(|_| Ok(None));
            let mut app = app_with(mock);

            fill_login(&mut app);
            app.state.login.focus = LoginFocus::Login;
            app.handle_key(key(KeyCode::Enter));
            settle(&mut app).await;

            assert_eq!(app.state.current_view, View::Loading);
            assert!(app.state.is_authenticated());
        }

        #[tokio::test]
        async fn test_login_rejection_raises_alert() {
            let mut mock = MockGatewayApi::new();
            mock.expect_fetch_form().returning(|_| {
                Err(GatewayError::Rejected {
                    status: 404,
                    message: Some("User not found".to_string()),
                })
            });
            let mut app = app_with(mock);

            fill_login(&mut app);
            app.state.login.focus = LoginFocus::Login;
            app.handle_key(key(KeyCode::Enter));
            settle(&mut app).await;

            assert_eq!(app.state.current_view, View::Login);
            let notice = app.state.current_notice().unwrap();
            assert_eq!(notice.kind, NoticeKind::Error);
            assert_eq!(notice.message, "User not found");
            // Inputs survive so the user can retry
            assert_eq!(app.state.login.roll_number, "42");
        }

        #[tokio::test]
        async fn test_register_success_and_failure() {
            let mut mock = MockGatewayApi::new();
            let mut calls = 0;
            mock.expect_create_user().times(2).returning(move |roll, name| {
                assert_eq!(roll, "42");
                assert_eq!(name, "Ada");
                calls += 1;
                if calls == 1 {
                    Ok(())
                } else {
                    Err(GatewayError::Rejected {
                        status: 409,
                        message: None,
                    })
                }
            });
            let mut app = app_with(mock);
            fill_login(&mut app);
            app.state.login.focus = LoginFocus::Register;

            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.state.in_flight, Some(GatewayOp::Register));
            settle(&mut app).await;
            assert_eq!(
                app.state.current_notice().unwrap().message,
                "User registered successfully!"
            );
            app.handle_key(key(KeyCode::Esc));

            app.handle_key(key(KeyCode::Enter));
            settle(&mut app).await;
            let notice = app.state.current_notice().unwrap();
            assert_eq!(notice.kind, NoticeKind::Error);
            assert_eq!(notice.message, "Registration failed.");
            assert_eq!(app.state.current_view, View::Login);
        }

        #[tokio::test]
        async fn test_register_blocks_login_while_in_flight() {
            let mut mock = MockGatewayApi::new();
            mock.expect_create_user().returning(|_, _| Ok(()));
            mock.expect_fetch_form().never();
            let mut app = app_with(mock);
            fill_login(&mut app);

            app.state.login.focus = LoginFocus::Register;
            app.handle_key(key(KeyCode::Enter));
            app.state.login.focus = LoginFocus::Login;
            app.handle_key(key(KeyCode::Enter));

            assert_eq!(app.state.in_flight, Some(GatewayOp::Register));
            settle(&mut app).await;
            assert!(app.state.in_flight.is_none());
        }

        #[test]
        fn test_late_form_response_is_ignored() {
            let mut app = signed_in(two_section_form());
            app.apply_gateway_event(GatewayEvent::FormFetched {
                roll_number: "7".to_string(),
                result: Ok(Some(FormStructure::default())),
            });
            assert_eq!(app.state.roll_number.as_deref(), Some("42"));
            assert_eq!(app.state.wizard.as_ref().unwrap().section_count(), 2);
        }

        #[test]
        fn test_notice_blocks_input_until_dismissed() {
            let mut app = app_with(MockGatewayApi::new());
            app.state.push_error("boom".to_string());

            type_text(&mut app, "9");
            assert!(app.state.login.roll_number.is_empty());

            app.handle_key(key(KeyCode::Enter));
            assert!(!app.state.has_notices());
            type_text(&mut app, "9");
            assert_eq!(app.state.login.roll_number, "9");
        }
    }

    mod wizard {
        use super::*;

        fn value(app: &App, id: &str) -> Option<FieldValue> {
            app.state.wizard.as_ref()?.values().get(id).cloned()
        }

        fn error(app: &App, id: &str) -> Option<String> {
            app.state
                .wizard
                .as_ref()?
                .error(id)
                .map(str::to_string)
        }

        fn section_index(app: &App) -> usize {
            app.state.wizard.as_ref().unwrap().current_section_index()
        }

        #[test]
        fn test_typing_stores_text() {
            let mut app = signed_in(two_section_form());
            type_text(&mut app, "Ada");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(value(&app, "name"), Some(FieldValue::Text("Ad".to_string())));
        }

        #[test]
        fn test_next_blocked_until_required_filled() {
            let mut app = signed_in(two_section_form());

            app.handle_key(ctrl('n'));
            assert_eq!(section_index(&app), 0);
            assert_eq!(error(&app, "name").as_deref(), Some("This field is required"));
            assert!(app.status_message.is_some());

            type_text(&mut app, "A");
            assert!(error(&app, "name").is_none());

            app.handle_key(ctrl('n'));
            assert_eq!(section_index(&app), 1);
            assert_eq!(app.state.cursor.position, 0);
        }

        #[test]
        fn test_prev_keeps_values() {
            let mut app = signed_in(two_section_form());
            type_text(&mut app, "Ada");
            app.handle_key(ctrl('n'));
            app.handle_key(ctrl('p'));

            assert_eq!(section_index(&app), 0);
            assert_eq!(value(&app, "name"), Some(FieldValue::Text("Ada".to_string())));
        }

        #[test]
        fn test_radio_selection_via_keys() {
            let mut app = signed_in(two_section_form());
            type_text(&mut app, "Ada");
            app.handle_key(ctrl('n'));

            app.handle_key(key(KeyCode::Char(' ')));
            app.handle_key(key(KeyCode::Right));
            app.handle_key(key(KeyCode::Char(' ')));

            assert_eq!(value(&app, "answer"), Some(FieldValue::Text("n".to_string())));
            let field = choice_field("answer", FieldKind::Radio, &["y", "n"]);
            let control = crate::ui::control_for(&field, &value(&app, "answer").unwrap());
            let crate::ui::Control::RadioGroup { items, .. } = control else {
                panic!("expected radio group");
            };
            assert_eq!(items.iter().filter(|i| i.selected).count(), 1);
        }

        #[test]
        fn test_checkbox_toggles() {
            let mut app = signed_in(two_section_form());
            type_text(&mut app, "Ada");
            app.handle_key(ctrl('n'));
            app.handle_key(key(KeyCode::Tab));

            app.handle_key(key(KeyCode::Char(' ')));
            assert_eq!(value(&app, "agree"), Some(FieldValue::Bool(true)));
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(value(&app, "agree"), Some(FieldValue::Bool(false)));
        }

        #[test]
        fn test_dropdown_cycles_with_arrows() {
            let form = FormStructure {
                sections: vec![section(
                    "Pick",
                    vec![choice_field("color", FieldKind::Dropdown, &["red", "green"])],
                )],
            };
            let mut app = signed_in(form);

            app.handle_key(key(KeyCode::Right));
            app.handle_key(key(KeyCode::Right));
            assert_eq!(value(&app, "color"), Some(FieldValue::Text("green".to_string())));
            app.handle_key(key(KeyCode::Right));
            assert_eq!(value(&app, "color"), Some(FieldValue::Text(String::new())));
        }

        #[test]
        fn test_submit_on_last_section() {
            let mut app = signed_in(two_section_form());
            type_text(&mut app, "Ada");
            app.handle_key(ctrl('n'));

            app.handle_key(ctrl('s'));

            assert!(app.state.submitted);
            let notice = app.state.current_notice().unwrap();
            assert_eq!(notice.kind, NoticeKind::Info);
            assert_eq!(notice.message, "Form submitted successfully!");
        }

        #[test]
        fn test_submit_ignored_before_last_section() {
            let mut app = signed_in(two_section_form());
            type_text(&mut app, "Ada");
            app.handle_key(ctrl('s'));
            assert!(!app.state.submitted);
            assert_eq!(section_index(&app), 0);
        }

        #[test]
        fn test_submit_blocked_by_errors_focuses_field() {
            let form = FormStructure {
                sections: vec![section(
                    "Only",
                    vec![text_field("nick"), required_text("email")],
                )],
            };
            let mut app = signed_in(form);

            app.handle_key(ctrl('s'));

            assert!(!app.state.submitted);
            assert_eq!(app.state.cursor.position, 1);
            assert!(error(&app, "email").is_some());
        }

        #[test]
        fn test_button_row_navigation() {
            let mut app = signed_in(two_section_form());
            type_text(&mut app, "Ada");
            // Move to the button row and press Next
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(section_index(&app), 1);

            // Back via the Prev button
            app.handle_key(key(KeyCode::BackTab));
            app.handle_key(key(KeyCode::Left));
            assert_eq!(app.state.cursor.button, WizardButton::Prev);
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(section_index(&app), 0);
        }

        #[test]
        fn test_unsupported_field_ignores_keys() {
            let form = FormStructure {
                sections: vec![FormSection {
                    title: "Odd".to_string(),
                    description: String::new(),
                    fields: vec![FormField {
                        kind: FieldKind::Unsupported("slider".to_string()),
                        ..text_field("rating")
                    }],
                }],
            };
            let mut app = signed_in(form);
            type_text(&mut app, "5");
            assert!(value(&app, "rating").is_none());
        }

        #[test]
        fn test_empty_form_does_not_panic() {
            let mut app = signed_in(FormStructure::default());
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Enter));
            app.handle_key(ctrl('n'));
            app.handle_key(ctrl('p'));
            assert_eq!(app.state.current_view, View::Wizard);
            assert!(app.state.submitted);
        }
    }
}
