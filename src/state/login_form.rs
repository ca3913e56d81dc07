//! Login screen inputs and focus

/// Focusable elements of the login screen, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    #[default]
    RollNumber,
    Name,
    Register,
    Login,
}

impl LoginFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::RollNumber => Self::Name,
            Self::Name => Self::Register,
            Self::Register => Self::Login,
            Self::Login => Self::RollNumber,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::RollNumber => Self::Login,
            Self::Name => Self::RollNumber,
            Self::Register => Self::Name,
            Self::Login => Self::Register,
        }
    }

    pub fn is_button(&self) -> bool {
        matches!(self, Self::Register | Self::Login)
    }
}

/// Credentials typed on the login screen
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub roll_number: String,
    pub name: String,
    pub focus: LoginFocus,
}

impl LoginForm {
    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            LoginFocus::RollNumber => Some(&mut self.roll_number),
            LoginFocus::Name => Some(&mut self.name),
            LoginFocus::Register | LoginFocus::Login => None,
        }
    }

    /// Append a character to the focused input
    pub fn input_char(&mut self, c: char) {
        if let Some(input) = self.focused_input() {
            input.push(c);
        }
    }

    /// Remove the last character of the focused input
    pub fn backspace(&mut self) {
        if let Some(input) = self.focused_input() {
            input.pop();
        }
    }

    /// Registration only needs the screen to be idle
    pub fn can_register(&self, in_flight: bool) -> bool {
        !in_flight
    }

    /// Login additionally requires both inputs to be filled
    pub fn can_login(&self, in_flight: bool) -> bool {
        !in_flight && !self.roll_number.is_empty() && !self.name.is_empty()
    }
}
