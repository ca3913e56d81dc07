//! Keyboard focus within the wizard screen

/// Buttons in the wizard's bottom row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardButton {
    Prev,
    /// "Next", or "Submit" on the last section
    #[default]
    Forward,
}

/// Which field (or the button row) has focus, plus the highlighted option
/// inside a radio group.
///
/// Positions `0..field_count` are fields; `field_count` is the button row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardCursor {
    pub position: usize,
    pub option: usize,
    pub button: WizardButton,
}

impl WizardCursor {
    /// Move focus forward, wrapping past the button row
    pub fn next(&mut self, field_count: usize) {
        self.position = (self.position + 1) % (field_count + 1);
        self.option = 0;
    }

    /// Move focus backward, wrapping to the button row
    pub fn prev(&mut self, field_count: usize) {
        if self.position == 0 {
            self.position = field_count;
        } else {
            self.position -= 1;
        }
        self.option = 0;
    }

    pub fn on_buttons(&self, field_count: usize) -> bool {
        self.position >= field_count
    }

    /// Index of the focused field, if focus is not on the button row
    pub fn field_index(&self, field_count: usize) -> Option<usize> {
        (self.position < field_count).then_some(self.position)
    }

    /// Back to the first field, used after switching sections
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Toggle between Prev and Forward; Prev only exists past the first section
    pub fn toggle_button(&mut self, has_prev: bool) {
        self.button = match self.button {
            WizardButton::Forward if has_prev => WizardButton::Prev,
            _ => WizardButton::Forward,
        };
    }

    /// Move the highlighted radio option, wrapping within `option_count`
    pub fn next_option(&mut self, option_count: usize) {
        if option_count > 0 {
            self.option = (self.option + 1) % option_count;
        }
    }

    pub fn prev_option(&mut self, option_count: usize) {
        if option_count == 0 {
            return;
        }
        if self.option == 0 {
            self.option = option_count - 1;
        } else {
            self.option -= 1;
        }
    }
}
