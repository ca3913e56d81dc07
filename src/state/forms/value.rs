//! Field values and the events controls emit

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current value of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Empty string for text-like values, `false` for booleans
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Bool(b) => !b,
        }
    }

    /// Get the text value (empty for booleans)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Bool(_) => "",
        }
    }

    /// Get the boolean value (non-empty text counts as set)
    pub fn as_bool(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            FieldValue::Text(s) => !s.is_empty(),
        }
    }

    /// Length in characters; `None` for values without a length
    pub fn char_len(&self) -> Option<usize> {
        match self {
            FieldValue::Text(s) => Some(s.chars().count()),
            FieldValue::Bool(_) => None,
        }
    }
}

/// fieldId → value
pub type FormValueMap = BTreeMap<String, FieldValue>;

/// fieldId → validation message
pub type FormErrorMap = BTreeMap<String, String>;

/// What a control reports when the user changes it
///
/// Mirrors an input element: text-like controls fill `value`, toggles fill
/// `checked`. The wizard picks whichever matches the field kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlEvent {
    pub value: String,
    pub checked: bool,
}

impl ControlEvent {
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            checked: false,
        }
    }

    pub fn checked(checked: bool) -> Self {
        Self {
            value: String::new(),
            checked,
        }
    }
}
