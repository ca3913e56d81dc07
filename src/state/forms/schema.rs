//! Form schema as delivered by the gateway
//!
//! These are passive data shapes. Field names follow the gateway's JSON
//! (`fieldId`, `dataTestId`, `validation.message`, ...).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Control kind declared by a field's `type` string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Textarea,
    Dropdown,
    Radio,
    Checkbox,
    /// A `type` the renderer has no control for; kept verbatim
    Unsupported(String),
}

impl FieldKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Date => "date",
            Self::Textarea => "textarea",
            Self::Dropdown => "dropdown",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Unsupported(raw) => raw,
        }
    }

    /// Kinds whose value is a boolean rather than a string
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Checkbox)
    }

    /// Kinds that pick from the field's option list
    pub fn has_options(&self) -> bool {
        matches!(self, Self::Dropdown | Self::Radio)
    }
}

impl From<String> for FieldKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "text" => Self::Text,
            "email" => Self::Email,
            "tel" => Self::Tel,
            "date" => Self::Date,
            "textarea" => Self::Textarea,
            "dropdown" => Self::Dropdown,
            "radio" => Self::Radio,
            "checkbox" => Self::Checkbox,
            _ => Self::Unsupported(raw),
        }
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Per-field validation overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValidation {
    /// Replaces the generic required-field message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One entry of a dropdown or radio field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOption {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub data_test_id: String,
}

/// A single data-entry unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub field_id: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
    #[serde(default)]
    pub options: Vec<FieldOption>,
    #[serde(default)]
    pub data_test_id: String,
}

impl FormField {
    /// Custom message for an empty required field, if the schema supplies one
    pub fn validation_message(&self) -> Option<&str> {
        self.validation
            .as_ref()
            .and_then(|v| v.message.as_deref())
            .filter(|m| !m.is_empty())
    }

    /// Position of the option carrying `value`
    pub fn option_index(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }
}

/// One page of the wizard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: Vec<FormField>,
}

/// The complete schema for one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormStructure {
    #[serde(default)]
    pub sections: Vec<FormSection>,
}

impl FormStructure {
    /// Every field across all sections, in display order
    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    /// Field ids that appear more than once, in first-repeat order
    pub fn duplicate_field_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for field in self.fields() {
            if !seen.insert(field.field_id.as_str()) && !duplicates.contains(&field.field_id) {
                duplicates.push(field.field_id.clone());
            }
        }
        duplicates
    }
}
