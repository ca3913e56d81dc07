//! Section wizard: navigation, value storage and validation across sections

use super::schema::{FormField, FormSection, FormStructure};
use super::validator::validate;
use super::value::{ControlEvent, FieldValue, FormErrorMap, FormValueMap};

/// Receives the collected values once the last section validates
pub trait SubmissionSink {
    fn submit(&mut self, values: &FormValueMap);
}

impl<F: FnMut(&FormValueMap)> SubmissionSink for F {
    fn submit(&mut self, values: &FormValueMap) {
        self(values)
    }
}

/// Stateful interpreter for one form schema.
///
/// Values and errors live here for the whole session; moving between
/// sections never drops entered values. Only the section on screen is
/// validated, and sections already passed are not re-checked on submit.
#[derive(Debug, Clone)]
pub struct SectionWizard {
    form: FormStructure,
    current_section: usize,
    values: FormValueMap,
    errors: FormErrorMap,
}

impl SectionWizard {
    pub fn new(form: FormStructure) -> Self {
        Self {
            form,
            current_section: 0,
            values: FormValueMap::new(),
            errors: FormErrorMap::new(),
        }
    }

    pub fn current_section_index(&self) -> usize {
        self.current_section
    }

    pub fn section_count(&self) -> usize {
        self.form.sections.len()
    }

    /// The section on screen; `None` only for a form without sections
    pub fn current_section(&self) -> Option<&FormSection> {
        self.form.sections.get(self.current_section)
    }

    pub fn is_first_section(&self) -> bool {
        self.current_section == 0
    }

    pub fn is_last_section(&self) -> bool {
        self.current_section + 1 >= self.section_count()
    }

    pub fn values(&self) -> &FormValueMap {
        &self.values
    }

    pub fn errors(&self) -> &FormErrorMap {
        &self.errors
    }

    pub fn error(&self, field_id: &str) -> Option<&str> {
        self.errors.get(field_id).map(String::as_str)
    }

    /// Stored value for a field, or the kind's default when untouched
    pub fn value(&self, field: &FormField) -> FieldValue {
        match self.values.get(&field.field_id) {
            Some(value) => value.clone(),
            None if field.kind.is_boolean() => FieldValue::Bool(false),
            None => FieldValue::default(),
        }
    }

    /// Store the value a control reported for `field`
    pub fn set_value(&mut self, field: &FormField, event: ControlEvent) {
        let value = if field.kind.is_boolean() {
            FieldValue::Bool(event.checked)
        } else {
            FieldValue::Text(event.value)
        };
        self.store(field, value);
    }

    /// Store a value picked directly from a single-choice control
    pub fn set_option_value(&mut self, field: &FormField, value: &str) {
        self.store(field, FieldValue::Text(value.to_string()));
    }

    fn store(&mut self, field: &FormField, value: FieldValue) {
        // Only a field already showing an error is re-checked on change
        let revalidate = self.errors.contains_key(&field.field_id);
        let error = if revalidate {
            validate(field, &value)
        } else {
            None
        };

        self.values.insert(field.field_id.clone(), value);

        if revalidate {
            match error {
                Some(message) => {
                    self.errors.insert(field.field_id.clone(), message);
                }
                None => {
                    self.errors.remove(&field.field_id);
                }
            }
        }
    }

    /// Validate every field of the current section and replace the error map
    pub fn validate_section(&mut self) -> bool {
        let mut errors = FormErrorMap::new();
        if let Some(section) = self.form.sections.get(self.current_section) {
            for field in &section.fields {
                let value = self.value(field);
                if let Some(message) = validate(field, &value) {
                    errors.insert(field.field_id.clone(), message);
                }
            }
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Advance one section if the current one validates.
    /// Returns true when the wizard moved.
    pub fn go_next(&mut self) -> bool {
        if !self.validate_section() || self.is_last_section() {
            return false;
        }
        self.current_section += 1;
        tracing::debug!("Advanced to section {}", self.current_section);
        true
    }

    /// Step back one section without validating
    pub fn go_prev(&mut self) {
        self.current_section = self.current_section.saturating_sub(1);
        tracing::debug!("Returned to section {}", self.current_section);
    }

    /// Validate the current section and hand the values to `sink` on success
    pub fn submit(&mut self, sink: &mut impl SubmissionSink) -> bool {
        if !self.validate_section() {
            return false;
        }
        sink.submit(&self.values);
        true
    }
}
