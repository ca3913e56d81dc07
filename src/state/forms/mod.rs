//! Form domain layer
//!
//! Schema types received from the gateway, the field validator, and the
//! section wizard that drives a schema as a multi-step form.

mod cursor;
mod schema;
mod validator;
mod value;
mod wizard;

pub use cursor::{WizardButton, WizardCursor};
pub use schema::{FieldKind, FormField, FormStructure};
pub use value::{ControlEvent, FieldValue, FormValueMap};
pub use wizard::{SectionWizard, SubmissionSink};

#[cfg(test)]
pub(crate) use schema::{fixtures, FormSection};
