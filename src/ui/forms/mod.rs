//! Form rendering module
//!
//! - `field_renderer`: field kind → control mapping and drawing
//! - `login_form`: the login / registration screen
//! - `wizard_form`: one wizard section with its button row

mod field_renderer;
mod login_form;
mod wizard_form;

pub use field_renderer::{control_for, cycle_select, Control};
pub use login_form::draw_login;
pub use wizard_form::draw_wizard;
