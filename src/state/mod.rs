//! Application state module

mod app_state;
pub mod forms;
mod login_form;

pub use app_state::*;
pub use login_form::*;
