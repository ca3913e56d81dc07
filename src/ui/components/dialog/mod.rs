//! Dialog components for TUI

mod base;
mod error_dialog;
mod info_dialog;

pub use error_dialog::render_error_dialog;
pub use info_dialog::render_info_dialog;
