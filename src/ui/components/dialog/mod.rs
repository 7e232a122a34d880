//! Dialog components for TUI

mod base;
mod error_dialog;
mod outcome_dialog;

pub use error_dialog::render_error_dialog;
pub use outcome_dialog::render_outcome_dialog;
