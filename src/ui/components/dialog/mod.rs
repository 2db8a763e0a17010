//! Dialog components for TUI

mod base;
mod error_dialog;
mod submitting_dialog;

pub use error_dialog::render_error_dialog;
pub use submitting_dialog::render_submitting_dialog;
