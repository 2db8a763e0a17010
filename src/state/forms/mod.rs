//! Form domain layer
//!
//! Maps each wizard step to the fields it shows and turns key edits on
//! those fields into [`FormUpdate`](crate::state::FormUpdate)s.

mod field;
mod step_form;

pub use field::{FieldId, FieldKind};
pub use step_form::{apply_edit, step_fields, FieldEdit, FieldOutcome};
