//! Application state definitions

use super::forms::{apply_edit, step_fields, FieldEdit, FieldId, FieldOutcome};
use super::wizard::Wizard;
use std::collections::VecDeque;

/// Work the event loop runs after the next draw, so the screen can show
/// progress before a slow operation blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    SaveDocument,
    Submit,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub wizard: Wizard,

    /// Focused field within the current step
    pub active_field: usize,
    /// First summary line shown on the review step
    pub review_scroll: u16,

    // Feedback
    pub errors: VecDeque<String>,
    pub status_message: Option<String>,
    pub pending: Option<PendingAction>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            wizard: Wizard::new(),
            ..Default::default()
        }
    }

    /// Fields shown on the current step
    pub fn fields(&self) -> Vec<FieldId> {
        step_fields(self.wizard.step(), self.wizard.form())
    }

    pub fn active_field_id(&self) -> Option<FieldId> {
        self.fields().get(self.active_field).copied()
    }

    /// Move to next form field
    pub fn next_field(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.active_field = (self.active_field + 1) % count;
        }
    }

    /// Move to previous form field
    pub fn prev_field(&mut self) {
        let count = self.fields().len();
        if count == 0 {
            return;
        }
        if self.active_field == 0 {
            self.active_field = count - 1;
        } else {
            self.active_field -= 1;
        }
    }

    /// Keep the focus on a real field after the field list shrank
    pub fn clamp_active_field(&mut self) {
        let count = self.fields().len();
        if self.active_field >= count {
            self.active_field = count.saturating_sub(1);
        }
    }

    pub fn next_step(&mut self) {
        self.wizard.next_step();
        self.reset_focus();
    }

    pub fn prev_step(&mut self) {
        self.wizard.prev_step();
        self.reset_focus();
    }

    pub fn go_to_step(&mut self, number: usize) {
        self.wizard.go_to_step(number);
        self.reset_focus();
    }

    fn reset_focus(&mut self) {
        self.active_field = 0;
        self.review_scroll = 0;
    }

    pub fn scroll_review(&mut self, down: bool) {
        self.review_scroll = if down {
            self.review_scroll.saturating_add(1)
        } else {
            self.review_scroll.saturating_sub(1)
        };
    }

    /// Apply `edit` to the focused field. Review actions are queued in
    /// [`AppState::pending`] for the event loop.
    pub fn edit_active_field(&mut self, edit: FieldEdit) {
        let Some(field) = self.active_field_id() else {
            return;
        };
        match apply_edit(field, self.wizard.form(), edit) {
            FieldOutcome::Update(update) => {
                self.wizard.update(update);
                self.clamp_active_field();
            }
            FieldOutcome::SaveDocument => self.pending = Some(PendingAction::SaveDocument),
            FieldOutcome::Submit => {
                // Marked before the request starts so the next frame shows it
                if self.wizard.begin_submit() {
                    self.pending = Some(PendingAction::Submit);
                } else {
                    self.status_message = Some("Submission already in progress".to_string());
                }
            }
            FieldOutcome::Unchanged => {}
        }
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push_back(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Oldest error still waiting to be acknowledged
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Start over with an empty form after a successful submission
    pub fn reset(&mut self) {
        self.wizard.reset();
        self.reset_focus();
    }
}
