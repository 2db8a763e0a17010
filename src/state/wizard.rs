//! The registration wizard: step position, accumulated form and progress

use super::completion;
use super::registration::FormState;
use super::steps::{Step, StepController};
use super::update::FormUpdate;

/// Owns everything the registrant has entered. All edits go through
/// [`Wizard::update`] so the cached completion never goes stale.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    steps: StepController,
    form: FormState,
    completion: u8,
    is_submitting: bool,
}

impl Wizard {
    pub fn new() -> Self {
        let form = FormState::default();
        Self {
            steps: StepController::new(),
            completion: completion::estimate(&form),
            form,
            is_submitting: false,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn steps(&self) -> &StepController {
        &self.steps
    }

    pub fn step(&self) -> Step {
        self.steps.step()
    }

    /// Completion percentage after the most recent update
    pub fn completion(&self) -> u8 {
        self.completion
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Merge a partial update into the form and refresh the completion
    pub fn update(&mut self, update: FormUpdate) {
        if update.is_empty() {
            return;
        }
        update.merge_into(&mut self.form);
        debug_assert!(
            self.form.invariant_violations().is_empty(),
            "form invariants broken: {:?}",
            self.form.invariant_violations()
        );
        self.completion = completion::estimate(&self.form);
    }

    pub fn next_step(&mut self) {
        self.steps.advance();
    }

    pub fn prev_step(&mut self) {
        self.steps.retreat();
    }

    pub fn go_to_step(&mut self, number: usize) {
        self.steps.go_to(number);
    }

    /// Mark a submission as started. Returns false if one is already running.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        self.is_submitting = true;
        true
    }

    pub fn end_submit(&mut self) {
        self.is_submitting = false;
    }

    /// Back to an empty form on the first step
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_wizard_is_empty() {
        let wizard = Wizard::new();
        assert_eq!(wizard.step(), Step::Personal);
        assert_eq!(wizard.completion(), 0);
        assert_eq!(wizard.form(), &FormState::default());
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn test_update_refreshes_completion() {
        let mut wizard = Wizard::new();
        wizard.update(FormUpdate {
            name: Some("Selvam".to_string()),
            age: Some("45".to_string()),
            blood_group: Some("B+".to_string()),
            ..Default::default()
        });
        assert_eq!(wizard.form().name, "Selvam");
        // 3 of 12
        assert_eq!(wizard.completion(), 25);
    }

    #[test]
    fn test_update_only_touches_present_fields() {
        let mut wizard = Wizard::new();
        wizard.update(FormUpdate {
            name: Some("Selvam".to_string()),
            ..Default::default()
        });
        wizard.update(FormUpdate {
            cast: Some("Kongu".to_string()),
            ..Default::default()
        });
        assert_eq!(wizard.form().name, "Selvam");
        assert_eq!(wizard.form().cast, "Kongu");
    }

    #[test]
    fn test_submit_guard() {
        let mut wizard = Wizard::new();
        assert!(wizard.begin_submit());
        assert!(!wizard.begin_submit());
        wizard.end_submit();
        assert!(wizard.begin_submit());
    }

    #[test]
    fn test_reset_clears_form_and_step() {
        let mut wizard = Wizard::new();
        wizard.update(FormUpdate::has_children(true));
        wizard.next_step();
        wizard.next_step();
        wizard.reset();
        assert_eq!(wizard.step(), Step::Personal);
        assert!(!wizard.form().has_children);
        assert_eq!(wizard.completion(), 0);
    }

    #[test]
    fn test_step_navigation_delegates() {
        let mut wizard = Wizard::new();
        wizard.prev_step();
        assert_eq!(wizard.steps().current(), 1);
        wizard.go_to_step(6);
        assert_eq!(wizard.step(), Step::Review);
        wizard.next_step();
        assert_eq!(wizard.steps().current(), 6);
    }
}
