//! Wizard steps and the bounded step index

/// One screen of the registration wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Personal,
    Family,
    Generations,
    Contact,
    Documents,
    Review,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Personal,
        Step::Family,
        Step::Generations,
        Step::Contact,
        Step::Documents,
        Step::Review,
    ];

    /// Step for a 1-based index, clamped into range
    pub fn from_number(number: usize) -> Self {
        let index = number.clamp(1, Self::ALL.len()) - 1;
        Self::ALL[index]
    }

    /// 1-based position of the step
    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .map(|i| i + 1)
            .unwrap_or(1)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Family => "Family",
            Self::Generations => "Generations",
            Self::Contact => "Contact",
            Self::Documents => "Documents",
            Self::Review => "Review",
        }
    }

    /// Bilingual heading shown above the step
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Personal => "Personal Information / தனிப்பட்ட தகவல்",
            Self::Family => "Family Information / குடும்ப தகவல்",
            Self::Generations => "Generation Information / தலைமுறை தகவல்",
            Self::Contact => "Contact Information / தொடர்பு தகவல்",
            Self::Documents => "Documents & Photos / ஆவணங்கள் & புகைப்படங்கள்",
            Self::Review => "Review & Submit / சரிபார்த்து சமர்ப்பிக்கவும்",
        }
    }
}

/// Tracks the current step. Navigation clamps instead of failing and never
/// checks whether the current step is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepController {
    current: usize,
    total: usize,
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}

impl StepController {
    pub fn new() -> Self {
        Self {
            current: 1,
            total: Step::ALL.len(),
        }
    }

    /// Current 1-based step number
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn step(&self) -> Step {
        Step::from_number(self.current)
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    /// Move forward one step; stays on the last step
    pub fn advance(&mut self) {
        self.current = (self.current + 1).min(self.total);
    }

    /// Move back one step; stays on the first step
    pub fn retreat(&mut self) {
        self.current = self.current.saturating_sub(1).max(1);
    }

    /// Jump to a 1-based step, clamped into range
    pub fn go_to(&mut self, number: usize) {
        self.current = number.clamp(1, self.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_step() {
        let steps = StepController::new();
        assert_eq!(steps.current(), 1);
        assert_eq!(steps.step(), Step::Personal);
        assert!(steps.is_first());
    }

    #[test]
    fn test_advance_clamps_at_last() {
        let mut steps = StepController::new();
        for _ in 0..20 {
            steps.advance();
            assert!((1..=steps.total()).contains(&steps.current()));
        }
        assert!(steps.is_last());
        assert_eq!(steps.step(), Step::Review);
    }

    #[test]
    fn test_retreat_clamps_at_first() {
        let mut steps = StepController::new();
        steps.advance();
        for _ in 0..20 {
            steps.retreat();
            assert!((1..=steps.total()).contains(&steps.current()));
        }
        assert_eq!(steps.current(), 1);
    }

    #[test]
    fn test_interleaved_navigation_stays_in_bounds() {
        let mut steps = StepController::new();
        let moves = [true, false, false, true, true, true, true, true, true, true, false];
        for forward in moves {
            if forward {
                steps.advance();
            } else {
                steps.retreat();
            }
            assert!(steps.current() >= 1 && steps.current() <= steps.total());
        }
        assert_eq!(steps.current(), 5);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut steps = StepController::new();
        steps.go_to(0);
        assert_eq!(steps.current(), 1);
        steps.go_to(99);
        assert_eq!(steps.current(), 6);
        steps.go_to(3);
        assert_eq!(steps.step(), Step::Generations);
    }

    #[test]
    fn test_step_numbers_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_number(step.number()), step);
        }
    }
}
