// ABOUTME: Wizard container navigation over the three bounded steps

use crate::models::Step;

/// Owns the current step. All transitions are total over `1..=3`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WizardState {
    current_step: Step,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn current_step(&self) -> Step {
        self.current_step
    }

    /// Move forward one step. Returns false at the last step.
    pub fn advance(&mut self) -> bool {
        match self.current_step.next() {
            Some(next) => {
                self.current_step = next;
                true
            }
            None => false,
        }
    }

    /// Move back one step. Returns false at the first step.
    pub fn retreat(&mut self) -> bool {
        match self.current_step.previous() {
            Some(previous) => {
                self.current_step = previous;
                true
            }
            None => false,
        }
    }

    /// Jump to an already-visited step (or the current one).
    /// Future steps are silently ignored and false is returned.
    pub fn jump_to(&mut self, step: Step) -> bool {
        if step <= self.current_step {
            self.current_step = step;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(step: Step) -> WizardState {
        WizardState { current_step: step }
    }

    #[test]
    fn test_starts_at_profile() {
        assert_eq!(WizardState::new().current_step(), Step::Profile);
    }

    #[test]
    fn test_jump_to_all_pairs() {
        for current in Step::ALL {
            for target in Step::ALL {
                let mut wizard = at(current);
                let applied = wizard.jump_to(target);

                if target <= current {
                    assert!(applied);
                    assert_eq!(wizard.current_step(), target);
                } else {
                    assert!(!applied);
                    assert_eq!(wizard.current_step(), current);
                }
            }
        }
    }

    #[test]
    fn test_advance_stops_at_last_step() {
        let mut wizard = WizardState::new();
        assert!(wizard.advance());
        assert!(wizard.advance());
        for _ in 0..5 {
            assert!(!wizard.advance());
            assert_eq!(wizard.current_step(), Step::Download);
        }
    }

    #[test]
    fn test_retreat_stops_at_first_step() {
        let mut wizard = at(Step::Download);
        assert!(wizard.retreat());
        assert!(wizard.retreat());
        for _ in 0..5 {
            assert!(!wizard.retreat());
            assert_eq!(wizard.current_step(), Step::Profile);
        }
    }
}
