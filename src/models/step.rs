// ABOUTME: The three ordinal wizard stages and their labels

use std::fmt;

/// A wizard stage. Discriminants are the 1-based ordinals shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    #[default]
    Profile = 1,
    JobDescription = 2,
    Download = 3,
}

impl Step {
    /// All steps in order
    pub const ALL: [Self; 3] = [Self::Profile, Self::JobDescription, Self::Download];

    pub const FIRST: Self = Self::Profile;
    pub const LAST: Self = Self::Download;

    /// Get the step number (1-indexed for display)
    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Profile),
            2 => Some(Self::JobDescription),
            3 => Some(Self::Download),
            _ => None,
        }
    }

    /// Get the next step, if any
    pub const fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// Get the previous step, if any
    pub const fn previous(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    /// Label used by the step indicator
    pub const fn title(self) -> &'static str {
        match self {
            Self::Profile => "User Profile",
            Self::JobDescription => "Job Description",
            Self::Download => "Download",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title(), self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation() {
        assert_eq!(Step::Profile.next(), Some(Step::JobDescription));
        assert_eq!(Step::Profile.previous(), None);
        assert_eq!(Step::Download.next(), None);
        assert_eq!(Step::Download.previous(), Some(Step::JobDescription));
    }

    #[test]
    fn test_step_numbers() {
        for (idx, step) in Step::ALL.iter().enumerate() {
            assert_eq!(usize::from(step.number()), idx + 1);
            assert_eq!(Step::from_number(step.number()), Some(*step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(4), None);
    }

    #[test]
    fn test_ordering_follows_ordinal() {
        assert!(Step::Profile < Step::JobDescription);
        assert!(Step::JobDescription < Step::Download);
        assert_eq!(Step::default(), Step::Profile);
    }
}
