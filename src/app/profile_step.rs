// ABOUTME: State machine for the profile step: loading, no profile, existing profile, updating
// Check failures are an overlay; they never replace the profile-or-no-profile branch

use tracing::{debug, error};

use super::profile_check::CheckOutcome;
use crate::models::Profile;

/// User-visible message for any failed existence check, load, or decode
pub const CHECK_FAILED_MESSAGE: &str = "Failed to check for existing profile";

/// Which skeleton the profile step renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileStatus {
    Loading,
    NoProfile,
    HasProfile,
    Updating,
}

#[derive(Debug, Clone)]
pub struct ProfileStepState {
    pub loading: bool,
    pub profile: Option<Profile>,
    pub is_updating: bool,
    pub error: Option<String>,
    /// Vertical scroll offset of the read-only profile view
    pub scroll: u16,
    generation: u64,
}

impl ProfileStepState {
    /// Fresh state for a newly mounted step; loading until the first check lands
    pub const fn new() -> Self {
        Self {
            loading: true,
            profile: None,
            is_updating: false,
            error: None,
            scroll: 0,
            generation: 0,
        }
    }

    /// Back to the freshly mounted state. The generation keeps counting so results
    /// from checks started before the reset are still recognised as stale.
    pub fn reset(&mut self) {
        *self = Self {
            generation: self.generation,
            ..Self::new()
        };
    }

    pub fn status(&self) -> ProfileStatus {
        if self.loading {
            ProfileStatus::Loading
        } else if self.is_updating {
            ProfileStatus::Updating
        } else if self.profile.is_some() {
            ProfileStatus::HasProfile
        } else {
            ProfileStatus::NoProfile
        }
    }

    /// The profile shown read-only, if the step is in the existing-profile view
    pub fn displayed_profile(&self) -> Option<&Profile> {
        match self.status() {
            ProfileStatus::HasProfile => self.profile.as_ref(),
            _ => None,
        }
    }

    /// Forward navigation stays disabled until document extraction exists
    pub const fn next_enabled(&self) -> bool {
        false
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new check, returning the generation its result must carry
    pub fn begin_check(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Apply a finished check. Returns false if a newer check superseded it.
    pub fn apply_check(&mut self, generation: u64, outcome: CheckOutcome) -> bool {
        if generation != self.generation {
            debug!(
                "Dropping stale profile check result (generation {}, current {})",
                generation, self.generation
            );
            return false;
        }

        match outcome {
            Ok(profile) => self.profile = profile,
            Err(e) => {
                error!("Error checking profile: {}", e);
                self.error = Some(CHECK_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
        true
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.displayed_profile().is_some() {
            self.scroll = self.scroll.saturating_add(1);
        }
    }

    /// "Update profile": discard the snapshot and show the upload skeleton
    pub fn start_update(&mut self) -> bool {
        if self.status() != ProfileStatus::HasProfile {
            return false;
        }
        self.is_updating = true;
        self.profile = None;
        self.scroll = 0;
        true
    }

    /// "Cancel" from the update flow. Returns the generation of the re-check to run.
    pub fn cancel_update(&mut self) -> Option<u64> {
        if self.status() != ProfileStatus::Updating {
            return None;
        }
        self.is_updating = false;
        Some(self.begin_check())
    }
}

impl Default for ProfileStepState {
    fn default() -> Self {
        Self::new()
    }
}
