// ABOUTME: Main application structure and state management for the wizard TUI

pub mod events;
pub mod profile_check;
pub mod profile_step;
pub mod state;
pub mod wizard;

pub use events::{AppEvent, EventHandler};
pub use profile_check::{CheckOutcome, ProfileCheckError};
pub use profile_step::{ProfileStatus, ProfileStepState, CHECK_FAILED_MESSAGE};
pub use state::{App, AppState, AsyncAction};
pub use wizard::WizardState;
