// ABOUTME: Event handling system for keyboard input and wizard actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use super::profile_step::ProfileStatus;
use super::AppState;
use crate::models::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    // Wizard navigation
    Advance,
    Retreat,
    JumpTo(Step), // Step indicator (keys 1-3 or mouse click)
    // Profile step actions
    UseProfile,    // Continue with the loaded profile
    ScrollProfileUp,
    ScrollProfileDown,
    UpdateProfile, // Discard loaded profile and show the upload skeleton
    CancelUpdate,  // Leave the update flow and re-check the store
    ProfileNext,   // Disabled "Next: Job Description" on the upload skeleton
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Some(AppEvent::Quit);
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                KeyCode::Char('q') => Some(AppEvent::Quit),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Char('q') => return Some(AppEvent::Quit),
            KeyCode::Char('?') => return Some(AppEvent::ToggleHelp),
            KeyCode::Char(c @ '1'..='3') => {
                let number = c.to_digit(10).and_then(|d| u8::try_from(d).ok());
                return number.and_then(Step::from_number).map(AppEvent::JumpTo);
            }
            _ => {}
        }

        match state.current_step() {
            Step::Profile => Self::handle_profile_key(key_event, state),
            Step::JobDescription => match key_event.code {
                KeyCode::Enter | KeyCode::Right | KeyCode::Char('n') => Some(AppEvent::Advance),
                KeyCode::Left | KeyCode::Backspace | KeyCode::Char('b') => Some(AppEvent::Retreat),
                _ => None,
            },
            Step::Download => match key_event.code {
                KeyCode::Left | KeyCode::Backspace | KeyCode::Char('b') => Some(AppEvent::Retreat),
                _ => None,
            },
        }
    }

    fn handle_profile_key(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        match state.profile_step.status() {
            ProfileStatus::Loading => None,
            ProfileStatus::HasProfile => match key_event.code {
                KeyCode::Enter => Some(AppEvent::UseProfile),
                KeyCode::Char('u') => Some(AppEvent::UpdateProfile),
                KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::ScrollProfileUp),
                KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::ScrollProfileDown),
                _ => None,
            },
            ProfileStatus::Updating => match key_event.code {
                KeyCode::Esc | KeyCode::Char('c') => Some(AppEvent::CancelUpdate),
                KeyCode::Enter | KeyCode::Right => Some(AppEvent::ProfileNext),
                _ => None,
            },
            ProfileStatus::NoProfile => match key_event.code {
                KeyCode::Enter | KeyCode::Right => Some(AppEvent::ProfileNext),
                _ => None,
            },
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!("Processing {:?}", event);
        match event {
            AppEvent::Quit => {
                info!("Quit requested");
                state.should_quit = true;
            }
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::Advance => state.advance(),
            AppEvent::Retreat => state.retreat(),
            AppEvent::JumpTo(step) => state.jump_to(step),
            AppEvent::UseProfile => state.use_profile(),
            AppEvent::ScrollProfileUp => state.profile_step.scroll_up(),
            AppEvent::ScrollProfileDown => state.profile_step.scroll_down(),
            AppEvent::UpdateProfile => state.start_profile_update(),
            AppEvent::CancelUpdate => state.cancel_profile_update(),
            AppEvent::ProfileNext => {
                if state.profile_step.next_enabled() {
                    state.advance();
                } else {
                    debug!("Next is disabled until document extraction is available");
                }
            }
        }
    }
}
