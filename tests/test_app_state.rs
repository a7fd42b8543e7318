// ABOUTME: Unit tests for AppState to ensure wizard navigation and profile step mounting work correctly

use cvwizard::app::{AppState, AsyncAction, ProfileStatus};
use cvwizard::config::{AppConfig, Theme};
use cvwizard::models::Step;

fn create_test_state_at(step: Step) -> AppState {
    let mut state = AppState::default();
    let generation = state.profile_step.generation();
    state.apply_profile_check(generation, Ok(None));
    while state.current_step() < step {
        state.advance();
    }
    state
}

#[test]
fn test_app_state_creation() {
    let state = AppState::default();

    assert_eq!(state.current_step(), Step::Profile);
    assert_eq!(state.profile_step.status(), ProfileStatus::Loading);
    assert_eq!(
        state.pending_async_action,
        Some(AsyncAction::CheckProfile(state.profile_step.generation()))
    );
    assert!(!state.help_visible);
    assert!(!state.should_quit);
}

#[test]
fn test_advance_and_retreat_are_bounded() {
    let mut state = create_test_state_at(Step::Download);
    state.advance();
    assert_eq!(state.current_step(), Step::Download);

    state.retreat();
    state.retreat();
    assert_eq!(state.current_step(), Step::Profile);

    state.retreat();
    assert_eq!(state.current_step(), Step::Profile);
}

#[test]
fn test_jump_only_to_visited_steps() {
    for current in Step::ALL {
        for target in Step::ALL {
            let mut state = create_test_state_at(current);
            state.jump_to(target);

            let expected = if target <= current { target } else { current };
            assert_eq!(state.current_step(), expected, "jump {current} -> {target}");
        }
    }
}

#[test]
fn test_returning_to_profile_step_remounts_it() {
    let mut state = create_test_state_at(Step::JobDescription);
    let generation = state.profile_step.generation();
    state.pending_async_action = None;

    state.retreat();

    assert_eq!(state.profile_step.status(), ProfileStatus::Loading);
    assert!(state.profile_step.generation() > generation);
    assert_eq!(
        state.pending_async_action,
        Some(AsyncAction::CheckProfile(state.profile_step.generation()))
    );
}

#[test]
fn test_leaving_profile_step_does_not_queue_checks() {
    let mut state = create_test_state_at(Step::Profile);
    state.pending_async_action = None;

    state.advance();
    state.advance();

    assert_eq!(state.pending_async_action, None);
}

#[test]
fn test_theme_comes_from_config() {
    let config = AppConfig::from_toml_str("[ui.theme]\nprimary = \"#FF0000\"\n").unwrap();

    let state = AppState::new(config.theme());

    assert_eq!(state.theme.primary, ratatui::style::Color::Rgb(255, 0, 0));
    assert_eq!(state.theme.background, Theme::dark().background);
}
