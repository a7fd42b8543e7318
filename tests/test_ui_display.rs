// ABOUTME: Test UI display of each wizard step, the step indicator, and the key hint bar

use cvwizard::app::AppState;
use cvwizard::components::LayoutComponent;
use cvwizard::models::{PersonalInfo, Profile};
use ratatui::{Terminal, backend::TestBackend};

fn render(state: &AppState) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut layout = LayoutComponent::new();

    terminal
        .draw(|frame| {
            layout.render(frame, state);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(ratatui::buffer::Cell::symbol).collect()
}

fn printable(content: &str) -> String {
    content
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .collect()
}

fn assert_shows(content: &str, expected: &str) {
    assert!(
        content.contains(expected),
        "Expected '{}' but content was: {}",
        expected,
        printable(content)
    );
}

fn state_with(profile: Option<Profile>) -> AppState {
    let mut state = AppState::default();
    let generation = state.profile_step.generation();
    state.apply_profile_check(generation, Ok(profile));
    state
}

fn ana() -> Profile {
    Profile {
        personal_info: Some(PersonalInfo {
            name: Some("Ana".to_string()),
            ..PersonalInfo::default()
        }),
        ..Profile::default()
    }
}

#[test]
fn test_loading_view() {
    let content = render(&AppState::default());

    assert_shows(&content, "Checking for existing profile...");
    assert!(!content.contains("Next: Job Description"));
}

#[test]
fn test_no_profile_shows_upload_skeleton() {
    let content = render(&state_with(None));

    assert_shows(&content, "Upload your documents to build your profile");
    assert_shows(&content, "Upload Documents");
    assert_shows(&content, "Profile Information");
    assert_shows(&content, "Next: Job Description");
    assert!(!content.contains("[Esc] Cancel"));
}

#[test]
fn test_existing_profile_view() {
    let content = render(&state_with(Some(ana())));

    assert_shows(&content, "Personal Information");
    assert_shows(&content, "Name: Ana");
    assert_shows(&content, "Use this Profile");
    assert_shows(&content, "Update Profile");
    assert!(!content.contains("Work Experience"));
    assert!(!content.contains("Email:"));
}

#[test]
fn test_updating_view_offers_cancel() {
    let mut state = state_with(Some(ana()));
    state.start_profile_update();

    let content = render(&state);

    assert_shows(&content, "Upload new documents to update your profile");
    assert_shows(&content, "Updating your profile will replace the existing one.");
    assert_shows(&content, "[Esc] Cancel");
    assert!(!content.contains("Name: Ana"));
}

#[test]
fn test_check_failure_banner() {
    let mut state = AppState::default();
    let generation = state.profile_step.generation();
    let err = serde_json::from_str::<Profile>("nope").unwrap_err();
    state.apply_profile_check(
        generation,
        Err(cvwizard::app::ProfileCheckError::Decode(err)),
    );

    let content = render(&state);

    assert_shows(&content, "Failed to check for existing profile");
    assert_shows(&content, "Upload Documents");
}

#[test]
fn test_later_steps_render_placeholders() {
    let mut state = state_with(Some(ana()));
    state.use_profile();
    let content = render(&state);
    assert_shows(&content, "Enter the job description to personalize your application");
    assert_shows(&content, "Job description input will be implemented here");

    state.advance();
    let content = render(&state);
    assert_shows(&content, "Download your personalized CV and cover letter");
    assert_shows(&content, "Download interface will be implemented here");
}

#[test]
fn test_step_indicator_and_bottom_bar() {
    let content = render(&state_with(None));

    assert_shows(&content, "User Profile");
    assert_shows(&content, "Job Description");
    assert_shows(&content, "Download");
    assert_shows(&content, "[?]help");
    assert_shows(&content, "[q]uit");
}

#[test]
fn test_help_overlay() {
    let mut state = state_with(None);
    state.toggle_help();

    let content = render(&state);

    assert_shows(&content, "Help - Press ? or Esc to close");
    assert_shows(&content, "Update profile");
}

#[test]
fn test_clicking_completed_step_in_indicator() {
    let mut state = state_with(Some(ana()));
    state.use_profile();

    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut layout = LayoutComponent::new();
    terminal.draw(|frame| layout.render(frame, &state)).unwrap();

    // The indicator row sits inside the one-cell margin
    let row = 1;
    let hits: Vec<_> = (0..120).filter_map(|col| layout.step_at(col, row)).collect();

    assert!(!hits.is_empty());
    assert!(hits.iter().all(|step| *step == cvwizard::models::Step::Profile));
}
