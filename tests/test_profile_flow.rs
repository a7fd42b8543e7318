// ABOUTME: End-to-end profile step flows driven through App with a mocked profile store

use async_trait::async_trait;
use cvwizard::app::{App, ProfileStatus, CHECK_FAILED_MESSAGE};
use cvwizard::config::AppConfig;
use cvwizard::models::{Profile, Step};
use cvwizard::store::{ProfileStore, StoreError};
use mockall::{mock, Sequence};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

mock! {
    pub Store {}

    #[async_trait]
    impl ProfileStore for Store {
        async fn profile_exists(&self) -> Result<bool, StoreError>;
        async fn load_profile(&self, path: Option<PathBuf>) -> Result<String, StoreError>;
        async fn save_profile(&self, contents: String, path: Option<PathBuf>) -> Result<(), StoreError>;
        fn profile_path(&self) -> PathBuf;
    }
}

const ANA_PROFILE: &str = r#"{"personalInfo":{"name":"Ana"}}"#;

fn read_error() -> StoreError {
    StoreError::Read {
        path: PathBuf::from("profile.json"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    }
}

fn app_with(store: MockStore) -> App {
    App::new(AppConfig::default(), Arc::new(store))
}

/// Store whose existence check outlasts any configured timeout
struct StalledStore;

#[async_trait]
impl ProfileStore for StalledStore {
    async fn profile_exists(&self) -> Result<bool, StoreError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(true)
    }

    async fn load_profile(&self, _path: Option<PathBuf>) -> Result<String, StoreError> {
        Ok(ANA_PROFILE.to_string())
    }

    async fn save_profile(&self, _contents: String, _path: Option<PathBuf>) -> Result<(), StoreError> {
        Ok(())
    }

    fn profile_path(&self) -> PathBuf {
        PathBuf::from("profile.json")
    }
}

/// Start the queued check and apply its result
async fn settle(app: &mut App) {
    app.tick();
    app.wait_for_profile_check().await;
}

#[tokio::test]
async fn test_no_profile_shows_upload_view() {
    let mut store = MockStore::new();
    store.expect_profile_exists().times(1).returning(|| Ok(false));
    store.expect_load_profile().never();

    let mut app = app_with(store);
    assert_eq!(app.state.profile_step.status(), ProfileStatus::Loading);

    settle(&mut app).await;

    assert_eq!(app.state.profile_step.status(), ProfileStatus::NoProfile);
    assert_eq!(app.state.profile_step.error, None);
    assert!(!app.state.profile_step.next_enabled());
}

#[tokio::test]
async fn test_existing_profile_is_loaded_from_standard_location() {
    let mut store = MockStore::new();
    store.expect_profile_exists().returning(|| Ok(true));
    store
        .expect_load_profile()
        .withf(|path| path.is_none())
        .times(1)
        .returning(|_| Ok(ANA_PROFILE.to_string()));

    let mut app = app_with(store);
    settle(&mut app).await;

    let profile = app.state.profile_step.displayed_profile().cloned();
    let name = profile
        .and_then(|p| p.personal_info)
        .and_then(|info| info.name);
    assert_eq!(name.as_deref(), Some("Ana"));
    assert_eq!(app.state.profile_step.status(), ProfileStatus::HasProfile);
}

#[tokio::test]
async fn test_undecodable_profile_reports_failure() {
    let mut store = MockStore::new();
    store.expect_profile_exists().returning(|| Ok(true));
    store
        .expect_load_profile()
        .returning(|_| Ok("{ not json".to_string()));

    let mut app = app_with(store);
    settle(&mut app).await;

    assert_eq!(app.state.profile_step.status(), ProfileStatus::NoProfile);
    assert_eq!(
        app.state.profile_step.error.as_deref(),
        Some(CHECK_FAILED_MESSAGE)
    );
}

#[tokio::test]
async fn test_failure_banner_clears_when_step_is_reentered() {
    let mut seq = Sequence::new();
    let mut store = MockStore::new();
    store
        .expect_profile_exists()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Err(read_error()));
    store
        .expect_profile_exists()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(false));

    let mut app = app_with(store);
    settle(&mut app).await;
    assert_eq!(
        app.state.profile_step.error.as_deref(),
        Some(CHECK_FAILED_MESSAGE)
    );

    // Leave and come back through the breadcrumb
    app.state.wizard.advance();
    app.state.jump_to(Step::Profile);
    assert_eq!(app.state.profile_step.error, None);
    assert_eq!(app.state.profile_step.status(), ProfileStatus::Loading);

    settle(&mut app).await;
    assert_eq!(app.state.profile_step.status(), ProfileStatus::NoProfile);
    assert_eq!(app.state.profile_step.error, None);
}

#[tokio::test]
async fn test_cancel_update_returns_to_existing_profile() {
    let mut store = MockStore::new();
    store.expect_profile_exists().times(2).returning(|| Ok(true));
    store
        .expect_load_profile()
        .times(2)
        .returning(|_| Ok(ANA_PROFILE.to_string()));

    let mut app = app_with(store);
    settle(&mut app).await;
    let before = app.state.profile_step.profile.clone();

    app.state.start_profile_update();
    assert_eq!(app.state.profile_step.status(), ProfileStatus::Updating);
    assert_eq!(app.state.profile_step.profile, None);

    app.state.cancel_profile_update();
    settle(&mut app).await;

    assert_eq!(app.state.profile_step.status(), ProfileStatus::HasProfile);
    assert_eq!(app.state.profile_step.profile, before);
}

#[tokio::test]
async fn test_result_arriving_after_leaving_step_is_ignored() {
    let mut store = MockStore::new();
    store.expect_profile_exists().returning(|| Ok(true));
    store
        .expect_load_profile()
        .returning(|_| Ok(ANA_PROFILE.to_string()));

    let mut app = app_with(store);
    app.tick();
    app.state.wizard.advance();
    app.wait_for_profile_check().await;

    assert_eq!(app.state.current_step(), Step::JobDescription);
    assert!(app.state.profile_step.loading);
    assert_eq!(app.state.profile_step.profile, None::<Profile>);
}

#[tokio::test]
async fn test_timed_out_check_shows_failure_banner() {
    let mut config = AppConfig::default();
    config.profile.check_timeout_secs = 1;
    let mut app = App::new(config, Arc::new(StalledStore));

    settle(&mut app).await;

    assert_eq!(app.state.profile_step.status(), ProfileStatus::NoProfile);
    assert_eq!(
        app.state.profile_step.error.as_deref(),
        Some(CHECK_FAILED_MESSAGE)
    );
}

#[test]
fn test_zero_tick_rate_is_clamped() {
    let mut config = AppConfig::default();
    config.ui.tick_rate_ms = 0;

    let app = App::new(config, Arc::new(MockStore::new()));

    assert!(app.tick_rate() >= Duration::from_millis(1));
}
