// ABOUTME: Application state and the async driver that runs queued profile checks

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::profile_check::{check_profile_with_timeout, CheckOutcome};
use super::profile_step::ProfileStepState;
use super::wizard::WizardState;
use crate::config::{AppConfig, Theme};
use crate::models::Step;
use crate::store::ProfileStore;

/// Floor for the event loop tick so a zero setting can't spin the loop
const MIN_TICK_RATE_MS: u64 = 16;

/// Work queued by event handling and executed on the next [`App::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsyncAction {
    /// Run the existence check (and load) tagged with this generation
    CheckProfile(u64),
}

#[derive(Debug)]
pub struct AppState {
    pub wizard: WizardState,
    pub profile_step: ProfileStepState,
    pub theme: Theme,
    pub help_visible: bool,
    pub should_quit: bool,
    pub pending_async_action: Option<AsyncAction>,
    /// Advances every tick; drives the loading spinner
    pub spinner_frame: usize,
}

impl AppState {
    /// Mounted wizard at the profile step with its first check queued
    pub fn new(theme: Theme) -> Self {
        let mut state = Self {
            wizard: WizardState::new(),
            profile_step: ProfileStepState::new(),
            theme,
            help_visible: false,
            should_quit: false,
            pending_async_action: None,
            spinner_frame: 0,
        };
        state.mount_profile_step();
        state
    }

    pub const fn current_step(&self) -> Step {
        self.wizard.current_step()
    }

    pub fn advance(&mut self) {
        if self.wizard.advance() {
            self.on_step_entered();
        } else {
            debug!("Advance ignored at {}", self.current_step());
        }
    }

    pub fn retreat(&mut self) {
        if self.wizard.retreat() {
            self.on_step_entered();
        } else {
            debug!("Retreat ignored at {}", self.current_step());
        }
    }

    pub fn jump_to(&mut self, step: Step) {
        if self.wizard.jump_to(step) {
            self.on_step_entered();
        } else {
            debug!("Jump to future step {} ignored", step);
        }
    }

    /// "Use this profile": continue without further validation
    pub fn use_profile(&mut self) {
        if self.profile_step.displayed_profile().is_some() {
            info!("Using existing profile");
            self.advance();
        }
    }

    pub fn start_profile_update(&mut self) {
        if self.profile_step.start_update() {
            info!("Profile update started");
        }
    }

    pub fn cancel_profile_update(&mut self) {
        if let Some(generation) = self.profile_step.cancel_update() {
            info!("Profile update cancelled, re-checking stored profile");
            self.pending_async_action = Some(AsyncAction::CheckProfile(generation));
        }
    }

    pub fn apply_profile_check(&mut self, generation: u64, outcome: CheckOutcome) {
        if self.current_step() != Step::Profile {
            debug!("Profile check finished after leaving the profile step");
            return;
        }
        self.profile_step.apply_check(generation, outcome);
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    fn on_step_entered(&mut self) {
        info!("Entered step {}", self.current_step());
        if self.current_step() == Step::Profile {
            self.mount_profile_step();
        }
    }

    /// Reset the profile step and queue its existence check
    fn mount_profile_step(&mut self) {
        self.profile_step.reset();
        let generation = self.profile_step.begin_check();
        self.pending_async_action = Some(AsyncAction::CheckProfile(generation));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

type CheckMessage = (u64, CheckOutcome);

pub struct App {
    pub state: AppState,
    pub config: AppConfig,
    store: Arc<dyn ProfileStore>,
    check_tx: mpsc::UnboundedSender<CheckMessage>,
    check_rx: mpsc::UnboundedReceiver<CheckMessage>,
}

impl App {
    pub fn new(config: AppConfig, store: Arc<dyn ProfileStore>) -> Self {
        let (check_tx, check_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(config.theme()),
            config,
            store,
            check_tx,
            check_rx,
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.config.ui.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }

    /// Apply finished checks and start any queued async action.
    /// Must be called from within a tokio runtime.
    pub fn tick(&mut self) {
        self.state.spinner_frame = self.state.spinner_frame.wrapping_add(1);

        while let Ok((generation, outcome)) = self.check_rx.try_recv() {
            self.state.apply_profile_check(generation, outcome);
        }

        if let Some(action) = self.state.pending_async_action.take() {
            match action {
                AsyncAction::CheckProfile(generation) => self.spawn_profile_check(generation),
            }
        }
    }

    /// Block until the next in-flight profile check reports back, then apply it
    pub async fn wait_for_profile_check(&mut self) {
        match self.check_rx.recv().await {
            Some((generation, outcome)) => self.state.apply_profile_check(generation, outcome),
            None => warn!("Profile check channel closed"),
        }
    }

    fn spawn_profile_check(&self, generation: u64) {
        debug!("Starting profile check (generation {})", generation);
        let store = Arc::clone(&self.store);
        let timeout = self.config.profile.check_timeout();
        let tx = self.check_tx.clone();

        tokio::spawn(async move {
            let outcome = check_profile_with_timeout(store, timeout).await;
            if tx.send((generation, outcome)).is_err() {
                debug!("App dropped before profile check {} finished", generation);
            }
        });
    }
}
