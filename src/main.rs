// ABOUTME: Main entry point for cvwizard with TUI and CLI support
//
// Binary: cvwizard
// Usage: cvwizard [COMMAND]
// - No command: launches the wizard TUI
// - profile path: print where the profile is stored
// - profile show: print the stored profile
// - profile import: validate and store a profile JSON file

#![allow(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, prelude::*};
use std::{
    io::{self, IsTerminal},
    sync::Arc,
    time::{Duration, Instant},
};
use tracing::{info, warn};

use cvwizard::app::{App, AppEvent, EventHandler};
use cvwizard::cli::{self, Commands, ProfileCommands};
use cvwizard::components::LayoutComponent;
use cvwizard::config::AppConfig;
use cvwizard::store::{self, FileProfileStore, ProfileStore};

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let args = cli::Cli::parse();

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {:#}", e);
        AppConfig::default()
    });
    let store = FileProfileStore::resolve(config.profile.path.as_deref())?;

    let result = match args.command {
        Some(Commands::Profile(ProfileCommands::Path)) => {
            cli::profile::path(&store);
            Ok(())
        }
        Some(Commands::Profile(ProfileCommands::Show(show_args))) => {
            cli::profile::show(&store, show_args, args.format).await
        }
        Some(Commands::Profile(ProfileCommands::Import(import_args))) => {
            cli::profile::import(&store, import_args).await
        }

        // TUI mode (explicit or default)
        Some(Commands::Tui) | None => {
            info!("Starting wizard with profile at {}", store.profile_path().display());
            let mut app = App::new(config, Arc::new(store));
            let mut layout = LayoutComponent::new();

            // Flush pending terminal events so stray keypresses don't reach the first step
            while event::poll(Duration::from_millis(10)).unwrap_or(false) {
                let _ = event::read();
            }

            run_tui(&mut app, &mut layout).await
        }
    };

    if result.is_err() {
        cleanup_terminal();
    }

    result
}

async fn run_tui(app: &mut App, layout: &mut LayoutComponent) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    if let Err(e) = crossterm::terminal::is_raw_mode_enabled() {
        eprintln!("Cannot check terminal raw mode: {}", e);
        return Err(anyhow::anyhow!("Terminal not compatible: {}", e));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui_loop(app, layout, &mut terminal).await;

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

async fn run_tui_loop(
    app: &mut App,
    layout: &mut LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let tick_rate = app.tick_rate();
    let mut last_tick = Instant::now();

    // Ignore key events for the first 100ms so buffered keys can't skip the profile step
    let startup_time = Instant::now();
    const STARTUP_GUARD_MS: u64 = 100;

    // Kick off the profile check queued when the first step mounted
    app.tick();

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            let app_event = match event::read()? {
                Event::Key(key_event) => {
                    if startup_time.elapsed() < Duration::from_millis(STARTUP_GUARD_MS) {
                        tracing::debug!(
                            "Ignoring key event {:?} during startup guard period",
                            key_event.code
                        );
                        continue;
                    }
                    EventHandler::handle_key_event(key_event, &app.state)
                }
                Event::Mouse(mouse_event) => match mouse_event.kind {
                    MouseEventKind::Down(MouseButton::Left) => layout
                        .step_at(mouse_event.column, mouse_event.row)
                        .map(AppEvent::JumpTo),
                    _ => None,
                },
                _ => None,
            };

            if let Some(app_event) = app_event {
                EventHandler::process_event(app_event, &mut app.state);

                // Start a queued profile check right away instead of waiting for the tick
                if app.state.pending_async_action.is_some() {
                    app.tick();
                    last_tick = Instant::now();
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if app.state.should_quit {
            break;
        }
    }

    Ok(())
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use std::path::PathBuf;
    use tracing_subscriber::prelude::*;

    let log_dir = store::file::data_dir()
        .map(|dir| dir.join("logs"))
        .unwrap_or_else(|_| PathBuf::from(".cvwizard/logs"));

    let _ = std::fs::create_dir_all(&log_dir);

    let log_file = log_dir.join(format!(
        "cvwizard-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    // Logging is best effort; the wizard still runs without a log file
    let file = match OpenOptions::new().create(true).append(true).open(&log_file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to create log file {}: {}", log_file.display(), e);
            return;
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cvwizard=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Restore the terminal before reporting
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
