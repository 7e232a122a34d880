//! RABT Onboard - client onboarding for RABT Marketing
//!
//! A Ratatui-based multi-step onboarding form that stores each submission
//! in Supabase and then notifies the team, plus a small HTTP server that
//! implements the notification endpoint.

mod app;
mod catalog;
mod cli;
mod config;
mod notify_endpoint;
mod platform;
mod presenter;
mod services;
mod session;
mod state;
mod submission;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Command};
use config::AppConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use services::{FunctionNotifier, SupabaseStore};
use session::OnboardingSession;
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use submission::SubmissionOrchestrator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "rabt-onboard.log";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => AppConfig::load()?,
    }
    .with_env();

    match cli.command() {
        Command::Tui => {
            // Log setup failures are shown in the UI instead of aborting
            let log_error = init_file_logging().err();
            run_tui(config, log_error).await
        }
        Command::ServeNotify { addr } => {
            init_stderr_logging();
            let addr = addr.unwrap_or_else(|| config.listen_addr());
            notify_endpoint::serve(&addr).await
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| "rabt_onboard=info".into())
}

fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Log to a file so output never lands on the alternate screen
fn init_file_logging() -> Result<()> {
    let Some(dir) = AppConfig::log_dir() else {
        // No home directory: keep the terminal clean and drop the logs
        tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_subscriber::fmt::layer().with_writer(io::sink))
            .init();
        return Ok(());
    };

    fs::create_dir_all(&dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

async fn run_tui(config: AppConfig, log_error: Option<anyhow::Error>) -> Result<()> {
    let resolved = config.resolve().context(
        "set RABT_SUPABASE_URL and RABT_SUPABASE_ANON_KEY, or add them to the config file",
    )?;

    let client = reqwest::Client::builder()
        .timeout(resolved.request_timeout)
        .build()?;
    let orchestrator = SubmissionOrchestrator::new(
        Arc::new(SupabaseStore::from_config(client.clone(), &resolved)),
        Arc::new(FunctionNotifier::from_config(client, &resolved)),
        resolved.request_timeout,
    );
    let mut app = App::new(OnboardingSession::new(Arc::new(orchestrator)));
    if let Some(err) = log_error {
        app.push_error(format!("Logging is disabled: {err}"));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick().await;

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll faster while a submission is running so the outcome shows promptly
        let poll_duration = if app.session.is_submitting() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }
                app.handle_key(key);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
