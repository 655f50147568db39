//! # Plant Status - Crop Notebook Widget
//!
//! Shows the state of a growing plant as a notebook card in the terminal:
//! growth stage, time and watering checkboxes, fertilizer, projected harvest
//! and status notes. Control messages (`show`, `update`, `hide`) arrive as
//! newline-delimited JSON; a local countdown keeps the card live between
//! updates.

#[macro_use]
extern crate rust_i18n;

// Load locale files from `locales/` directory, default to English
i18n!("locales", fallback = "en");

mod app;
mod assets;
mod clock;
mod config;
pub mod constants;
mod controller;
mod models;
mod status;
mod transport;
mod ui;
mod utils;

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::panic;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{bail, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use constants::MAX_HIDE_TRANSITION_MS;
use transport::Source;

/// Plant Status - terminal crop notebook widget
#[derive(Parser, Debug)]
#[command(name = "plant-status", version, about = "A crop notebook card driven by JSON control messages")]
struct Cli {
    /// Read control messages from this file or FIFO ("-" for stdin)
    #[arg(long, short = 'i', value_name = "PATH")]
    input: Option<String>,

    /// Show a sample plant on startup
    #[arg(long)]
    demo: bool,

    /// Color theme (default, parchment, gruvbox, nord, or a custom theme file name)
    #[arg(long, short = 't')]
    theme: Option<String>,

    /// UI language (en, pt-BR)
    #[arg(long, short = 'l', value_name = "LANG")]
    lang: Option<String>,

    /// Fade-out duration after a hide, in milliseconds
    #[arg(long, value_name = "MS")]
    fade_ms: Option<u64>,
}

/// Send logs to `path`; the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(EnvFilter::from_default_env().add_directive("plant_status=info".parse()?))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load and apply CLI overrides to config
    let mut config = Config::load();
    if let Some(ms) = cli.fade_ms {
        config.hide_transition_ms = ms.min(MAX_HIDE_TRANSITION_MS);
    }
    if let Some(ref theme_name) = cli.theme {
        config.theme = theme_name.clone();
    }
    if let Some(ref lang) = cli.lang {
        config.lang = lang.clone();
    }

    // Set UI language (CLI > config > default "en")
    rust_i18n::set_locale(config.resolved_lang());

    if let Err(e) = init_logging(&config.log_file) {
        eprintln!(
            "Warning: cannot log to {}: {}. Logging disabled.",
            config.log_file.display(),
            e
        );
    }

    // A demo without an explicit input needs no reader at all
    let source = match (&cli.input, cli.demo) {
        (None, true) => None,
        (input, _) => Some(Source::from_arg(input.as_deref())),
    };
    if matches!(source, Some(Source::Stdin)) && io::stdin().is_terminal() {
        bail!("stdin is a terminal: pipe control messages in, pass --input <PATH>, or use --demo");
    }

    // Restore the terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::info!(
        fade_ms = config.hide_transition_ms,
        theme = %config.theme,
        lang = config.resolved_lang(),
        "starting"
    );

    let mut app = app::App::new(&config, source, cli.demo)?;
    let result = app.run().await;
    if let Err(e) = &result {
        tracing::error!("Application error: {}", e);
    }
    result
}
