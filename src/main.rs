//! hpk - present HTML slide decks in the terminal.
//!
//! # Usage
//!
//! ```bash
//! hpk talk.html
//! hpk talk.html#4
//! hpk --watch --boundary clamp talk.html
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hpk::app::App;
use hpk::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use hpk::presentation::fragment::split_fragment;
use hpk::presentation::{
    BoundaryPolicy, DEFAULT_HIDE_TIMEOUT, DEFAULT_PIN_DURATION, NavigationOverlay, Platform,
};

/// Present an HTML slide deck in the terminal
#[derive(Parser, Debug)]
#[command(name = "hpk", version, about, long_about = None)]
struct Cli {
    /// Deck to show; `deck.html#3` starts presenting at slide 3
    #[arg(value_name = "FILE")]
    deck: String,

    /// Start presenting at this slide (1-based)
    #[arg(long, value_name = "N")]
    slide: Option<usize>,

    /// Watch the deck for changes and auto-reload
    #[arg(short, long)]
    watch: bool,

    /// What next/prev do past the last or first slide
    #[arg(long, value_enum)]
    boundary: Option<BoundaryPolicy>,

    /// Milliseconds the navigation bar stays up after the pointer stops
    #[arg(long, value_name = "MS")]
    nav_timeout: Option<u64>,

    /// Milliseconds the navigation bar stays pinned when a presentation starts
    #[arg(long, value_name = "MS")]
    pin: Option<u64>,

    /// Never show the navigation bar
    #[arg(long)]
    no_nav: bool,

    /// Do not capture the mouse
    #[arg(long)]
    no_mouse: bool,

    /// Write debug logs to a file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults in the global config
    #[arg(long)]
    save: bool,

    /// Clear saved defaults in the global config
    #[arg(long)]
    clear: bool,
}

fn init_logging(debug_log: Option<&Path>) -> Result<()> {
    let Some(path) = debug_log else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .init();
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create debug log {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hpk=debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn navigation_for(flags: &ConfigFlags) -> NavigationOverlay {
    if flags.no_nav {
        return NavigationOverlay::disabled();
    }
    NavigationOverlay::new(
        flags
            .nav_timeout_ms
            .map_or(DEFAULT_HIDE_TIMEOUT, Duration::from_millis),
        flags
            .pin_ms
            .map_or(DEFAULT_PIN_DURATION, Duration::from_millis),
    )
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.debug_log.as_deref())?;
    tracing::debug!(?effective, "effective flags");

    let (deck_path, fragment) = split_fragment(&cli.deck);
    let deck_path = PathBuf::from(deck_path);
    if !deck_path.exists() {
        anyhow::bail!("File not found: {}", deck_path.display());
    }
    let start_fragment = cli
        .slide
        .map(|n| format!("#{n}"))
        .or_else(|| fragment.map(ToOwned::to_owned));

    let mut platform = Platform::detect();
    if effective.no_mouse {
        platform = platform.without_mouse();
    }
    tracing::debug!(?platform, "platform");

    let mut app = App::new(deck_path)
        .with_watch(effective.watch)
        .with_policy(effective.boundary.unwrap_or_default())
        .with_navigation(navigation_for(&effective))
        .with_platform(platform)
        .with_start_fragment(start_fragment)
        .with_config_paths(
            Some(global_path.clone()),
            if local_path.exists() {
                Some(local_path.clone())
            } else {
                None
            },
        );

    app.run().context("Application error")
}
