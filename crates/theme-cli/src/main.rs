//! theme-sync CLI
//!
//! Thin glue around the sync engine: argument and manifest resolution,
//! working-directory handling, logging setup, and terminal reporting. All
//! ambient process state stays in this layer; the core only ever sees
//! explicit paths and parameters.

mod cli;
mod error;
mod manifest;
mod shopify;

use clap::Parser;
use colored::Colorize;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use theme_core::{PullRequest, PushTarget, SourceTheme, SyncEngine, SyncOptions};
use theme_fs::NormalizedPath;

use cli::Cli;
use error::{CliError, Result};
use manifest::Manifest;
use shopify::ShopifyCli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    if let Some(path) = &cli.path {
        debug!(path = %path, "changing working directory");
        std::env::set_current_dir(path)?;
    }

    let root = NormalizedPath::new(std::env::current_dir()?);
    let manifest = Manifest::load(root.as_ref())?;

    let store = cli
        .store
        .or(manifest.store)
        .ok_or_else(|| CliError::user("--store is required (flag, env, or theme-sync.toml)"))?;
    let theme_id = cli
        .theme
        .or(manifest.theme)
        .ok_or_else(|| CliError::user("--theme is required (flag or theme-sync.toml)"))?;
    let source = cli
        .source_theme
        .or(manifest.source_theme)
        .map(SourceTheme::Id)
        .unwrap_or(SourceTheme::Live);

    let engine = SyncEngine::new(
        root.clone(),
        SyncOptions {
            dry_run: cli.dry_run,
        },
    );
    let transport = ShopifyCli::new(root);

    let pull = PullRequest {
        store: store.clone(),
        source,
        destination: engine.remote_root(),
        only: SyncEngine::pull_patterns(),
    };
    let target = PushTarget { store, theme_id };

    let report = engine.run(&transport, &pull, &target)?;

    for action in &report.actions {
        println!("{} {}", "sync".green().bold(), action);
    }
    if report.pushed.is_empty() {
        println!("{} target theme already up to date", "done".green().bold());
    } else {
        println!(
            "{} reconciled {} file(s)",
            "done".green().bold(),
            report.pushed.len()
        );
    }

    Ok(())
}
