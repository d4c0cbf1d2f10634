//! CLI argument parsing using clap derive

use clap::Parser;

/// Reconcile and push storefront theme JSON files
///
/// Pulls the source theme's locale, settings, and template JSON into a
/// transient `remote/` mirror, merges it against the working copy with
/// remote-wins precedence, strips disabled content, and pushes the result
/// to the target theme.
#[derive(Parser, Debug)]
#[command(name = "theme-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Store domain, e.g. my-store.myshopify.com
    #[arg(long, env = "THEME_SYNC_STORE")]
    pub store: Option<String>,

    /// Target theme id that receives the reconciled files
    #[arg(long)]
    pub theme: Option<String>,

    /// Source theme id to pull from (defaults to the live theme)
    #[arg(long)]
    pub source_theme: Option<String>,

    /// Working directory containing the theme checkout
    #[arg(long)]
    pub path: Option<String>,

    /// Preview changes without writing or pushing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
