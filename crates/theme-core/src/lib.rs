//! Sync orchestration for theme-sync
//!
//! This crate sequences one reconciliation run over a theme working copy:
//!
//! - **Discovery**: locale, settings, and template files on both sides
//! - **Reconciliation**: remote-wins merging and disabled-content pruning
//!   via `theme-content`
//! - **Transport**: pull and publish through the `ThemeTransport` boundary
//! - **Cleanup**: the `remote/` working area never survives a run
//!
//! # Architecture
//!
//! `theme-core` sits above the leaf crates and below the CLI:
//!
//! ```text
//!        theme-cli
//!            |
//!       theme-core
//!         |      |
//!   theme-fs  theme-content
//! ```

pub mod error;
pub mod sync;
pub mod transport;

pub use error::{Error, Result};
pub use sync::{
    LOCALE_PATTERN, SETTINGS_PATTERN, TEMPLATE_PATTERN, SyncEngine, SyncOptions, SyncReport,
    compute_checksum,
};
pub use transport::{PullRequest, PushFile, PushTarget, SourceTheme, ThemeTransport};
