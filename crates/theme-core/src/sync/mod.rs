//! Sync orchestration
//!
//! This module provides:
//! - **engine**: one-pass pull → merge → prune/diff → publish → cleanup
//! - **locale_syncer**: remote-wins merging of locale and settings files
//! - **template_syncer**: pruning and new-file detection for templates

mod engine;
mod locale_syncer;
mod template_syncer;

pub use engine::{
    LOCALE_PATTERN, SETTINGS_PATTERN, TEMPLATE_PATTERN, SyncEngine, SyncOptions, SyncReport,
    compute_checksum,
};
pub use locale_syncer::LocaleSyncer;
pub use template_syncer::TemplateSyncer;
