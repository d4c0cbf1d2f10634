//! SyncEngine implementation
//!
//! The SyncEngine sequences one reconciliation run: pull the source
//! theme's JSON mirror, merge locale and settings documents, prune and
//! diff templates, publish the result, and clean up the working area
//! whether the run succeeded or not.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use theme_fs::{NormalizedPath, REMOTE_ROOT};

use crate::Result;
use crate::transport::{PullRequest, PushFile, PushTarget, ThemeTransport};

use super::locale_syncer::LocaleSyncer;
use super::template_syncer::TemplateSyncer;

/// Locale documents
pub const LOCALE_PATTERN: &str = "locales/*.json";
/// Settings data documents; they ride the same merge channel as locales
pub const SETTINGS_PATTERN: &str = "config/*_data.json";
/// Template and section layouts
pub const TEMPLATE_PATTERN: &str = "templates/**/*.json";

/// Report from a sync run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncReport {
    /// Actions taken during the run
    pub actions: Vec<String>,
    /// Theme-relative paths of the files handed to the publish step
    pub pushed: Vec<String>,
}

impl SyncReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an action to the report
    pub fn with_action(mut self, action: String) -> Self {
        self.actions.push(action);
        self
    }
}

/// Options for sync runs
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// If true, simulate changes without touching local files or pushing.
    /// Actions will be prefixed with "[dry-run] Would ..."
    pub dry_run: bool,
}

/// Engine for reconciling a theme working copy with a pulled remote mirror
///
/// One `run` performs:
/// - **pull**: the transport mirrors the source theme's JSON under `remote/`
/// - **merge**: locale and settings files merge remote-wins, key by key
/// - **prune/diff**: templates lose disabled content; new templates are found
/// - **publish**: the combined push set goes to the target theme
/// - **cleanup**: the `remote/` working area is removed on every exit path
pub struct SyncEngine {
    /// Root path of the theme working copy
    root: NormalizedPath,
    /// Run options
    options: SyncOptions,
}

impl SyncEngine {
    /// Create a new SyncEngine rooted at the theme working copy.
    pub fn new(root: NormalizedPath, options: SyncOptions) -> Self {
        Self { root, options }
    }

    /// The transient working area the pull step mirrors into.
    pub fn remote_root(&self) -> NormalizedPath {
        self.root.join(REMOTE_ROOT)
    }

    /// The glob patterns a pull must cover for the engine to see both sides.
    pub fn pull_patterns() -> Vec<String> {
        vec![
            SETTINGS_PATTERN.to_string(),
            TEMPLATE_PATTERN.to_string(),
            LOCALE_PATTERN.to_string(),
        ]
    }

    /// Run one full reconciliation pass.
    ///
    /// The remote working area is cleaned up exactly once, on success and
    /// on failure alike. The first fatal error aborts the run and becomes
    /// its failure reason; nothing is pushed on a failed run.
    pub fn run(
        &self,
        transport: &dyn ThemeTransport,
        pull: &PullRequest,
        target: &PushTarget,
    ) -> Result<SyncReport> {
        let result = self.run_inner(transport, pull, target);

        let cleanup = theme_fs::clean_dir(&self.remote_root());
        match result {
            Ok(report) => {
                cleanup?;
                Ok(report)
            }
            Err(e) => {
                // The run's own error is the failure reason; a cleanup
                // failure on top of it is only worth a log line.
                if let Err(cleanup_err) = cleanup {
                    warn!(error = %cleanup_err, "failed to clean remote working area");
                }
                Err(e)
            }
        }
    }

    fn run_inner(
        &self,
        transport: &dyn ThemeTransport,
        pull: &PullRequest,
        target: &PushTarget,
    ) -> Result<SyncReport> {
        let mut report = SyncReport::new();

        info!(store = %pull.store, "pulling source theme JSON mirror");
        transport.pull(pull)?;

        let mut push_set: Vec<PushFile> = Vec::new();

        let locales = LocaleSyncer::new(self.root.clone(), self.options.dry_run);
        for pattern in [LOCALE_PATTERN, SETTINGS_PATTERN] {
            let (files, actions) = locales.sync_pattern(pattern)?;
            push_set.extend(files);
            report.actions.extend(actions);
        }

        let templates = TemplateSyncer::new(self.root.clone(), self.options.dry_run);
        let (files, actions) = templates.sync_templates(TEMPLATE_PATTERN)?;
        push_set.extend(files);
        report.actions.extend(actions);

        report.pushed = push_set.iter().map(|f| f.path.to_string()).collect();

        if push_set.is_empty() {
            info!("nothing to push");
            return Ok(report.with_action("Nothing to push".to_string()));
        }

        if self.options.dry_run {
            return Ok(report.with_action(format!(
                "[dry-run] Would push {} file(s) to theme {}",
                push_set.len(),
                target.theme_id
            )));
        }

        info!(count = push_set.len(), theme = %target.theme_id, "publishing reconciled files");
        transport.publish(&push_set, target)?;

        Ok(report.with_action(format!(
            "Pushed {} file(s) to theme {}",
            push_set.len(),
            target.theme_id
        )))
    }

    /// Get the theme working copy root.
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }
}

/// SHA-256 checksum of a document's canonical serialization.
///
/// Used to decide whether reconciliation actually changed a file.
pub fn compute_checksum(document: &Value) -> String {
    let canonical = serde_json::to_string(document).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    format!("{:x}", hasher.finalize())
}
