//! Template and section synchronization
//!
//! Disabled sections and blocks must never round-trip onto the target
//! theme: local templates are pruned before anything else looks at them.
//! Templates with no remote counterpart are newly authored and join the
//! push set even though there was nothing to merge them against; an
//! existing template is pushed only when pruning actually changed it.

use tracing::debug;

use theme_content::{new_local_files, prune_template};
use theme_fs::NormalizedPath;

use crate::Result;
use crate::transport::PushFile;

use super::engine::compute_checksum;

/// Synchronizes template documents against the remote mirror
pub struct TemplateSyncer {
    /// Root path of the theme working copy
    root: NormalizedPath,
    /// Whether to simulate changes without writing
    dry_run: bool,
}

impl TemplateSyncer {
    /// Create a new `TemplateSyncer`.
    pub fn new(root: NormalizedPath, dry_run: bool) -> Self {
        Self { root, dry_run }
    }

    /// Prune local templates matching `pattern` and queue the ones to push.
    ///
    /// # Returns
    ///
    /// The files to push and the human-readable actions taken.
    pub fn sync_templates(&self, pattern: &str) -> Result<(Vec<PushFile>, Vec<String>)> {
        let local_paths = theme_fs::fetch_files(&self.root, pattern)?;

        let remote_pattern = format!("{}/{}", theme_fs::REMOTE_ROOT, pattern);
        let remote_paths = theme_fs::fetch_files(&self.root, &remote_pattern)?;
        let remote_names: Vec<String> = remote_paths
            .iter()
            .map(|p| p.strip_remote_prefix().as_str().to_string())
            .collect();

        let local_names: Vec<String> =
            local_paths.iter().map(|p| p.as_str().to_string()).collect();
        let new_files = new_local_files(&local_names, &remote_names);

        let mut files = Vec::new();
        let mut actions = Vec::new();

        for relative in local_paths {
            let local_path = self.root.join(relative.as_str());
            let document = theme_fs::read_document(&local_path)?;

            let pruned = prune_template(&document);
            let prune_changed = compute_checksum(&pruned) != compute_checksum(&document);
            let is_new = new_files.iter().any(|p| p == relative.as_str());

            if !is_new && !prune_changed {
                debug!(file = %relative, "template already on remote and free of disabled content");
                continue;
            }

            if prune_changed && !self.dry_run {
                theme_fs::io::write_document(&local_path, &pruned)?;
            }

            let action = match (is_new, prune_changed, self.dry_run) {
                (_, true, true) => format!("[dry-run] Would strip disabled content from {relative}"),
                (true, _, _) => format!("Queued new template {relative}"),
                _ => format!("Stripped disabled content from {relative}"),
            };
            actions.push(action);

            files.push(PushFile {
                path: relative,
                document: pruned,
            });
        }

        Ok((files, actions))
    }
}
