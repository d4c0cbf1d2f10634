//! Locale and settings document synchronization
//!
//! Locale files (and settings data files, which share their shape) are
//! merged key by key with the freshly pulled remote copy taking precedence
//! on collisions. A file joins the push set when merging changed it or
//! when the remote side had a copy at all; a local-only file that merging
//! left alone has nothing to publish.

use tracing::debug;

use theme_fs::NormalizedPath;
use theme_content::merge_documents;

use crate::Result;
use crate::transport::PushFile;

use super::engine::compute_checksum;

/// Synchronizes locale and settings documents against the remote mirror
pub struct LocaleSyncer {
    /// Root path of the theme working copy
    root: NormalizedPath,
    /// Whether to simulate changes without writing
    dry_run: bool,
}

impl LocaleSyncer {
    /// Create a new `LocaleSyncer`.
    pub fn new(root: NormalizedPath, dry_run: bool) -> Self {
        Self { root, dry_run }
    }

    /// Reconcile every file matching `pattern` on either side.
    ///
    /// Candidates are the union of local matches and remote matches mapped
    /// back into the local namespace, so a file that only exists remotely
    /// still produces a merged (i.e. copied) document. Merged results are
    /// written back to the local tree so the publish step pushes exactly
    /// what was reconciled.
    ///
    /// # Returns
    ///
    /// The files to push and the human-readable actions taken.
    pub fn sync_pattern(&self, pattern: &str) -> Result<(Vec<PushFile>, Vec<String>)> {
        let mut files = Vec::new();
        let mut actions = Vec::new();

        for relative in self.candidates(pattern)? {
            let local_path = self.root.join(relative.as_str());
            let remote_path = self.root.join(relative.to_remote().as_str());

            let local_doc = theme_fs::read_document(&local_path)?;
            let remote_doc = theme_fs::read_document(&remote_path)?;
            let remote_existed = remote_path.is_file();

            let merged = merge_documents(&local_doc, &remote_doc);
            let changed = compute_checksum(&merged) != compute_checksum(&local_doc);

            if !changed && !remote_existed {
                debug!(file = %relative, "document unchanged, skipping");
                continue;
            }

            if changed && !self.dry_run {
                theme_fs::io::write_document(&local_path, &merged)?;
            }

            let action = if changed && self.dry_run {
                format!("[dry-run] Would merge remote changes into {relative}")
            } else if changed {
                format!("Merged remote changes into {relative}")
            } else {
                format!("Queued {relative} (remote copy present)")
            };
            actions.push(action);

            files.push(PushFile {
                path: relative,
                document: merged,
            });
        }

        Ok((files, actions))
    }

    /// Union of local and remote matches for `pattern`, in the local
    /// namespace, locals first.
    fn candidates(&self, pattern: &str) -> Result<Vec<NormalizedPath>> {
        let mut candidates = theme_fs::fetch_files(&self.root, pattern)?;

        let remote_pattern = format!("{}/{}", theme_fs::REMOTE_ROOT, pattern);
        for remote in theme_fs::fetch_files(&self.root, &remote_pattern)? {
            let counterpart = remote.strip_remote_prefix();
            if !candidates.contains(&counterpart) {
                candidates.push(counterpart);
            }
        }

        Ok(candidates)
    }
}
