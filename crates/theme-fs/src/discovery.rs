//! Glob-based file discovery and working-area cleanup

use std::fs;

use globset::GlobBuilder;
use tracing::debug;
use walkdir::WalkDir;

use crate::{Error, NormalizedPath, Result};

/// Expand a glob pattern relative to `root` into matching file paths.
///
/// Returned paths are relative to `root`, normalized, and sorted. A root
/// that does not exist yields an empty result, matching "nothing pulled
/// yet". Pure query; nothing on disk is touched.
///
/// # Errors
///
/// Returns `Error::Discovery` if the pattern is not a valid glob.
pub fn fetch_files(root: &NormalizedPath, pattern: &str) -> Result<Vec<NormalizedPath>> {
    let glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| Error::Discovery {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
    let matcher = glob.compile_matcher();

    let base = root.to_native();
    let mut files = Vec::new();
    for entry in WalkDir::new(&base).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(&base) else {
            continue;
        };
        let candidate = NormalizedPath::new(relative);
        if matcher.is_match(candidate.as_str()) {
            files.push(candidate);
        }
    }

    files.sort();
    debug!(pattern, count = files.len(), "expanded file pattern");
    Ok(files)
}

/// Remove a working directory recursively.
///
/// Idempotent: an already-absent directory is success.
pub fn clean_dir(path: &NormalizedPath) -> Result<()> {
    match fs::remove_dir_all(path.to_native()) {
        Ok(()) => {
            debug!(path = %path, "removed working directory");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io(path.to_native(), e)),
    }
}
