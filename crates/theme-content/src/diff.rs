//! Template file-set differencing

use std::collections::HashSet;

/// Paths present locally but absent from the remote set.
///
/// Both sides must already be addressed in the same namespace (remote
/// paths with their `remote/` prefix stripped). These are newly authored
/// templates that must be pushed even though there was nothing to merge
/// them against. Local ordering is preserved; comparison is exact string
/// equality.
pub fn new_local_files<L, R>(local: &[L], remote: &[R]) -> Vec<String>
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    let remote_set: HashSet<&str> = remote.iter().map(|p| p.as_ref()).collect();

    local
        .iter()
        .map(|p| p.as_ref())
        .filter(|p| !remote_set.contains(p))
        .map(str::to_string)
        .collect()
}
