//! Error types for theme-core

/// Result type for theme-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a sync run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The pull collaborator failed to mirror the source theme
    #[error("Theme pull failed: {reason}")]
    Pull { reason: String },

    /// The publish collaborator rejected the push
    #[error("Publish to theme {target} failed: {reason}")]
    Publish { target: String, reason: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem boundary error from theme-fs
    #[error(transparent)]
    Fs(#[from] theme_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
