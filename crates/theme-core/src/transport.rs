//! External pull/publish collaborators
//!
//! The engine never talks to the storefront directly: it hands pull and
//! publish requests to a `ThemeTransport` implementation. The CLI provides
//! one backed by the `shopify` binary; tests provide in-memory fakes.

use serde_json::Value;
use theme_fs::NormalizedPath;

use crate::Result;

/// Where a pull mirrors from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceTheme {
    /// The currently published theme
    Live,
    /// A specific theme id
    Id(String),
}

/// Request to mirror the source theme's JSON files into a working area.
#[derive(Debug, Clone)]
pub struct PullRequest {
    /// Store domain, e.g. `my-store.myshopify.com`
    pub store: String,
    /// Theme to pull from
    pub source: SourceTheme,
    /// Directory the mirror is written under (the `remote/` working area)
    pub destination: NormalizedPath,
    /// Glob patterns limiting the mirror to the files the engine reads
    pub only: Vec<String>,
}

/// A reconciled file ready to push.
#[derive(Debug, Clone, PartialEq)]
pub struct PushFile {
    /// Path relative to the theme root, in the local namespace
    pub path: NormalizedPath,
    /// Canonical reconciled document
    pub document: Value,
}

/// Destination theme for a push.
#[derive(Debug, Clone)]
pub struct PushTarget {
    /// Store domain
    pub store: String,
    /// Theme id that receives the reconciled files
    pub theme_id: String,
}

/// Boundary to the external theme CLI.
pub trait ThemeTransport {
    /// Mirror the source theme's JSON files into `request.destination`.
    fn pull(&self, request: &PullRequest) -> Result<()>;

    /// Upload the reconciled files to the target theme.
    fn publish(&self, files: &[PushFile], target: &PushTarget) -> Result<()>;
}
