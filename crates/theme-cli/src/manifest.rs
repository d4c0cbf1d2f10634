//! Manifest parsing for theme-sync.toml
//!
//! The manifest supplies defaults for the store and theme ids so CI and
//! local invocations can stay flag-free. Command-line flags always
//! override manifest values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// File name looked up in the theme working copy root
pub const MANIFEST_FILE: &str = "theme-sync.toml";

/// Defaults for a sync run parsed from theme-sync.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Store domain
    #[serde(default)]
    pub store: Option<String>,

    /// Target theme id
    #[serde(default)]
    pub theme: Option<String>,

    /// Source theme id; absent means the live theme
    #[serde(default)]
    pub source_theme: Option<String>,
}

impl Manifest {
    /// Parse a manifest from TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        Ok(manifest)
    }

    /// Load the manifest from `root`, or defaults if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
    }
}
