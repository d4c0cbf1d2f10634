//! Shopify CLI subprocess transport
//!
//! Wraps `shopify theme pull` and `shopify theme push` invocations,
//! translating non-zero exits into typed transport errors. The push is
//! limited with `--only` to exactly the reconciled paths so nothing else
//! on disk can leak onto the target theme.

use std::process::Command;

use tracing::debug;

use theme_core::{Error, PullRequest, PushFile, PushTarget, Result, SourceTheme, ThemeTransport};
use theme_fs::NormalizedPath;

/// Transport backed by the `shopify` binary
pub struct ShopifyCli {
    /// Binary to invoke, normally just `shopify`
    binary: String,
    /// Directory the CLI runs in (the theme working copy root)
    root: NormalizedPath,
}

impl ShopifyCli {
    /// Create a transport invoking `shopify` from the given working copy.
    pub fn new(root: NormalizedPath) -> Self {
        Self {
            binary: "shopify".to_string(),
            root,
        }
    }

    /// Override the binary, for wrappers and tests.
    pub fn with_binary(root: NormalizedPath, binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            root,
        }
    }

    fn run(&self, cmd: &mut Command) -> std::result::Result<(), String> {
        debug!(command = ?cmd, "invoking shopify CLI");
        let output = cmd.output().map_err(|e| e.to_string())?;
        if output.status.success() {
            Ok(())
        } else {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(format!("exit code {code}: {}", stderr.trim()))
        }
    }
}

impl ThemeTransport for ShopifyCli {
    fn pull(&self, request: &PullRequest) -> Result<()> {
        let mut cmd = Command::new(&self.binary);
        cmd.current_dir(self.root.to_native())
            .arg("theme")
            .arg("pull");

        for pattern in &request.only {
            cmd.arg("--only").arg(pattern);
        }

        match &request.source {
            SourceTheme::Live => {
                cmd.arg("--live");
            }
            SourceTheme::Id(id) => {
                cmd.arg("--theme").arg(id);
            }
        }

        cmd.arg("--path")
            .arg(request.destination.as_str())
            .arg("--store")
            .arg(&request.store)
            .arg("--verbose");

        self.run(&mut cmd).map_err(|reason| Error::Pull { reason })
    }

    fn publish(&self, files: &[PushFile], target: &PushTarget) -> Result<()> {
        let mut cmd = Command::new(&self.binary);
        cmd.current_dir(self.root.to_native())
            .arg("theme")
            .arg("push");

        for file in files {
            cmd.arg("--only").arg(file.path.as_str());
        }

        cmd.arg("--theme")
            .arg(&target.theme_id)
            .arg("--store")
            .arg(&target.store)
            .arg("--verbose");

        self.run(&mut cmd).map_err(|reason| Error::Publish {
            target: target.theme_id.clone(),
            reason,
        })
    }
}
