//! Top-level application configuration and UI settings.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::commit::CommitConfig;

/// Application configuration.
///
/// Effective configuration is merged from multiple sources (low to high):
/// 1. Rust defaults (`Default` + `serde(default)`)
/// 2. User-level config file (platform-specific config directory)
/// 3. `COMMIT_EDIT__*` environment variables
///
/// # Configuration File Locations
/// - Linux: `~/.config/commit-edit/config.toml`
/// - macOS: `~/Library/Application Support/commit-edit/config.toml`
/// - Windows: `%APPDATA%\commit-edit\config\config.toml`
///
/// # Example
/// ```toml
/// [commit]
/// git_dir_name = ".git"
///
/// [ui]
/// colored = true
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Commit workflow behavior.
    #[serde(default)]
    pub commit: CommitConfig,

    /// Terminal UI behavior.
    #[serde(default)]
    pub ui: UIConfig,
}

impl AppConfig {
    /// Validates configuration consistency.
    pub fn validate(&self) -> Result<()> {
        self.commit.validate()
    }
}

/// UI configuration.
///
/// # Fields
/// - `colored`: enable colored output (default: `true`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UIConfig {
    /// Whether to enable color output.
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self { colored: true }
    }
}

fn default_true() -> bool {
    true
}
