//! Commit workflow configuration.

use serde::{Deserialize, Serialize};

use crate::constants::commit::DEFAULT_GIT_DIR_NAME;
use crate::error::{CommitEditError, Result};

/// Commit command configuration.
///
/// # Fields
/// - `git_dir_name`: object-store directory name under the repository
///   directory, used when `--git-dir` is not given (default: `".git"`)
///
/// # Example
/// ```toml
/// [commit]
/// git_dir_name = ".git"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommitConfig {
    /// Object-store directory name.
    #[serde(default = "default_git_dir_name")]
    pub git_dir_name: String,
}

impl CommitConfig {
    /// The directory name must be a single plain path component.
    pub fn validate(&self) -> Result<()> {
        let name = self.git_dir_name.trim();
        if name.is_empty() {
            return Err(CommitEditError::Config(
                "commit.git_dir_name must not be empty".to_string(),
            ));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(CommitEditError::Config(format!(
                "commit.git_dir_name '{}' must not contain a path separator",
                name
            )));
        }
        Ok(())
    }
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            git_dir_name: default_git_dir_name(),
        }
    }
}

fn default_git_dir_name() -> String {
    DEFAULT_GIT_DIR_NAME.to_string()
}
