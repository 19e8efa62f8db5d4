//! command option structure
//!
//! Provide a unified parameter passing method for each command, which is constructed from CLI parameter parsing.
//!
//! # Example
//! ```no_run
//! use std::path::Path;
//! use commit_edit::commands::options::CommitOptions;
//! use commit_edit::commands::format::OutputFormat;
//!
//! let options = CommitOptions {
//!     dir: Path::new("."),
//!     git_dir: None,
//!     message: Some("Fix typo in README"),
//!     format: OutputFormat::Text,
//! };
//! ```

use std::path::Path;

use super::format::OutputFormat;
use crate::cli::RepoArgs;
use crate::config::CommitConfig;
use crate::git::RepositoryHandle;

/// Commit command options
///
/// Constructed from CLI parameters and passed to `commands::commit::run()`.
///
/// # Field description
/// - `dir`: repository working directory
/// - `git_dir`: object-store directory override (`--git-dir`)
/// - `message`: literal message (`-m`); absent or blank opens the editor
/// - `format`: output format (Text/JSON)
#[derive(Debug, Clone)]
pub struct CommitOptions<'a> {
    pub dir: &'a Path,
    pub git_dir: Option<&'a Path>,
    pub message: Option<&'a str>,
    pub format: OutputFormat,
}

impl<'a> CommitOptions<'a> {
    pub fn from_cli(
        repo: &'a RepoArgs,
        message: Option<&'a str>,
        format: OutputFormat,
        json: bool,
    ) -> Self {
        Self {
            dir: &repo.dir,
            git_dir: repo.git_dir.as_deref(),
            message,
            format: format.resolve(json),
        }
    }

    pub fn handle(&self, config: &CommitConfig) -> RepositoryHandle {
        resolve_handle(self.dir, self.git_dir, config)
    }
}

/// Template command options
#[derive(Debug, Clone)]
pub struct TemplateOptions<'a> {
    pub dir: &'a Path,
    pub git_dir: Option<&'a Path>,
}

impl<'a> TemplateOptions<'a> {
    pub fn from_cli(repo: &'a RepoArgs) -> Self {
        Self {
            dir: &repo.dir,
            git_dir: repo.git_dir.as_deref(),
        }
    }

    pub fn handle(&self, config: &CommitConfig) -> RepositoryHandle {
        resolve_handle(self.dir, self.git_dir, config)
    }
}

/// `--git-dir` wins over `<dir>/<commit.git_dir_name>`
fn resolve_handle(dir: &Path, git_dir: Option<&Path>, config: &CommitConfig) -> RepositoryHandle {
    let git_dir = git_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.join(&config.git_dir_name));
    RepositoryHandle::with_git_dir(dir, git_dir)
}
