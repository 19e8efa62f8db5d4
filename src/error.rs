use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CommitEditError>;

#[derive(Error, Debug)]
pub enum CommitEditError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Configuration parsing error: {0}")]
    ConfigParse(#[from] config::ConfigError),

    /// The editor process could not be started at all.
    #[error("Failed to start editor '{program}': {source}")]
    EditorStart {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write commit template {}: {source}", path.display())]
    TemplateWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read commit message {}: {source}", path.display())]
    MessageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Aborting commit due to empty commit message")]
    EmptyMessage,

    #[error("HEAD is detached")]
    DetachedHead,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CommitEditError {
    /// 获取错误的解决建议
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            CommitEditError::EmptyMessage => {
                Some("Write a message above the '#' lines, or pass one with -m")
            }
            CommitEditError::EditorStart { .. } => {
                Some("Set GIT_EDITOR, VISUAL or EDITOR to an editor available on your PATH")
            }
            CommitEditError::TemplateWrite { .. } | CommitEditError::MessageRead { .. } => {
                Some("Check that the git directory exists and is writable")
            }
            CommitEditError::Git(e) if e.code() == git2::ErrorCode::NotFound => {
                Some("Run this command inside a git repository, or pass -C <dir>")
            }
            CommitEditError::Config(msg) if msg.contains("git_dir_name") => Some(
                "Set [commit] git_dir_name to a plain directory name such as \".git\"",
            ),
            _ => None,
        }
    }
}
