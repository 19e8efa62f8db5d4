use crate::constants::commit::{DEFAULT_AUTHOR_EMAIL, DEFAULT_AUTHOR_NAME};
use crate::git::GitOperations;

/// Commit 作者（同时用作提交者）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Author {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// 从 `user.name` / `user.email` 解析作者
///
/// 每个字段独立回退：未设置、为空或读取失败时分别使用
/// `"Unknown"` / `"unknown@example.com"`。每次调用都重新读取配置。
pub fn resolve_author(repo: &dyn GitOperations) -> Author {
    Author {
        name: config_or_default(repo, "user.name", DEFAULT_AUTHOR_NAME),
        email: config_or_default(repo, "user.email", DEFAULT_AUTHOR_EMAIL),
    }
}

fn config_or_default(repo: &dyn GitOperations, key: &str, default: &str) -> String {
    match repo.get_config(key) {
        Ok(Some(value)) if !value.trim().is_empty() => value,
        Ok(_) => default.to_string(),
        Err(e) => {
            tracing::debug!("Failed to read {}: {}, using '{}'", key, e, default);
            default.to_string()
        }
    }
}
