// 配置模块测试

use super::*;
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

/// RAII 环境变量 guard，确保测试后清理
struct EnvGuard {
    key: String,
    original: Option<String>,
}

impl EnvGuard {
    fn set(key: &str, value: &str) -> Self {
        let original = env::var(key).ok();
        // SAFETY: 测试环境中修改环境变量是安全的，且使用 serial_test 确保串行执行
        unsafe { env::set_var(key, value) };
        Self {
            key: key.to_string(),
            original,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: 测试环境中修改环境变量是安全的
        match &self.original {
            Some(v) => unsafe { env::set_var(&self.key, v) },
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

// === 默认值测试 ===

#[test]
fn test_app_config_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.commit.git_dir_name, ".git");
    assert!(config.ui.colored);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_without_file_uses_defaults() {
    let config = load_config_from(None).unwrap();
    assert_eq!(config.commit.git_dir_name, ".git");
}

// === 配置文件 ===

#[test]
#[serial]
fn test_load_from_file() {
    let (_dir, path) = write_config("[commit]\ngit_dir_name = \".repo\"\n\n[ui]\ncolored = false\n");
    let config = load_config_from(Some(&path)).unwrap();
    assert_eq!(config.commit.git_dir_name, ".repo");
    assert!(!config.ui.colored);
}

#[test]
#[serial]
fn test_missing_file_is_skipped() {
    let dir = TempDir::new().unwrap();
    let config = load_config_from(Some(&dir.path().join("absent.toml"))).unwrap();
    assert!(config.ui.colored);
}

#[test]
#[serial]
fn test_invalid_git_dir_name_rejected() {
    let (_dir, path) = write_config("[commit]\ngit_dir_name = \"a/b\"\n");
    let result = load_config_from(Some(&path));
    assert!(matches!(result, Err(crate::error::CommitEditError::Config(_))));
}

#[test]
fn test_empty_git_dir_name_rejected() {
    let config = CommitConfig {
        git_dir_name: "  ".to_string(),
    };
    assert!(config.validate().is_err());
}

// === 环境变量覆盖 ===

#[test]
#[serial]
fn test_env_overrides_file() {
    let (_dir, path) = write_config("[ui]\ncolored = true\n");
    let _colored = EnvGuard::set("COMMIT_EDIT__UI__COLORED", "false");
    let _git_dir = EnvGuard::set("COMMIT_EDIT__COMMIT__GIT_DIR_NAME", ".store");

    let config = load_config_from(Some(&path)).unwrap();
    assert!(!config.ui.colored);
    assert_eq!(config.commit.git_dir_name, ".store");
}
