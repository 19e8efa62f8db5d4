// 配置加载逻辑
//
// 此文件负责从文件和环境变量加载配置。

use config::{Config, Environment, File};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use super::structs::AppConfig;
use crate::error::Result;

/// 环境变量前缀（`COMMIT_EDIT__SECTION__KEY`）
const ENV_PREFIX: &str = "COMMIT_EDIT";

/// 加载应用配置
///
/// 配置加载优先级（从高到低）：
/// 1. 环境变量（COMMIT_EDIT__* 前缀，双下划线表示嵌套）
///    - 例如：`COMMIT_EDIT__COMMIT__GIT_DIR_NAME=.git`
///    - 例如：`COMMIT_EDIT__UI__COLORED=false`
/// 2. 配置文件（~/.config/commit-edit/config.toml）
/// 3. 默认值（来自 structs 的 Default trait 和 serde(default) 属性）
pub fn load_config() -> Result<AppConfig> {
    load_config_from(get_config_path().as_deref())
}

/// 从指定配置文件加载（文件不存在时跳过）
pub fn load_config_from(config_path: Option<&Path>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    // 1. 加载配置文件（如果存在）
    if let Some(config_path) = config_path
        && config_path.exists()
    {
        tracing::debug!("Loading config file {}", config_path.display());
        builder = builder.add_source(File::from(config_path.to_path_buf()));
    }

    // 2. 加载环境变量（优先级最高）
    // 使用双下划线作为嵌套层级分隔符，避免与字段名中的单下划线冲突
    // 例如：COMMIT_EDIT__COMMIT__GIT_DIR_NAME -> commit.git_dir_name
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let app_config: AppConfig = config.try_deserialize()?;
    app_config.validate()?;

    Ok(app_config)
}

/// 获取配置文件路径
///
/// 返回 ~/.config/commit-edit/config.toml
fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// 获取配置目录路径
pub fn get_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "commit-edit").map(|dirs| dirs.config_dir().to_path_buf())
}
