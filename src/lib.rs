//! # commit-edit
//!
//! Git commit authoring: commit staged changes with a literal message, or open
//! an editor on a `COMMIT_EDITMSG` template and commit whatever is left after
//! comment lines are stripped.
//!
//! ## 快速开始
//!
//! ### 作为 CLI 使用
//! ```bash
//! git add .
//! commit-edit commit                  # 打开编辑器
//! commit-edit commit -m "Fix typo"    # 直接提交
//! commit-edit template                # 只生成模板
//! ```
//!
//! ### 作为库使用
//! ```no_run
//! use commit_edit::commands::commit::run_with_deps;
//! use commit_edit::git::{RepositoryHandle, repository::GitRepository};
//! use commit_edit::ui::SystemEnv;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let handle = RepositoryHandle::new(".");
//! let repo = GitRepository::open(&handle)?;
//! let oid = run_with_deps(&repo, &handle, None, &SystemEnv).await?;
//! println!("Committed {}", oid);
//! # Ok(())
//! # }
//! ```
//!
//! ## 核心模块
//! - [`git`] - 仓库接口、状态矩阵、commit 创建
//! - [`message`] - 模板生成与 message 解析
//! - [`ui`] - 编辑器启动与终端输出
//! - [`commands`] - CLI 命令实现
//! - [`config`] - 配置管理
//! - [`error`] - 统一错误类型
//!
//! ## 编辑器
//! 按 `GIT_EDITOR` > `VISUAL` > `EDITOR` 选择，未设置时 Windows 使用 `notepad`，
//! 其他平台使用 `vi`。同一仓库的编辑器流程需要由调用方串行执行，
//! 因为模板文件路径是固定的。

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod message;
pub mod ui;
