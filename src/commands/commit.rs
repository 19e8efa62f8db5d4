use git2::Oid;
use serde::Serialize;

use crate::commands::json;
use crate::commands::options::CommitOptions;
use crate::config::AppConfig;
use crate::error::{CommitEditError, Result};
use crate::git::commit::resolve_author;
use crate::git::{GitOperations, RepositoryHandle, repository::GitRepository};
use crate::commands::template::write_template;
use crate::message::parse_message;
use crate::ui::{self, EnvProvider, SystemEnv};

/// Commit 命令的 JSON 数据部分
#[derive(Debug, Serialize)]
pub struct CommitData {
    pub commit: String,
}

/// 执行 commit 命令
///
/// 打开 `options` 指向的仓库，使用进程环境变量解析编辑器，并输出结果。
pub async fn run(options: &CommitOptions<'_>, config: &AppConfig) -> Result<Oid> {
    let colored = options.format.effective_colored(config.ui.colored);
    let handle = options.handle(&config.commit);

    let result = match GitRepository::open(&handle) {
        Ok(repo) => run_with_deps(&repo, &handle, options.message, &SystemEnv).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(oid) => {
            if options.format.is_json() {
                json::output_json_success(CommitData {
                    commit: oid.to_string(),
                })?;
            } else {
                ui::success(
                    &format!("Committed {}", ui::format_commit_id(&oid, colored)),
                    colored,
                );
            }
            Ok(oid)
        }
        Err(e) => {
            if options.format.is_json() {
                json::output_json_error::<CommitData>(&e)?;
            }
            Err(e)
        }
    }
}

/// 执行 commit 流程（可测试版本，接受 trait 对象）
///
/// - `message` 非空（trim 后）：直接提交，不涉及模板和编辑器
/// - 否则：写入 `COMMIT_EDITMSG` 模板，等待编辑器退出，解析后提交
///
/// 编辑后的 message 为空时返回 [`CommitEditError::EmptyMessage`]，不会创建 commit。
pub async fn run_with_deps(
    repo: &dyn GitOperations,
    handle: &RepositoryHandle,
    message: Option<&str>,
    env: &dyn EnvProvider,
) -> Result<Oid> {
    match message.filter(|m| !m.trim().is_empty()) {
        Some(message) => {
            tracing::debug!("Committing with message from command line");
            commit_with_message(repo, message)
        }
        None => commit_with_editor(repo, handle, env).await,
    }
}

fn commit_with_message(repo: &dyn GitOperations, message: &str) -> Result<Oid> {
    let author = resolve_author(repo);
    repo.commit(message, &author)
}

async fn commit_with_editor(
    repo: &dyn GitOperations,
    handle: &RepositoryHandle,
    env: &dyn EnvProvider,
) -> Result<Oid> {
    let path = handle.template_path();
    write_template(repo, handle).await?;

    let command = ui::resolve_command(env);
    let code = ui::launch(&command, &path).await?;
    tracing::debug!("Editor '{}' exited with {}", command.program(), code);

    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| CommitEditError::MessageRead {
            path: path.clone(),
            source,
        })?;

    // 编辑结果保留在磁盘上，便于恢复
    let message = parse_message(&raw);
    if message.is_empty() {
        return Err(CommitEditError::EmptyMessage);
    }

    commit_with_message(repo, &message)
}
