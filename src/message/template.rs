use std::path::Path;

use crate::constants::commit::UNKNOWN_BRANCH;
use crate::error::{CommitEditError, Result};
use crate::git::GitOperations;

const INSTRUCTIONS: [&str; 2] = [
    "# Please enter the commit message for your changes. Lines starting",
    "# with '#' will be ignored, and an empty message aborts the commit.",
];

const CHANGES_HEADER: &str = "# Changes to be committed:";

const NO_CHANGES: &str = "#   (no changes staged)";

/// 当前分支名，读取失败时返回 `"unknown"`
pub fn branch_or_unknown(repo: &dyn GitOperations) -> String {
    repo.current_branch().unwrap_or_else(|e| {
        tracing::warn!("Failed to read current branch: {}", e);
        UNKNOWN_BRANCH.to_string()
    })
}

/// 已暂存路径，状态读取失败时返回空列表
///
/// 状态读取出错不能阻止打开编辑器。顺序与状态矩阵一致，不重新排序。
pub fn staged_paths_or_empty(repo: &dyn GitOperations) -> Vec<String> {
    match repo.status_matrix() {
        Ok(entries) => entries
            .into_iter()
            .filter(|e| e.is_staged())
            .map(|e| e.path)
            .collect(),
        Err(e) => {
            tracing::warn!("Failed to read status matrix: {}", e);
            Vec::new()
        }
    }
}

/// 渲染 commit message 模板（不含末尾换行）
pub fn render_template(branch: &str, staged: &[String]) -> String {
    let mut lines = Vec::with_capacity(5 + staged.len().max(1));
    lines.push(String::new());
    lines.extend(INSTRUCTIONS.iter().map(|s| s.to_string()));
    lines.push(format!("# On branch {}", branch));
    lines.push(CHANGES_HEADER.to_string());

    if staged.is_empty() {
        lines.push(NO_CHANGES.to_string());
    } else {
        lines.extend(staged.iter().map(|path| format!("#   {}", path)));
    }

    lines.join("\n")
}

/// 生成模板并写入 `path`（覆盖已有内容）
///
/// 分支名与状态读取都不会失败；只有写文件失败才返回错误。
pub async fn build_template(repo: &dyn GitOperations, path: &Path) -> Result<String> {
    let branch = branch_or_unknown(repo);
    let staged = staged_paths_or_empty(repo);
    let template = render_template(&branch, &staged);

    tokio::fs::write(path, &template)
        .await
        .map_err(|source| CommitEditError::TemplateWrite {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        "Wrote commit template to {} ({} staged path(s))",
        path.display(),
        staged.len()
    );
    Ok(template)
}
