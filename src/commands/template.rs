use crate::commands::options::TemplateOptions;
use crate::config::AppConfig;
use crate::error::Result;
use crate::git::{GitOperations, RepositoryHandle, repository::GitRepository};
use crate::message::build_template;

/// 执行 template 命令
///
/// 按编辑器流程相同的规则写入 `COMMIT_EDITMSG`，然后打印模板，不启动编辑器。
pub async fn run(options: &TemplateOptions<'_>, config: &AppConfig) -> Result<()> {
    let handle = options.handle(&config.commit);
    let repo = GitRepository::open(&handle)?;
    let template = write_template(&repo, &handle).await?;
    println!("{}", template);
    Ok(())
}

/// 写入模板并返回其内容
pub async fn write_template(repo: &dyn GitOperations, handle: &RepositoryHandle) -> Result<String> {
    tokio::fs::create_dir_all(&handle.git_dir).await?;
    build_template(repo, &handle.template_path()).await
}
