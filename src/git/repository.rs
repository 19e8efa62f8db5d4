use git2::{Commit, ErrorCode, Oid, Repository, Signature};

use crate::error::{CommitEditError, Result};
use crate::git::{Author, GitOperations, RepositoryHandle, StatusEntry, status};

pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// 打开 handle 指向的仓库
    ///
    /// 对象库目录可以不在工作目录内（`--git-dir`），工作目录始终以 handle 为准。
    pub fn open(handle: &RepositoryHandle) -> Result<Self> {
        let repo = Repository::open(&handle.git_dir)?;
        repo.set_workdir(&handle.dir, false)?;
        tracing::debug!(
            "Opened repository {} (git dir {})",
            handle.dir.display(),
            handle.git_dir.display()
        );
        Ok(Self { repo })
    }

    /// HEAD 指向的 commit，unborn branch 时为 None
    fn head_commit(&self) -> Result<Option<Commit<'_>>> {
        match self.repo.head() {
            Ok(head) => Ok(Some(head.peel_to_commit()?)),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl GitOperations for GitRepository {
    fn status_matrix(&self) -> Result<Vec<StatusEntry>> {
        status::status_matrix(&self.repo)
    }

    fn get_config(&self, key: &str) -> Result<Option<String>> {
        let config = self.repo.config()?;
        match config.get_string(key) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_config(&self, key: &str, value: &str) -> Result<()> {
        // 只写仓库级配置，不碰全局配置
        let mut config = self.repo.config()?.open_level(git2::ConfigLevel::Local)?;
        config.set_str(key, value)?;
        Ok(())
    }

    fn current_branch(&self) -> Result<String> {
        // 读取 HEAD 的符号引用，unborn branch 同样适用
        let head = self.repo.find_reference("HEAD")?;
        let target = head.symbolic_target().ok_or(CommitEditError::DetachedHead)?;
        Ok(target
            .strip_prefix("refs/heads/")
            .unwrap_or(target)
            .to_string())
    }

    fn commit(&self, message: &str, author: &Author) -> Result<Oid> {
        let mut index = self.repo.index()?;
        index.read(false)?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = Signature::now(&author.name, &author.email)?;

        let parent = self.head_commit()?;
        let parents: Vec<&Commit> = parent.iter().collect();

        let oid = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;

        tracing::info!(
            "Created commit {} ({} parent(s)) as {} <{}>",
            oid,
            parents.len(),
            author.name,
            author.email
        );
        Ok(oid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// 创建临时 git 仓库用于测试
    fn create_test_repo() -> (TempDir, GitRepository) {
        let dir = TempDir::new().unwrap();
        Repository::init(dir.path()).unwrap();
        let git_repo = GitRepository::open(&RepositoryHandle::new(dir.path())).unwrap();
        (dir, git_repo)
    }

    /// 在仓库中创建并暂存文件
    fn stage_file(dir: &Path, repo: &GitRepository, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
        let mut index = repo.repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
    }

    #[test]
    fn test_current_branch_on_unborn_repo() {
        let (_dir, git_repo) = create_test_repo();
        let branch = git_repo.current_branch().unwrap();
        // 默认分支是 master 或 main
        assert!(!branch.is_empty());
        assert!(!branch.starts_with("refs/"));
    }

    #[test]
    fn test_current_branch_detached_head() {
        let (dir, git_repo) = create_test_repo();
        stage_file(dir.path(), &git_repo, "a.txt", "a");
        let oid = git_repo
            .commit("Initial commit", &Author::new("T", "t@example.com"))
            .unwrap();
        git_repo.repo.set_head_detached(oid).unwrap();

        assert!(matches!(
            git_repo.current_branch(),
            Err(CommitEditError::DetachedHead)
        ));
    }

    #[test]
    fn test_set_and_get_config() {
        let (_dir, git_repo) = create_test_repo();
        git_repo.set_config("commitedit.test", "value").unwrap();
        assert_eq!(
            git_repo.get_config("commitedit.test").unwrap(),
            Some("value".to_string())
        );
        assert_eq!(git_repo.get_config("commitedit.missing").unwrap(), None);
    }

    #[test]
    fn test_commit_links_parent() {
        let (dir, git_repo) = create_test_repo();
        let author = Author::new("Test User", "test@example.com");

        stage_file(dir.path(), &git_repo, "a.txt", "v1");
        let first = git_repo.commit("First", &author).unwrap();

        stage_file(dir.path(), &git_repo, "a.txt", "v2");
        let second = git_repo.commit("Second", &author).unwrap();

        let commit = git_repo.repo.find_commit(second).unwrap();
        assert_eq!(commit.parent_count(), 1);
        assert_eq!(commit.parent_id(0).unwrap(), first);
        assert_eq!(commit.message(), Some("Second"));
        assert_eq!(commit.author().name(), Some("Test User"));
        assert_eq!(commit.author().email(), Some("test@example.com"));
        assert_eq!(git_repo.repo.head().unwrap().target(), Some(second));
    }

    #[test]
    fn test_first_commit_has_no_parent() {
        let (dir, git_repo) = create_test_repo();
        stage_file(dir.path(), &git_repo, "a.txt", "v1");
        let oid = git_repo
            .commit("Initial commit", &Author::new("T", "t@example.com"))
            .unwrap();

        let commit = git_repo.repo.find_commit(oid).unwrap();
        assert_eq!(commit.parent_count(), 0);
        assert!(commit.tree().unwrap().get_name("a.txt").is_some());
    }

    #[test]
    fn test_open_missing_repository_fails() {
        let dir = TempDir::new().unwrap();
        let result = GitRepository::open(&RepositoryHandle::new(dir.path()));
        assert!(matches!(result, Err(CommitEditError::Git(_))));
    }
}
