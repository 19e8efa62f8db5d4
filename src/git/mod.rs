pub mod commit;
pub mod repository;
pub mod status;

use std::path::PathBuf;

use crate::constants::commit::{DEFAULT_GIT_DIR_NAME, TEMPLATE_FILE_NAME};
use crate::error::Result;
use git2::Oid;
#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub use commit::Author;
pub use status::{HeadState, StageState, StatusEntry, WorkdirState};

/// 仓库定位信息
///
/// 工作目录和对应的对象库目录（默认 `<dir>/.git`）。
/// 在一次 commit 过程中保持不变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryHandle {
    pub dir: PathBuf,
    pub git_dir: PathBuf,
}

impl RepositoryHandle {
    /// Handle with the conventional `<dir>/.git` object-store directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let git_dir = dir.join(DEFAULT_GIT_DIR_NAME);
        Self { dir, git_dir }
    }

    pub fn with_git_dir(dir: impl Into<PathBuf>, git_dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            git_dir: git_dir.into(),
        }
    }

    /// `<git_dir>/COMMIT_EDITMSG`
    pub fn template_path(&self) -> PathBuf {
        self.git_dir.join(TEMPLATE_FILE_NAME)
    }
}

/// 对象库 / 仓库操作的统一接口
///
/// commit 流程只依赖这几个操作，便于 mock 测试。
/// 主要实现：[`GitRepository`](repository::GitRepository)
///
/// # 示例
/// ```no_run
/// use commit_edit::git::{GitOperations, RepositoryHandle, repository::GitRepository};
///
/// # fn main() -> anyhow::Result<()> {
/// let repo = GitRepository::open(&RepositoryHandle::new("."))?;
/// for entry in repo.status_matrix()? {
///     if entry.is_staged() {
///         println!("staged: {}", entry.path);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait GitOperations {
    /// 计算 HEAD / 工作区 / index 三棵树的状态矩阵
    ///
    /// 覆盖三者中出现过的所有路径（忽略的文件除外）。
    fn status_matrix(&self) -> Result<Vec<StatusEntry>>;

    /// 读取配置项
    ///
    /// # 返回
    /// - `Ok(Some(value))` - 配置存在
    /// - `Ok(None)` - 配置未设置
    /// - `Err(_)` - 读取失败
    fn get_config(&self, key: &str) -> Result<Option<String>>;

    /// 写入仓库级配置项
    fn set_config(&self, key: &str, value: &str) -> Result<()>;

    /// 获取当前分支名
    ///
    /// 尚无提交的分支（unborn）也能返回名称；detached HEAD 返回错误。
    fn current_branch(&self) -> Result<String>;

    /// 用当前 index 创建 commit 并移动 HEAD
    ///
    /// HEAD 指向的 commit（如果有）作为唯一 parent。
    ///
    /// # 参数
    /// - `message`: commit 消息，原样写入
    /// - `author`: 作者与提交者
    fn commit(&self, message: &str, author: &Author) -> Result<Oid>;
}
