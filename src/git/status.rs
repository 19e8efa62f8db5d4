//! HEAD / 工作区 / index 三棵树的状态矩阵
//!
//! 每个路径对应三个状态值，数值编码与常见的 status matrix 约定一致：
//!
//! | 状态    | 0      | 1               | 2                  | 3                   |
//! |---------|--------|-----------------|--------------------|---------------------|
//! | head    | 不存在 | 存在            |                    |                     |
//! | workdir | 不存在 | 与 HEAD 相同    | 与 HEAD 不同       |                     |
//! | stage   | 不存在 | 与 HEAD 相同    | 与工作区相同       | 与工作区不同        |
//!
//! 符号链接按链接内容（目标路径文本）计算 blob，与 git 的存储方式一致。
//! 子模块（gitlink）不是 blob，不出现在矩阵中。

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::Path;

use git2::{ErrorCode, ObjectType, Oid, Repository, StatusOptions, TreeWalkMode, TreeWalkResult};

use crate::error::{CommitEditError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadState {
    Absent = 0,
    Present = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkdirState {
    Absent = 0,
    /// Identical to the HEAD blob.
    Unchanged = 1,
    /// Differs from HEAD, or not in HEAD at all.
    Modified = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageState {
    Absent = 0,
    MatchesHead = 1,
    MatchesWorkdir = 2,
    DiffersFromWorkdir = 3,
}

impl HeadState {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl WorkdirState {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl StageState {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// 单个路径的状态矩阵行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// 相对于仓库根目录，使用 `/` 分隔
    pub path: String,
    pub head: HeadState,
    pub workdir: WorkdirState,
    pub stage: StageState,
}

impl StatusEntry {
    pub fn new(
        path: impl Into<String>,
        head: HeadState,
        workdir: WorkdirState,
        stage: StageState,
    ) -> Self {
        Self {
            path: path.into(),
            head,
            workdir,
            stage,
        }
    }

    /// 路径是否出现在 index 中
    ///
    /// 采用 index-presence 约定：stage 不为 0 即视为已暂存。
    pub fn is_staged(&self) -> bool {
        self.stage != StageState::Absent
    }

    /// `[head, workdir, stage]` 的数值形式
    pub fn codes(&self) -> [u8; 3] {
        [self.head.code(), self.workdir.code(), self.stage.code()]
    }
}

/// 计算仓库的状态矩阵
///
/// 结果按路径字典序排列。被 ignore 的未跟踪文件和子模块不会出现。
pub fn status_matrix(repo: &Repository) -> Result<Vec<StatusEntry>> {
    let workdir = repo.workdir().ok_or_else(|| {
        CommitEditError::InvalidInput("bare repository has no working tree".to_string())
    })?;

    let head_blobs = head_tree_blobs(repo)?;
    let staged_blobs = index_blobs(repo)?;

    let mut paths: BTreeSet<String> = head_blobs.keys().cloned().collect();
    paths.extend(staged_blobs.keys().cloned());
    paths.extend(untracked_paths(repo)?);

    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
        let head_oid = head_blobs.get(&path).copied();
        let stage_oid = staged_blobs.get(&path).copied();
        let workdir_oid = hash_workdir_file(&workdir.join(&path))?;

        entries.push(classify(path, head_oid, workdir_oid, stage_oid));
    }

    tracing::debug!("status matrix: {} path(s)", entries.len());
    Ok(entries)
}

/// 由三个 blob id 推导状态
///
/// stage 先与 HEAD 比较，再与工作区比较。
fn classify(
    path: String,
    head_oid: Option<Oid>,
    workdir_oid: Option<Oid>,
    stage_oid: Option<Oid>,
) -> StatusEntry {
    let head = if head_oid.is_some() {
        HeadState::Present
    } else {
        HeadState::Absent
    };

    let workdir = match workdir_oid {
        None => WorkdirState::Absent,
        Some(oid) if Some(oid) == head_oid => WorkdirState::Unchanged,
        Some(_) => WorkdirState::Modified,
    };

    let stage = match stage_oid {
        None => StageState::Absent,
        Some(oid) if Some(oid) == head_oid => StageState::MatchesHead,
        Some(oid) if Some(oid) == workdir_oid => StageState::MatchesWorkdir,
        Some(_) => StageState::DiffersFromWorkdir,
    };

    StatusEntry {
        path,
        head,
        workdir,
        stage,
    }
}

fn head_tree_blobs(repo: &Repository) -> Result<BTreeMap<String, Oid>> {
    let head = match repo.head() {
        Ok(head) => head,
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            return Ok(BTreeMap::new());
        }
        Err(e) => return Err(e.into()),
    };

    let tree = head.peel_to_tree()?;
    let mut blobs = BTreeMap::new();
    tree.walk(TreeWalkMode::PreOrder, |root, entry| {
        if entry.kind() == Some(ObjectType::Blob)
            && let Some(name) = entry.name()
        {
            blobs.insert(format!("{}{}", root, name), entry.id());
        }
        TreeWalkResult::Ok
    })?;
    Ok(blobs)
}

const GITLINK_MODE: u32 = 0o160000;

fn index_blobs(repo: &Repository) -> Result<BTreeMap<String, Oid>> {
    let mut index = repo.index()?;
    // 其他进程可能已经改写了 index 文件
    index.read(false)?;
    Ok(index
        .iter()
        .filter(|entry| entry.mode != GITLINK_MODE)
        .map(|entry| (String::from_utf8_lossy(&entry.path).into_owned(), entry.id))
        .collect())
}

/// 未跟踪且未被忽略的工作区文件
fn untracked_paths(repo: &Repository) -> Result<Vec<String>> {
    let mut opts = StatusOptions::new();
    opts.include_untracked(true)
        .recurse_untracked_dirs(true)
        .include_ignored(false)
        .exclude_submodules(true);

    let statuses = repo.statuses(Some(&mut opts))?;
    Ok(statuses
        .iter()
        .filter(|s| s.status().is_wt_new())
        .filter_map(|s| s.path().map(str::to_string))
        .collect())
}

/// 工作区文件的 blob id，不存在或是目录时为 None
///
/// 不跟随符号链接：链接本身的内容是目标路径。
fn hash_workdir_file(path: &Path) -> Result<Option<Oid>> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    if metadata.file_type().is_symlink() {
        let target = fs::read_link(path)?;
        return Ok(Some(Oid::hash_object(
            ObjectType::Blob,
            &link_target_bytes(&target),
        )?));
    }
    if !metadata.is_file() {
        return Ok(None);
    }
    Ok(Some(Oid::hash_file(ObjectType::Blob, path)?))
}

#[cfg(unix)]
fn link_target_bytes(target: &Path) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    target.as_os_str().as_bytes().to_vec()
}

#[cfg(not(unix))]
fn link_target_bytes(target: &Path) -> Vec<u8> {
    target.to_string_lossy().replace('\\', "/").into_bytes()
}
