//! 全局常量定义

/// Commit 相关常量
pub mod commit {
    /// 对象库目录的默认名称
    pub const DEFAULT_GIT_DIR_NAME: &str = ".git";

    /// 编辑器模板文件名（位于对象库目录下）
    pub const TEMPLATE_FILE_NAME: &str = "COMMIT_EDITMSG";

    /// `user.name` 未设置时的作者名
    pub const DEFAULT_AUTHOR_NAME: &str = "Unknown";

    /// `user.email` 未设置时的作者邮箱
    pub const DEFAULT_AUTHOR_EMAIL: &str = "unknown@example.com";

    /// 分支名无法读取时的占位
    pub const UNKNOWN_BRANCH: &str = "unknown";
}

/// 编辑器相关常量
pub mod editor {
    /// 按优先级排列的编辑器环境变量
    pub const ENV_VARS: [&str; 3] = ["GIT_EDITOR", "VISUAL", "EDITOR"];

    /// Windows 平台默认编辑器
    pub const WINDOWS_DEFAULT: &str = "notepad";

    /// 其他平台默认编辑器
    pub const UNIX_DEFAULT: &str = "vi";

    /// VS Code 可执行文件名，默认不阻塞
    pub const VSCODE: &str = "code";

    /// 让 VS Code 等待窗口关闭的参数
    pub const VSCODE_WAIT_FLAG: &str = "--wait";

    /// `--wait` 的短参数形式
    pub const VSCODE_WAIT_SHORT_FLAG: &str = "-w";
}
