use std::collections::HashMap;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::constants::editor::{
    ENV_VARS, UNIX_DEFAULT, VSCODE, VSCODE_WAIT_FLAG, VSCODE_WAIT_SHORT_FLAG, WINDOWS_DEFAULT,
};
use crate::error::{CommitEditError, Result};

/// 环境变量读取能力
///
/// 编辑器解析只通过这个 trait 读取环境，测试中可以用 `HashMap` 代替进程环境。
pub trait EnvProvider {
    fn var(&self, key: &str) -> Option<String>;
}

/// 读取当前进程的环境变量
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvProvider for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// 编辑器命令行：`[program, ...args]`
///
/// 目标文件路径在启动时追加，不保存在这里。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    argv: Vec<String>,
}

impl EditorCommand {
    /// Returns `None` for an empty argv.
    pub fn new(argv: Vec<String>) -> Option<Self> {
        if argv.is_empty() {
            None
        } else {
            Some(Self { argv })
        }
    }

    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }
}

/// 解析用户的编辑器命令
///
/// 按 `GIT_EDITOR` > `VISUAL` > `EDITOR` 取第一个非空值；都未设置时
/// Windows 使用 `notepad`，其他平台使用 `vi`。
///
/// VS Code 默认立即返回，因此在缺少 `--wait` / `-w` 时自动追加 `--wait`。
pub fn resolve_command(env: &dyn EnvProvider) -> EditorCommand {
    let configured = ENV_VARS.iter().find_map(|key| {
        env.var(key)
            .filter(|value| !value.trim().is_empty())
            .map(|value| (*key, value))
    });

    let mut argv = match configured {
        Some((key, value)) => {
            tracing::debug!("Using editor from {}: {}", key, value);
            tokenize(&value)
        }
        None => vec![platform_default().to_string()],
    };

    if needs_wait_flag(&argv) {
        argv.push(VSCODE_WAIT_FLAG.to_string());
    }

    EditorCommand::new(argv).unwrap_or_else(|| EditorCommand {
        argv: vec![platform_default().to_string()],
    })
}

fn platform_default() -> &'static str {
    if cfg!(windows) {
        WINDOWS_DEFAULT
    } else {
        UNIX_DEFAULT
    }
}

/// 拆分编辑器命令字符串
///
/// 非 Windows 平台按 shell 规则拆分（支持引号）；拆分失败时（如引号不成对）
/// 以及在 Windows 上，退回到按单个空格切分。后者不处理带引号的参数。
fn tokenize(command: &str) -> Vec<String> {
    if !cfg!(windows)
        && let Ok(words) = shell_words::split(command)
        && !words.is_empty()
    {
        return words;
    }
    split_on_spaces(command)
}

fn split_on_spaces(command: &str) -> Vec<String> {
    command
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn needs_wait_flag(argv: &[String]) -> bool {
    let Some((program, args)) = argv.split_first() else {
        return false;
    };
    program.ends_with(VSCODE)
        && !args
            .iter()
            .any(|a| a == VSCODE_WAIT_FLAG || a == VSCODE_WAIT_SHORT_FLAG)
}

/// 启动编辑器并等待其退出
///
/// 继承当前进程的标准输入输出，终端编辑器可以直接交互。
///
/// # Returns
/// * `Ok(code)` - 编辑器的退出码；非零不视为错误（被信号终止时为 -1）
/// * `Err(CommitEditError::EditorStart)` - 进程无法启动
pub async fn launch(command: &EditorCommand, file: &Path) -> Result<i32> {
    tracing::debug!(
        "Launching editor: {} {:?} {}",
        command.program(),
        command.args(),
        file.display()
    );

    let status = Command::new(command.program())
        .args(command.args())
        .arg(file)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|source| CommitEditError::EditorStart {
            program: command.program().to_string(),
            source,
        })?;

    let code = status.code().unwrap_or(-1);
    if code != 0 {
        tracing::debug!("Editor exited with status {}", code);
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn argv(env_map: &HashMap<String, String>) -> Vec<String> {
        resolve_command(env_map).argv().to_vec()
    }

    #[test]
    fn test_vscode_gets_wait_flag() {
        assert_eq!(argv(&env(&[("GIT_EDITOR", "code")])), vec!["code", "--wait"]);
    }

    #[test]
    fn test_vscode_wait_flag_not_duplicated() {
        assert_eq!(
            argv(&env(&[("GIT_EDITOR", "code --wait")])),
            vec!["code", "--wait"]
        );
        assert_eq!(argv(&env(&[("GIT_EDITOR", "code -w")])), vec!["code", "-w"]);
    }

    #[test]
    fn test_vscode_full_path_gets_wait_flag() {
        assert_eq!(
            argv(&env(&[("EDITOR", "/usr/local/bin/code --new-window")])),
            vec!["/usr/local/bin/code", "--new-window", "--wait"]
        );
    }

    #[test]
    fn test_env_priority_order() {
        let all = env(&[("GIT_EDITOR", "nano"), ("VISUAL", "emacs"), ("EDITOR", "ed")]);
        assert_eq!(argv(&all), vec!["nano"]);

        let visual = env(&[("VISUAL", "emacs"), ("EDITOR", "ed")]);
        assert_eq!(argv(&visual), vec!["emacs"]);

        let editor = env(&[("EDITOR", "ed")]);
        assert_eq!(argv(&editor), vec!["ed"]);
    }

    #[test]
    fn test_blank_values_are_skipped() {
        let e = env(&[("GIT_EDITOR", ""), ("VISUAL", "   "), ("EDITOR", "vim")]);
        assert_eq!(argv(&e), vec!["vim"]);
    }

    #[test]
    fn test_platform_default() {
        let expected = if cfg!(windows) { "notepad" } else { "vi" };
        assert_eq!(argv(&HashMap::new()), vec![expected]);
    }

    #[test]
    fn test_split_on_spaces_drops_empty_tokens() {
        assert_eq!(
            split_on_spaces("vim  -f   +1"),
            vec!["vim", "-f", "+1"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_quoted_arguments() {
        assert_eq!(
            argv(&env(&[("EDITOR", "'/opt/My Editor/bin/edit' --block")])),
            vec!["/opt/My Editor/bin/edit", "--block"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_unbalanced_quote_falls_back_to_naive_split() {
        assert_eq!(
            argv(&env(&[("EDITOR", "vim \"-c set")])),
            vec!["vim", "\"-c", "set"]
        );
    }

    #[test]
    fn test_editor_command_rejects_empty_argv() {
        assert!(EditorCommand::new(vec![]).is_none());
        let cmd = EditorCommand::new(vec!["vi".to_string(), "-n".to_string()]).unwrap();
        assert_eq!(cmd.program(), "vi");
        assert_eq!(cmd.args(), ["-n".to_string()]);
    }

    #[tokio::test]
    async fn test_launch_missing_executable() {
        let cmd = EditorCommand::new(vec!["commit-edit-no-such-editor".to_string()]).unwrap();
        let result = launch(&cmd, Path::new("COMMIT_EDITMSG")).await;
        match result {
            Err(CommitEditError::EditorStart { program, .. }) => {
                assert_eq!(program, "commit-edit-no-such-editor")
            }
            other => panic!("expected EditorStart, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_launch_returns_nonzero_exit_code() {
        let cmd = EditorCommand::new(vec![
            "sh".to_string(),
            "-c".to_string(),
            "exit 3".to_string(),
        ])
        .unwrap();
        assert_eq!(launch(&cmd, Path::new("ignored")).await.unwrap(), 3);
    }
}
