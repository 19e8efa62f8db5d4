use clap::ValueEnum;

/// `--format` 的取值，`--json` 是 `--format json` 的简写
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Text,
    /// Machine-readable JSON output.
    Json,
}

impl OutputFormat {
    /// 合并 `--format` 与 `--json`，后者优先
    pub fn resolve(self, json: bool) -> Self {
        if json { Self::Json } else { self }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    /// JSON 输出不带颜色
    pub fn effective_colored(&self, config_colored: bool) -> bool {
        !self.is_json() && config_colored
    }
}
