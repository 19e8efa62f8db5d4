use serde::Serialize;

use crate::error::{CommitEditError, Result};

/// JSON 错误输出结构（统一）
#[derive(Debug, Serialize)]
pub struct ErrorJson {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorJson {
    /// 从 CommitEditError 创建 ErrorJson
    pub fn from_error(err: &CommitEditError) -> Self {
        Self {
            code: error_to_code(err),
            message: err.to_string(),
            suggestion: err.suggestion().map(String::from),
        }
    }
}

/// 通用的 JSON 输出结构
#[derive(Debug, Serialize)]
pub struct JsonOutput<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorJson>,
}

/// 输出 JSON 格式的成功结果
pub fn output_json_success<T: Serialize>(data: T) -> Result<()> {
    let output = JsonOutput {
        success: true,
        data: Some(data),
        error: None,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// 输出 JSON 格式的错误（通用函数）
///
/// # 示例
/// ```no_run
/// use commit_edit::commands::json;
/// use commit_edit::error::CommitEditError;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// json::output_json_error::<String>(&CommitEditError::EmptyMessage)?;
/// # Ok(())
/// # }
/// ```
pub fn output_json_error<T: Serialize>(err: &CommitEditError) -> Result<()> {
    let output = JsonOutput::<T> {
        success: false,
        data: None,
        error: Some(ErrorJson::from_error(err)),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// 将错误类型映射为 code 字符串
pub fn error_to_code(err: &CommitEditError) -> String {
    match err {
        CommitEditError::EmptyMessage => "EMPTY_MESSAGE",
        CommitEditError::EditorStart { .. } => "EDITOR_START_FAILED",
        CommitEditError::TemplateWrite { .. } => "TEMPLATE_WRITE_FAILED",
        CommitEditError::MessageRead { .. } => "MESSAGE_READ_FAILED",
        CommitEditError::InvalidInput(_) => "INVALID_INPUT",
        CommitEditError::Config(_) | CommitEditError::ConfigParse(_) => "CONFIG_ERROR",
        CommitEditError::Git(_) | CommitEditError::DetachedHead => "GIT_ERROR",
        CommitEditError::Io(_) => "IO_ERROR",
        _ => "UNKNOWN_ERROR",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_json_serialization() {
        let json = serde_json::to_value(JsonOutput::<String> {
            success: false,
            data: None,
            error: Some(ErrorJson::from_error(&CommitEditError::EmptyMessage)),
        })
        .unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "EMPTY_MESSAGE");
        assert!(json["error"]["suggestion"].is_string());
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_error_to_code() {
        assert_eq!(
            error_to_code(&CommitEditError::Git(git2::Error::from_str("x"))),
            "GIT_ERROR"
        );
        assert_eq!(
            error_to_code(&CommitEditError::Config("x".to_string())),
            "CONFIG_ERROR"
        );
    }
}
