//! Commit message 模板与解析
//!
//! - [`template`] - 生成交给编辑器的 `COMMIT_EDITMSG` 模板
//! - [`parser`] - 从编辑后的文本中取出最终 message

pub mod parser;
pub mod template;

pub use parser::parse_message;
pub use template::{branch_or_unknown, build_template, render_template, staged_paths_or_empty};
