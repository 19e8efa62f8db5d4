//! Command implementations.
//!
//! # Modules
//! - `commit` - Commit workflow (direct message or editor-driven).
//! - `template` - Write and print the commit message template.
//! - `format` - Output format definition.
//! - `options` - Command option structs.
//! - `json` - JSON output helpers.
//!
//! # Architecture
//! ```text
//! CLI (cli.rs)
//!   ├── commands/commit.rs ─> commands/template.rs ─> message/template.rs
//!   │                      ─> ui/editor.rs ─> message/parser.rs ─> git/
//!   ├── commands/template.rs
//!   └── shared command options (commands/options.rs)
//! ```

/// Commit workflow.
pub mod commit;
/// Output format types and parsing helpers.
pub mod format;
/// Shared JSON output helpers.
pub mod json;
/// Shared command option structs.
pub mod options;
/// Template preview command.
pub mod template;

pub use format::OutputFormat;
pub use options::{CommitOptions, TemplateOptions};
