use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, builder::styling};

use crate::commands::format::OutputFormat;

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

#[derive(Parser)]
#[command(name = "commit-edit")]
#[command(author, version, about, long_about = None)]
#[command(styles = STYLES)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Repository location shared by all commands
#[derive(Args, Debug, Clone)]
pub struct RepoArgs {
    /// Repository working directory
    #[arg(short = 'C', long = "dir", default_value = ".")]
    pub dir: PathBuf,

    /// Git directory (default: <dir>/.git)
    #[arg(long)]
    pub git_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Commit staged changes, opening an editor when no message is given
    Commit {
        #[command(flatten)]
        repo: RepoArgs,

        /// Use the given message instead of opening an editor
        #[arg(short, long)]
        message: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, ignore_case = true, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Shortcut for --format json
        #[arg(long)]
        json: bool,
    },

    /// Write the commit message template and print it
    Template {
        #[command(flatten)]
        repo: RepoArgs,
    },
}
