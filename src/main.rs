use commit_edit::*;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 根据 verbose 标志设置日志级别
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // 初始化 tracing 日志（输出到 stderr，避免污染 JSON 输出）
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .init();

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            report_error(&e, true);
            std::process::exit(1);
        }
    };

    let rt = Runtime::new()?;

    rt.block_on(async {
        match cli.command {
            Commands::Commit {
                ref repo,
                ref message,
                ref format,
                json,
            } => {
                let options =
                    commands::CommitOptions::from_cli(repo, message.as_deref(), *format, json);
                if let Err(e) = commands::commit::run(&options, &config).await {
                    // JSON 模式下，错误已经输出过 JSON 了，直接退出
                    if options.format.is_json() {
                        std::process::exit(1);
                    }
                    match e {
                        error::CommitEditError::EmptyMessage => {
                            ui::warning(&e.to_string(), config.ui.colored);
                        }
                        _ => report_error(&e, config.ui.colored),
                    }
                    std::process::exit(1);
                }
                Ok(())
            }
            Commands::Template { ref repo } => {
                let options = commands::TemplateOptions::from_cli(repo);
                if let Err(e) = commands::template::run(&options, &config).await {
                    report_error(&e, config.ui.colored);
                    std::process::exit(1);
                }
                Ok(())
            }
        }
    })
}

fn report_error(e: &error::CommitEditError, colored: bool) {
    ui::error(&e.to_string(), colored);
    if let Some(suggestion) = e.suggestion() {
        eprintln!();
        eprintln!("{}", ui::info(suggestion, colored));
    }
}
