// ============================================================================
// Nitrokit - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 全局配置初始化与运行时参数合并
//   - ✅ 命令路由分发
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含业务逻辑处理
//
// ============================================================================

pub mod config;
pub mod generate;
pub mod init;
pub mod languages;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::config::{Config, ConfigDefaults, RuntimeArgs, UnknownCodePolicy};
use crate::utils::colors::Colors;
use crate::utils::logger::Logger;
use config::{handle_config, ConfigArgs};
use generate::{handle_generate, GenerateArgs};
use init::{handle_init, InitArgs};
use languages::{handle_languages, LanguagesArgs};

/// Nitrokit - project scaffolding and localization CLI
#[derive(Debug, Parser)]
#[command(name = "nitrokit")]
#[command(about = "A CLI to help create and manage Nitrokit projects")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (en_us, tr_tr)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Project root directory
    #[arg(short = 'C', long, global = true)]
    pub project_root: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate and/or modify project files (schematic: language)
    Generate(GenerateArgs),
    /// Create a nitrokit.toml project configuration
    Init(InitArgs),
    /// Manage persistent user settings (e.g. API keys)
    Config(ConfigArgs),
    /// List supported languages
    Languages(LanguagesArgs),
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let project_root = cli
        .project_root
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::default_project_root);
    Config::initialize(&project_root)?;

    // Build runtime args to override config
    let runtime_args = build_runtime_args(&cli);
    // Merge runtime args to global config
    Config::merge_runtime_args(runtime_args)?;

    let verbose = Config::get_verbose();
    Logger::init_tracing(verbose);
    Colors::set_enabled(Config::get_colored());

    match cli.command {
        Commands::Generate(args) => handle_generate(args),
        Commands::Init(args) => handle_init(args),
        Commands::Config(args) => handle_config(args),
        Commands::Languages(args) => handle_languages(args),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    let strict = matches!(&cli.command, Commands::Generate(args) if args.strict);

    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        project_root: cli.project_root.clone(),
        language: cli.language.clone(),
        unknown_code_policy: if strict {
            Some(UnknownCodePolicy::Fail)
        } else {
            None
        },
    }
}
