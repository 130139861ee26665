// ============================================================================
// Nitrokit - 初始化命令处理
// ============================================================================
//
// 文件: src/cli/init.rs
// 职责: 处理项目配置文件初始化命令
// 边界:
//   - ✅ 初始化命令参数解析
//   - ✅ 默认配置文件生成
//   - ✅ 配置文件存在性检查
//   - ❌ 不应包含配置文件格式定义
//   - ❌ 不应包含业务逻辑处理
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::models::config::{Config, CONFIG_FILE_NAME};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 初始化命令参数
#[derive(Debug, Args)]
pub struct InitArgs {
    /// 配置文件路径（默认位于项目根目录）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 强制覆盖已存在的配置文件
    #[arg(short, long)]
    pub force: bool,
}

/// 处理初始化命令
pub fn handle_init(args: InitArgs) -> Result<()> {
    Logger::info(t!("init.start"));

    let config_path = args
        .config
        .unwrap_or_else(|| Config::get_project_root().join(CONFIG_FILE_NAME));

    // 检查配置文件是否已存在
    if config_path.exists() && !args.force {
        Logger::warn(tf!("init.config_exists", config_path.display()));
        Logger::info(t!("init.use_force_hint"));
        return Ok(());
    }

    // 生成默认配置文件
    match Config::create_default_config_file(&config_path) {
        Ok(_) => {
            Logger::success(tf!("init.config_created", config_path.display()));
            Logger::info(t!("init.next_steps"));
        }
        Err(e) => {
            Logger::error(tf!("init.create_failed", e));
            return Err(e);
        }
    }

    Ok(())
}
