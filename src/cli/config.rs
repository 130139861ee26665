// ============================================================================
// Nitrokit - CLI Config 命令
// ============================================================================
//
// 文件: src/cli/config.rs
// 职责: 用户级设置（如 Gemini API Key）的查看与修改
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 调用用户配置存储
//   - ❌ 不应包含项目配置（nitrokit.toml）处理
//   - ❌ 不应包含文件格式定义
//
// ============================================================================

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::models::user_config::{mask_secret, SettingKey, UserConfigStore};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 用户设置命令参数
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// 修改设置（如: config set gemini.apiKey <KEY>）
    Set {
        /// 设置键
        key: String,
        /// 设置值
        value: String,
    },
    /// 查看设置
    Get {
        /// 设置键
        key: String,
    },
    /// 显示用户配置文件位置
    Path,
}

/// 处理用户设置命令
pub fn handle_config(args: ConfigArgs) -> Result<()> {
    let path = UserConfigStore::default_location()
        .ok_or_else(|| anyhow::anyhow!(t!("config.no_home_dir")))?;
    let store = UserConfigStore::new(path);

    match args.action {
        ConfigAction::Set { key, value } => {
            let key = parse_key(&key)?;
            if value.trim().is_empty() {
                anyhow::bail!(t!("config.empty_value"));
            }
            store.set(key, value.trim())?;
            Logger::success(tf!("config.updated", key.as_str()));
        }
        ConfigAction::Get { key } => {
            let key = parse_key(&key)?;
            let value = match key {
                SettingKey::GeminiApiKey => store.resolve_gemini_api_key(),
            };
            match value {
                Some(value) if key.is_secret() => {
                    Logger::info(format!("{} = {}", key.as_str(), mask_secret(&value)))
                }
                Some(value) => Logger::info(format!("{} = {}", key.as_str(), value)),
                None => Logger::info(tf!("config.not_set", key.as_str())),
            }
        }
        ConfigAction::Path => {
            Logger::info(store.path().display().to_string());
        }
    }

    Ok(())
}

fn parse_key(key: &str) -> Result<SettingKey> {
    key.parse::<SettingKey>().map_err(|_| {
        let available: Vec<&str> = SettingKey::all().iter().map(|k| k.as_str()).collect();
        anyhow::anyhow!(tf!("config.unknown_key", key, available.join(", ")))
    })
}
