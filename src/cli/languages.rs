// ============================================================================
// Nitrokit - CLI Languages 命令
// ============================================================================
//
// 文件: src/cli/languages.rs
// 职责: 列出支持的语言，并标记当前项目中已添加的语言
// 边界:
//   - ✅ 命令行参数定义
//   - ✅ 语言目录展示
//   - ❌ 不应修改任何文件
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::fs;

use crate::core::{parse_registry, ProjectLayout};
use crate::models::config::Config;
use crate::models::language::SUPPORTED_LANGUAGES;
use crate::models::locale::LocaleRegistry;
use crate::utils::colors::Colors;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 语言列表命令参数
#[derive(Debug, Args)]
pub struct LanguagesArgs {
    /// 只显示尚未添加到项目中的语言
    #[arg(long)]
    pub available: bool,
}

/// 处理语言列表命令
pub fn handle_languages(args: LanguagesArgs) -> Result<()> {
    let layout = ProjectLayout::from_config(Config::get_project_root(), &Config::get_project_config());
    let registry = load_registry(&layout);

    Logger::info(t!("languages.header"));
    for lang in SUPPORTED_LANGUAGES {
        let present = registry.as_ref().map(|r| r.contains(lang.code)).unwrap_or(false);
        if args.available && present {
            continue;
        }

        let marker = match &registry {
            Some(r) if r.default_code() == lang.code => Colors::warn(icons::DEFAULT),
            Some(_) if present => Colors::success(icons::SUCCESS),
            _ => Colors::dim(icons::SKIP),
        };
        println!(
            "  {} {:<4} {} {}",
            marker,
            Colors::bold(lang.code),
            lang.name,
            Colors::dim(&format!("({})", lang.native_name))
        );
    }

    if let Some(registry) = &registry {
        Logger::info(tf!(
            "generate.current_state",
            registry.codes().join(", "),
            registry.default_code()
        ));
    }
    Ok(())
}

/// 项目外运行时没有注册表，只展示目录
fn load_registry(layout: &ProjectLayout) -> Option<LocaleRegistry> {
    let text = fs::read_to_string(&layout.registry).ok()?;
    match parse_registry(&text) {
        Ok(doc) => Some(doc.registry().clone()),
        Err(e) => {
            Logger::warn(tf!("languages.registry_unreadable", e));
            None
        }
    }
}
