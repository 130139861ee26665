// ============================================================================
// Nitrokit - CLI Generate 命令
// ============================================================================
//
// 文件: src/cli/generate.rs
// 职责: 语言生成命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 组装生成请求并调用编排器
//   - ✅ 结果输出和后续步骤提示
//   - ❌ 不应包含注册表解析与改写逻辑
//   - ❌ 不应包含文件写入
//
// ============================================================================

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::Path;

use crate::core::{GenerateReport, GenerateRequest, LocaleError, LocaleGenerator, ProjectLayout};
use crate::models::config::Config;
use crate::utils::colors::Colors;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::utils::spinner::Spinner;
use crate::{t, tf};

/// 可生成的内容
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Schematic {
    /// 语言：添加语言和/或设置默认语言
    Language,
}

/// 生成命令参数
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// 要生成的内容
    #[arg(value_enum)]
    pub schematic: Schematic,

    /// 要添加的语言代码，逗号分隔（如: fr,de）
    #[arg(short = 'a', long, value_delimiter = ',')]
    pub add: Vec<String>,

    /// 新的默认语言
    #[arg(short = 'd', long = "default")]
    pub default_locale: Option<String>,

    /// 只显示将要写入的文件，不实际写入
    #[arg(long)]
    pub dry_run: bool,

    /// 遇到语言目录中不存在的代码时整批失败
    #[arg(long)]
    pub strict: bool,
}

/// 处理生成命令
pub fn handle_generate(args: GenerateArgs) -> Result<()> {
    match args.schematic {
        Schematic::Language => generate_language(args),
    }
}

fn generate_language(args: GenerateArgs) -> Result<()> {
    Logger::info(t!("generate.start"));

    let root = Config::get_project_root();
    let layout = ProjectLayout::from_config(&root, &Config::get_project_config());
    let generator = LocaleGenerator::new(layout);

    let request = GenerateRequest {
        add: args.add,
        default_locale: args.default_locale,
        unknown_policy: Config::get_unknown_code_policy(),
        dry_run: args.dry_run,
    };

    if request.add.is_empty() && request.default_locale.is_none() {
        return show_current_state(&generator);
    }

    let mut spinner = Spinner::start(
        t!("generate.working"),
        Spinner::should_show(Config::get_verbose()),
    );
    let result = generator.run(&request);
    spinner.stop();

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            if matches!(e, LocaleError::ProjectStructure { .. }) {
                Logger::warn(t!("generate.project_root_hint"));
            }
            return Err(anyhow::Error::new(e).context(t!("generate.failed")));
        }
    };

    display_report(&report, &request, generator.layout());
    Ok(())
}

/// 未指定任何操作时，只显示当前语言配置
fn show_current_state(generator: &LocaleGenerator) -> Result<()> {
    let report = generator.run(&GenerateRequest {
        dry_run: true,
        ..Default::default()
    })?;
    Logger::info(tf!(
        "generate.current_state",
        report.codes.join(", "),
        report.default_locale
    ));
    Logger::info(t!("generate.usage_hint"));
    Ok(())
}

fn display_report(report: &GenerateReport, request: &GenerateRequest, layout: &ProjectLayout) {
    if !report.unknown.is_empty() {
        Logger::warn(tf!("generate.unknown_codes", report.unknown.join(", ")));
    }
    if !report.already_present.is_empty() {
        Logger::info(tf!(
            "generate.already_present",
            report.already_present.join(", ")
        ));
    }

    if !report.added.is_empty() {
        Logger::success(tf!("generate.added", report.added.join(", ")));
    } else if !request.add.is_empty() {
        Logger::info(t!("generate.nothing_added"));
    }

    if report.default_changed {
        Logger::success(tf!("generate.default_set", report.default_locale));
    } else if let Some(target) = &request.default_locale {
        Logger::info(tf!("generate.default_unchanged", target));
    }

    for path in &report.skipped {
        Logger::warn(tf!(
            "generate.skipped_file",
            relative(path, &layout.root)
        ));
    }
    for construct in &report.missing_loader_constructs {
        Logger::warn(tf!("generate.loader_construct_missing", construct.as_str()));
    }

    if report.is_noop() {
        Logger::info(t!("generate.no_changes"));
    } else {
        let marker = if report.dry_run {
            icons::ARROW
        } else {
            icons::SUCCESS
        };
        for (path, kind) in &report.files {
            Logger::info(format!(
                "  {} {} {}",
                Colors::success(marker),
                relative(path, &layout.root),
                Colors::dim(&format!("({})", kind.as_str()))
            ));
        }
    }

    Logger::info(tf!(
        "generate.current_state",
        report.codes.join(", "),
        report.default_locale
    ));

    if report.dry_run {
        Logger::info(t!("generate.dry_run_complete"));
    } else if !report.added.is_empty() {
        Logger::info(t!("generate.next_steps"));
        Logger::info(tf!(
            "generate.next_steps_translate",
            relative(&layout.messages_dir, &layout.root)
        ));
    }
}

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
