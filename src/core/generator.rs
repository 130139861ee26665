// ============================================================================
// Nitrokit - 语言生成编排器
// ============================================================================
//
// 文件: src/core/generator.rs
// 职责: 按顺序编排 解析 → 添加语言 → 设置默认语言 → 重建依赖文件
// 边界:
//   - ✅ 项目结构前置检查
//   - ✅ 一次性收集决策并计算全部文件内容
//   - ✅ 全部计算成功后统一提交写入
//   - ✅ 新语言消息目录的复制
//   - ✅ 结果汇总
//   - ❌ 不应包含 CLI 参数处理
//   - ❌ 不应包含用户交互
//   - ❌ 不应包含控制台输出格式化
//
// 流程设计:
// 1. 检查注册表文件与来源语言消息目录
// 2. 读取注册表并解析
// 3. 添加语言（可选），同时暂存新语言的消息包副本
// 4. 设置默认语言（可选），默认语言变化时暂存依赖文件
// 5. 暂存注册表本身（最后写入）
// 6. 非预演模式下提交
//
// ============================================================================

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::core::changeset::{ArtifactKind, ChangeSet};
use crate::core::error::{LocaleError, LocaleResult};
use crate::core::parser::parse_registry;
use crate::core::regenerator::{list_bundles, stage_regeneration, ArtifactPaths, LoaderConstruct};
use crate::core::writer::{add_locales, set_default_locale, EditOutcome};
use crate::models::config::{ProjectConfig, UnknownCodePolicy};

/// 项目中与语言相关的文件位置
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub registry: PathBuf,
    pub messages_dir: PathBuf,
    pub type_references: PathBuf,
    pub loader: PathBuf,
    pub declarations: PathBuf,
    pub source_locale: String,
}

impl ProjectLayout {
    /// 使用默认布局
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_config(root, &ProjectConfig::default())
    }

    /// 根据项目配置构建布局
    pub fn from_config(root: impl Into<PathBuf>, config: &ProjectConfig) -> Self {
        let root = root.into();
        Self {
            registry: root.join(&config.registry_file),
            messages_dir: root.join(&config.messages_dir),
            type_references: root.join(&config.type_references_file),
            loader: root.join(&config.loader_file),
            declarations: root.join(&config.declarations_file),
            source_locale: config.source_locale.clone(),
            root,
        }
    }

    /// 某个语言的消息目录
    pub fn locale_dir(&self, code: &str) -> PathBuf {
        self.messages_dir.join(code)
    }

    fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            type_references: self.type_references.clone(),
            declarations: self.declarations.clone(),
            loader: self.loader.clone(),
        }
    }
}

/// 一次生成的全部决策
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// 要添加的语言代码
    pub add: Vec<String>,
    /// 新的默认语言
    pub default_locale: Option<String>,
    /// 未知语言代码处理策略
    pub unknown_policy: UnknownCodePolicy,
    /// 只计算不写入
    pub dry_run: bool,
}

/// 生成结果
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    /// 最终语言列表
    pub codes: Vec<String>,
    /// 最终默认语言
    pub default_locale: String,
    /// 新增的语言
    pub added: Vec<String>,
    /// 已存在而被忽略的语言
    pub already_present: Vec<String>,
    /// 语言目录中没有的语言
    pub unknown: Vec<String>,
    /// 默认语言是否发生变化
    pub default_changed: bool,
    /// 参与声明重建的消息包
    pub bundles: Vec<String>,
    /// 因文件不存在而跳过的依赖文件
    pub skipped: Vec<PathBuf>,
    /// 加载文件中未找到的结构
    pub missing_loader_constructs: Vec<LoaderConstruct>,
    /// 已写入（预演模式下为计划写入）的文件
    pub files: Vec<(PathBuf, ArtifactKind)>,
    pub dry_run: bool,
}

impl GenerateReport {
    pub fn is_noop(&self) -> bool {
        self.files.is_empty()
    }
}

/// 语言生成编排器
pub struct LocaleGenerator {
    layout: ProjectLayout,
}

impl LocaleGenerator {
    /// 创建新的编排器
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// 检查项目结构，任何写入之前调用
    pub fn check_structure(&self) -> LocaleResult<()> {
        if !self.layout.registry.is_file() {
            return Err(LocaleError::ProjectStructure {
                path: self.layout.registry.clone(),
            });
        }
        let source_dir = self.layout.locale_dir(&self.layout.source_locale);
        if !source_dir.is_dir() {
            return Err(LocaleError::ProjectStructure { path: source_dir });
        }
        Ok(())
    }

    /// 执行生成
    pub fn run(&self, request: &GenerateRequest) -> LocaleResult<GenerateReport> {
        let (changes, mut report) = self.plan(request)?;

        report.files = changes
            .writes()
            .iter()
            .map(|w| (w.path.clone(), w.kind))
            .collect();

        if request.dry_run {
            info!(files = report.files.len(), "dry run, nothing written");
            return Ok(report);
        }

        changes.commit()?;
        Ok(report)
    }

    /// 计算全部待写文件，不做任何写入
    pub fn plan(&self, request: &GenerateRequest) -> LocaleResult<(ChangeSet, GenerateReport)> {
        self.check_structure()?;

        let original = fs::read_to_string(&self.layout.registry)
            .map_err(|e| LocaleError::io(&self.layout.registry, e))?;
        parse_registry(&original)?;

        let mut changes = ChangeSet::new();
        let mut report = GenerateReport {
            dry_run: request.dry_run,
            ..Default::default()
        };
        let mut text = original.clone();

        if !request.add.is_empty() {
            let added = add_locales(&text, &request.add, request.unknown_policy)?;
            report.added = added.added;
            report.already_present = added.already_present;
            report.unknown = added.unknown;
            text = added.outcome.into_text(&text);

            for code in &report.added {
                self.stage_locale_copy(code, &mut changes)?;
            }
        }

        if let Some(target) = &request.default_locale {
            if let EditOutcome::Changed(updated) = set_default_locale(&text, target)? {
                let bundles = self.bundles_for(target, &report.added)?;
                debug!(locale = %target, bundles = bundles.len(), "regenerating dependent files");

                let summary = stage_regeneration(
                    &self.layout.artifact_paths(),
                    target,
                    &bundles,
                    &mut changes,
                )?;
                report.bundles = summary.bundles;
                report.skipped = summary.skipped;
                report.missing_loader_constructs = summary.missing_loader_constructs;
                report.default_changed = true;
                text = updated;
            }
        }

        if text != original {
            changes.stage(&self.layout.registry, ArtifactKind::Registry, text.clone());
        }

        let doc = parse_registry(&text)?;
        report.codes = doc.registry().codes().to_vec();
        report.default_locale = doc.registry().default_code().to_string();

        Ok((changes, report))
    }

    /// 提交后新默认语言目录中的消息包
    ///
    /// 本次新增的语言：目录中已有的文件保留，缺少的由来源语言复制，
    /// 因此同名消息包优先读取目标目录，其余读取来源语言目录。
    fn bundles_for(&self, code: &str, added: &[String]) -> LocaleResult<Vec<(String, PathBuf)>> {
        let dir = self.layout.locale_dir(code);
        if !added.iter().any(|c| c == code) {
            return list_bundles(&dir);
        }

        let mut bundles = if dir.is_dir() {
            list_bundles(&dir)?
        } else {
            Vec::new()
        };
        let source_dir = self.layout.locale_dir(&self.layout.source_locale);
        for (name, path) in list_bundles(&source_dir)? {
            if !bundles.iter().any(|(existing, _)| *existing == name) {
                bundles.push((name, path));
            }
        }
        bundles.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(bundles)
    }

    /// 暂存来源语言消息目录到新语言目录的复制，已存在的文件不覆盖
    fn stage_locale_copy(&self, code: &str, changes: &mut ChangeSet) -> LocaleResult<()> {
        let source_dir = self.layout.locale_dir(&self.layout.source_locale);
        let target_dir = self.layout.locale_dir(code);

        for entry in WalkDir::new(&source_dir).follow_links(true) {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| source_dir.clone());
                LocaleError::io(path, e.into())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&source_dir)
                .unwrap_or_else(|_| entry.path());
            let target = target_dir.join(relative);
            if target.exists() || changes.contains(&target) {
                debug!(path = %target.display(), "keeping existing message file");
                continue;
            }

            let contents = fs::read(entry.path()).map_err(|e| LocaleError::io(entry.path(), e))?;
            changes.stage(target, ArtifactKind::BundleCopy, contents);
        }

        Ok(())
    }
}
