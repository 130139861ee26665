// ============================================================================
// Nitrokit - 依赖文件重建
// ============================================================================
//
// 文件: src/core/regenerator.rs
// 职责: 默认语言变化后重建依赖默认语言的文件
// 边界:
//   - ✅ 类型引用文件中消息路径的语言段替换
//   - ✅ 声明汇总文件（默认语言所有消息包的合集）构建
//   - ✅ 动态加载文件的 import 列表与字段列表重写
//   - ✅ 将以上结果暂存到 ChangeSet
//   - ❌ 不应直接写文件
//   - ❌ 不应修改语言注册表
//
// 处理顺序:
// 1. 类型引用重写（目标文件不存在则跳过）
// 2. 声明汇总重建（任一消息包无法解析即失败，消息包列表由调用方给出）
// 3. 动态加载文件重写（目标文件不存在则跳过）
//
// ============================================================================

use regex::{NoExpand, Regex};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::core::changeset::{ArtifactKind, ChangeSet};
use crate::core::error::{LocaleError, LocaleResult};

fn message_path_segment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\.\./messages/)[a-z]{2,5}(/)").expect("valid message path pattern")
    })
}

fn loader_imports() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"const messageModules = await Promise\.all\(\[[\s\S]*?\]\);")
            .expect("valid loader import pattern")
    })
}

fn loader_fields() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"messages: \{[\s\S]*?\},").expect("valid loader field pattern"))
}

/// 依赖文件路径
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub type_references: PathBuf,
    pub declarations: PathBuf,
    pub loader: PathBuf,
}

/// 加载文件中的可替换结构
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderConstruct {
    /// `const messageModules = await Promise.all([...]);`
    ImportList,
    /// `messages: { ... },`
    FieldList,
}

impl LoaderConstruct {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoaderConstruct::ImportList => "messageModules import list",
            LoaderConstruct::FieldList => "messages field list",
        }
    }
}

/// 加载文件重写结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderRewrite {
    pub text: String,
    /// 未找到、因此保持原样的结构
    pub missing: Vec<LoaderConstruct>,
}

/// 重建摘要
#[derive(Debug, Clone, Default)]
pub struct RegenerationSummary {
    /// 参与重建的消息包名称（按文件名排序）
    pub bundles: Vec<String>,
    /// 因目标文件不存在而跳过的步骤
    pub skipped: Vec<PathBuf>,
    /// 加载文件中未找到的结构
    pub missing_loader_constructs: Vec<LoaderConstruct>,
}

/// 将类型引用中 `../messages/<语言>/` 的语言段替换为新语言
pub fn rewrite_type_references(text: &str, locale: &str) -> String {
    let replacement = format!("${{1}}{}${{2}}", locale);
    message_path_segment()
        .replace_all(text, replacement.as_str())
        .into_owned()
}

/// 列出目录下所有 `*.json` 消息包，按文件名排序
pub fn list_bundles(dir: &Path) -> LocaleResult<Vec<(String, PathBuf)>> {
    if !dir.is_dir() {
        return Err(LocaleError::BundleRead {
            path: dir.to_path_buf(),
            reason: "message directory does not exist".to_string(),
        });
    }

    let pattern = format!(
        "{}/*.json",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    let paths = glob::glob(&pattern).map_err(|e| LocaleError::BundleRead {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut bundles = Vec::new();
    for entry in paths {
        let path = entry.map_err(|e| LocaleError::BundleRead {
            path: e.path().to_path_buf(),
            reason: e.to_string(),
        })?;
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_stem().and_then(|s| s.to_str()) {
            bundles.push((name.to_string(), path.clone()));
        }
    }
    bundles.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(bundles)
}

/// 读取消息包并组装为 `{名称: 内容}`
pub fn build_declarations(bundles: &[(String, PathBuf)]) -> LocaleResult<Map<String, Value>> {
    let mut declarations = Map::new();

    for (name, path) in bundles {
        let content = fs::read_to_string(path).map_err(|e| LocaleError::BundleRead {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let value: Value = serde_json::from_str(&content).map_err(|e| LocaleError::BundleRead {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        if !value.is_object() {
            return Err(LocaleError::BundleRead {
                path: path.clone(),
                reason: "expected a JSON object".to_string(),
            });
        }
        declarations.insert(name.clone(), value);
    }

    Ok(declarations)
}

/// 以两空格缩进输出声明汇总文件
pub fn render_declarations(declarations: &Map<String, Value>) -> LocaleResult<String> {
    let mut out = serde_json::to_string_pretty(declarations)
        .map_err(|e| LocaleError::parse(format!("could not serialize declarations: {}", e)))?;
    out.push('\n');
    Ok(out)
}

/// 重写加载文件中的 import 列表与字段列表
pub fn rewrite_loader(text: &str, bundles: &[String]) -> LoaderRewrite {
    let imports: Vec<String> = bundles
        .iter()
        .map(|name| format!("        import(`../../../messages/${{locale}}/{}.json`),", name))
        .collect();
    let fields: Vec<String> = bundles
        .iter()
        .enumerate()
        .map(|(index, name)| format!("            {}: messageModules[{}].default,", name, index))
        .collect();

    let import_block = format!(
        "const messageModules = await Promise.all([\n{}\n    ]);",
        imports.join("\n")
    );
    let field_block = format!("messages: {{\n{}\n        }},", fields.join("\n"));

    let mut missing = Vec::new();
    let mut out = text.to_string();

    if loader_imports().is_match(&out) {
        out = loader_imports()
            .replace(&out, NoExpand(&import_block))
            .into_owned();
    } else {
        missing.push(LoaderConstruct::ImportList);
    }

    if loader_fields().is_match(&out) {
        out = loader_fields()
            .replace(&out, NoExpand(&field_block))
            .into_owned();
    } else {
        missing.push(LoaderConstruct::FieldList);
    }

    LoaderRewrite { text: out, missing }
}

/// 计算默认语言切换后的依赖文件，并暂存到 `changes`
///
/// `bundles` 是提交后新默认语言目录中的消息包（名称, 读取路径），按名称排序。
pub fn stage_regeneration(
    paths: &ArtifactPaths,
    locale: &str,
    bundles: &[(String, PathBuf)],
    changes: &mut ChangeSet,
) -> LocaleResult<RegenerationSummary> {
    let mut summary = RegenerationSummary::default();

    // 1. 类型引用
    match read_optional(&paths.type_references)? {
        Some(text) => {
            let rewritten = rewrite_type_references(&text, locale);
            if rewritten != text {
                changes.stage(&paths.type_references, ArtifactKind::TypeReferences, rewritten);
            }
        }
        None => {
            warn!(path = %paths.type_references.display(), "type reference file not found, skipping");
            summary.skipped.push(paths.type_references.clone());
        }
    }

    // 2. 声明汇总
    let declarations = build_declarations(bundles)?;
    changes.stage(
        &paths.declarations,
        ArtifactKind::Declarations,
        render_declarations(&declarations)?,
    );
    summary.bundles = bundles.iter().map(|(name, _)| name.clone()).collect();
    debug!(bundles = ?summary.bundles, "declarations rebuilt");

    // 3. 动态加载文件
    match read_optional(&paths.loader)? {
        Some(text) => {
            let rewrite = rewrite_loader(&text, &summary.bundles);
            for construct in &rewrite.missing {
                warn!(path = %paths.loader.display(), construct = construct.as_str(), "loader construct not found, left unchanged");
            }
            if rewrite.text != text {
                changes.stage(&paths.loader, ArtifactKind::Loader, rewrite.text);
            }
            summary.missing_loader_constructs = rewrite.missing;
        }
        None => {
            warn!(path = %paths.loader.display(), "loader file not found, skipping");
            summary.skipped.push(paths.loader.clone());
        }
    }

    Ok(summary)
}

fn read_optional(path: &Path) -> LocaleResult<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .map_err(|e| LocaleError::io(path, e))
}
