// ============================================================================
// Nitrokit - 语言注册表写入器
// ============================================================================
//
// 文件: src/core/writer.rs
// 职责: 在 locale.ts 文本上执行"添加语言"与"设置默认语言"
// 边界:
//   - ✅ 添加语言：更新 LOCALES 列表并追加 LOCALE_CONFIG 条目
//   - ✅ 设置默认语言：只改写 DEFAULT_LANGUAGE 字面量
//   - ✅ 区分"有改动"与"无改动"
//   - ✅ 报告目录中不存在的语言代码
//   - ❌ 不应包含文件读写
//   - ❌ 不应包含依赖文件重建
//
// ============================================================================

use tracing::debug;

use crate::core::error::{LocaleError, LocaleResult};
use crate::core::parser::parse_registry;
use crate::core::render::{append_entries, apply_edits, render_entry, render_list};
use crate::models::config::UnknownCodePolicy;
use crate::models::language::find_language;

/// 一次编辑的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// 文本有改动
    Changed(String),
    /// 无需改动
    Unchanged,
}

impl EditOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, EditOutcome::Changed(_))
    }

    /// 取出改动后的文本；无改动时返回原文
    pub fn into_text(self, original: &str) -> String {
        match self {
            EditOutcome::Changed(text) => text,
            EditOutcome::Unchanged => original.to_string(),
        }
    }
}

/// 添加语言的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub outcome: EditOutcome,
    /// 实际追加的语言（按请求顺序）
    pub added: Vec<String>,
    /// 已存在而被忽略的语言
    pub already_present: Vec<String>,
    /// 目录中没有的语言
    pub unknown: Vec<String>,
}

/// 向注册表追加语言
///
/// 新语言按请求顺序追加到 LOCALES 末尾，并从语言目录取元数据追加到 LOCALE_CONFIG。
/// 已存在的代码被忽略，因此同一请求重复执行得到相同文本。
pub fn add_locales(
    text: &str,
    requested: &[String],
    policy: UnknownCodePolicy,
) -> LocaleResult<AddOutcome> {
    let doc = parse_registry(text)?;
    let registry = doc.registry();

    let mut added = Vec::new();
    let mut already_present = Vec::new();
    let mut unknown = Vec::new();

    for code in requested {
        let code = code.trim();
        if code.is_empty() {
            continue;
        }
        if registry.contains(code) || added.iter().any(|c: &String| c == code) {
            if !already_present.iter().any(|c: &String| c == code) {
                already_present.push(code.to_string());
            }
            continue;
        }
        if find_language(code).is_none() {
            if !unknown.iter().any(|c: &String| c == code) {
                unknown.push(code.to_string());
            }
            continue;
        }
        added.push(code.to_string());
    }

    if !unknown.is_empty() && policy == UnknownCodePolicy::Fail {
        return Err(LocaleError::UnknownLanguage { codes: unknown });
    }

    if added.is_empty() {
        debug!("no new locales to add");
        return Ok(AddOutcome {
            outcome: EditOutcome::Unchanged,
            added,
            already_present,
            unknown,
        });
    }

    let mut codes = registry.codes().to_vec();
    codes.extend(added.iter().cloned());

    let mut edits = vec![(
        doc.list.body.clone(),
        render_list(&codes, doc.quote_style(), &doc.list.layout),
    )];

    if let Some(config) = &doc.config {
        let rendered: Vec<String> = added
            .iter()
            .filter(|code| registry.entry(code).is_none())
            .filter_map(|code| find_language(code))
            .map(|lang| render_entry(&lang.to_entry(), config.quote, &config.entry_indent))
            .collect();
        let body = &text[config.body.clone()];
        let comma_at = config
            .last_entry
            .filter(|tail| !tail.has_comma)
            .map(|tail| tail.end - config.body.start);
        let trailing_comma = config.last_entry.map(|tail| tail.has_comma).unwrap_or(false);
        edits.push((
            config.body.clone(),
            append_entries(body, &rendered, comma_at, trailing_comma),
        ));
    }

    debug!(added = ?added, "appending locales to registry");

    Ok(AddOutcome {
        outcome: EditOutcome::Changed(apply_edits(text, edits)),
        added,
        already_present,
        unknown,
    })
}

/// 设置默认语言
///
/// 目标语言必须已在 LOCALES 中；与当前默认语言相同时不做改动。
pub fn set_default_locale(text: &str, code: &str) -> LocaleResult<EditOutcome> {
    let doc = parse_registry(text)?;
    let registry = doc.registry();

    if !registry.contains(code) {
        return Err(LocaleError::InvalidDefault {
            code: code.to_string(),
            available: registry.codes().join(", "),
        });
    }

    if registry.default_code() == code {
        return Ok(EditOutcome::Unchanged);
    }

    debug!(from = registry.default_code(), to = code, "rewriting default locale");

    let literal = doc.default_quote.quote(code);
    Ok(EditOutcome::Changed(apply_edits(
        text,
        vec![(doc.default_literal.clone(), literal)],
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::{parse_codes, parse_default_code};

    const REGISTRY: &str = r#"export const LOCALES = ['en', 'tr'] as const;
export type Locale = (typeof LOCALES)[number];

export const DEFAULT_LANGUAGE: Locale = 'en';

export const LOCALE_CONFIG: Record<Locale, { name: string; flag: string; nativeName: string }> = {
    en: { name: 'English', flag: '/images/flags/us.svg', nativeName: 'English' },
    tr: { name: 'Turkish', flag: '/images/flags/tr.svg', nativeName: 'Türkçe' }
} as const;
"#;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn adding_french_appends_code_and_entry() {
        let result = add_locales(REGISTRY, &codes(&["fr"]), UnknownCodePolicy::Skip).unwrap();
        assert_eq!(result.added, ["fr"]);
        let text = result.outcome.into_text(REGISTRY);

        assert!(text.contains("export const LOCALES = ['en', 'tr', 'fr'] as const;"));
        assert!(text.contains(
            "    tr: { name: 'Turkish', flag: '/images/flags/tr.svg', nativeName: 'Türkçe' },\n    fr: { name: 'French', flag: '/images/flags/fr.svg', nativeName: 'Français' }\n} as const;"
        ));
        assert_eq!(parse_default_code(&text).unwrap(), "en");

        let doc = parse_registry(&text).unwrap();
        assert_eq!(doc.registry().entries().len(), 3);
    }

    #[test]
    fn add_preserves_existing_trailing_comma_style() {
        let source = REGISTRY.replace("'Türkçe' }\n}", "'Türkçe' },\n}");
        let result = add_locales(&source, &codes(&["de"]), UnknownCodePolicy::Skip).unwrap();
        let text = result.outcome.into_text(&source);
        assert!(text.contains("'Türkçe' },\n    de: { name: 'German', flag: '/images/flags/de.svg', nativeName: 'Deutsch' },\n} as const;"));
        assert!(!text.contains(",,"));
    }

    #[test]
    fn add_after_commented_last_entry_stays_parseable() {
        let source = REGISTRY.replace("'Türkçe' }\n}", "'Türkçe' } // primary\n}");
        let result = add_locales(&source, &codes(&["fr"]), UnknownCodePolicy::Skip).unwrap();
        let text = result.outcome.into_text(&source);

        assert!(text.contains("'Türkçe' }, // primary\n    fr: { name: 'French', flag: '/images/flags/fr.svg', nativeName: 'Français' }\n} as const;"));
        let doc = parse_registry(&text).unwrap();
        assert_eq!(doc.registry().entries().len(), 3);
    }

    #[test]
    fn add_after_commented_trailing_comma_keeps_style() {
        let source = REGISTRY.replace("'Türkçe' }\n}", "'Türkçe' }, // primary\n}");
        let result = add_locales(&source, &codes(&["de"]), UnknownCodePolicy::Skip).unwrap();
        let text = result.outcome.into_text(&source);

        assert!(text.contains("'Türkçe' }, // primary\n    de: { name: 'German', flag: '/images/flags/de.svg', nativeName: 'Deutsch' },\n} as const;"));
        assert!(parse_registry(&text).is_ok());
    }

    #[test]
    fn adding_is_idempotent() {
        let request = codes(&["fr", "de"]);
        let once = add_locales(REGISTRY, &request, UnknownCodePolicy::Skip)
            .unwrap()
            .outcome
            .into_text(REGISTRY);
        let again = add_locales(&once, &request, UnknownCodePolicy::Skip).unwrap();

        assert_eq!(again.outcome, EditOutcome::Unchanged);
        assert_eq!(again.already_present, ["fr", "de"]);
        assert_eq!(again.outcome.into_text(&once), once);
        assert_eq!(parse_codes(&once).unwrap(), ["en", "tr", "fr", "de"]);
    }

    #[test]
    fn existing_and_duplicate_codes_are_ignored() {
        let result =
            add_locales(REGISTRY, &codes(&["tr", "es", "es"]), UnknownCodePolicy::Skip).unwrap();
        assert_eq!(result.added, ["es"]);
        assert_eq!(result.already_present, ["tr", "es"]);
        let text = result.outcome.into_text(REGISTRY);
        assert_eq!(parse_codes(&text).unwrap(), ["en", "tr", "es"]);
    }

    #[test]
    fn unknown_code_is_reported_and_skipped() {
        let result = add_locales(REGISTRY, &codes(&["xx"]), UnknownCodePolicy::Skip).unwrap();
        assert_eq!(result.unknown, ["xx"]);
        assert!(result.added.is_empty());
        assert_eq!(result.outcome, EditOutcome::Unchanged);
    }

    #[test]
    fn unknown_code_fails_under_strict_policy() {
        let err = add_locales(REGISTRY, &codes(&["fr", "xx"]), UnknownCodePolicy::Fail).unwrap_err();
        assert!(matches!(err, LocaleError::UnknownLanguage { ref codes } if codes == &["xx"]));
    }

    #[test]
    fn add_without_config_record_only_touches_list() {
        let source = "export const LOCALES = [\"en\"] as const;\nexport const DEFAULT_LANGUAGE: Locale = \"en\";\n";
        let text = add_locales(source, &codes(&["ru"]), UnknownCodePolicy::Skip)
            .unwrap()
            .outcome
            .into_text(source);
        assert!(text.starts_with("export const LOCALES = [\"en\", \"ru\"] as const;"));
    }

    #[test]
    fn set_default_rewrites_marker_only() {
        let outcome = set_default_locale(REGISTRY, "tr").unwrap();
        assert!(outcome.is_changed());
        let text = outcome.into_text(REGISTRY);
        assert_eq!(parse_default_code(&text).unwrap(), "tr");
        assert_eq!(text, REGISTRY.replace("Locale = 'en';", "Locale = 'tr';"));

        assert_eq!(set_default_locale(&text, "tr").unwrap(), EditOutcome::Unchanged);
    }

    #[test]
    fn set_default_to_unregistered_code_fails() {
        let err = set_default_locale(REGISTRY, "fr").unwrap_err();
        assert!(matches!(err, LocaleError::InvalidDefault { ref code, .. } if code == "fr"));
    }
}
