// ============================================================================
// Nitrokit - 注册表文本渲染
// ============================================================================
//
// 文件: src/core/render.rs
// 职责: 将内存模型渲染回 locale.ts 的文本片段
// 边界:
//   - ✅ LOCALES 列表渲染
//   - ✅ LOCALE_CONFIG 条目渲染与追加
//   - ✅ 文本区间替换
//   - ❌ 不应包含解析逻辑
//   - ❌ 不应包含业务决策（增加哪些语言、默认语言）
//
// ============================================================================

use std::ops::Range;

use crate::core::parser::ListLayout;
use crate::models::locale::{LocaleMetadataEntry, QuoteStyle};

/// 渲染 `[` 与 `]` 之间的列表内容
pub(crate) fn render_list(codes: &[String], quote: QuoteStyle, layout: &ListLayout) -> String {
    let items: Vec<String> = codes.iter().map(|code| quote.quote(code)).collect();

    if !layout.multiline {
        let mut out = items.join(", ");
        if layout.trailing_comma && !items.is_empty() {
            out.push(',');
        }
        return out;
    }

    let mut out = String::from("\n");
    let lines: Vec<String> = items
        .iter()
        .map(|item| format!("{}{}", layout.item_indent, item))
        .collect();
    out.push_str(&lines.join(",\n"));
    if layout.trailing_comma && !items.is_empty() {
        out.push(',');
    }
    out.push('\n');
    out.push_str(&layout.closing_indent);
    out
}

/// 渲染单个 LOCALE_CONFIG 条目（不含结尾逗号）
pub(crate) fn render_entry(entry: &LocaleMetadataEntry, quote: QuoteStyle, indent: &str) -> String {
    format!(
        "{}{}: {{ name: {}, flag: {}, nativeName: {} }}",
        indent,
        render_key(&entry.code, quote),
        quote.quote(&entry.name),
        quote.quote(&entry.flag),
        quote.quote(&entry.native_name),
    )
}

/// 合法标识符直接输出，否则加引号（如 `zh-CN`）
fn render_key(code: &str, quote: QuoteStyle) -> String {
    let mut chars = code.chars();
    let is_identifier = chars
        .next()
        .map(|c| c.is_alphabetic() || c == '_' || c == '$')
        .unwrap_or(false)
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$');

    if is_identifier {
        code.to_string()
    } else {
        quote.quote(code)
    }
}

/// 在记录主体末尾追加若干已渲染的条目
///
/// `comma_at` 是最后一个条目缺少逗号时其 `}` 之后的位置（相对主体），逗号插在这里，
/// 因而不会落入条目后的注释中。`trailing_comma` 为真时新块也保留结尾逗号。
pub(crate) fn append_entries(
    body: &str,
    rendered: &[String],
    comma_at: Option<usize>,
    trailing_comma: bool,
) -> String {
    if rendered.is_empty() {
        return body.to_string();
    }

    let content_len = body.trim_end().len();
    let tail = &body[content_len..];
    let closing_indent = tail.rfind('\n').map(|i| &tail[i + 1..]).unwrap_or("");

    let mut out = String::with_capacity(body.len() + rendered.len() * 80);
    match comma_at {
        Some(at) if at <= content_len => {
            out.push_str(&body[..at]);
            out.push(',');
            out.push_str(&body[at..content_len]);
        }
        _ => out.push_str(&body[..content_len]),
    }
    out.push('\n');
    out.push_str(&rendered.join(",\n"));
    if trailing_comma {
        out.push(',');
    }
    out.push('\n');
    out.push_str(closing_indent);
    out
}

/// 按区间替换文本，区间之间不得重叠
pub(crate) fn apply_edits(text: &str, mut edits: Vec<(Range<usize>, String)>) -> String {
    edits.sort_by_key(|(range, _)| range.start);

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (range, replacement) in edits {
        out.push_str(&text[cursor..range.start]);
        out.push_str(&replacement);
        cursor = range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inline() -> ListLayout {
        ListLayout {
            multiline: false,
            item_indent: String::new(),
            closing_indent: String::new(),
            trailing_comma: false,
        }
    }

    #[test]
    fn renders_inline_list() {
        let codes = vec!["en".to_string(), "tr".to_string()];
        assert_eq!(render_list(&codes, QuoteStyle::Single, &inline()), "'en', 'tr'");
    }

    #[test]
    fn renders_multiline_list_with_trailing_comma() {
        let layout = ListLayout {
            multiline: true,
            item_indent: "  ".into(),
            closing_indent: String::new(),
            trailing_comma: true,
        };
        let codes = vec!["en".to_string(), "fr".to_string()];
        assert_eq!(
            render_list(&codes, QuoteStyle::Double, &layout),
            "\n  \"en\",\n  \"fr\",\n"
        );
    }

    #[test]
    fn entry_keys_are_quoted_when_not_identifiers() {
        let entry = LocaleMetadataEntry {
            code: "zh-CN".into(),
            name: "Chinese".into(),
            flag: "/images/flags/cn.svg".into(),
            native_name: "简体中文".into(),
        };
        assert_eq!(
            render_entry(&entry, QuoteStyle::Single, "  "),
            "  'zh-CN': { name: 'Chinese', flag: '/images/flags/cn.svg', nativeName: '简体中文' }"
        );
    }

    #[test]
    fn append_adds_comma_only_when_missing() {
        let rendered = vec!["    fr: {}".to_string()];
        assert_eq!(
            append_entries("\n    en: {}\n", &rendered, Some(11), false),
            "\n    en: {},\n    fr: {}\n"
        );
        assert_eq!(
            append_entries("\n    en: {},\n", &rendered, None, true),
            "\n    en: {},\n    fr: {},\n"
        );
    }

    #[test]
    fn comma_goes_before_trailing_comment() {
        let rendered = vec!["    fr: {}".to_string()];
        assert_eq!(
            append_entries("\n    en: {} // primary\n", &rendered, Some(11), false),
            "\n    en: {}, // primary\n    fr: {}\n"
        );
        assert_eq!(
            append_entries("\n    en: {} /* primary */\n", &rendered, Some(11), false),
            "\n    en: {}, /* primary */\n    fr: {}\n"
        );
    }

    #[test]
    fn append_into_empty_body() {
        let rendered = vec!["    fr: {}".to_string()];
        assert_eq!(append_entries("", &rendered, None, false), "\n    fr: {}\n");
        assert_eq!(append_entries("\n", &rendered, None, false), "\n    fr: {}\n");
    }

    #[test]
    fn edits_are_applied_in_position_order() {
        let text = "abcdef";
        let edits = vec![(4..5, "E".to_string()), (0..1, "A".to_string())];
        assert_eq!(apply_edits(text, edits), "AbcdEf");
    }
}
