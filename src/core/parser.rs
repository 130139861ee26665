// ============================================================================
// Nitrokit - 语言注册表解析器
// ============================================================================
//
// 文件: src/core/parser.rs
// 职责: 从 locale.ts 文本中提取语言列表、默认语言与元数据
// 边界:
//   - ✅ LOCALES 列表解析
//   - ✅ DEFAULT_LANGUAGE 解析
//   - ✅ LOCALE_CONFIG 记录解析
//   - ✅ 记录各结构在原文中的位置和排版风格
//   - ❌ 不应修改文本
//   - ❌ 不应包含文件读写
//
// 解析方式:
// 1. 用正则定位三个声明的起始位置
// 2. 从起始位置开始用字面量扫描器逐个读取字符串，
//    正确处理两种引号、转义和注释
// 3. 返回内存模型以及每个结构的字节区间，供写入器原位替换
//
// ============================================================================

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

use crate::core::error::{LocaleError, LocaleResult};
use crate::models::locale::{LocaleMetadataEntry, LocaleRegistry, QuoteStyle};

const DEFAULT_ENTRY_INDENT: &str = "    ";

fn locales_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"export\s+const\s+LOCALES\b[^=\[]*=\s*\[").expect("valid LOCALES pattern")
    })
}

fn default_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"export\s+const\s+DEFAULT_LANGUAGE\b[^=]*=\s*")
            .expect("valid DEFAULT_LANGUAGE pattern")
    })
}

fn config_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"export\s+const\s+LOCALE_CONFIG\b[^=]*=\s*\{")
            .expect("valid LOCALE_CONFIG pattern")
    })
}

/// LOCALES 列表的排版风格
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListLayout {
    pub multiline: bool,
    pub item_indent: String,
    pub closing_indent: String,
    pub trailing_comma: bool,
}

/// LOCALES 列表在原文中的位置
#[derive(Debug, Clone)]
pub(crate) struct ListConstruct {
    /// `[` 与 `]` 之间的区间
    pub body: Range<usize>,
    pub layout: ListLayout,
}

/// 记录中最后一个条目的结尾
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EntryTail {
    /// 条目 `}` 之后的位置；有逗号时为逗号之后
    pub end: usize,
    pub has_comma: bool,
}

/// LOCALE_CONFIG 记录在原文中的位置
#[derive(Debug, Clone)]
pub(crate) struct ConfigConstruct {
    /// `{` 与匹配的 `}` 之间的区间
    pub body: Range<usize>,
    pub entry_indent: String,
    pub quote: QuoteStyle,
    /// 记录为空时为 None
    pub last_entry: Option<EntryTail>,
}

/// 解析后的注册表文档
#[derive(Debug, Clone)]
pub struct RegistryDocument {
    registry: LocaleRegistry,
    quote: QuoteStyle,
    pub(crate) list: ListConstruct,
    pub(crate) default_literal: Range<usize>,
    pub(crate) default_quote: QuoteStyle,
    pub(crate) config: Option<ConfigConstruct>,
}

impl RegistryDocument {
    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// LOCALES 列表使用的引号风格
    pub fn quote_style(&self) -> QuoteStyle {
        self.quote
    }

    pub fn has_config_record(&self) -> bool {
        self.config.is_some()
    }
}

/// 解析完整的注册表文本
pub fn parse_registry(text: &str) -> LocaleResult<RegistryDocument> {
    let (codes, quote, list) = parse_list(text)?;
    let (default_code, default_literal, default_quote) = parse_default(text)?;

    if !codes.contains(&default_code) {
        return Err(LocaleError::parse(format!(
            "DEFAULT_LANGUAGE '{}' is not declared in LOCALES",
            default_code
        )));
    }

    let (entries, config) = match parse_config(text, quote)? {
        Some((entries, construct)) => (entries, Some(construct)),
        None => (Vec::new(), None),
    };

    let registry = LocaleRegistry::new(codes, default_code, entries)?;

    Ok(RegistryDocument {
        registry,
        quote,
        list,
        default_literal,
        default_quote,
        config,
    })
}

/// 只提取语言代码列表
pub fn parse_codes(text: &str) -> LocaleResult<Vec<String>> {
    parse_list(text).map(|(codes, _, _)| codes)
}

/// 只提取默认语言
pub fn parse_default_code(text: &str) -> LocaleResult<String> {
    parse_default(text).map(|(code, _, _)| code)
}

fn parse_list(text: &str) -> LocaleResult<(Vec<String>, QuoteStyle, ListConstruct)> {
    let header = locales_header()
        .find(text)
        .ok_or_else(|| LocaleError::parse("LOCALES declaration not found"))?;

    let body_start = header.end();
    let mut scanner = Scanner::new(text, body_start);
    let mut codes = Vec::new();
    let mut quote = None;
    let mut first_item = None;
    let mut trailing_comma = false;

    let body_end = loop {
        scanner.skip_trivia()?;
        match scanner.peek() {
            None => return Err(LocaleError::parse("LOCALES list is not closed")),
            Some(']') => break scanner.pos,
            Some(c) if QuoteStyle::from_char(c).is_some() => {
                first_item.get_or_insert(scanner.pos);
                let (value, style) = scanner.string_literal()?;
                quote.get_or_insert(style);
                if codes.contains(&value) {
                    return Err(LocaleError::parse(format!(
                        "locale '{}' is declared more than once",
                        value
                    )));
                }
                codes.push(value);

                scanner.skip_trivia()?;
                trailing_comma = scanner.eat(',');
                if !trailing_comma && scanner.peek() != Some(']') {
                    return Err(scanner.unexpected("',' or ']' in LOCALES"));
                }
            }
            Some(_) => return Err(scanner.unexpected("a string literal in LOCALES")),
        }
    };

    let body = &text[body_start..body_end];
    let layout = ListLayout {
        multiline: body.contains('\n'),
        item_indent: first_item
            .map(|pos| line_indent(text, pos))
            .unwrap_or_else(|| DEFAULT_ENTRY_INDENT.to_string()),
        closing_indent: closing_indent(body),
        trailing_comma: trailing_comma && !codes.is_empty(),
    };

    Ok((
        codes,
        quote.unwrap_or_default(),
        ListConstruct {
            body: body_start..body_end,
            layout,
        },
    ))
}

fn parse_default(text: &str) -> LocaleResult<(String, Range<usize>, QuoteStyle)> {
    let header = default_header()
        .find(text)
        .ok_or_else(|| LocaleError::parse("DEFAULT_LANGUAGE declaration not found"))?;

    let mut scanner = Scanner::new(text, header.end());
    let start = scanner.pos;
    match scanner.peek() {
        Some(c) if QuoteStyle::from_char(c).is_some() => {
            let (value, style) = scanner.string_literal()?;
            Ok((value, start..scanner.pos, style))
        }
        _ => Err(scanner.unexpected("a string literal for DEFAULT_LANGUAGE")),
    }
}

fn parse_config(
    text: &str,
    fallback_quote: QuoteStyle,
) -> LocaleResult<Option<(Vec<LocaleMetadataEntry>, ConfigConstruct)>> {
    let header = match config_header().find(text) {
        Some(m) => m,
        None => return Ok(None),
    };

    let body_start = header.end();
    let mut scanner = Scanner::new(text, body_start);
    let mut entries: Vec<LocaleMetadataEntry> = Vec::new();
    let mut first_key = None;
    let mut quote = None;
    let mut last_entry = None;

    let body_end = loop {
        scanner.skip_trivia()?;
        match scanner.peek() {
            None => return Err(LocaleError::parse("LOCALE_CONFIG record is not closed")),
            Some('}') => break scanner.pos,
            Some(_) => {}
        }

        first_key.get_or_insert(scanner.pos);
        let code = scanner.property_key()?;
        scanner.skip_trivia()?;
        scanner.expect(':')?;
        scanner.skip_trivia()?;
        scanner.expect('{')?;

        let mut name = None;
        let mut flag = None;
        let mut native_name = None;

        loop {
            scanner.skip_trivia()?;
            if scanner.eat('}') {
                break;
            }
            let key = scanner.property_key()?;
            scanner.skip_trivia()?;
            scanner.expect(':')?;
            scanner.skip_trivia()?;

            let value = match scanner.peek() {
                Some(c) if QuoteStyle::from_char(c).is_some() => {
                    let (value, style) = scanner.string_literal()?;
                    quote.get_or_insert(style);
                    Some(value)
                }
                _ => {
                    scanner.skip_value()?;
                    None
                }
            };

            match key.as_str() {
                "name" => name = value,
                "flag" => flag = value,
                "nativeName" => native_name = value,
                _ => {}
            }

            scanner.skip_trivia()?;
            if !scanner.eat(',') && scanner.peek() != Some('}') {
                return Err(scanner.unexpected("',' or '}' in LOCALE_CONFIG entry"));
            }
        }

        let entry_end = scanner.pos;

        let missing = |field: &str| {
            LocaleError::parse(format!(
                "LOCALE_CONFIG entry '{}' has no string '{}'",
                code, field
            ))
        };
        let entry = LocaleMetadataEntry {
            name: name.ok_or_else(|| missing("name"))?,
            flag: flag.ok_or_else(|| missing("flag"))?,
            native_name: native_name.ok_or_else(|| missing("nativeName"))?,
            code,
        };
        if entries.iter().any(|e| e.code == entry.code) {
            return Err(LocaleError::parse(format!(
                "LOCALE_CONFIG declares '{}' more than once",
                entry.code
            )));
        }
        entries.push(entry);

        scanner.skip_trivia()?;
        let has_comma = scanner.eat(',');
        if !has_comma && scanner.peek() != Some('}') {
            return Err(scanner.unexpected("',' or '}' in LOCALE_CONFIG"));
        }
        last_entry = Some(EntryTail {
            end: if has_comma { scanner.pos } else { entry_end },
            has_comma,
        });
    };

    let construct = ConfigConstruct {
        body: body_start..body_end,
        entry_indent: first_key
            .map(|pos| line_indent(text, pos))
            .unwrap_or_else(|| DEFAULT_ENTRY_INDENT.to_string()),
        quote: quote.unwrap_or(fallback_quote),
        last_entry,
    };

    Ok(Some((entries, construct)))
}

/// `pos` 所在行、`pos` 之前的空白缩进
fn line_indent(text: &str, pos: usize) -> String {
    let line_start = text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let prefix = &text[line_start..pos];
    if prefix.chars().all(char::is_whitespace) {
        prefix.to_string()
    } else {
        DEFAULT_ENTRY_INDENT.to_string()
    }
}

/// 结构体末尾（最后一个换行之后）的空白，即闭合符号的缩进
fn closing_indent(body: &str) -> String {
    let tail = &body[body.trim_end().len()..];
    match tail.rfind('\n') {
        Some(i) => tail[i + 1..].to_string(),
        None => String::new(),
    }
}

/// 面向 TypeScript 字面量的简单扫描器
struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str, pos: usize) -> Self {
        Self { src, pos }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> LocaleResult<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{}'", expected)))
        }
    }

    fn unexpected(&self, wanted: &str) -> LocaleError {
        let line = self.src[..self.pos].matches('\n').count() + 1;
        match self.peek() {
            Some(c) => LocaleError::parse(format!(
                "expected {} but found '{}' on line {}",
                wanted, c, line
            )),
            None => LocaleError::parse(format!(
                "expected {} but reached end of file",
                wanted
            )),
        }
    }

    /// 跳过空白和注释
    fn skip_trivia(&mut self) -> LocaleResult<()> {
        loop {
            let rest = &self.src[self.pos..];
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();

            if trimmed.starts_with("//") {
                match trimmed.find('\n') {
                    Some(i) => self.pos += i + 1,
                    None => self.pos = self.src.len(),
                }
            } else if trimmed.starts_with("/*") {
                match trimmed[2..].find("*/") {
                    Some(i) => self.pos += i + 4,
                    None => return Err(LocaleError::parse("unterminated block comment")),
                }
            } else {
                return Ok(());
            }
        }
    }

    /// 读取一个字符串字面量，调用前当前位置必须是引号
    fn string_literal(&mut self) -> LocaleResult<(String, QuoteStyle)> {
        let style = self
            .bump()
            .and_then(QuoteStyle::from_char)
            .ok_or_else(|| self.unexpected("a quote"))?;
        let quote = style.as_char();
        let mut value = String::new();

        loop {
            match self.bump() {
                None | Some('\n') => {
                    return Err(LocaleError::parse("unterminated string literal"))
                }
                Some('\\') => match self.bump() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some(c) => value.push(c),
                    None => return Err(LocaleError::parse("unterminated string literal")),
                },
                Some(c) if c == quote => return Ok((value, style)),
                Some(c) => value.push(c),
            }
        }
    }

    /// 对象键：标识符或字符串
    fn property_key(&mut self) -> LocaleResult<String> {
        match self.peek() {
            Some(c) if QuoteStyle::from_char(c).is_some() => {
                self.string_literal().map(|(value, _)| value)
            }
            Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {
                let start = self.pos;
                while let Some(c) = self.peek() {
                    if c.is_alphanumeric() || c == '_' || c == '$' {
                        self.bump();
                    } else {
                        break;
                    }
                }
                Ok(self.src[start..self.pos].to_string())
            }
            _ => Err(self.unexpected("a property name")),
        }
    }

    /// 跳过一个非字符串的属性值，停在同层的 `,` 或 `}` 前
    fn skip_value(&mut self) -> LocaleResult<()> {
        let mut depth = 0usize;
        loop {
            self.skip_trivia()?;
            match self.peek() {
                None => return Err(LocaleError::parse("unexpected end of file in value")),
                Some(',') | Some('}') | Some(']') | Some(')') if depth == 0 => return Ok(()),
                Some('{') | Some('[') | Some('(') => {
                    depth += 1;
                    self.bump();
                }
                Some('}') | Some(']') | Some(')') => {
                    depth -= 1;
                    self.bump();
                }
                Some(c) if QuoteStyle::from_char(c).is_some() => {
                    self.string_literal()?;
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRY: &str = r#"export const LOCALES = ['en', 'tr'] as const;
export type Locale = (typeof LOCALES)[number];

export const DEFAULT_LANGUAGE: Locale = 'en';

export const LOCALE_CONFIG: Record<Locale, { name: string; flag: string; nativeName: string }> = {
    en: { name: 'English', flag: '/images/flags/us.svg', nativeName: 'English' },
    tr: { name: 'Turkish', flag: '/images/flags/tr.svg', nativeName: 'Türkçe' },
} as const;
"#;

    #[test]
    fn parses_codes_default_and_entries() {
        let doc = parse_registry(REGISTRY).unwrap();
        let registry = doc.registry();
        assert_eq!(registry.codes(), ["en", "tr"]);
        assert_eq!(registry.default_code(), "en");
        assert_eq!(registry.entries().len(), 2);
        assert_eq!(registry.entry("tr").unwrap().native_name, "Türkçe");
        assert_eq!(doc.quote_style(), QuoteStyle::Single);
        assert!(!doc.list.layout.multiline);
    }

    #[test]
    fn parses_double_quotes_and_multiline_list() {
        let text = "export const LOCALES = [\n  \"en\",\n  \"de\",\n] as const;\n\
                    export const DEFAULT_LANGUAGE: Locale = \"de\";\n";
        let doc = parse_registry(text).unwrap();
        assert_eq!(doc.registry().codes(), ["en", "de"]);
        assert_eq!(doc.registry().default_code(), "de");
        assert_eq!(doc.quote_style(), QuoteStyle::Double);
        assert!(doc.list.layout.multiline);
        assert!(doc.list.layout.trailing_comma);
        assert_eq!(doc.list.layout.item_indent, "  ");
        assert!(!doc.has_config_record());
    }

    #[test]
    fn unclosed_list_is_a_parse_error() {
        let err = parse_codes("export const LOCALES = ['en', 'tr'").unwrap_err();
        assert!(matches!(err, LocaleError::Parse(_)));
    }

    #[test]
    fn missing_list_is_a_parse_error() {
        assert!(matches!(
            parse_codes("export const DEFAULT_LANGUAGE: Locale = 'en';"),
            Err(LocaleError::Parse(_))
        ));
    }

    #[test]
    fn missing_default_marker_is_a_parse_error() {
        let text = "export const LOCALES = ['en'] as const;";
        assert_eq!(parse_codes(text).unwrap(), ["en"]);
        assert!(matches!(parse_default_code(text), Err(LocaleError::Parse(_))));
        assert!(matches!(parse_registry(text), Err(LocaleError::Parse(_))));
    }

    #[test]
    fn default_outside_list_is_a_parse_error() {
        let text = "export const LOCALES = ['en'] as const;\n\
                    export const DEFAULT_LANGUAGE: Locale = 'tr';";
        assert!(matches!(parse_registry(text), Err(LocaleError::Parse(_))));
    }

    #[test]
    fn comments_inside_list_are_ignored() {
        let text = "export const LOCALES = ['en', /* 'fr', */ 'tr' // tail\n] as const;";
        assert_eq!(parse_codes(text).unwrap(), ["en", "tr"]);
    }

    #[test]
    fn config_entry_without_name_is_rejected() {
        let text = "export const LOCALES = ['en'] as const;\n\
                    export const DEFAULT_LANGUAGE: Locale = 'en';\n\
                    export const LOCALE_CONFIG: Record<Locale, X> = {\n    en: { flag: '/f.svg', nativeName: 'English' },\n} as const;";
        assert!(matches!(parse_registry(text), Err(LocaleError::Parse(_))));
    }

    #[test]
    fn records_config_body_span() {
        let doc = parse_registry(REGISTRY).unwrap();
        let config = doc.config.as_ref().unwrap();
        let body = &REGISTRY[config.body.clone()];
        assert!(body.trim_start().starts_with("en:"));
        assert!(body.trim_end().ends_with("},"));
        assert_eq!(config.entry_indent, "    ");

        let tail = config.last_entry.unwrap();
        assert!(tail.has_comma);
        assert_eq!(&REGISTRY[..tail.end], REGISTRY[..config.body.end].trim_end());
    }

    #[test]
    fn last_entry_end_stops_before_trailing_comment() {
        let text = "export const LOCALES = ['en'] as const;\n\
                    export const DEFAULT_LANGUAGE: Locale = 'en';\n\
                    export const LOCALE_CONFIG: Record<Locale, X> = {\n    en: { name: 'English', flag: '/f.svg', nativeName: 'English' } // primary\n} as const;";
        let doc = parse_registry(text).unwrap();
        let tail = doc.config.as_ref().unwrap().last_entry.unwrap();
        assert!(!tail.has_comma);
        assert!(text[..tail.end].ends_with("nativeName: 'English' }"));
    }
}
