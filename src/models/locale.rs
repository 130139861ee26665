// ============================================================================
// Nitrokit - 语言注册表数据模型
// ============================================================================
//
// 文件: src/models/locale.rs
// 职责: 语言注册表内存模型定义
// 边界:
//   - ✅ 语言代码列表与默认语言
//   - ✅ 语言元数据条目
//   - ✅ 字符串字面量引号风格
//   - ✅ 模型不变量校验（默认语言必须在列表中）
//   - ❌ 不应包含文本解析逻辑
//   - ❌ 不应包含文件读写
//
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::core::error::{LocaleError, LocaleResult};

/// 单个语言的元数据条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleMetadataEntry {
    /// 语言代码
    pub code: String,
    /// 显示名称
    pub name: String,
    /// 国旗资源路径
    pub flag: String,
    /// 本地显示名称
    pub native_name: String,
}

/// 语言注册表：有序语言代码 + 默认语言 + 元数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRegistry {
    codes: Vec<String>,
    default_code: String,
    entries: Vec<LocaleMetadataEntry>,
}

impl LocaleRegistry {
    /// 创建注册表，校验代码唯一且默认语言存在
    pub fn new(
        codes: Vec<String>,
        default_code: String,
        entries: Vec<LocaleMetadataEntry>,
    ) -> LocaleResult<Self> {
        for (index, code) in codes.iter().enumerate() {
            if codes[..index].contains(code) {
                return Err(LocaleError::parse(format!(
                    "locale '{}' is declared more than once",
                    code
                )));
            }
        }

        if !codes.contains(&default_code) {
            return Err(LocaleError::InvalidDefault {
                available: codes.join(", "),
                code: default_code,
            });
        }

        Ok(Self {
            codes,
            default_code,
            entries,
        })
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn default_code(&self) -> &str {
        &self.default_code
    }

    pub fn entries(&self) -> &[LocaleMetadataEntry] {
        &self.entries
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    /// 查找元数据条目
    pub fn entry(&self, code: &str) -> Option<&LocaleMetadataEntry> {
        self.entries.iter().find(|e| e.code == code)
    }
}

/// 字符串字面量的引号风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

impl QuoteStyle {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(QuoteStyle::Single),
            '"' => Some(QuoteStyle::Double),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }

    /// 以当前引号风格输出字符串字面量
    pub fn quote(&self, value: &str) -> String {
        let q = self.as_char();
        let mut out = String::with_capacity(value.len() + 2);
        out.push(q);
        for c in value.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                c if c == q => {
                    out.push('\\');
                    out.push(c);
                }
                c => out.push(c),
            }
        }
        out.push(q);
        out
    }
}
