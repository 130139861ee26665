// ============================================================================
// Nitrokit - 支持语言目录
// ============================================================================
//
// 文件: src/models/language.rs
// 职责: 内置语言目录（代码、名称、本地名称、国旗资源）
// 边界:
//   - ✅ 语言目录静态数据
//   - ✅ 按代码查找语言
//   - ❌ 不应包含注册表文本处理
//   - ❌ 不应包含文件读写
//
// ============================================================================

use crate::models::locale::LocaleMetadataEntry;

/// 国旗资源所在的公共路径前缀
pub const FLAG_ASSET_PREFIX: &str = "/images/flags/";

/// 内置语言目录中的一项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// 语言代码
    pub code: &'static str,
    /// 英文名称
    pub name: &'static str,
    /// 本地名称
    pub native_name: &'static str,
    /// `public/images/flags/` 下的 svg 文件名
    pub flag: &'static str,
}

impl Language {
    /// 注册表中使用的国旗路径
    pub fn flag_path(&self) -> String {
        format!("{}{}", FLAG_ASSET_PREFIX, self.flag)
    }

    /// 转换为注册表元数据条目
    pub fn to_entry(&self) -> LocaleMetadataEntry {
        LocaleMetadataEntry {
            code: self.code.to_string(),
            name: self.name.to_string(),
            flag: self.flag_path(),
            native_name: self.native_name.to_string(),
        }
    }
}

/// 支持的语言，顺序即展示顺序
pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language { code: "tr", name: "Turkish", native_name: "Türkçe", flag: "tr.svg" },
    Language { code: "en", name: "English", native_name: "English", flag: "us.svg" },
    Language { code: "az", name: "Azerbaijani", native_name: "Azərbaycanca", flag: "az.svg" },
    Language { code: "bs", name: "Bosnian", native_name: "Bosanski", flag: "ba.svg" },
    Language { code: "zh", name: "Chinese (Simplified)", native_name: "简体中文", flag: "cn.svg" },
    Language { code: "de", name: "German", native_name: "Deutsch", flag: "de.svg" },
    Language { code: "es", name: "Spanish", native_name: "Español", flag: "es.svg" },
    Language { code: "fr", name: "French", native_name: "Français", flag: "fr.svg" },
    Language { code: "id", name: "Indonesian", native_name: "Bahasa Indonesia", flag: "id.svg" },
    Language { code: "hi", name: "Hindi", native_name: "हिन्दी", flag: "in.svg" },
    Language { code: "it", name: "Italian", native_name: "Italiano", flag: "it.svg" },
    Language { code: "ky", name: "Kyrgyz", native_name: "Кыргызча", flag: "kg.svg" },
    Language { code: "ko", name: "Korean", native_name: "한국어", flag: "kr.svg" },
    Language { code: "kk", name: "Kazakh", native_name: "Қазақша", flag: "kz.svg" },
    Language { code: "ur", name: "Urdu", native_name: "اردو", flag: "pk.svg" },
    Language { code: "ru", name: "Russian", native_name: "Русский", flag: "ru.svg" },
    Language { code: "ar", name: "Arabic", native_name: "العربية", flag: "sa.svg" },
    Language { code: "tk", name: "Turkmen", native_name: "Türkmençe", flag: "tm.svg" },
    Language { code: "uz", name: "Uzbek", native_name: "Oʻzbekcha", flag: "uz.svg" },
];

/// 按语言代码查找
pub fn find_language(code: &str) -> Option<&'static Language> {
    SUPPORTED_LANGUAGES.iter().find(|lang| lang.code == code)
}
