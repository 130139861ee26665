// ============================================================================
// Nitrokit - 语言注册表错误类型
// ============================================================================
//
// 文件: src/core/error.rs
// 职责: 语言注册表编辑相关的错误分类
// 边界:
//   - ✅ 错误变体定义
//   - ✅ 错误消息格式化
//   - ❌ 不应包含错误恢复逻辑
//   - ❌ 不应包含日志输出
//
// ============================================================================

use std::path::PathBuf;

/// 语言注册表编辑错误
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    /// 注册表文本不符合预期结构
    #[error("could not parse locale registry: {0}")]
    Parse(String),

    /// 目标默认语言不在语言列表中
    #[error("'{code}' is not a registered locale (available: {available})")]
    InvalidDefault { code: String, available: String },

    /// 消息包缺失或不是合法的 JSON 对象
    #[error("failed to read message bundle {}: {reason}", path.display())]
    BundleRead { path: PathBuf, reason: String },

    /// 项目结构不完整
    #[error("required project path not found: {}", path.display())]
    ProjectStructure { path: PathBuf },

    /// 严格模式下遇到语言目录中不存在的语言代码
    #[error("unknown language code(s): {}", codes.join(", "))]
    UnknownLanguage { codes: Vec<String> },

    /// 文件读写失败
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LocaleError {
    pub(crate) fn parse<S: Into<String>>(msg: S) -> Self {
        LocaleError::Parse(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LocaleError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type LocaleResult<T> = Result<T, LocaleError>;
