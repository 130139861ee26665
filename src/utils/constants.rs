// ============================================================================
// Nitrokit - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
// 边界:
//   - ✅ 应用名称与输出标签
//   - ✅ 图标字符定义
//   - ✅ spinner 字符定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 日志标签
pub const APP_TAG: &str = "[NITROKIT]";

/// 图标
pub mod icons {
    /// 成功图标
    pub const SUCCESS: &str = "✓";
    /// 跳过图标
    pub const SKIP: &str = "○";
    /// 默认语言标记
    pub const DEFAULT: &str = "★";
    /// 箭头图标
    pub const ARROW: &str = "→";
}

/// 加载 spinner 字符
pub mod spinner_chars {
    pub const BASE: &str = "⠋⠙⠹⠸⠼⠴⠦⠧ ";
}
