// ============================================================================
// Nitrokit - 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 数据模型模块入口
//
// ============================================================================

pub mod config;
pub mod language;
pub mod locale;
pub mod user_config;
