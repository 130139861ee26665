// ============================================================================
// Nitrokit - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: 模块声明与对外导出
// 边界:
//   - ✅ 模块声明
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

pub mod cli;
pub mod core;
pub mod i18n;
pub mod models;
pub mod utils;
