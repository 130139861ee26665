// ============================================================================
// Nitrokit - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 核心业务逻辑模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体业务实现
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含 UI 相关逻辑
//
// ============================================================================

pub mod changeset;
pub mod error;
pub mod generator;
pub mod parser;
pub mod regenerator;
mod render;
pub mod writer;

// 重新导出常用类型
pub use changeset::{ArtifactKind, ChangeSet};
pub use error::{LocaleError, LocaleResult};
pub use generator::{GenerateReport, GenerateRequest, LocaleGenerator, ProjectLayout};
pub use parser::{parse_codes, parse_default_code, parse_registry, RegistryDocument};
pub use writer::{add_locales, set_default_locale, AddOutcome, EditOutcome};
