// ============================================================================
// Nitrokit - 暂存的文件变更
// ============================================================================
//
// 文件: src/core/changeset.rs
// 职责: 在内存中暂存所有待写文件，计算全部成功后再统一提交
// 边界:
//   - ✅ 待写文件的收集与排序
//   - ✅ 提交（创建父目录并整文件覆盖写入）
//   - ❌ 不应包含文件内容的计算逻辑
//   - ❌ 不应包含回滚逻辑
//
// ============================================================================

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::error::{LocaleError, LocaleResult};

/// 待写文件的类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// 从来源语言复制的消息包
    BundleCopy,
    /// 类型引用文件
    TypeReferences,
    /// 声明汇总文件
    Declarations,
    /// 动态加载文件
    Loader,
    /// 语言注册表
    Registry,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::BundleCopy => "bundle",
            ArtifactKind::TypeReferences => "type references",
            ArtifactKind::Declarations => "declarations",
            ArtifactKind::Loader => "loader",
            ArtifactKind::Registry => "registry",
        }
    }
}

/// 一个待写文件
#[derive(Debug, Clone)]
pub struct PlannedWrite {
    pub path: PathBuf,
    pub kind: ArtifactKind,
    pub contents: Vec<u8>,
}

/// 按提交顺序排列的待写文件集合
#[derive(Debug, Default)]
pub struct ChangeSet {
    writes: Vec<PlannedWrite>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个待写文件，提交时按追加顺序写入
    pub fn stage(&mut self, path: impl Into<PathBuf>, kind: ArtifactKind, contents: impl Into<Vec<u8>>) {
        self.writes.push(PlannedWrite {
            path: path.into(),
            kind,
            contents: contents.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn writes(&self) -> &[PlannedWrite] {
        &self.writes
    }

    /// 是否已暂存某路径
    pub fn contains(&self, path: &Path) -> bool {
        self.writes.iter().any(|w| w.path == path)
    }

    /// 依次写入所有文件，返回已写入的路径
    ///
    /// 某个写入失败时立即返回错误，之前已写入的文件保持不变。
    pub fn commit(self) -> LocaleResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.writes.len());

        for write in self.writes {
            if let Some(parent) = write.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|e| LocaleError::io(parent, e))?;
                }
            }
            fs::write(&write.path, &write.contents).map_err(|e| LocaleError::io(&write.path, e))?;
            debug!(path = %write.path.display(), kind = write.kind.as_str(), "wrote file");
            written.push(write.path);
        }

        Ok(written)
    }
}
