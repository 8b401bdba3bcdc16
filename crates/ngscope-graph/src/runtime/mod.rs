//! Filesystem access for the analyzer.
//!
//! Discovery, source loading and project documents all read through
//! [`Runtime`]. The native implementation wraps `std::fs` on the blocking
//! pool; tests use [`test_utils::TestRuntime`] over a temporary directory.

#[cfg(not(target_family = "wasm"))]
pub mod native;

#[cfg(any(
    all(test, not(target_family = "wasm")),
    all(feature = "test-utils", not(target_family = "wasm"))
))]
pub mod test_utils;

use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub type RuntimeResult<T> = Result<T, RuntimeError>;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(String),

    /// The blocking task performing the operation panicked or was cancelled.
    #[error("Filesystem task failed: {0}")]
    TaskFailed(String),
}

/// What discovery needs to know about a directory entry.
///
/// `size`, `is_dir` and `is_file` describe the link target; `is_symlink`
/// describes the entry itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMetadata {
    /// Size in bytes, checked against the analyzer's file size limit.
    pub size: u64,
    pub is_dir: bool,
    pub is_file: bool,
    pub is_symlink: bool,
}

/// Read-only view of a project tree.
///
/// Implementations only need to answer reads; the analyzer never writes.
///
/// ```rust,ignore
/// #[derive(Debug)]
/// struct InMemory(std::collections::HashMap<PathBuf, Vec<u8>>);
///
/// #[async_trait]
/// impl Runtime for InMemory {
///     async fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
///         self.0
///             .get(path)
///             .cloned()
///             .ok_or_else(|| RuntimeError::FileNotFound(path.to_path_buf()))
///     }
///
///     // metadata, read_dir, exists ...
/// }
/// ```
#[async_trait]
pub trait Runtime: Send + Sync + std::fmt::Debug {
    async fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>>;

    async fn metadata(&self, path: &Path) -> RuntimeResult<FileMetadata>;

    /// Entry names (not paths) of the directory at `path`, in any order.
    async fn read_dir(&self, path: &Path) -> RuntimeResult<Vec<String>>;

    fn exists(&self, path: &Path) -> bool;
}
