//! Test runtime backed by the real filesystem.
//!
//! Tests build fixture trees inside a `tempfile::TempDir` and drive the
//! analyzer through this runtime, so the async `Runtime` API is exercised
//! against real I/O.

// Test utilities are allowed to use std::fs since they only run on native platforms
#![allow(clippy::disallowed_methods)]

use crate::runtime::{FileMetadata, Runtime, RuntimeError, RuntimeResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Simple test runtime that wraps `std::fs` synchronously.
///
/// ```rust,ignore
/// use ngscope_graph::TestRuntime;
/// use tempfile::TempDir;
///
/// let temp = TempDir::new().unwrap();
/// let runtime = TestRuntime::new(temp.path());
/// runtime.write("src/app/app.component.ts", "export class App {}");
/// assert!(temp.path().join("src/app/app.component.ts").exists());
/// ```
#[derive(Debug)]
pub struct TestRuntime {
    root: PathBuf,
}

impl TestRuntime {
    /// Create a test runtime rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory fixtures are written under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write a fixture file relative to the root, creating parent directories.
    ///
    /// Panics on failure; fixtures are test-only.
    pub fn write(&self, relative: impl AsRef<Path>, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture directory");
        }
        std::fs::write(&path, content).expect("write fixture file");
        path
    }
}

#[async_trait]
impl Runtime for TestRuntime {
    async fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| RuntimeError::Io(e.to_string()))
    }

    async fn metadata(&self, path: &Path) -> RuntimeResult<FileMetadata> {
        let link = std::fs::symlink_metadata(path).map_err(|e| RuntimeError::Io(e.to_string()))?;
        let metadata = std::fs::metadata(path).map_err(|e| RuntimeError::Io(e.to_string()))?;
        Ok(FileMetadata {
            size: metadata.len(),
            is_file: metadata.is_file(),
            is_dir: metadata.is_dir(),
            is_symlink: link.file_type().is_symlink(),
        })
    }

    async fn read_dir(&self, path: &Path) -> RuntimeResult<Vec<String>> {
        let entries: Vec<String> = std::fs::read_dir(path)
            .map_err(|e| RuntimeError::Io(e.to_string()))?
            .filter_map(|entry| {
                entry
                    .ok()
                    .and_then(|e| e.file_name().to_str().map(String::from))
            })
            .collect();
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
