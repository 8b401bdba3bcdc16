//! Native Runtime Implementation
//!
//! Wraps `std::fs` behind the [`Runtime`] trait for non-WASM targets.

// Native filesystem access goes through std::fs
#![allow(clippy::disallowed_methods)]

use async_trait::async_trait;
use std::path::Path;
use tokio::task;

use crate::runtime::{FileMetadata, Runtime, RuntimeError, RuntimeResult};

/// Native filesystem Runtime implementation using `std::fs`.
///
/// Blocking calls run on tokio's blocking pool via `spawn_blocking`.
///
/// # Example
///
/// ```rust,no_run
/// use ngscope_graph::{NativeRuntime, Runtime};
/// use std::path::Path;
///
/// # async fn example() -> ngscope_graph::RuntimeResult<()> {
/// let runtime = NativeRuntime;
/// let content = runtime.read_file(Path::new("src/main.ts")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NativeRuntime;

impl NativeRuntime {
    /// Create a new NativeRuntime instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for NativeRuntime {
    fn default() -> Self {
        Self::new()
    }
}

fn map_io_error(path: &Path, action: &str, error: std::io::Error) -> RuntimeError {
    if error.kind() == std::io::ErrorKind::NotFound {
        RuntimeError::FileNotFound(path.to_path_buf())
    } else {
        RuntimeError::Io(format!("Failed to {action} {}: {error}", path.display()))
    }
}

#[async_trait]
impl Runtime for NativeRuntime {
    async fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        let path = path.to_path_buf();

        task::spawn_blocking(move || std::fs::read(&path).map_err(|e| map_io_error(&path, "read", e)))
            .await
            .map_err(|e| RuntimeError::TaskFailed(e.to_string()))?
    }

    async fn metadata(&self, path: &Path) -> RuntimeResult<FileMetadata> {
        let path = path.to_path_buf();

        task::spawn_blocking(move || {
            let is_symlink = std::fs::symlink_metadata(&path)
                .map_err(|e| map_io_error(&path, "get metadata for", e))?
                .file_type()
                .is_symlink();
            let metadata = std::fs::metadata(&path)
                .map_err(|e| map_io_error(&path, "get metadata for", e))?;

            Ok(FileMetadata {
                size: metadata.len(),
                is_dir: metadata.is_dir(),
                is_file: metadata.is_file(),
                is_symlink,
            })
        })
        .await
        .map_err(|e| RuntimeError::TaskFailed(e.to_string()))?
    }

    async fn read_dir(&self, path: &Path) -> RuntimeResult<Vec<String>> {
        let path = path.to_path_buf();

        task::spawn_blocking(move || {
            let entries =
                std::fs::read_dir(&path).map_err(|e| map_io_error(&path, "read directory", e))?;

            let mut result = Vec::new();
            for entry in entries {
                let entry = entry.map_err(|e| {
                    RuntimeError::Io(format!("Failed to read directory entry: {}", e))
                })?;

                if let Some(name) = entry.file_name().to_str() {
                    result.push(name.to_string());
                }
            }

            Ok(result)
        })
        .await
        .map_err(|e| RuntimeError::TaskFailed(e.to_string()))?
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("app.component.ts");
        fs::write(&file_path, b"export class App {}").unwrap();

        let content = NativeRuntime::new().read_file(&file_path).await.unwrap();
        assert_eq!(content, b"export class App {}");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.ts");

        let err = NativeRuntime::new().read_file(&missing).await.unwrap_err();
        assert!(matches!(err, RuntimeError::FileNotFound(path) if path == missing));
    }

    #[tokio::test]
    async fn test_metadata() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, b"test content").unwrap();

        let metadata = NativeRuntime::new().metadata(&file_path).await.unwrap();
        assert!(metadata.is_file);
        assert!(!metadata.is_dir);
        assert_eq!(metadata.size, 12);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_metadata_reports_symlinked_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("src")).unwrap();
        let link = temp_dir.path().join("alias");
        std::os::unix::fs::symlink(temp_dir.path().join("src"), &link).unwrap();

        let runtime = NativeRuntime::new();
        let metadata = runtime.metadata(&link).await.unwrap();
        assert!(metadata.is_dir);
        assert!(metadata.is_symlink);

        let plain = runtime.metadata(&temp_dir.path().join("src")).await.unwrap();
        assert!(!plain.is_symlink);
    }

    #[tokio::test]
    async fn test_read_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.ts"), b"").unwrap();
        fs::create_dir(temp_dir.path().join("app")).unwrap();

        let mut entries = NativeRuntime::new().read_dir(temp_dir.path()).await.unwrap();
        entries.sort();
        assert_eq!(entries, vec!["a.ts", "app"]);
    }

    #[tokio::test]
    async fn test_exists() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.ts");
        let runtime = NativeRuntime::new();

        assert!(!runtime.exists(&file_path));
        fs::write(&file_path, b"").unwrap();
        assert!(runtime.exists(&file_path));
    }
}
