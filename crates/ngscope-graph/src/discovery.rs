//! Project tree discovery.
//!
//! Lists the project root through the [`Runtime`] and produces two views of
//! it: a [`DirectoryNode`] tree for the structure section of a report and
//! the depth-first list of source files to classify. Entries are sorted by
//! name at every level so both views are stable across platforms.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostic;
use crate::runtime::Runtime;
use crate::{Error, Result};

/// Directory names skipped unless configured otherwise.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &["node_modules"];

/// Source extensions classified unless configured otherwise.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// One entry of the project structure listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryNode {
    pub name: String,
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DirectoryNode>,
}

impl DirectoryNode {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Total number of entries below this node.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

/// Filters applied while walking the tree.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// File extensions (without the dot) that mark a source file.
    pub extensions: Vec<String>,
    /// Directory names that are neither listed nor descended.
    pub ignore: Vec<String>,
    /// Include dot-entries.
    pub include_hidden: bool,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            ignore: DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect(),
            include_hidden: false,
        }
    }
}

impl DiscoveryOptions {
    fn skips(&self, name: &str, kind: EntryKind) -> bool {
        if !self.include_hidden && name.starts_with('.') {
            return true;
        }
        kind == EntryKind::Directory && self.ignore.iter().any(|ignored| ignored == name)
    }

    fn is_source(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|wanted| wanted == ext))
    }
}

/// Result of walking a project root.
#[derive(Debug, Clone)]
pub struct Discovery {
    pub structure: DirectoryNode,
    /// Source files in depth-first order, joined onto the root.
    pub sources: Vec<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Discovery {
    /// Walk `root`. Only a failure to list `root` itself is fatal.
    pub async fn run(
        runtime: &dyn Runtime,
        root: &Path,
        options: &DiscoveryOptions,
    ) -> Result<Self> {
        let mut diagnostics = Vec::new();
        let mut listings: IndexMap<PathBuf, Vec<(String, EntryKind)>> = IndexMap::new();

        let root_names = runtime
            .read_dir(root)
            .await
            .map_err(|source| Error::RootUnreadable {
                path: root.to_path_buf(),
                source,
            })?;

        let mut queue = VecDeque::from([(PathBuf::new(), Some(root_names))]);
        while let Some((relative, names)) = queue.pop_front() {
            let dir = root.join(&relative);
            let names = match names {
                Some(names) => names,
                None => match runtime.read_dir(&dir).await {
                    Ok(names) => names,
                    Err(err) => {
                        tracing::warn!(path = %dir.display(), error = %err, "cannot list directory");
                        diagnostics.push(Diagnostic::io_failure(&dir, err.to_string()));
                        listings.insert(relative, Vec::new());
                        continue;
                    }
                },
            };

            let mut entries = Vec::with_capacity(names.len());
            for name in names {
                let path = dir.join(&name);
                let metadata = match runtime.metadata(&path).await {
                    Ok(metadata) => metadata,
                    Err(err) => {
                        diagnostics.push(Diagnostic::io_failure(&path, err.to_string()));
                        continue;
                    }
                };
                let kind = if metadata.is_dir {
                    EntryKind::Directory
                } else if metadata.is_file {
                    EntryKind::File
                } else {
                    // sockets, fifos, devices
                    continue;
                };
                if options.skips(&name, kind) {
                    continue;
                }
                // Linked directories are listed but not entered.
                if kind == EntryKind::Directory {
                    if metadata.is_symlink {
                        tracing::debug!(path = %path.display(), "not following directory symlink");
                    } else {
                        queue.push_back((relative.join(&name), None));
                    }
                }
                entries.push((name, kind));
            }
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            listings.insert(relative, entries);
        }

        let mut sources = Vec::new();
        let children = build_level(&listings, Path::new(""), root, options, &mut sources);
        let structure = DirectoryNode {
            name: root_name(root),
            kind: EntryKind::Directory,
            children,
        };

        tracing::debug!(
            root = %root.display(),
            entries = structure.descendant_count(),
            sources = sources.len(),
            "discovered project tree"
        );

        Ok(Self {
            structure,
            sources,
            diagnostics,
        })
    }
}

fn build_level(
    listings: &IndexMap<PathBuf, Vec<(String, EntryKind)>>,
    relative: &Path,
    root: &Path,
    options: &DiscoveryOptions,
    sources: &mut Vec<PathBuf>,
) -> Vec<DirectoryNode> {
    let Some(entries) = listings.get(relative) else {
        return Vec::new();
    };

    entries
        .iter()
        .map(|(name, kind)| {
            let path = relative.join(name);
            let children = match kind {
                EntryKind::Directory => build_level(listings, &path, root, options, sources),
                EntryKind::File => {
                    if options.is_source(&path) {
                        sources.push(root.join(&path));
                    }
                    Vec::new()
                }
            };
            DirectoryNode {
                name: name.clone(),
                kind: *kind,
                children,
            }
        })
        .collect()
}

fn root_name(root: &Path) -> String {
    let cleaned = path_clean::clean(root);
    cleaned
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cleaned.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;
    use crate::runtime::test_utils::TestRuntime;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, TestRuntime) {
        let temp = TempDir::new().unwrap();
        let runtime = TestRuntime::new(temp.path());
        runtime.write("src/app/b.component.ts", "");
        runtime.write("src/app/a.component.ts", "");
        runtime.write("src/app/a.component.html", "");
        runtime.write("src/main.ts", "");
        runtime.write("node_modules/lib/index.ts", "");
        runtime.write(".angular/cache.ts", "");
        runtime.write("package.json", "{}");
        (temp, runtime)
    }

    #[tokio::test]
    async fn test_sources_are_depth_first_and_sorted() {
        let (temp, runtime) = fixture();
        let discovery = Discovery::run(&runtime, temp.path(), &DiscoveryOptions::default())
            .await
            .unwrap();

        let relative: Vec<_> = discovery
            .sources
            .iter()
            .map(|p| p.strip_prefix(temp.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            relative,
            vec![
                PathBuf::from("src/app/a.component.ts"),
                PathBuf::from("src/app/b.component.ts"),
                PathBuf::from("src/main.ts"),
            ]
        );
        assert!(discovery.diagnostics.is_empty());
    }

    #[tokio::test]
    async fn test_structure_skips_hidden_and_ignored() {
        let (temp, runtime) = fixture();
        let discovery = Discovery::run(&runtime, temp.path(), &DiscoveryOptions::default())
            .await
            .unwrap();

        let top: Vec<_> = discovery
            .structure
            .children
            .iter()
            .map(|n| (n.name.as_str(), n.kind))
            .collect();
        assert_eq!(
            top,
            vec![("package.json", EntryKind::File), ("src", EntryKind::Directory)]
        );
        // app, its three files and main.ts
        assert_eq!(discovery.structure.children[1].descendant_count(), 5);
    }

    #[tokio::test]
    async fn test_include_hidden_and_custom_ignore() {
        let (temp, runtime) = fixture();
        let options = DiscoveryOptions {
            include_hidden: true,
            ignore: vec!["app".to_string()],
            ..DiscoveryOptions::default()
        };
        let discovery = Discovery::run(&runtime, temp.path(), &options).await.unwrap();

        let names: Vec<_> = discovery
            .structure
            .children
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(names, vec![".angular", "node_modules", "package.json", "src"]);
        assert_eq!(discovery.sources.len(), 3);
    }

    #[tokio::test]
    async fn test_unreadable_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let runtime = TestRuntime::new(temp.path());
        let missing = temp.path().join("missing");

        let err = Discovery::run(&runtime, &missing, &DiscoveryOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::RootUnreadable { .. }));
    }

    #[tokio::test]
    async fn test_extension_filter() {
        let (temp, runtime) = fixture();
        let options = DiscoveryOptions {
            extensions: vec!["html".to_string()],
            ..DiscoveryOptions::default()
        };
        let discovery = Discovery::run(&runtime, temp.path(), &options).await.unwrap();
        assert_eq!(discovery.sources.len(), 1);
        assert!(discovery.sources[0].ends_with("src/app/a.component.html"));
        assert!(
            discovery
                .diagnostics
                .iter()
                .all(|d| d.kind != DiagnosticKind::IoFailure)
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_directory_symlink_cycle_is_not_followed() {
        let temp = TempDir::new().unwrap();
        let runtime = TestRuntime::new(temp.path());
        runtime.write("src/app/foo.ts", "export class Foo {}");
        std::os::unix::fs::symlink(temp.path().join("src"), temp.path().join("src/app/loop"))
            .unwrap();

        let discovery = Discovery::run(&runtime, temp.path(), &DiscoveryOptions::default())
            .await
            .unwrap();

        assert_eq!(discovery.sources, vec![temp.path().join("src/app/foo.ts")]);
        assert!(discovery.diagnostics.is_empty());

        let app = &discovery.structure.children[0].children[0];
        let names: Vec<_> = app.children.iter().map(|n| (n.name.as_str(), n.kind)).collect();
        assert_eq!(
            names,
            vec![("foo.ts", EntryKind::File), ("loop", EntryKind::Directory)]
        );
        assert!(app.children[1].children.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_file_symlink_is_still_a_source() {
        let temp = TempDir::new().unwrap();
        let runtime = TestRuntime::new(temp.path());
        runtime.write("shared/tokens.ts", "export const a = 1;");
        std::fs::create_dir_all(temp.path().join("src")).unwrap();
        std::os::unix::fs::symlink(
            temp.path().join("shared/tokens.ts"),
            temp.path().join("src/tokens.ts"),
        )
        .unwrap();

        let discovery = Discovery::run(&runtime, temp.path(), &DiscoveryOptions::default())
            .await
            .unwrap();

        assert_eq!(
            discovery.sources,
            vec![
                temp.path().join("shared/tokens.ts"),
                temp.path().join("src/tokens.ts"),
            ]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_special_files_are_not_listed() {
        let temp = TempDir::new().unwrap();
        let runtime = TestRuntime::new(temp.path());
        runtime.write("src/main.ts", "");
        let _socket = std::os::unix::net::UnixListener::bind(temp.path().join("src/dev.sock"))
            .unwrap();

        let discovery = Discovery::run(&runtime, temp.path(), &DiscoveryOptions::default())
            .await
            .unwrap();

        let src: Vec<_> = discovery.structure.children[0]
            .children
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(src, vec!["main.ts"]);
    }
}
