//! End-to-end analysis of a project root.
//!
//! The [`Analyzer`] runs the engine in strict phases:
//!
//! 1. discovery of the directory tree and the source file list
//! 2. read and classify every source file into the [`Registry`]
//! 3. resolve component containment over the finished registry
//! 4. load project documents
//!
//! Nothing in phase 3 starts before phase 2 has seen every file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::diagnostics::Diagnostic;
use crate::discovery::{DirectoryNode, Discovery, DiscoveryOptions};
use crate::project::{PackageManifest, ProjectDocuments};
use crate::registry::{ComponentRecord, PipeRecord, Registry};
use crate::resolver::{ComponentTree, ContainmentGraph};
use crate::runtime::Runtime;
use crate::source::SourceUnit;
use crate::Result;

/// Default cap on the size of a single source file.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Settings for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Project root. Defaults to the current directory.
    pub root: Option<PathBuf>,
    pub discovery: DiscoveryOptions,
    pub max_file_size: u64,
    /// Load `package.json`, `tsconfig.json` and environment files.
    pub project_documents: bool,
    pub runtime: Option<Arc<dyn Runtime>>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: None,
            discovery: DiscoveryOptions::default(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            project_documents: true,
            runtime: None,
        }
    }
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisStats {
    pub files_discovered: usize,
    pub files_classified: usize,
    pub files_skipped: usize,
}

/// Everything a report needs, in discovery order.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub root: PathBuf,
    pub structure: DirectoryNode,
    /// Components with resolved child lists.
    pub components: IndexMap<String, ComponentRecord>,
    pub services: IndexSet<String>,
    pub modules: IndexSet<String>,
    pub pipes: IndexMap<String, PipeRecord>,
    pub routes: IndexMap<String, String>,
    pub dependencies: IndexMap<PathBuf, IndexSet<String>>,
    pub tree: ComponentTree,
    pub environments: Vec<String>,
    pub package: Option<PackageManifest>,
    pub compiler_options: Option<serde_json::Value>,
    pub diagnostics: Vec<Diagnostic>,
    pub stats: AnalysisStats,
}

impl AnalysisResult {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Names of components no other component contains.
    pub fn root_components(&self) -> impl Iterator<Item = &str> {
        self.tree.roots.iter().map(|node| node.name.as_str())
    }
}

/// Builder-style entry point for analyzing a project.
///
/// # Example
///
/// ```rust,no_run
/// use ngscope_graph::Analyzer;
///
/// # async fn example() -> ngscope_graph::Result<()> {
/// let analysis = Analyzer::new()
///     .root("./my-app")
///     .ignore_dir("dist")
///     .analyze()
///     .await?;
///
/// println!("{} components", analysis.components.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.root = Some(root.into());
        self
    }

    /// Set the runtime for filesystem operations.
    ///
    /// If not set, the native runtime is used.
    pub fn runtime(mut self, runtime: Arc<dyn Runtime>) -> Self {
        self.config.runtime = Some(runtime);
        self
    }

    /// Replace the source extensions (without the dot).
    pub fn extensions(mut self, extensions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.config.discovery.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Skip another directory name in addition to the defaults.
    pub fn ignore_dir(mut self, name: impl Into<String>) -> Self {
        self.config.discovery.ignore.push(name.into());
        self
    }

    pub fn include_hidden(mut self, include: bool) -> Self {
        self.config.discovery.include_hidden = include;
        self
    }

    /// Files larger than this are skipped (default: 10 MiB).
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.config.max_file_size = bytes;
        self
    }

    pub fn project_documents(mut self, load: bool) -> Self {
        self.config.project_documents = load;
        self
    }

    /// Execute the analysis.
    pub async fn analyze(self) -> Result<AnalysisResult> {
        let config = self.config;
        if config.discovery.extensions.is_empty() {
            return Err(crate::Error::InvalidConfig(
                "At least one source extension is required".to_string(),
            ));
        }
        if config.max_file_size == 0 {
            return Err(crate::Error::InvalidConfig(
                "Maximum file size must be greater than zero".to_string(),
            ));
        }

        let runtime = get_runtime(&config)?;
        let root = config.root.clone().unwrap_or_else(|| PathBuf::from("."));

        tracing::info!(root = %root.display(), "discovering project tree");
        let discovery = Discovery::run(runtime.as_ref(), &root, &config.discovery).await?;
        let mut diagnostics: Vec<Diagnostic> = discovery
            .diagnostics
            .into_iter()
            .map(|d| relativize(&root, d))
            .collect();

        let mut stats = AnalysisStats {
            files_discovered: discovery.sources.len(),
            ..AnalysisStats::default()
        };

        tracing::info!(files = stats.files_discovered, "classifying source files");
        let mut registry = Registry::new();
        for path in &discovery.sources {
            let relative = relative_to(&root, path);
            match load_source(runtime.as_ref(), path, &relative, config.max_file_size).await {
                Ok(unit) => match unit.classify() {
                    Ok(mut facts) => {
                        tracing::debug!(
                            path = %relative.display(),
                            declarations = facts.declarations.len(),
                            routes = facts.routes.len(),
                            "classified"
                        );
                        diagnostics.append(&mut facts.diagnostics);
                        registry.record_file(&relative, facts);
                        stats.files_classified += 1;
                    }
                    Err(err) => {
                        diagnostics.push(Diagnostic::parse_failure(
                            &relative,
                            err.messages.join("; "),
                        ));
                        stats.files_skipped += 1;
                    }
                },
                Err(diagnostic) => {
                    diagnostics.push(diagnostic);
                    stats.files_skipped += 1;
                }
            }
        }

        tracing::info!(
            components = registry.components().len(),
            "resolving component containment"
        );
        let graph = ContainmentGraph::resolve(registry.components());
        let tree = graph.tree();
        let mut parts = registry.into_parts();
        graph.attach_children(&mut parts.components);

        let documents = if config.project_documents {
            let mut document_diagnostics = Vec::new();
            let documents =
                ProjectDocuments::load(runtime.as_ref(), &root, &mut document_diagnostics).await;
            diagnostics.extend(document_diagnostics.into_iter().map(|d| relativize(&root, d)));
            documents
        } else {
            ProjectDocuments::default()
        };

        for diagnostic in &diagnostics {
            tracing::warn!("{diagnostic}");
        }

        Ok(AnalysisResult {
            root,
            structure: discovery.structure,
            components: parts.components,
            services: parts.services,
            modules: parts.modules,
            pipes: parts.pipes,
            routes: parts.routes,
            dependencies: parts.dependencies,
            tree,
            environments: documents.environments,
            package: documents.package,
            compiler_options: documents.compiler_options,
            diagnostics,
            stats,
        })
    }
}

fn get_runtime(config: &AnalyzerConfig) -> Result<Arc<dyn Runtime>> {
    if let Some(ref runtime) = config.runtime {
        Ok(Arc::clone(runtime))
    } else {
        #[cfg(not(target_family = "wasm"))]
        {
            use crate::NativeRuntime;
            Ok(Arc::new(NativeRuntime))
        }
        #[cfg(target_family = "wasm")]
        {
            Err(crate::Error::InvalidConfig(
                "Runtime is required in WASM environment".to_string(),
            ))
        }
    }
}

/// Read one source file, enforcing the size limit.
async fn load_source(
    runtime: &dyn Runtime,
    path: &Path,
    relative: &Path,
    max_file_size: u64,
) -> std::result::Result<SourceUnit, Diagnostic> {
    let metadata = runtime
        .metadata(path)
        .await
        .map_err(|err| Diagnostic::io_failure(relative, err.to_string()))?;
    if metadata.size > max_file_size {
        return Err(Diagnostic::io_failure(
            relative,
            format!(
                "file is {} bytes, above the {max_file_size} byte limit",
                metadata.size
            ),
        ));
    }

    let bytes = runtime
        .read_file(path)
        .await
        .map_err(|err| Diagnostic::io_failure(relative, err.to_string()))?;
    SourceUnit::from_bytes(relative, bytes)
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(relative) => path_clean::clean(relative),
        Err(_) => path.to_path_buf(),
    }
}

fn relativize(root: &Path, mut diagnostic: Diagnostic) -> Diagnostic {
    diagnostic.path = relative_to(root, &diagnostic.path);
    diagnostic
}
