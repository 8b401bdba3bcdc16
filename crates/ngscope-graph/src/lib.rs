//! # ngscope-graph
//!
//! Structural relationship extraction for Angular source trees.
//!
//! The crate walks a project through a [`Runtime`], parses every TypeScript
//! source with OXC, classifies decorated classes and derives two relational
//! views from the result: the component containment tree and the per-file
//! external dependency sets. A flat route table is collected alongside.
//!
//! ## Architecture
//!
//! ```text
//!  Runtime ──▶ discovery ──▶ SourceUnit ──▶ parser ──▶ classifier
//!                                                           │
//!                                                           ▼
//!                                                       Registry
//!                                                           │  (phase 2)
//!                                                           ▼
//!                                                  ContainmentGraph
//!                                                           │
//!                                                           ▼
//!                                                    AnalysisResult
//! ```
//!
//! Processing is strictly phased: every file is classified into the
//! [`Registry`] before the [`ContainmentGraph`] is resolved over it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ngscope_graph::Analyzer;
//!
//! # async fn example() -> ngscope_graph::Result<()> {
//! let analysis = Analyzer::new().root("./my-app").analyze().await?;
//!
//! for root in &analysis.tree.roots {
//!     println!("root component: {}", root.name);
//! }
//! for diagnostic in &analysis.diagnostics {
//!     eprintln!("{diagnostic}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Classifying a single file
//!
//! ```rust
//! use ngscope_graph::{Declaration, SourceUnit};
//!
//! let unit = SourceUnit::new(
//!     "src/app/foo.component.ts",
//!     "@Component({ selector: 'app-foo', template: '<div>hi</div>' }) export class Foo {}",
//! );
//! let facts = unit.classify().unwrap();
//! assert!(matches!(&facts.declarations[0], Declaration::Component(c) if c.selector == "app-foo"));
//! ```

pub mod analyzer;
pub mod classifier;
pub mod diagnostics;
pub mod discovery;
pub mod parser;
pub mod project;
pub mod registry;
pub mod resolver;
pub mod runtime;
pub mod source;

pub use analyzer::{AnalysisResult, AnalysisStats, Analyzer, AnalyzerConfig};
pub use classifier::{Declaration, DeclarationKind, FileFacts, classify_program};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use discovery::{DirectoryNode, Discovery, DiscoveryOptions, EntryKind};
pub use parser::{ParseError, ParseOptions, ParsedProgram};
pub use project::{PackageManifest, ProjectDocuments};
pub use registry::{ComponentRecord, PipeRecord, Registry, RouteEntry};
pub use resolver::{ComponentTree, ContainmentGraph, TreeNode};
pub use source::SourceUnit;

pub use runtime::{FileMetadata, Runtime, RuntimeError, RuntimeResult};

#[cfg(not(target_family = "wasm"))]
pub use runtime::native::NativeRuntime;

#[cfg(any(
    all(test, not(target_family = "wasm")),
    all(feature = "test-utils", not(target_family = "wasm"))
))]
pub use runtime::test_utils::TestRuntime;

/// Error types for ngscope operations.
///
/// Only failures that make a whole run meaningless surface here. Per-file
/// problems are reported as [`Diagnostic`]s on the [`AnalysisResult`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The project root could not be enumerated.
    #[error("Cannot read project root '{}': {source}", path.display())]
    RootUnreadable {
        path: std::path::PathBuf,
        #[source]
        source: RuntimeError,
    },

    /// Runtime failure outside of per-file processing.
    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ngscope operations.
pub type Result<T> = std::result::Result<T, Error>;
