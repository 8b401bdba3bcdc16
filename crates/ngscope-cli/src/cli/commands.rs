use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;

/// Available ngscope subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a project and write an overview report
    ///
    /// Walks the project root, classifies every decorated class, resolves
    /// component nesting from selectors found in inline templates and writes
    /// the result as Markdown or JSON.
    Analyze(AnalyzeArgs),
}

/// Arguments for the analyze command
#[derive(Args, Debug, Default, Clone)]
pub struct AnalyzeArgs {
    /// Project root to analyze
    ///
    /// Defaults to the current directory (or NGSCOPE_ROOT when set).
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Output file, or `-` for stdout
    ///
    /// Defaults to project-overview.md or project-overview.json depending
    /// on the format.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Config file to load instead of <ROOT>/ngscope.config.json
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Source file extension to classify (repeatable, replaces the default `ts`)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Additional directory name to skip (repeatable)
    #[arg(long, value_name = "DIR")]
    pub ignore: Vec<String>,

    /// Include dot-files and dot-directories
    #[arg(long)]
    pub include_hidden: bool,

    /// Skip source files larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    pub max_file_size: Option<u64>,

    /// Do not read package.json, tsconfig.json or environment files
    #[arg(long)]
    pub no_project_documents: bool,

    /// Exit with an error when the analysis produced diagnostics
    #[arg(long)]
    pub fail_on_diagnostics: bool,
}
