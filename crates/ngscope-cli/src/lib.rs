//! ngscope CLI - structural overview reports for Angular projects.
//!
//! This crate wraps [`ngscope_graph`] in a command-line tool that writes a
//! Markdown or JSON overview of a project: directory structure, component
//! tree, services, modules, pipes, per-file dependencies, routes and the
//! project's package and compiler configuration.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`config`] - layered configuration (defaults, file, environment, flags)
//! - [`commands`] - subcommand implementations
//! - [`render`] - report assembly from an [`ngscope_graph::AnalysisResult`]
//! - [`error`] - error types with actionable messages
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - terminal status messages
//!
//! # Example
//!
//! ```rust
//! use ngscope_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod render;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
