//! Command-line interface definition for ngscope.
//!
//! # Command Structure
//!
//! - `ngscope analyze [ROOT]` - write a structural overview of a project

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{AnalyzeArgs, Command};
pub use enums::*;

/// ngscope - structural overview reports for Angular projects
#[derive(Parser, Debug)]
#[command(
    name = "ngscope",
    version,
    about = "Structural overview reports for Angular projects",
    long_about = "ngscope parses the TypeScript sources of an Angular project and reports\n\
                  its components, services, modules, pipes, component nesting, routes and\n\
                  per-file third-party imports, without building or running the project."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
