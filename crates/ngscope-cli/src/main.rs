//! ngscope CLI entry point.
//!
//! Parses arguments, initializes logging and dispatches the subcommand.

use clap::Parser;
use miette::Result;
use ngscope_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors();

    let result = match args.command {
        cli::Command::Analyze(analyze_args) => commands::analyze_execute(analyze_args).await,
    };

    result.map_err(error::cli_error_to_miette)
}
