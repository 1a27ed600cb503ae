//! Entry point for the `maxpath` binary: clap parsing, dispatch, exit codes.
use clap::Parser;

mod cli;
mod cmd;
mod error;
mod io;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Dispatches the parsed CLI to the matching command implementation.
///
/// Input reading and JSON decoding happen here so that every subcommand
/// shares the same size-capped I/O path and error surface.
fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Longest { file, max_steps } => {
            let parsed = read_and_decode(file, cli.max_file_size)?;
            cmd::longest::run(&parsed, *max_steps, &cli.format)
        }
        Command::Inspect { file } => {
            let parsed = read_and_decode(file, cli.max_file_size)?;
            cmd::inspect::run(&parsed, &cli.format)
        }
        Command::Version => {
            println!("{}", maxpath_core::version());
            Ok(())
        }
    }
}

/// Reads `source` and decodes it as a graph document.
fn read_and_decode(
    source: &PathOrStdin,
    max_file_size: u64,
) -> Result<maxpath_core::GraphFile, CliError> {
    let input = io::read_input(source, max_file_size)?;
    maxpath_core::parse_graph(&input).map_err(|e| CliError::DecodeError {
        detail: e.to_string(),
    })
}
