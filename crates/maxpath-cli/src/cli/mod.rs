//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].  This avoids stringly-typed handling of the stdin
/// sentinel throughout the codebase.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text (default).
    Human,
    /// A single structured JSON object.
    Json,
}

/// All top-level subcommands exposed by the `maxpath` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Find a longest simple path in a graph and report the max cut.
    Longest {
        /// Path to a graph JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Step budget: stop after this many search steps and report the
        /// best path found so far. A truncated search exits 1.
        #[arg(long, value_name = "N")]
        max_steps: Option<u64>,
    },

    /// Print summary statistics for a graph.
    Inspect {
        /// Path to a graph JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Print the maxpath-core library version.
    Version,
}

/// Root CLI struct for the `maxpath` binary.
///
/// Global flags are marked `global = true` so that clap propagates them to
/// every subcommand.
#[derive(Parser)]
#[command(
    name = "maxpath",
    version,
    about = "Longest-simple-path search over directed graphs",
    long_about = "Finds a longest simple path in a directed graph by exhaustive\n\
                  depth-first backtracking from every edge, and reports the\n\
                  complementary edge set (the max cut)."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `MAXPATH_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "MAXPATH_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,
}
