/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `maxpath` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2** — input failure: the tool could not read, decode, or
///   build a graph from the input at all. These errors terminate early
///   before any search runs.
/// - Exit code **1** — logical failure: the tool ran to completion but the
///   result is a well-defined failure (the step budget truncated the
///   search, so the reported path is not guaranteed longest).
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `maxpath` CLI can produce.
///
/// Use [`CliError::exit_code`] to obtain the exit code associated with each
/// variant. [`CliError::message`] returns the human-readable error string
/// that should be printed to stderr before exiting.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// A human-readable label for the source (`"-"` for stdin, or the
        /// filesystem path).
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, if known (disk files only; `None` for
        /// stdin where the exact size is unknown).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a valid graph JSON document.
    DecodeError {
        /// The underlying decode error message, including position.
        detail: String,
    },

    /// The decoded document does not describe a well-formed graph
    /// (duplicate node ID or dangling edge endpoint).
    GraphBuildError {
        /// The underlying build error message.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// The step budget expired before the search space was exhausted.
    ///
    /// The partial result has already been printed; this variant exists so
    /// `main` can exit 1 cleanly.
    SearchTruncated {
        /// Steps consumed before the budget ran out.
        steps: u64,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2` — input failure (file not found, decode error, etc.).
    /// - `1` — logical failure (truncated search).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::DecodeError { .. }
            | Self::GraphBuildError { .. } => 2,

            Self::SearchTruncated { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::DecodeError { detail } => {
                format!("error: {detail}")
            }
            Self::GraphBuildError { detail } => {
                format!("error: malformed graph: {detail}")
            }
            Self::SearchTruncated { steps } => {
                format!("error: search truncated after {steps} steps; result is not exhaustive")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
