/// Bounded input reading for the `maxpath` binary.
///
/// Graph documents are small JSON files, so the reader is deliberately
/// simple: slurp the whole input, enforce the `--max-file-size` cap before
/// (files) or during (stdin) the read, and validate UTF-8 with a byte
/// offset in the error. `maxpath-core` never touches the filesystem; all
/// reading happens here, and every failure maps to a [`CliError`] with
/// exit code 2.
use std::io::Read as _;
use std::path::Path;

use crate::cli::PathOrStdin;
use crate::error::CliError;

/// Reads the entire contents of `source` into a `String`, capped at
/// `max_size` bytes.
///
/// Disk files are length-checked via `std::fs::metadata` before any bytes
/// are read. Stdin has no length to check up front, so it is read through
/// a `Read::take` cap instead, one byte past the limit so "exactly at the
/// limit" and "over the limit" stay distinguishable.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) for a missing or unreadable file,
/// an input exceeding `max_size`, any other I/O failure, or invalid UTF-8
/// (with the byte offset of the first bad sequence).
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path, max_size),
        PathOrStdin::Stdin => read_stdin(max_size),
    }
}

/// Reads a disk file, enforcing the size limit before allocating.
fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    let meta = std::fs::metadata(path).map_err(|e| file_error(&e, path))?;
    if meta.len() > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(meta.len()),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| file_error(&e, path))?;
    into_utf8(bytes, &path.display().to_string())
}

/// Maps a disk-file I/O error to a [`CliError`].
///
/// Missing files and permission problems get dedicated variants with
/// dedicated messages; everything else is an opaque I/O failure.
fn file_error(e: &std::io::Error, path: &Path) -> CliError {
    if e.kind() == std::io::ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if e.kind() == std::io::ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

/// Reads the entire stdin stream, capped at `max_size` bytes.
///
/// Reads up to `max_size + 1` bytes in a single pass; a buffer that ends
/// up longer than `max_size` proves the stream exceeded the limit without
/// ever allocating more than one byte past it.
fn read_stdin(max_size: u64) -> Result<String, CliError> {
    let stdin = std::io::stdin();
    let mut buf: Vec<u8> = Vec::new();

    stdin
        .lock()
        .take(max_size.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    if buf.len() as u64 > max_size {
        return Err(CliError::FileTooLarge {
            source: "-".to_owned(),
            limit: max_size,
            actual: None,
        });
    }

    into_utf8(buf, "-")
}

/// Converts a byte buffer to a `String`, reporting the byte offset of the
/// first invalid sequence on failure.
fn into_utf8(bytes: Vec<u8>, source_label: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source_label.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
