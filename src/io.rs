//! Reading and parsing cladogram summary files.
//!
//! One file per simulation run, named `<run>_<suffix>` (e.g.
//! `42_clade_analysis.txt`), one clade per line:
//!
//! ```text
//! 37 [5, 12, 20]
//! 63 [63]
//! ```
//!
//! A leading integer leaf count, whitespace, then a bracketed
//! comma-separated list of sub-partition sizes. Whitespace around
//! tokens is tolerated; anything else is a hard error carrying file
//! and line context. Loading is fail-fast: the first malformed file
//! aborts the whole directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cladogram::{Clade, Cladogram};

/// Errors raised while loading cladogram files.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: file name does not start with an integer run id", .path.display())]
    RunId { path: PathBuf },

    #[error("{}:{line}: expected `<size> [<subclade sizes>]`", .path.display())]
    CladeLine { path: PathBuf, line: usize },

    #[error("{}:{line}: invalid integer {token:?}", .path.display())]
    Int {
        path: PathBuf,
        line: usize,
        token: String,
    },

    #[error("directory not found: {}", .path.display())]
    DirNotFound { path: PathBuf },
}

/// Parse one cladogram file, tagging the result with `num_muts`.
///
/// The run identifier is the file name up to the first `_`. Every
/// line must hold a clade; blank lines are rejected rather than
/// skipped, so a truncated file cannot slip through as a short one.
pub fn parse_cladogram<P: AsRef<Path>>(path: P, num_muts: u8) -> Result<Cladogram, ParseError> {
    let path = path.as_ref();
    let run = run_id(path)?;

    let content = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut clades = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        clades.push(parse_clade_line(raw, path, idx + 1)?);
    }

    Ok(Cladogram::new(run, num_muts, clades))
}

/// Extract the run id from a file name like `42_clade_analysis.txt`.
fn run_id(path: &Path) -> Result<usize, ParseError> {
    path.file_name()
        .and_then(|s| s.to_str())
        .and_then(|name| name.split('_').next())
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| ParseError::RunId {
            path: path.to_path_buf(),
        })
}

/// Parse one `<size> [<int>, <int>, ...]` line.
fn parse_clade_line(raw: &str, path: &Path, line: usize) -> Result<Clade, ParseError> {
    let trimmed = raw.trim();

    let (size_token, rest) =
        trimmed
            .split_once(char::is_whitespace)
            .ok_or_else(|| ParseError::CladeLine {
                path: path.to_path_buf(),
                line,
            })?;

    let size = parse_int(size_token, path, line)?;

    // "[5, 12, 20]" -> "5, 12, 20"; an empty list `[]` leaves an empty
    // token and fails below, same as a missing one.
    let subclade_sizes = rest
        .trim()
        .trim_matches(['[', ']'])
        .split(',')
        .map(|token| parse_int(token.trim(), path, line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Clade::new(size, subclade_sizes))
}

fn parse_int(token: &str, path: &Path, line: usize) -> Result<usize, ParseError> {
    token.parse().map_err(|_| ParseError::Int {
        path: path.to_path_buf(),
        line,
        token: token.to_string(),
    })
}

/// Parse every file directly contained in `dir` (non-recursive),
/// tagging each cladogram with `num_muts`.
///
/// Entries that are not regular files are skipped. The returned order
/// is whatever the directory listing yields; callers that care about
/// order sort after pairing.
pub fn parse_dir<P: AsRef<Path>>(dir: P, num_muts: u8) -> Result<Vec<Cladogram>, ParseError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ParseError::DirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = fs::read_dir(dir).map_err(|source| ParseError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut ret = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ParseError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        ret.push(parse_cladogram(&path, num_muts)?);
    }

    Ok(ret)
}
