//! Output formatting for walked paths.
//!
//! Turns the paths produced by a [`Walk`](crate::Walk) into newline- or
//! NUL-separated text, or a JSON array of strings.

use crate::WalkError;
use std::fs;
use std::path::{Path, PathBuf};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One path per line.
    Lines,
    /// Paths terminated by NUL, for `xargs -0`.
    Null,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Lines | OutputFormat::Null => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats paths into a string.
///
/// Non-UTF-8 paths are rendered lossily in every format.
pub fn format_paths(
    paths: &[PathBuf],
    format: OutputFormat,
    pretty: bool,
) -> Result<String, WalkError> {
    match format {
        OutputFormat::Lines => Ok(format_separated(paths, '\n')),
        OutputFormat::Null => Ok(format_separated(paths, '\0')),
        OutputFormat::Json => format_json(paths, pretty),
    }
}

/// Writes the formatted paths to a file.
pub fn write_paths_to_file(
    paths: &[PathBuf],
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), WalkError> {
    let content = format_paths(paths, format, pretty)?;
    fs::write(&path, content).map_err(|e| WalkError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_separated(paths: &[PathBuf], sep: char) -> String {
    let mut out = String::with_capacity(paths.len() * 32);
    for path in paths {
        out.push_str(&path.to_string_lossy());
        out.push(sep);
    }
    out
}

fn format_json(paths: &[PathBuf], pretty: bool) -> Result<String, WalkError> {
    let strings: Vec<_> = paths.iter().map(|p| p.to_string_lossy()).collect();
    let json = if pretty {
        serde_json::to_string_pretty(&strings)?
    } else {
        serde_json::to_string(&strings)?
    };
    Ok(json)
}
