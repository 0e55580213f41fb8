//! File and directory ignore pattern handling for templates.
//! Processes the .scaffoldignore file to exclude paths from materialization,
//! similar to .gitignore functionality.

use crate::constants::DEFAULT_IGNORE_PATTERNS;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

pub use crate::constants::IGNORE_FILE;

/// Reads the ignore file and compiles its patterns together with the defaults.
///
/// # Notes
/// - A missing ignore file yields only the default patterns
/// - Blank lines and lines starting with `#` are skipped
/// - An invalid pattern results in `Error::IgnoreError`
pub fn parse_ignore_file<P: AsRef<Path>>(ignore_path: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in DEFAULT_IGNORE_PATTERNS {
        builder.add(Glob::new(pattern).map_err(|e| Error::IgnoreError(e.to_string()))?);
    }

    if let Ok(contents) = read_to_string(ignore_path.as_ref()) {
        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            builder.add(Glob::new(line).map_err(|e| {
                Error::IgnoreError(format!("{IGNORE_FILE} loading failed: {e}"))
            })?);
        }
    } else {
        debug!("{IGNORE_FILE} does not exist")
    }

    builder
        .build()
        .map_err(|e| Error::IgnoreError(format!("{IGNORE_FILE} loading failed: {e}")))
}
