//! # xmkdevel Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module holds the two file operations the tool performs on an
//! xbps-src template: reading it whole (for the duplicate check) and appending
//! the generated stanza to its end.
//!
//! Both functions are thin wrappers around `std::fs` that attach the offending
//! path to any I/O error via `anyhow::Context`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! let template = io::read_file_to_string(&path)?;
//! if !template.contains("foo-devel") {
//!     io::append_string_to_file(&path, &stanza)?;
//! }
//! ```
//!
use crate::core::error::{Result, XmkdevelError};
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Reads the entire content of a file into a string.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be found, opened, or read, with context
/// indicating which file failed.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Appends `content` verbatim to the end of an existing file.
///
/// No separator or trailing newline is added. The file must already exist;
/// this never creates a template.
///
/// # Errors
///
/// Returns an `Err` if the path is not an existing file or the write fails.
pub fn append_string_to_file(path: &Path, content: &str) -> Result<()> {
    if !path.is_file() {
        anyhow::bail!(XmkdevelError::FileSystem(format!(
            "Cannot append to missing file: {:?}",
            path
        )));
    }
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open file for appending {:?}", path))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to append to file {:?}", path))?;
    info!("Appended {} bytes to file: {:?}", content.len(), path);
    Ok(())
}
