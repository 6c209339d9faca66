//! # xmkdevel Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout xmkdevel and the
//! mapping from those errors to process exit codes.
//!
//! ## Architecture
//!
//! The error system consists of three parts:
//! - `XmkdevelError`: A custom error enum using `thiserror` for the failures the tool
//!   distinguishes (missing template, duplicate subpackage, config, filesystem, external command)
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//! - `exit_code_for`: Picks the process exit code for any `anyhow::Error` by downcasting
//!
//! Exit codes are part of the command-line contract:
//! - `0`: stanza generated
//! - `1`: any runtime failure not covered below
//! - `2`: template not found, or the subpackage already exists in the template (`-i`)
//!
//! ## Examples
//!
//! ```rust
//! if !locator.exists() {
//!     return Err(XmkdevelError::InvalidPath { path: locator.template_path().to_path_buf() })?;
//! }
//!
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Stanza generated (and appended, with `-i`).
pub const EXIT_SUCCESS: i32 = 0;
/// Generic runtime failure.
pub const EXIT_FAILURE: i32 = 1;
/// Template missing or subpackage already declared.
pub const EXIT_INVALID_TARGET: i32 = 2;

/// Custom error type for xmkdevel.
#[derive(Error, Debug)]
pub enum XmkdevelError {
    #[error("Invalid filepath: {}", path.display())]
    InvalidPath { path: PathBuf },

    #[error("package already made for the name: {name}")]
    DuplicatePackage { name: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("External command failed: {cmd}, Status: {status}, Output:\n{output}")]
    ExternalCommand {
        cmd: String,
        status: String,
        output: String,
    },
}

impl XmkdevelError {
    /// Process exit code reported when this error aborts the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            XmkdevelError::InvalidPath { .. } | XmkdevelError::DuplicatePackage { .. } => {
                EXIT_INVALID_TARGET
            }
            _ => EXIT_FAILURE,
        }
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

/// Resolves the exit code for an error that reached `main`.
///
/// Context layers added with `anyhow::Context` are looked through, so a
/// wrapped `XmkdevelError` still yields its own code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<XmkdevelError>())
        .map_or(EXIT_FAILURE, XmkdevelError::exit_code)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_error_display() {
        let invalid = XmkdevelError::InvalidPath {
            path: PathBuf::from("/void-packages/srcpkgs/foo/template"),
        };
        assert_eq!(
            invalid.to_string(),
            "Invalid filepath: /void-packages/srcpkgs/foo/template"
        );

        let duplicate = XmkdevelError::DuplicatePackage {
            name: "foo-devel".into(),
        };
        assert_eq!(
            duplicate.to_string(),
            "package already made for the name: foo-devel"
        );

        let config_err = XmkdevelError::Config("distdir_command is empty".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: distdir_command is empty"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            XmkdevelError::InvalidPath {
                path: PathBuf::from("x")
            }
            .exit_code(),
            EXIT_INVALID_TARGET
        );
        assert_eq!(
            XmkdevelError::DuplicatePackage { name: "x".into() }.exit_code(),
            EXIT_INVALID_TARGET
        );
        assert_eq!(
            XmkdevelError::FileSystem("x".into()).exit_code(),
            EXIT_FAILURE
        );
    }

    #[test]
    fn test_exit_code_for_looks_through_context() {
        let err: anyhow::Error = Err::<(), _>(XmkdevelError::DuplicatePackage {
            name: "foo-devel".into(),
        })
        .context("Duplicate check failed")
        .unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_INVALID_TARGET);

        let plain = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&plain), EXIT_FAILURE);
    }
}
