//! # xmkdevel Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! Filesystem helpers used when touching xbps-src templates. Callers import
//! from the submodule, e.g. `crate::common::fs::io::append_string_to_file`.
//!

/// Reading templates and appending generated stanzas.
pub mod io;
