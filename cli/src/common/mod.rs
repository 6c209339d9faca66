//! # xmkdevel Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers that sit between the command logic (`commands::`) and the
//! core types (`core::`):
//!
//! - **`fs`**: Reading a template and appending text to it.
//! - **`process`**: Running helper programs such as `xdistdir` and capturing stdout.
//!

/// Utilities for filesystem operations on templates.
pub mod fs;
/// Utilities for executing external processes.
pub mod process;
