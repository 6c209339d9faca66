//! # xmkdevel Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Command handlers reachable from `main.rs`. Each handler owns its clap
//! argument struct and returns `core::error::Result<()>`, leaving error display
//! and exit codes to the entry point.
//!

/// Generation of `-devel` subpackage stanzas (the only command today).
pub mod devel;
