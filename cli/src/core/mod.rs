//! # xmkdevel Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Foundational pieces used by the `devel` command:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and exit codes
//! - `recipe`: Locating `srcpkgs/<pkgname>/template` inside the xbps-src checkout
//! - `stanza`: Rendering the `-devel` subpackage stanza from a file list
//!
pub mod config;
pub mod error;
pub mod recipe;
pub mod stanza;
