//! # xmkdevel CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests: a command builder that isolates
//! the binary from the developer's own configuration, and a fake xbps-src
//! checkout containing one template.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Minimal template content used by most tests.
pub const TEMPLATE: &str = "# Template file for 'foo'\npkgname=foo\nversion=1.0\nrevision=1\n";

/// # Get xmkdevel Command (`xmkdevel_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `xmkdevel` binary, run from
/// `cwd` with `HOME`/`XDG_CONFIG_HOME` pointed at `cwd` so no user config leaks in.
///
/// ## Panics
/// Panics if the `xmkdevel` binary cannot be found via `Command::cargo_bin`.
pub fn xmkdevel_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("xmkdevel").expect("Failed to find xmkdevel binary for testing");
    cmd.current_dir(cwd)
        .env("HOME", cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env_remove("XMKDEVEL_DISTDIR")
        .env_remove("RUST_LOG");
    cmd
}

/// A temporary xbps-src checkout with `srcpkgs/<pkgname>/template`.
pub struct Distdir {
    pub dir: TempDir,
}

impl Distdir {
    pub fn with_template(pkgname: &str, content: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp distdir");
        let pkgdir = dir.path().join("srcpkgs").join(pkgname);
        fs::create_dir_all(&pkgdir).expect("Failed to create srcpkgs dir");
        fs::write(pkgdir.join("template"), content).expect("Failed to write template");
        Distdir { dir }
    }

    pub fn empty() -> Self {
        Distdir {
            dir: tempfile::tempdir().expect("Failed to create temp distdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn template(&self, pkgname: &str) -> PathBuf {
        self.dir.path().join("srcpkgs").join(pkgname).join("template")
    }

    pub fn read_template(&self, pkgname: &str) -> String {
        fs::read_to_string(self.template(pkgname)).expect("Failed to read template")
    }
}
