//! # xmkdevel Recipe Locator
//!
//! File: cli/src/core/recipe.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Works out where the template of a package lives:
//! `<distdir>/srcpkgs/<pkgname>/template`.
//!
//! The distdir root is taken from the first source that provides one:
//! 1. `--distdir` / `XMKDEVEL_DISTDIR`
//! 2. `distdir` in the loaded configuration
//! 3. The stdout of `distdir_command` (by default `xdistdir` from xtools)
//!
//! An empty answer from the command leaves the root empty, so the template
//! path becomes relative to the current directory.
//!
use crate::common::process;
use crate::core::config::Config;
use crate::core::error::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Template location for one package inside an xbps-src checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeLocator {
    root: PathBuf,
    template: PathBuf,
}

impl RecipeLocator {
    pub fn new(root: impl Into<PathBuf>, pkgname: &str) -> Self {
        let root = root.into();
        let template = root.join("srcpkgs").join(pkgname).join("template");
        RecipeLocator { root, template }
    }

    /// Resolves the distdir root for `pkgname` using the precedence above.
    ///
    /// # Errors
    ///
    /// Returns an `Err` only when the distdir command has to run and fails.
    pub fn resolve(pkgname: &str, distdir: Option<&Path>, config: &Config) -> Result<Self> {
        if let Some(dir) = distdir {
            debug!("Using distdir from command line: {}", dir.display());
            return Ok(Self::new(dir, pkgname));
        }
        if let Some(dir) = &config.distdir {
            debug!("Using distdir from configuration: {}", dir);
            return Ok(Self::new(dir, pkgname));
        }

        let stdout = process::run_command_capture(&config.distdir_command, &[])
            .with_context(|| {
                format!(
                    "Could not determine the xbps-src directory via '{}'",
                    config.distdir_command
                )
            })?;
        let root = root_from_command_output(&stdout);
        info!(
            "'{}' reported distdir: {}",
            config.distdir_command,
            root.display()
        );
        Ok(Self::new(root, pkgname))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn template_path(&self) -> &Path {
        &self.template
    }

    /// True when the template exists and is a regular file.
    pub fn exists(&self) -> bool {
        self.template.is_file()
    }
}

fn root_from_command_output(stdout: &str) -> PathBuf {
    PathBuf::from(stdout.trim_end_matches(['\n', '\r']))
}
