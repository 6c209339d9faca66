//! # xmkdevel Devel Stanza Command
//!
//! File: cli/src/commands/devel.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the one thing `xmkdevel` does: generate a
//! `<develname>-devel_package()` stanza for `srcpkgs/<pkgname>/template`,
//! print it, and with `-i` append it to the template.
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//!
//! 1. Load configuration and resolve the template path (`core::recipe`)
//! 2. Abort with exit code 2 if the template does not exist
//! 3. With `-i`, abort with exit code 2 if the template already mentions `<develname>-devel`
//! 4. Render the stanza from the file list (`core::stanza`)
//! 5. Print the stanza to stdout
//! 6. With `-i`, append the stanza to the end of the template
//!
//! ## Usage
//!
//! ```bash
//! # Print a stanza for libfoo-devel, split from the foo package
//! xmkdevel libfoo foo "$(xbps-query -f foo)"
//!
//! # Same, appending it to srcpkgs/foo/template
//! xmkdevel -i libfoo foo "$(xbps-query -f foo)"
//! ```
//!
use crate::common::fs::io;
use crate::core::config;
use crate::core::error::{Result, XmkdevelError};
use crate::core::recipe::RecipeLocator;
use crate::core::stanza;
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Arguments for generating a `-devel` subpackage stanza.
#[derive(Parser, Debug)]
pub struct DevelArgs {
    /// Name of the devel package without the -devel suffix.
    pub develname: String,
    /// Name of the package to create the devel package for.
    pub pkgname: String,
    /// Newline separated list of files in the main package.
    pub filelist: String,
    /// Append the stanza to the template (refuses if the subpackage already exists).
    #[arg(short = 'i', long)]
    pub replace: bool,
    /// xbps-src checkout to use instead of asking `xdistdir`.
    #[arg(long, env = "XMKDEVEL_DISTDIR", value_name = "DIR")]
    pub distdir: Option<PathBuf>,
}

/// Handler for the `xmkdevel` command line.
pub fn handle_devel(args: DevelArgs) -> Result<()> {
    info!("Generating {}-devel for {}", args.develname, args.pkgname);
    let cfg = config::load_config()?;
    let locator = RecipeLocator::resolve(&args.pkgname, args.distdir.as_deref(), &cfg)?;
    debug!(
        "Distdir root: {}, template path: {}",
        locator.root().display(),
        locator.template_path().display()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_stanza(&args, &locator, &mut out)
}

/// Runs the checks, writes the stanza to `out`, and persists it when `-i` was given.
fn write_stanza<W: Write>(args: &DevelArgs, locator: &RecipeLocator, out: &mut W) -> Result<()> {
    if !locator.exists() {
        return Err(XmkdevelError::InvalidPath {
            path: locator.template_path().to_path_buf(),
        }
        .into());
    }

    let devname = format!("{}-devel", args.develname);
    if args.replace {
        ensure_not_declared(locator.template_path(), &devname)?;
    }

    let text = stanza::generate(&args.develname, &args.pkgname, &args.filelist);
    writeln!(out, "{}", text).context("Failed to write stanza to stdout")?;

    if args.replace {
        io::append_string_to_file(locator.template_path(), &text)?;
        info!(
            "Appended {} to {}",
            devname,
            locator.template_path().display()
        );
    }
    Ok(())
}

/// Fails with `DuplicatePackage` if `devname` appears anywhere in the template.
fn ensure_not_declared(template: &Path, devname: &str) -> Result<()> {
    let content = io::read_file_to_string(template)?;
    if content.contains(devname) {
        return Err(XmkdevelError::DuplicatePackage {
            name: devname.to_string(),
        }
        .into());
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{exit_code_for, EXIT_INVALID_TARGET};
    use std::fs;
    use tempfile::{tempdir, TempDir};

    const TEMPLATE: &str = "pkgname=foo\nversion=1.0\nrevision=1\n";

    fn args(develname: &str, filelist: &str, replace: bool) -> DevelArgs {
        DevelArgs {
            develname: develname.to_string(),
            pkgname: "foo".to_string(),
            filelist: filelist.to_string(),
            replace,
            distdir: None,
        }
    }

    fn distdir_with_template(content: &str) -> (TempDir, RecipeLocator) {
        let dir = tempdir().unwrap();
        let locator = RecipeLocator::new(dir.path(), "foo");
        fs::create_dir_all(locator.template_path().parent().unwrap()).unwrap();
        fs::write(locator.template_path(), content).unwrap();
        (dir, locator)
    }

    #[test]
    fn test_devel_args_parsing() {
        let parsed = DevelArgs::try_parse_from(["xmkdevel", "libfoo", "foo", "/usr/include/foo.h"])
            .unwrap();
        assert_eq!(parsed.develname, "libfoo");
        assert_eq!(parsed.pkgname, "foo");
        assert_eq!(parsed.filelist, "/usr/include/foo.h");
        assert!(!parsed.replace);

        let short = DevelArgs::try_parse_from(["xmkdevel", "-i", "libfoo", "foo", ""]).unwrap();
        assert!(short.replace);
        let long =
            DevelArgs::try_parse_from(["xmkdevel", "--replace", "libfoo", "foo", ""]).unwrap();
        assert!(long.replace);
    }

    #[test]
    fn test_devel_args_require_all_positionals() {
        assert!(DevelArgs::try_parse_from(["xmkdevel", "libfoo", "foo"]).is_err());
        assert!(DevelArgs::try_parse_from(["xmkdevel"]).is_err());
    }

    #[test]
    fn test_missing_template_is_invalid_path() {
        let dir = tempdir().unwrap();
        let locator = RecipeLocator::new(dir.path(), "foo");
        let mut out = Vec::new();

        let err = write_stanza(&args("foo", "", false), &locator, &mut out).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<XmkdevelError>(),
            Some(XmkdevelError::InvalidPath { .. })
        ));
        assert_eq!(exit_code_for(&err), EXIT_INVALID_TARGET);
        assert!(out.is_empty());
    }

    #[test]
    fn test_prints_without_touching_template() {
        let (_dir, locator) = distdir_with_template(TEMPLATE);
        let mut out = Vec::new();

        write_stanza(&args("foo", "/usr/include/foo.h", false), &locator, &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("foo-devel_package() {\n"));
        assert!(printed.contains("\t\tvmove /usr/include\n"));
        assert!(printed.ends_with("\t}\n}\n"));
        assert_eq!(fs::read_to_string(locator.template_path()).unwrap(), TEMPLATE);
    }

    #[test]
    fn test_replace_appends_stanza() {
        let (_dir, locator) = distdir_with_template(TEMPLATE);
        let mut out = Vec::new();

        write_stanza(&args("foo", "lib.so -> lib.so.1", true), &locator, &mut out).unwrap();

        let expected = stanza::generate("foo", "foo", "lib.so -> lib.so.1");
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", expected));
        assert_eq!(
            fs::read_to_string(locator.template_path()).unwrap(),
            format!("{}{}", TEMPLATE, expected)
        );
    }

    #[test]
    fn test_replace_refuses_duplicate() {
        let existing = format!("{}foo-devel_package() {{\n}}\n", TEMPLATE);
        let (_dir, locator) = distdir_with_template(&existing);
        let mut out = Vec::new();

        let err = write_stanza(&args("foo", "/usr/include/x.h", true), &locator, &mut out)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "package already made for the name: foo-devel"
        );
        assert_eq!(exit_code_for(&err), EXIT_INVALID_TARGET);
        assert!(out.is_empty());
        assert_eq!(fs::read_to_string(locator.template_path()).unwrap(), existing);
    }

    #[test]
    fn test_duplicate_guard_only_with_replace() {
        let existing = format!("{}subpackages=\"foo-devel\"\n", TEMPLATE);
        let (_dir, locator) = distdir_with_template(&existing);
        let mut out = Vec::new();

        write_stanza(&args("foo", "", false), &locator, &mut out).unwrap();
        assert!(!out.is_empty());
    }
}
