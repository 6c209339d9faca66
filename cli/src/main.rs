//! # xmkdevel Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the xmkdevel CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Running the devel stanza generator
//! - Mapping errors to exit codes (2 for a missing template or an existing
//!   subpackage, 1 for everything else)
//!
//! ## Examples
//!
//! ```bash
//! # Print a -devel stanza for foo
//! xmkdevel foo foo "$(xbps-query -f foo)"
//!
//! # Append it to srcpkgs/foo/template, with debug logging on stderr
//! xmkdevel -vv -i foo foo "$(xbps-query -f foo)"
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (devel)
mod common; // Shared utilities (fs, process)
mod core; // Core infrastructure (errors, config, recipe lookup, stanza rendering)

use crate::core::error::{exit_code_for, EXIT_SUCCESS};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "xmkdevel",
    about = "create -devel packages.",
    long_about = "Generate a <develname>-devel_package() stanza for srcpkgs/<pkgname>/template\n\
                  from the file list of the main package, moving headers, pkg-config files,\n\
                  development docs and library symlinks into the -devel subpackage.",
    version
)]
struct Cli {
    #[command(flatten)]
    devel: commands::devel::DevelArgs,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let code = match commands::devel::handle_devel(cli.devel) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("Command execution failed: {:?}", e);
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    };
    std::process::exit(code);
}
