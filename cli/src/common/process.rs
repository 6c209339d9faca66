//! # xmkdevel Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Thin wrapper around `std::process::Command` for running helper programs
//! whose standard output is the answer we need (currently only `xdistdir`).
//!
//! Non-zero exits are mapped to `XmkdevelError::ExternalCommand` so the caller
//! sees the command, its status and whatever it printed on stderr.
//!
use crate::core::error::{Result, XmkdevelError};
use anyhow::Context;
use std::process::Command;
use tracing::debug;

/// Runs `cmd` with `args`, waits for it and returns its stdout as UTF-8 (lossy).
///
/// # Errors
///
/// Returns an `Err` if the program cannot be spawned (e.g. not in `PATH`) or
/// exits unsuccessfully.
pub fn run_command_capture(cmd: &str, args: &[&str]) -> Result<String> {
    debug!("Running external command: {} {:?}", cmd, args);
    let output = Command::new(cmd)
        .args(args)
        .output()
        .with_context(|| format!("Failed to execute '{}'", cmd))?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    debug!(
        "Command '{}' finished: status={}, stdout='{}'",
        cmd,
        output.status,
        stdout.trim_end()
    );

    if !output.status.success() {
        return Err(XmkdevelError::ExternalCommand {
            cmd: cmd.to_string(),
            status: output.status.to_string(),
            output: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
        .into());
    }
    Ok(stdout)
}
