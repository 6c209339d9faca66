//! # xmkdevel Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads the optional configuration that tells xmkdevel where the
//! xbps-src checkout lives. Nothing here is required: without any config file the
//! tool asks the `xdistdir` helper for the checkout root.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.xmkdevel.toml` in the current directory or ancestors
//! 2. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/xmkdevel/config.toml`)
//! 3. Default values defined in the code
//!
//! The `--distdir` flag (or `XMKDEVEL_DISTDIR`) overrides all of these; that
//! precedence is applied by the recipe locator, not here.
//!
//! ## Examples
//!
//! ```toml
//! # ~/.config/xmkdevel/config.toml
//! distdir = "~/src/void-packages"
//! distdir_command = "xdistdir"
//! ```
//!
use crate::core::error::{Result, XmkdevelError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the configuration loaded from TOML files.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root of the xbps-src checkout (can use ~). Will be expanded.
    #[serde(default)]
    pub distdir: Option<String>,
    /// Command printing the checkout root when `distdir` is unset.
    #[serde(default = "default_distdir_command")]
    pub distdir_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            distdir: None,
            distdir_command: default_distdir_command(),
        }
    }
}

fn default_distdir_command() -> String {
    "xdistdir".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".xmkdevel.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("org", "voidlinux", "xmkdevel") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.xmkdevel.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.xmkdevel.toml`.
/// The search stops at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    Config {
        distdir: project_cfg.distdir.or(user.distdir),
        distdir_command: if project_cfg.distdir_command != default_distdir_command() {
            project_cfg.distdir_command
        } else {
            user.distdir_command
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    if let Some(distdir) = config.distdir.as_mut() {
        let expanded = shellexpand::tilde(distdir.as_str()).into_owned();
        *distdir = expanded;
        debug!("Expanded distdir: {}", distdir);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if config.distdir_command.trim().is_empty() {
        return Err(anyhow!(XmkdevelError::Config(
            "distdir_command cannot be empty.".to_string()
        )));
    }
    if let Some(distdir) = &config.distdir {
        let dir = PathBuf::from(distdir);
        if !dir.exists() {
            warn!("Configured distdir '{}' does not exist.", dir.display());
        } else if !dir.is_dir() {
            return Err(anyhow!(XmkdevelError::Config(format!(
                "Configured distdir '{}' exists but is not a directory.",
                dir.display()
            ))));
        }
    }
    Ok(())
}
