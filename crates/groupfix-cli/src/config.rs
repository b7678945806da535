//! Configuration file support
//!
//! Loads `.groupfix.toml` from the current directory or parent directories.
//! Every setting is optional; without a config file the tool patches
//! `public/tacview.php`, prints text output and always rewrites the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".groupfix.toml";
pub const DEFAULT_TARGET: &str = "public/tacview.php";

/// Configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub target: TargetConfig,
    pub output: OutputConfig,
    pub write: WriteConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// File to patch, relative to the working directory
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "text", "json" or "diff"
    pub format: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WriteConfig {
    /// Leave the file untouched when no rule matched
    pub skip_unchanged: bool,
}

impl Config {
    /// Settle which config applies: none with `--no-config`, the file given
    /// with `--config`, otherwise the nearest `.groupfix.toml` above `cwd`.
    pub fn resolve(
        explicit: Option<&Path>,
        disabled: bool,
        cwd: &Path,
    ) -> Result<(Config, Option<PathBuf>)> {
        if disabled {
            return Ok((Config::default(), None));
        }
        if let Some(path) = explicit {
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }

        let found = cwd
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE))
            .find(|candidate| candidate.is_file());

        match found {
            Some(path) => Ok((Self::from_file(&path)?, Some(path))),
            None => Ok((Config::default(), None)),
        }
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// The file to patch: CLI argument, then config, then the built-in default
    pub fn target_path(&self, cli_path: Option<&Path>) -> PathBuf {
        cli_path
            .map(Path::to_path_buf)
            .or_else(|| self.target.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET))
    }
}
