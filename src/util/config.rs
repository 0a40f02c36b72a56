//! Configuration file support for wwbd.
//!
//! wwbd supports two configuration file locations:
//! - Global: `~/.wwbd/config.toml` - User-wide defaults
//! - Workspace: `<workspace>/.wwbd/config.toml` - Workspace-specific overrides
//!
//! Workspace config takes precedence over global config. Both are optional.
//!
//! A relative `[python] interpreter` path such as `tools/python3` is resolved
//! against the directory holding the config file. A bare command name such as
//! `python3.12` is kept as-is and looked up on `PATH`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// wwbd configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base interpreter settings
    pub python: PythonConfig,

    /// pip settings
    pub install: InstallConfig,
}

/// Settings for the interpreter that creates the virtual environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PythonConfig {
    /// Interpreter used to run `-m venv` (e.g., /usr/bin/python3.12)
    pub interpreter: Option<PathBuf>,
}

/// Settings passed through to `pip install`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Extra arguments inserted before `--requirement`
    pub extra_args: Vec<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.resolve_relative_paths(base);
        }

        Ok(config)
    }

    /// Anchor relative paths (but not bare command names) at `base`.
    fn resolve_relative_paths(&mut self, base: &Path) {
        if let Some(interpreter) = self.python.interpreter.take() {
            let is_bare_name = interpreter.components().count() == 1;
            self.python.interpreter = Some(if interpreter.is_relative() && !is_bare_name {
                base.join(interpreter)
            } else {
                interpreter
            });
        }
    }

    /// Load configuration with fallback to defaults if the file is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.python.interpreter.is_some() {
            self.python.interpreter = other.python.interpreter;
        }
        if !other.install.extra_args.is_empty() {
            self.install.extra_args = other.install.extra_args;
        }
    }
}

/// Load merged configuration from global and workspace locations.
///
/// Order of precedence (highest to lowest):
/// 1. Workspace config (.wwbd/config.toml)
/// 2. Global config (~/.wwbd/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, workspace_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(workspace_path));

    config
}

/// Load the configuration that applies to `workspace`.
pub fn load_workspace_config(workspace: &Path) -> Config {
    let global = global_config_path();
    load_config(global.as_deref(), &workspace_config_path(workspace))
}

/// Get the global wwbd config directory (~/.wwbd).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".wwbd"))
}

/// Get the global config path (~/.wwbd/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the workspace config path (<workspace>/.wwbd/config.toml).
pub fn workspace_config_path(workspace: &Path) -> PathBuf {
    workspace.join(".wwbd").join("config.toml")
}
