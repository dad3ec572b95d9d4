//! Loads configuration from a project `.env` and `$XDG_CONFIG_HOME/<app>/config.toml`, then
//! applies it to the process environment with priority **existing env > .env > XDG**.
//!
//! ```toml
//! # ~/.config/tutor/config.toml
//! [env]
//! OPENAI_MODEL = "gpt-4o-mini"
//! FIRECRAWL_API_KEY = "fc-..."
//! ```

mod dotenv;
mod xdg_toml;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot determine config directory; set XDG_CONFIG_HOME")]
    NoConfigDir,
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where configuration is read from. Either file may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSources {
    /// `<config dir>/<app>/config.toml`
    pub xdg_config: PathBuf,
    /// `<project dir>/.env`
    pub dotenv: PathBuf,
}

impl ConfigSources {
    /// Resolves both paths. `project_dir` defaults to the current directory; the config
    /// directory is `$XDG_CONFIG_HOME` when set, else the platform default.
    pub fn discover(app_name: &str, project_dir: Option<&Path>) -> Result<Self, LoadError> {
        let config_home = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(dirs::config_dir)
            .ok_or(LoadError::NoConfigDir)?;
        let project_dir = match project_dir {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };
        Ok(Self {
            xdg_config: config_home.join(app_name).join("config.toml"),
            dotenv: project_dir.join(".env"),
        })
    }

    /// Reads both files and merges them; `.env` entries replace XDG entries.
    pub fn load(&self) -> Result<HashMap<String, String>, LoadError> {
        let mut merged = xdg_toml::read_env_table(&self.xdg_config)?;
        merged.extend(dotenv::read(&self.dotenv)?);
        Ok(merged)
    }
}

/// Sets each key of `values` that `is_set` reports as unset; returns the keys it set,
/// sorted.
fn apply<F, G>(values: HashMap<String, String>, is_set: F, mut set: G) -> Vec<String>
where
    F: Fn(&str) -> bool,
    G: FnMut(&str, &str),
{
    let mut applied: Vec<String> = values
        .into_iter()
        .filter(|(key, _)| !is_set(key))
        .map(|(key, value)| {
            set(&key, &value);
            key
        })
        .collect();
    applied.sort();
    applied
}

/// Loads `.env` and XDG config for `app_name` and exports every key not already present in
/// the process environment. Returns the keys that were set.
///
/// Call once at startup, before any threads read the environment.
pub fn load_and_apply(app_name: &str, project_dir: Option<&Path>) -> Result<Vec<String>, LoadError> {
    let values = ConfigSources::discover(app_name, project_dir)?.load()?;
    Ok(apply(
        values,
        |key| std::env::var_os(key).is_some(),
        |key, value| std::env::set_var(key, value),
    ))
}
