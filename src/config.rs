//! Runtime configuration
//!
//! Defaults, then `<config_dir>/ai-search/config.json` (or the file named by
//! `AI_SEARCH_CONFIG`), then `AI_SEARCH_*` environment overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tree::{ExpandKeying, DEFAULT_MAX_DEPTH};

pub const CONFIG_ENV: &str = "AI_SEARCH_CONFIG";
pub const BACKEND_URL_ENV: &str = "AI_SEARCH_BACKEND_URL";
pub const EXPAND_KEYING_ENV: &str = "AI_SEARCH_EXPAND_KEYING";
pub const MAX_DEPTH_ENV: &str = "AI_SEARCH_MAX_DEPTH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the search backend
    pub backend_url: String,
    pub search_path: String,
    pub health_path: String,
    pub expand_keying: ExpandKeying,
    /// Nesting shown before the tree is cut off
    pub max_depth: usize,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:3847".to_string(),
            search_path: "/search".to_string(),
            health_path: "/health".to_string(),
            expand_keying: ExpandKeying::Path,
            max_depth: DEFAULT_MAX_DEPTH,
            window_width: 700.0,
            window_height: 480.0,
        }
    }
}

impl Config {
    /// Resolve the configuration from file and process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(default_path);

        let mut config = match path {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from {:?}", path);
                Self::from_file(&path)?
            }
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `AI_SEARCH_*` overrides read through `lookup`.
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(url) = lookup(BACKEND_URL_ENV) {
            self.backend_url = url;
        }
        if let Some(raw) = lookup(EXPAND_KEYING_ENV) {
            self.expand_keying = ExpandKeying::parse(&raw).ok_or(ConfigError::InvalidEnv {
                var: EXPAND_KEYING_ENV,
                value: raw,
            })?;
        }
        if let Some(raw) = lookup(MAX_DEPTH_ENV) {
            self.max_depth = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: MAX_DEPTH_ENV,
                value: raw,
            })?;
        }
        Ok(())
    }
}

/// `<config_dir>/ai-search/config.json`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ai-search").join("config.json"))
}
