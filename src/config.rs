//! Configuration handling for the TUI

use crate::gateway::DEFAULT_GATEWAY_URL;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable that overrides the configured gateway address
pub const GATEWAY_URL_ENV: &str = "DYNFORM_GATEWAY_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Gateway address
    pub gateway_url: Option<String>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "dynform", "dynform-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Path of the log file written while the TUI owns the terminal
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("dynform-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Gateway address: environment first, then the file, then the default
    pub fn resolve_gateway_url(&self) -> String {
        self.gateway_url_with_env(std::env::var(GATEWAY_URL_ENV).ok())
    }

    fn gateway_url_with_env(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.gateway_url.clone())
            .unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string())
    }
}
