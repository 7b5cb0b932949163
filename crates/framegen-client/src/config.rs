use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. FRAMEGEN_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.framegen/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("FRAMEGEN_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("framegen").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".framegen").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Timings of the page's deferred behavior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub form_reveal_delay_ms: u64,
    pub text_download_delay_ms: u64,
    pub error_toast_ms: u64,
    pub success_toast_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            form_reveal_delay_ms: 300,
            text_download_delay_ms: 500,
            error_toast_ms: 5000,
            success_toast_ms: 3000,
        }
    }
}

impl UiConfig {
    pub fn form_reveal_delay(&self) -> Duration {
        Duration::from_millis(self.form_reveal_delay_ms)
    }

    pub fn text_download_delay(&self) -> Duration {
        Duration::from_millis(self.text_download_delay_ms)
    }

    pub fn error_toast(&self) -> Duration {
        Duration::from_millis(self.error_toast_ms)
    }

    pub fn success_toast(&self) -> Duration {
        Duration::from_millis(self.success_toast_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let path = resolve_config_path(explicit_path)?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply `FRAMEGEN_API_URL`, then an explicit override, on top of the file.
    pub fn with_api_url_override(mut self, explicit: Option<&str>) -> Self {
        if let Ok(env_url) = std::env::var("FRAMEGEN_API_URL")
            && !env_url.is_empty()
        {
            self.api.base_url = env_url;
        }
        if let Some(url) = explicit {
            self.api.base_url = url.to_string();
        }
        self
    }
}
