//! Nuru Configuration
//!
//! Config file: ~/.config/nuru/config.toml (or `$NURU_CONFIG`).
//! `NURU_BACKEND_URL` and `NURU_SESSION_TOKEN` override the file.

use crate::learning_path::LockPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "NURU_CONFIG";
pub const BACKEND_URL_ENV: &str = "NURU_BACKEND_URL";
pub const SESSION_TOKEN_ENV: &str = "NURU_SESSION_TOKEN";

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:4943/rpc";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Backend actor connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Signed-in session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Opaque credential sent as a bearer token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Color display mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default)]
    pub lock_policy: LockPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// TTS program, e.g. "espeak-ng"; unset disables speech
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// Nuru configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NuruConfig {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub path: PathConfig,

    #[serde(default)]
    pub speech: SpeechConfig,
}

impl NuruConfig {
    /// Config path: `$NURU_CONFIG`, else ~/.config/nuru/config.toml
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        let config_dir = dirs::config_dir().context("Cannot determine config directory")?;
        Ok(config_dir.join("nuru").join("config.toml"))
    }

    /// Load from the default path, then apply environment overrides
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = Self::load_from(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from a file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: NuruConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Apply `NURU_BACKEND_URL` / `NURU_SESSION_TOKEN` from a lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BACKEND_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.backend.endpoint = url;
        }
        if let Some(token) = lookup(SESSION_TOKEN_ENV).filter(|v| !v.trim().is_empty()) {
            self.session.token = Some(token);
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, toml_string)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        // The file may hold a session token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))
                .with_context(|| format!("Failed to restrict {}", path.display()))?;
        }

        Ok(())
    }

    /// Session token, ignoring blank values
    pub fn session_token(&self) -> Option<&str> {
        self.session
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_token().is_some()
    }

    pub fn set_session_token(&mut self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            anyhow::bail!("Session token cannot be empty");
        }
        self.session.token = Some(token.to_string());
        Ok(())
    }

    pub fn clear_session(&mut self) {
        self.session.token = None;
    }

    /// Set output color mode
    pub fn set_color_mode(&mut self, mode: &str) -> Result<()> {
        self.output.color = match mode.to_lowercase().as_str() {
            "auto" => ColorMode::Auto,
            "always" | "on" => ColorMode::Always,
            "never" | "off" | "none" => ColorMode::Never,
            _ => anyhow::bail!(
                "Invalid color mode: '{}'. Valid values: auto, always, never",
                mode
            ),
        };
        Ok(())
    }
}
