//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Endpoint used when neither the config file nor the environment names one
pub const DEFAULT_ENDPOINT: &str = "https://3.221.159.196:3320/auth/cadastrar";

/// Environment variable overriding the configured endpoint
pub const ENDPOINT_ENV: &str = "SIGNUP_ENDPOINT";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Signup endpoint URL
    pub endpoint: Option<String>,
    /// Accept self-signed certificates from the endpoint
    pub accept_invalid_certs: Option<bool>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            config.apply_endpoint_override(endpoint);
        }
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn apply_endpoint_override(&mut self, endpoint: String) {
        if !endpoint.trim().is_empty() {
            self.endpoint = Some(endpoint.trim().to_string());
        }
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs.unwrap_or(false)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
