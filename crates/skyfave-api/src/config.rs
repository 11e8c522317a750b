//! Provider configuration loaded from a JSON file.
//!
//! One section per external service (geocoding, places, weather) plus the
//! shared request timeout consumed by the transport.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::client::Provider;

/// Alias kept for config-facing call sites; the provider section shape and
/// the runtime capability value are the same struct.
pub type ProviderConfig = Provider;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Top-level API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub geocoding: Provider,
    pub places: Provider,
    pub weather: Provider,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ApiConfig {
    /// Load and validate configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read API config: {}", path.display()))?;
        let config: Self =
            serde_json::from_str(&contents).context("Failed to parse API config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce a working request.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        for provider in [&self.geocoding, &self.places, &self.weather] {
            if provider.host.is_empty() {
                errors.push(format!("{}: host must not be empty", provider.name));
            }
            if provider.key.is_empty() {
                errors.push(format!("{}: api key must not be empty", provider.name));
            }
        }
        if self.timeout_secs == 0 {
            errors.push("timeout_secs must be greater than zero".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            anyhow::bail!("Invalid API config: {}", errors.join("; "))
        }
    }

    /// Request timeout as a `Duration` for the transport.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
