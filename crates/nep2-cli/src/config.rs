//! CLI configuration, parsed from an optional TOML file + environment variable overrides.
//!
//! Priority: command-line flags > environment variables > config file > defaults.
//!
//! NEP-2 protocol parameters (scrypt cost, header, flag) are fixed and cannot
//! be set here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub logging: LoggingSection,

    #[serde(default)]
    pub output: OutputSection,

    #[serde(default)]
    pub neo: NeoSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown output format: {} (expected text or json)", other),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
}

/// NEO address settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeoSection {
    /// Address version byte (23 = mainnet `A...` addresses)
    #[serde(default = "default_address_version")]
    pub address_version: u8,
}

impl Default for NeoSection {
    fn default() -> Self {
        Self {
            address_version: default_address_version(),
        }
    }
}

// ============================================================================
// Default value functions
// ============================================================================

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_address_version() -> u8 {
    nep2_neo::DEFAULT_ADDRESS_VERSION
}

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace", "off"];

// ============================================================================
// Loading & environment override
// ============================================================================

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig =
            toml::from_str(&contents).with_context(|| "Failed to parse TOML config")?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise start from defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `NEP2_LOG_LEVEL`
    /// - `NEP2_OUTPUT`
    /// - `NEP2_ADDRESS_VERSION`
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(v) = std::env::var("NEP2_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Ok(v) = std::env::var("NEP2_OUTPUT") {
            self.output.format = v.parse().context("Invalid NEP2_OUTPUT")?;
        }
        if let Ok(v) = std::env::var("NEP2_ADDRESS_VERSION") {
            self.neo.address_version = v
                .parse::<u8>()
                .with_context(|| format!("Invalid NEP2_ADDRESS_VERSION: {}", v))?;
        }
        Ok(())
    }

    /// Validate that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_ascii_lowercase();
        anyhow::ensure!(
            LOG_LEVELS.contains(&level.as_str()),
            "logging.level must be one of {}, got {:?}",
            LOG_LEVELS.join(", "),
            self.logging.level
        );
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
