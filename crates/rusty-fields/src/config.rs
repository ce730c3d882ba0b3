// File: src/config.rs
// Purpose: Configuration parsing from rusty-fields.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::value::Truthy;
use serde_json::Value;

/// Compiler configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub factory: FactoryConfig,

    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Factory behaviour
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FactoryConfig {
    /// When a supplied scalar value loses to the field default
    #[serde(default)]
    pub fallback: Fallback,
}

/// Settings read by the stock validators and presets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationConfig {
    /// Number of digits a phone value must have
    #[serde(default = "default_phone_digits")]
    pub phone_digits: usize,
}

/// Default-fallback policy for scalar fields
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Fallback {
    /// Absent or falsy (`null`, `false`, `0`, `""`) input takes the default
    #[default]
    Falsy,
    /// Only absent or `null` input takes the default
    Missing,
}

impl Fallback {
    /// Whether a supplied value is kept over the default
    pub fn keeps(self, supplied: &Value) -> bool {
        match self {
            Fallback::Falsy => supplied.is_truthy(),
            Fallback::Missing => !supplied.is_null(),
        }
    }
}

pub const DEFAULT_PHONE_DIGITS: usize = 10;

fn default_phone_digits() -> usize {
    DEFAULT_PHONE_DIGITS
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            phone_digits: default_phone_digits(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            tracing::debug!(?path, "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./rusty-fields.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("rusty-fields.toml")
    }
}
