//! Configuration file support for sbom-gate.
//!
//! Provides YAML-based configuration through `sbom-gate.config.yml` files,
//! including data structures, file loading, and validation. Command-line
//! flags always take precedence over config values.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::compliance::domain::EnforcementMode;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "sbom-gate.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Enforcement mode: "dev" or "ci"
    pub mode: Option<String>,
    /// Default SBOM document path for `check`
    pub sbom: Option<String>,
    /// Default VEX document path for `check`
    pub vex: Option<String>,
    /// Package ecosystem for generated purl refs
    pub ecosystem: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed enforcement mode, if the config sets one.
    pub fn enforcement_mode(&self) -> Result<Option<EnforcementMode>> {
        match self.mode.as_deref() {
            None => Ok(None),
            Some(value) => {
                let mode = EnforcementMode::from_str(value)
                    .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
                Ok(Some(mode))
            }
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref mode) = config.mode {
        if EnforcementMode::from_str(mode).is_err() {
            bail!(
                "Invalid config: mode must be 'dev' or 'ci', got '{}'.\n\n\
                 💡 Hint: Use 'ci' to block on policy violations, 'dev' to only report them.",
                mode
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
