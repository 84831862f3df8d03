// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration for pagebot

use crate::error::{PagebotError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default fetch timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Audit settings, loadable from a YAML or TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// HTTP fetch timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent with each request
    pub user_agent: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("pagebot/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pagebot")
        .join("config.yml")
}

pub fn load_config(path: &Path) -> Result<AuditConfig> {
    if !path.exists() {
        return Ok(AuditConfig::default());
    }

    let content = std::fs::read_to_string(path)?;

    if path.extension().and_then(|s| s.to_str()) == Some("toml") {
        toml::from_str(&content)
            .map_err(|e| PagebotError::Config(format!("TOML parse error: {}", e)))
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| PagebotError::Config(format!("YAML parse error: {}", e)))
    }
}

pub fn write_default_config(path: &Path) -> Result<()> {
    let config = AuditConfig::default();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = if path.extension().and_then(|s| s.to_str()) == Some("toml") {
        toml::to_string_pretty(&config)
            .map_err(|e| PagebotError::Config(format!("TOML serialize error: {}", e)))?
    } else {
        serde_yaml::to_string(&config)?
    };

    std::fs::write(path, content)?;
    Ok(())
}
