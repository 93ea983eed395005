//! # Configuration
//!
//! Settings live in `config.json` inside the config directory (the OS data
//! directory for clientbook, or whatever `--home` / `CLIENTBOOK_HOME` points at).
//! A missing file means defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data-file` | `<config dir>/clients.json` | Where the client collection is stored |
//! | `currency` | `FCFA` | Label printed after amounts |
//! | `recent-purchases` | `3` | Purchases shown in detailed views |
//!
//! The `--data` flag and `CLIENTBOOK_DATA` override `data-file` for one run.

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DATA_FILENAME: &str = "clients.json";
const DEFAULT_CURRENCY: &str = "FCFA";
const DEFAULT_RECENT_PURCHASES: usize = 3;

pub const KEYS: &[&str] = &["data-file", "currency", "recent-purchases"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientbookConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default = "default_recent_purchases")]
    pub recent_purchases: usize,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_recent_purchases() -> usize {
    DEFAULT_RECENT_PURCHASES
}

impl Default for ClientbookConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            currency: default_currency(),
            recent_purchases: DEFAULT_RECENT_PURCHASES,
        }
    }
}

impl ClientbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ClientError::Io)?;
        let config: ClientbookConfig =
            serde_json::from_str(&content).map_err(ClientError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir).map_err(ClientError::Io)?;

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ClientError::Serialization)?;
        fs::write(config_path, content).map_err(ClientError::Io)?;
        Ok(())
    }

    /// The data file, falling back to `clients.json` in the config directory.
    pub fn data_file_in(&self, config_dir: &Path) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| config_dir.join(DATA_FILENAME))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(
                self.data_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "currency" => Some(self.currency.clone()),
            "recent-purchases" => Some(self.recent_purchases.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "data-file" => {
                self.data_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "currency" => {
                if value.is_empty() {
                    return Err(ClientError::Config("currency cannot be empty".into()));
                }
                self.currency = value.to_string();
            }
            "recent-purchases" => {
                self.recent_purchases = value.parse().map_err(|_| {
                    ClientError::Config(format!(
                        "recent-purchases must be a non-negative integer, got '{}'",
                        value
                    ))
                })?;
            }
            other => return Err(ClientError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}
