//! Bot configuration.

use rolecall::{ConfigError, RolecallResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the bot process.
///
/// Loaded from a TOML file; the token may instead come from the
/// `DISCORD_TOKEN` environment variable so it can stay out of the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Bot token. Falls back to `DISCORD_TOKEN` when absent.
    pub token: Option<String>,
    /// Prefix for the admin commands (`new`, `sync`).
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Path of the JSON controller store.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: None,
            prefix: default_prefix(),
            store_path: default_store_path(),
        }
    }
}

impl BotConfig {
    /// Load bot configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> RolecallResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }

    /// Load from an explicit path, or from `rolecall.toml` when it exists,
    /// or fall back to defaults.
    pub fn load(path: Option<&Path>) -> RolecallResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new("rolecall.toml");
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// The bot token, from the config file or the environment.
    pub fn resolve_token(&self) -> RolecallResult<String> {
        if let Some(token) = &self.token {
            return Ok(token.clone());
        }
        std::env::var("DISCORD_TOKEN").map_err(|_| {
            ConfigError::new("No token configured and DISCORD_TOKEN is not set").into()
        })
    }
}

fn default_prefix() -> String {
    "+".to_string()
}

fn default_store_path() -> PathBuf {
    PathBuf::from("role_controllers.json")
}
