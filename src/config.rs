use crate::constants::{
    DEFAULT_CHAT_REPLY_DELAY_MS, DEFAULT_LOG_FILTER, DEFAULT_PROCESSING_DELAY_MS, PDF_MIME,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration loaded from settings.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub intake: IntakeConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    #[serde(default = "default_accepted_mime")]
    pub accepted_mime: String,
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_chat_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_accepted_mime() -> String {
    PDF_MIME.to_string()
}

fn default_processing_delay_ms() -> u64 {
    DEFAULT_PROCESSING_DELAY_MS
}

fn default_chat_reply_delay_ms() -> u64 {
    DEFAULT_CHAT_REPLY_DELAY_MS
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            accepted_mime: default_accepted_mime(),
            processing_delay_ms: default_processing_delay_ms(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_chat_reply_delay_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl IntakeConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }
}

impl ChatConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration from default location or return defaults
    pub fn load() -> Result<Self> {
        for path in Self::default_paths() {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    fn default_paths() -> Vec<PathBuf> {
        vec![
            PathBuf::from("config/settings.toml"),
            PathBuf::from(shellexpand::tilde("~/.config/docreview/settings.toml").as_ref()),
        ]
    }
}
