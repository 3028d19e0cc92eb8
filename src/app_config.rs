/*!
 * Application configuration.
 *
 * This module handles the application configuration including loading,
 * validating and saving configuration settings. Configuration lives in a
 * JSON file; a default one is written on first run.
 */

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::language::Language;

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Identifier of the local user, used to key the vocabulary list
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Language being learned
    #[serde(default = "default_language")]
    pub language: String,

    /// Self-reported skill level ("beginner" or "intermediate")
    #[serde(default = "default_skill")]
    pub skill: String,

    /// Gender of the user ("woman" or "man"), used for gendered grammar
    #[serde(default = "default_gender")]
    pub gender: String,

    /// Number of words per quiz
    #[serde(default = "default_quiz_length")]
    pub quiz_length: usize,

    /// Minimum milliseconds before a sentence or lyric translation is
    /// shown; 0 disables the floor
    #[serde(default = "default_min_reveal_delay_ms")]
    pub min_reveal_delay_ms: u64,

    /// Generator provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Generator provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API key
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service URL; empty means the public API
    #[serde(default = "String::new")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: String::new(),
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_user_id() -> String {
    "default".to_string()
}

fn default_language() -> String {
    "Romanian".to_string()
}

fn default_skill() -> String {
    "beginner".to_string()
}

fn default_gender() -> String {
    "woman".to_string()
}

fn default_quiz_length() -> usize {
    crate::quiz::DEFAULT_QUIZ_LENGTH
}

fn default_min_reveal_delay_ms() -> u64 {
    500
}

fn default_model() -> String {
    crate::bot::DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl Config {
    /// Load a config file, or write and return the default when the file
    /// does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok(config)
        } else {
            let config = Config::default();
            let config_json = serde_json::to_string_pretty(&config)
                .context("Failed to serialize default config to JSON")?;
            std::fs::write(path, config_json)
                .with_context(|| format!("Failed to write default config to file: {:?}", path))?;
            Ok(config)
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let _: Language = self
            .language
            .parse()
            .map_err(|_| anyhow!("Unsupported language: {}", self.language))?;

        match self.skill.to_lowercase().as_str() {
            "beginner" | "intermediate" => {}
            other => return Err(anyhow!("Invalid skill level: {}", other)),
        }

        match self.gender.to_lowercase().as_str() {
            "woman" | "man" => {}
            other => return Err(anyhow!("Invalid gender value: {}", other)),
        }

        if self.quiz_length == 0 {
            return Err(anyhow!("Quiz length must be at least 1"));
        }

        if self.provider.api_key.is_empty() {
            return Err(anyhow!("API key is required for the generator provider"));
        }

        Ok(())
    }

    /// The configured language, parsed
    pub fn language(&self) -> Result<Language> {
        self.language
            .parse()
            .map_err(|_| anyhow!("Unsupported language: {}", self.language))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            user_id: default_user_id(),
            language: default_language(),
            skill: default_skill(),
            gender: default_gender(),
            quiz_length: default_quiz_length(),
            min_reveal_delay_ms: default_min_reveal_delay_ms(),
            provider: ProviderConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
