use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use log::LevelFilter;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PORT: u16 = 5000;

/// Upstream model settings. A missing `api_key` selects mock mode.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GeminiConfig {
    pub fn from_env() -> Result<Self> {
        let timeout_secs = parse_var("GEMINI_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        Ok(Self {
            api_key: non_empty_var("GEMINI_API_KEY"),
            model: non_empty_var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            base_url: non_empty_var("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub log_level: LevelFilter,
    pub gemini: GeminiConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let log_level = match non_empty_var("LOG_LEVEL") {
            Some(value) => LevelFilter::from_str(&value)
                .with_context(|| format!("invalid LOG_LEVEL: {value}"))?,
            None => LevelFilter::Info,
        };
        Ok(Self {
            host: non_empty_var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_var("PORT", DEFAULT_PORT)?,
            static_dir: non_empty_var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
            log_level,
            gemini: GeminiConfig::from_env()?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match non_empty_var(key) {
        Some(value) => value
            .parse()
            .with_context(|| format!("invalid {key}: {value}")),
        None => Ok(default),
    }
}
