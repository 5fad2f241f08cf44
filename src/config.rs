use std::env;
use std::time::Duration;

use crate::logger::{LogLevel, LoggerConfig};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        OpenAiConfig {
            api_key: None,
            base_url: None,
            timeout_secs: None,
        }
    }
}

impl OpenAiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY").filter(|key| !key.is_empty());
        let base_url = lookup("OPENAI_BASE_URL").filter(|url| !url.is_empty());
        let timeout_secs = lookup("OPENAI_TIMEOUT_SECS").and_then(|s| s.parse().ok());

        OpenAiConfig {
            api_key,
            base_url,
            timeout_secs,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: Option<u16>,
    pub openai: OpenAiConfig,
    pub log_level: Option<LogLevel>,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: None,
            openai: OpenAiConfig::default(),
            log_level: None,
            log_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT").and_then(|port| port.parse().ok());
        let log_level = lookup("LOG_LEVEL").and_then(|level| LogLevel::parse(&level));
        let log_json = lookup("LOG_FORMAT").map_or(false, |val| val.eq_ignore_ascii_case("json"));

        Config {
            port,
            openai: OpenAiConfig::from_lookup(&lookup),
            log_level,
            log_json,
        }
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Logger settings implied by `LOG_FORMAT` and `LOG_LEVEL`.
    pub fn logger_config(&self) -> LoggerConfig {
        let base = if self.log_json {
            LoggerConfig::production()
        } else {
            LoggerConfig::development()
        };
        match self.log_level {
            Some(level) => base.with_level(level),
            None => base,
        }
    }
}
