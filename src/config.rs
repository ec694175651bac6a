//! Startup configuration read from the process environment.

use std::env;
use thiserror::Error;

/// Environment variable names.
pub mod vars {
    pub const DEEPSEEK_API_KEY: &str = "DEEPSEEK_API_KEY";
    pub const DEEPSEEK_BASE_URL: &str = "DEEPSEEK_BASE_URL";
    pub const DEEPSEEK_MODEL: &str = "DEEPSEEK_MODEL";
    pub const REQGEN_BIND: &str = "REQGEN_BIND";
}

pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";
pub const DEFAULT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API key not found. Set DEEPSEEK_API_KEY in the environment or a .env file.")]
    MissingApiKey,

    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: &'static str, message: String },
}

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub bind: String,
}

impl Config {
    /// Reads the process environment. The binary loads `.env` before calling
    /// this.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let api_key = non_blank(vars::DEEPSEEK_API_KEY).ok_or(ConfigError::MissingApiKey)?;

        let base_url = non_blank(vars::DEEPSEEK_BASE_URL)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                var: vars::DEEPSEEK_BASE_URL,
                message: format!("expected an http(s) URL, got {:?}", base_url),
            });
        }

        let model = non_blank(vars::DEEPSEEK_MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let bind = non_blank(vars::REQGEN_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string());

        Ok(Config {
            api_key: api_key.trim().to_string(),
            base_url,
            model,
            bind,
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("bind", &self.bind)
            .finish()
    }
}
