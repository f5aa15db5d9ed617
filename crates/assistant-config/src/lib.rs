//! Server configuration loaded from the environment.
//!
//! Everything the process needs at startup: bind address, static-asset
//! directory, responder mode, model selection, and the external-call
//! timeout. Values are read once and passed explicitly into state
//! construction.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Configuration parsing errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Static files the frontend expects to find in the asset directory.
pub const REQUIRED_ASSETS: &[&str] = &["index.html", "styles.css", "script.js"];

/// Which response strategy the server runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponderMode {
    Keyword,
    Model,
}

impl FromStr for ResponderMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keyword" => Ok(Self::Keyword),
            "model" => Ok(Self::Model),
            _ => Err(()),
        }
    }
}

/// Process-wide settings, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub mode: ResponderMode,
    pub model: String,
    pub api_base: Option<String>,
    pub llm_timeout_secs: u64,
}

impl ServerConfig {
    /// Reads configuration from the environment.
    ///
    /// `ASSISTANT_MODE` selects the strategy explicitly; when unset, the
    /// model-backed responder is used only if an API key is configured.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_or_default("PORT", 8000)?;
        let static_dir =
            PathBuf::from(env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()));

        let has_api_key = env::var("OPENAI_API_KEY").is_ok_and(|k| !k.is_empty());
        let mode = match env::var("ASSISTANT_MODE") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "ASSISTANT_MODE",
                value: raw,
            })?,
            Err(_) if has_api_key => ResponderMode::Model,
            Err(_) => ResponderMode::Keyword,
        };

        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let api_base = env::var("OPENAI_API_BASE").ok().filter(|s| !s.is_empty());
        let llm_timeout_secs = parse_or_default("LLM_TIMEOUT_SECS", 30)?;

        Ok(Self {
            host,
            port,
            static_dir,
            mode,
            model,
            api_base,
            llm_timeout_secs,
        })
    }

    /// The socket address string to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the required static files missing from the asset directory.
    pub fn missing_assets(&self) -> Vec<&'static str> {
        REQUIRED_ASSETS
            .iter()
            .copied()
            .filter(|file| !self.static_dir.join(file).is_file())
            .collect()
    }
}

/// Parses an env var into `T`, falling back to `default` when unset.
fn parse_or_default<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        Err(_) => Ok(default),
    }
}
