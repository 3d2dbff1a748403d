//! Process-wide configuration, read once at startup.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TIMEOUT_SECS: u64 = 300;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_model: String,
    pub google_api_key: String,
    pub search_engine_id: String,
    pub allowed_origin: String,
    pub port: u16,
    /// Overall deadline for a single evaluation; the endpoint answers 504
    /// instead of hanging past it.
    pub evaluation_timeout: Duration,
}

impl Config {
    /// Missing credentials are fatal here, before any worker is built.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            openai_api_key: require("OPENAI_API_KEY")?,
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
            google_api_key: require("GOOGLE_API_KEY")?,
            search_engine_id: require("SEARCH_ENGINE_ID")?,
            allowed_origin: env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.into()),
            port: parse_var("PORT", DEFAULT_PORT)?,
            evaluation_timeout: Duration::from_secs(parse_var(
                "EVALUATION_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
        })
    }
}

fn require(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(key)),
    }
}

fn parse_var<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidVar(key, e.to_string())),
        Err(_) => Ok(default),
    }
}
