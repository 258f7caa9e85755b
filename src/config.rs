use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use reqwest::Url;
use tracing::Level;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
const SESSION_FILE: &str = "session.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Backend base path, without trailing slash.
    pub api_base_url: String,
    pub home_dir: PathBuf,
    pub session_file: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base_url = var("LEAVEDESK_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_base_url = parse_base_url(&api_base_url)?;

        let home_dir = var("LEAVEDESK_HOME").map(PathBuf::from).unwrap_or_else(|| {
            var("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".leavedesk")
        });

        let session_file = var("LEAVEDESK_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| home_dir.join(SESSION_FILE));

        let log_dir = var("LEAVEDESK_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| home_dir.join("logs"));

        let log_level = match var("LEAVEDESK_LOG_LEVEL") {
            Some(value) => value
                .trim()
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidLogLevel {
                    var: "LEAVEDESK_LOG_LEVEL",
                    value,
                })?,
            None => Level::INFO,
        };

        Ok(Self {
            api_base_url,
            home_dir,
            session_file,
            log_dir,
            log_level,
        })
    }
}

fn parse_base_url(value: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidUrl {
        var: "LEAVEDESK_API_URL",
        value: value.to_string(),
    };

    let url = Url::parse(value.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host().is_none() {
        return Err(invalid());
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
