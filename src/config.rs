use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://volleydle.db";
const DEFAULT_HOST: Ipv4Addr = Ipv4Addr::UNSPECIFIED;
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOST is not in the correct format: {0}")]
    InvalidHost(String),
    #[error("PORT is not the correct format: {0}")]
    InvalidPort(String),
    #[error("CORS_ORIGINS contains an invalid origin: {0}")]
    InvalidOrigin(String),
}

/// Which origins the frontend may call from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: Ipv4Addr,
    pub port: u16,
    pub cors_origins: AllowedOrigins,
}

impl Config {
    /// Read configuration from the process environment (after `.env` is loaded)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let host: Ipv4Addr = match lookup("HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(raw.clone()))?,
            None => DEFAULT_HOST,
        };

        let port: u16 = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let origins = lookup("CORS_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string());
        let cors_origins = parse_origins(&origins)?;

        Ok(Config {
            database_url,
            host,
            port,
            cors_origins,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn parse_origins(raw: &str) -> Result<AllowedOrigins, ConfigError> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    if origins.iter().any(|o| o == "*") {
        return Ok(AllowedOrigins::Any);
    }

    if let Some(bad) = origins
        .iter()
        .find(|o| !(o.starts_with("http://") || o.starts_with("https://")))
    {
        return Err(ConfigError::InvalidOrigin(bad.clone()));
    }

    Ok(AllowedOrigins::List(origins))
}
