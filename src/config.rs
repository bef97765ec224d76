//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `DATABASE_URL` - `PostgreSQL` connection string
//!
//! ## Optional
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 3000)
//! - `CORS_ALLOWED_ORIGINS` - Comma-separated origins allowed to call the API,
//!   each exactly `scheme://host[:port]` or `*`
//!   (default: `http://localhost:3000,http://localhost:8080`)
//! - `DATABASE_POOL_SIZE` - Maximum pooled connections (default: 10)

use thiserror::Error;
use url::Url;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:8080";
const DEFAULT_POOL_SIZE: &str = "10";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub pool_size: u32,
}

impl Settings {
    /// Load settings from the process environment. `main` loads `.env` into
    /// the environment before calling this.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
        let host = get_or("HOST", DEFAULT_HOST);
        let port = parse_var("PORT", &get_or("PORT", DEFAULT_PORT))?;
        let pool_size: u32 = parse_var(
            "DATABASE_POOL_SIZE",
            &get_or("DATABASE_POOL_SIZE", DEFAULT_POOL_SIZE),
        )?;
        if pool_size == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "DATABASE_POOL_SIZE".to_string(),
                "must be at least 1".to_string(),
            ));
        }
        let allowed_origins =
            parse_origins(&get_or("CORS_ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS))?;

        Ok(Self {
            database_url,
            host,
            port,
            allowed_origins,
            pool_size,
        })
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| validate_origin(origin).map(|()| origin.to_string()))
        .collect()
}

/// An origin must be written exactly as browsers send it in the `Origin`
/// header, otherwise it can never match.
fn validate_origin(origin: &str) -> Result<(), ConfigError> {
    if origin == "*" {
        return Ok(());
    }
    let invalid = |reason: String| {
        ConfigError::InvalidEnvVar(
            "CORS_ALLOWED_ORIGINS".to_string(),
            format!("{origin:?}: {reason}"),
        )
    };
    let url = Url::parse(origin).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https".to_string()));
    }
    let canonical = url.origin().ascii_serialization();
    if canonical != origin {
        return Err(invalid(format!("not a bare origin, expected {canonical:?}")));
    }
    Ok(())
}
