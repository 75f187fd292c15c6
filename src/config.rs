use anyhow::Context;
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub db_max_connections: u32,

    pub api_prefix: String,
    /// Origin of the browser client allowed by CORS
    pub cors_origin: String,

    // Rate limiting, 0 disables the limiter
    pub rate_per_min: u32,

    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:8000".to_string(),
            database_url: "sqlite://hrms.db".to_string(),
            db_max_connections: 5,
            api_prefix: "/api".to_string(),
            cors_origin: "http://localhost:3000".to_string(),
            rate_per_min: 600,
            log_dir: "logs".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or(defaults.server_addr),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", defaults.db_max_connections)?,
            api_prefix: env::var("API_PREFIX").unwrap_or(defaults.api_prefix),
            cors_origin: env::var("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            rate_per_min: parse_var("RATE_PER_MIN", defaults.rate_per_min)?,
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => parse_value(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(name: &str, raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("{name} must be a number, got {raw:?}"))
}
