//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file is honoured when the binary calls `dotenvy::dotenv()`.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite://url.db?mode=rwc`)
//! - `LISTEN` - Bind address; when unset it is built from `PORT` as `0.0.0.0:{PORT}`
//! - `PORT` - Listen port used when `LISTEN` is absent (default: `8080`)
//! - `DOMAIN` - Prefix of every short URL (default: `http://localhost:8080/`)
//! - `SLUG_LENGTH` - Characters per generated slug (default: 6, range 1-64)
//! - `TEMPLATE_PATH` - Directory of static assets served under `/static` (default: `static`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! ## Pool settings
//!
//! - `DB_MAX_CONNECTIONS` (default: 10)
//! - `DB_CONNECT_TIMEOUT` seconds (default: 30)
//! - `DB_IDLE_TIMEOUT` seconds (default: 600)
//! - `DB_MAX_LIFETIME` seconds (default: 1800)

use anyhow::{Context, Result};
use std::env;

use crate::utils::slug_generator::MAX_SLUG_LENGTH;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Prefix joined with a slug to form the short URL. Must end with `/`.
    pub domain: String,
    pub slug_length: usize,
    /// Directory served under `/static`. HTML templates are compiled in from `templates/`.
    pub template_path: String,
    pub log_level: String,
    pub log_format: String,

    // ── Pool settings ───────────────────────────────────────────────────────
    pub db_max_connections: u32,
    pub db_connect_timeout: u64,
    pub db_idle_timeout: u64,
    pub db_max_lifetime: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://url.db?mode=rwc".to_string());
        let listen_addr = Self::load_listen_addr();
        let domain = env::var("DOMAIN").unwrap_or_else(|_| "http://localhost:8080/".to_string());
        let template_path = env::var("TEMPLATE_PATH").unwrap_or_else(|_| "static".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let slug_length = parse_var("SLUG_LENGTH", 6)?;
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 10)?;
        let db_connect_timeout = parse_var("DB_CONNECT_TIMEOUT", 30)?;
        let db_idle_timeout = parse_var("DB_IDLE_TIMEOUT", 600)?;
        let db_max_lifetime = parse_var("DB_MAX_LIFETIME", 1800)?;

        Ok(Self {
            database_url,
            listen_addr,
            domain,
            slug_length,
            template_path,
            log_level,
            log_format,
            db_max_connections,
            db_connect_timeout,
            db_idle_timeout,
            db_max_lifetime,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:{PORT}`, with `PORT` defaulting to `8080`
    fn load_listen_addr() -> String {
        if let Ok(addr) = env::var("LISTEN") {
            return addr;
        }

        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        format!("0.0.0.0:{}", port)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `domain` is not an `http(s)://` prefix ending in `/`
    /// - `slug_length` is outside `1..=64`
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` or `database_url` is malformed
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if !self.domain.starts_with("http://") && !self.domain.starts_with("https://") {
            anyhow::bail!(
                "DOMAIN must start with 'http://' or 'https://', got '{}'",
                self.domain
            );
        }

        if !self.domain.ends_with('/') {
            anyhow::bail!("DOMAIN must end with '/', got '{}'", self.domain);
        }

        if self.slug_length == 0 || self.slug_length > MAX_SLUG_LENGTH {
            anyhow::bail!(
                "SLUG_LENGTH must be between 1 and {}, got {}",
                MAX_SLUG_LENGTH,
                self.slug_length
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Short URL domain: {}", self.domain);
        tracing::info!("  Slug length: {}", self.slug_length);
        tracing::info!("  Static assets: {}", self.template_path);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses an optional numeric environment variable, falling back to `default`
/// when it is unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{value}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
