use std::env;

use anyhow::{Context, Result};
use dotenvy::dotenv;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub db_max_connections: u32,

    pub api_prefix: String,
    /// Empty means any origin is accepted.
    pub cors_allowed_origins: Vec<String>,

    // Logging
    pub log_dir: String,
    pub log_level: tracing::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:5000".to_string(),
            database_url: "sqlite://hrms.db".to_string(),
            db_max_connections: 5,
            api_prefix: "/api".to_string(),
            cors_allowed_origins: Vec::new(),
            log_dir: "logs".to_string(),
            log_level: tracing::Level::DEBUG,
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Splits a comma-separated origin list, dropping blanks and `null`.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .map(|s| s.to_string())
        .collect()
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let defaults = Self::default();

        let db_max_connections = var_or("DB_MAX_CONNECTIONS", &defaults.db_max_connections.to_string())
            .parse()
            .context("DB_MAX_CONNECTIONS must be a positive integer")?;

        let log_level = var_or("LOG_LEVEL", "debug")
            .parse()
            .context("LOG_LEVEL must be one of trace, debug, info, warn, error")?;

        Ok(Self {
            server_addr: var_or("SERVER_ADDR", &defaults.server_addr),
            database_url: var_or("DATABASE_URL", &defaults.database_url),
            db_max_connections,
            api_prefix: var_or("API_PREFIX", &defaults.api_prefix),
            cors_allowed_origins: parse_origins(&var_or("CORS_ALLOWED_ORIGINS", "")),
            log_dir: var_or("LOG_DIR", &defaults.log_dir),
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_filtered() {
        let origins = parse_origins(" http://localhost:3000, ,null,https://hr.example.com ");

        assert_eq!(origins, vec!["http://localhost:3000", "https://hr.example.com"]);
    }

    #[test]
    fn empty_origin_list_means_permissive() {
        assert!(parse_origins("").is_empty());
        assert!(Config::default().cors_allowed_origins.is_empty());
    }

    #[test]
    fn defaults_point_at_local_sqlite_file() {
        let config = Config::default();

        assert_eq!(config.database_url, "sqlite://hrms.db");
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.server_addr, "127.0.0.1:5000");
    }
}
