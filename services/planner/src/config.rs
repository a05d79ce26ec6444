use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Where classroom records live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageKind {
    /// Process memory; records are lost on restart.
    #[default]
    Memory,
    /// Postgres via `DATABASE_URL`.
    Postgres,
}

impl FromStr for StorageKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            other => bail!("unknown storage kind '{other}' (expected 'memory' or 'postgres')"),
        }
    }
}

/// Connection settings for the Postgres room catalog.
#[derive(Debug, Clone)]
pub struct PgConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    /// Directory holding the `classrooms` schema migrations.
    pub migrations_dir: PathBuf,
}

impl Default for PgConfig {
    fn default() -> Self {
        Self {
            database_url: "postgres://localhost/seatplan".to_string(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(5),
            migrations_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/migrations")),
        }
    }
}

impl PgConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let max_connections = env_number("DB_MAX_CONNECTIONS", defaults.max_connections)?;
        let min_connections = env_number("DB_MIN_CONNECTIONS", defaults.min_connections)?;
        if min_connections > max_connections {
            bail!("DB_MIN_CONNECTIONS ({min_connections}) exceeds DB_MAX_CONNECTIONS ({max_connections})");
        }

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections,
            min_connections,
            migrations_dir: std::env::var_os("SEATPLAN_MIGRATIONS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.migrations_dir),
            ..defaults
        })
    }
}

fn env_number(name: &str, default: u32) -> Result<u32> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a non-negative integer, got '{value}'")),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub log_level: String,
    pub storage: StorageKind,
    pub run_migrations: bool,
    pub postgres: PgConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let listen_addr = std::env::var("SEATPLAN_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .context("SEATPLAN_LISTEN_ADDR must be a socket address")?;

        let log_level = std::env::var("SEATPLAN_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let storage = match std::env::var("SEATPLAN_STORAGE") {
            Ok(value) => value.parse()?,
            Err(_) => StorageKind::default(),
        };

        let run_migrations = std::env::var("SEATPLAN_RUN_MIGRATIONS")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        let postgres = PgConfig::from_env()?;

        Ok(Self {
            listen_addr,
            log_level,
            storage,
            run_migrations,
            postgres,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_kind_parse() {
        assert_eq!("memory".parse::<StorageKind>().unwrap(), StorageKind::Memory);
        assert_eq!(" Postgres ".parse::<StorageKind>().unwrap(), StorageKind::Postgres);
        assert_eq!("pg".parse::<StorageKind>().unwrap(), StorageKind::Postgres);
        assert!("mongo".parse::<StorageKind>().is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
    }

    #[test]
    fn test_pg_defaults_point_at_shipped_migrations() {
        let config = PgConfig::default();
        assert!(config.min_connections <= config.max_connections);
        assert!(config.database_url.ends_with("/seatplan"));
        assert!(config.migrations_dir.join("0001_create_classrooms.sql").is_file());
    }
}
