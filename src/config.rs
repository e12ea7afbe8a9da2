use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::catalog::Catalog;

/// Wedding budget API server
#[derive(Parser, Debug, Clone)]
#[command(name = "wedding-server")]
#[command(about = "Budget estimation API for wedding planning", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "WEDDING_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "WEDDING_PORT", default_value_t = 8001)]
    pub port: u16,

    /// SQLite database holding saved plans
    #[arg(long, env = "WEDDING_DB", default_value = "wedding_plans.db")]
    pub db: String,

    /// JSON catalog replacing the built-in venues, cuisines and services
    #[arg(long, env = "WEDDING_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Log level filter (RUST_LOG takes precedence)
    #[arg(long, env = "WEDDING_LOG", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, env = "WEDDING_LOG_JSON")]
    pub log_json: bool,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            bail!("host must not be empty");
        }
        if self.db.trim().is_empty() {
            bail!("db path must not be empty");
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Catalog from `--catalog` when given, otherwise the built-in seed
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::from_file(path),
            None => Ok(Catalog::with_defaults()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::parse_from(["wedding-server"]);

        assert_eq!(config.port, 8001);
        assert_eq!(config.db, "wedding_plans.db");
        assert!(config.catalog.is_none());
        assert!(!config.log_json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::parse_from([
            "wedding-server",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--log-json",
        ]);

        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert!(config.log_json);
    }

    #[test]
    fn test_validate_rejects_blank_db() {
        let config = ServerConfig::parse_from(["wedding-server", "--db", " "]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_catalog_loaded() {
        let config = ServerConfig::parse_from(["wedding-server"]);
        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.venues().len(), 4);
    }
}
