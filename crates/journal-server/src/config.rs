//! Server configuration
//!
//! Values come from `JOURNAL_*` environment variables layered over
//! built-in defaults.

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;
use std::path::PathBuf;

/// Bind address of the ephemeral (in-memory) service
pub const MEMORY_BIND_ADDRESS: &str = "0.0.0.0:8000";
/// Bind address of the persisted service
pub const JOURNAL_BIND_ADDRESS: &str = "0.0.0.0:8001";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub data_dir: PathBuf,
    #[serde(default)]
    database_path: Option<PathBuf>,
    #[serde(default)]
    image_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Load from the process environment.
    pub fn load(default_bind: &str) -> Result<Self> {
        Self::load_from(default_bind, Environment::with_prefix("JOURNAL"))
    }

    pub fn load_from(default_bind: &str, env: Environment) -> Result<Self> {
        Config::builder()
            .set_default("bind_address", default_bind)?
            .set_default("data_dir", "./data")?
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn database_path(&self) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(|| self.data_dir.join("journal.db"))
    }

    pub fn image_dir(&self) -> PathBuf {
        self.image_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join("images"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("JOURNAL").source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::load_from(JOURNAL_BIND_ADDRESS, env(&[])).unwrap();

        assert_eq!(config.bind_address, "0.0.0.0:8001");
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.database_path(), PathBuf::from("./data/journal.db"));
        assert_eq!(config.image_dir(), PathBuf::from("./data/images"));
    }

    #[test]
    fn test_environment_overrides() {
        let config = ServerConfig::load_from(
            MEMORY_BIND_ADDRESS,
            env(&[
                ("JOURNAL_BIND_ADDRESS", "127.0.0.1:9000"),
                ("JOURNAL_DATA_DIR", "/srv/journal"),
                ("JOURNAL_IMAGE_DIR", "/mnt/uploads"),
            ]),
        )
        .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.database_path(), PathBuf::from("/srv/journal/journal.db"));
        assert_eq!(config.image_dir(), PathBuf::from("/mnt/uploads"));
    }
}
