// src/config/shor_config.rs

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime configuration for the factorization demo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShorConfig {
    /// Maximum random bases tried before a factorization gives up
    pub max_attempts: usize,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Fixed RNG seed for reproducible runs; entropy-seeded when unset
    pub seed: Option<u64>,
}

impl Default for ShorConfig {
    fn default() -> Self {
        ShorConfig {
            max_attempts: 10_000,
            log_level: "info".to_string(),
            seed: None,
        }
    }
}

impl ShorConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Start with defaults
            .set_default("max_attempts", 10_000i64)?
            .set_default("log_level", "info")?;

        if Path::new("shor.toml").exists() {
            builder = builder.add_source(File::with_name("shor.toml"));
        }

        // Override with environment variables (prefix: SHOR_)
        builder = builder.add_source(Environment::with_prefix("SHOR").try_parsing(true));

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Start with defaults
            .set_default("max_attempts", 10_000i64)?
            .set_default("log_level", "info")?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        // Override with environment variables (prefix: SHOR_)
        builder = builder.add_source(Environment::with_prefix("SHOR").try_parsing(true));

        let config = builder.build()?;
        config.try_deserialize()
    }
}
