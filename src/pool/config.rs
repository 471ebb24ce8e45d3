//! Pool configuration.
//!
//! Capacity is the only tunable. It trades memory for fewer allocations
//! under concurrent load; zero disables pooling entirely.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Capacity of the process-wide default pool.
pub const DEFAULT_CAPACITY: usize = 50;

/// Largest capacity accepted by [`PoolConfig::validate`].
pub const MAX_CAPACITY: usize = 1 << 16;

/// Configuration for a [`HashPool`](super::HashPool).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Number of hash states kept for reuse.
    pub capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl PoolConfig {
    /// Creates a configuration with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity > MAX_CAPACITY {
            return Err(ConfigError::CapacityTooLarge {
                capacity: self.capacity,
                max: MAX_CAPACITY,
            });
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    ///
    /// The pool settings may sit at the top level or under a `[pool]` table.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        let config = file.pool.unwrap_or(PoolConfig {
            capacity: file.capacity.unwrap_or(DEFAULT_CAPACITY),
        });
        config.validate()?;

        tracing::debug!(capacity = config.capacity, "Loaded pool configuration");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml_str(&content)
    }
}

/// Accepted file layout.
#[derive(Debug, Deserialize)]
struct FileConfig {
    capacity: Option<usize>,
    pool: Option<PoolConfig>,
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("pool capacity {capacity} exceeds maximum of {max}")]
    CapacityTooLarge { capacity: usize, max: usize },
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}
