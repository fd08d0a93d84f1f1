use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, event};

use crate::domain::{constant::config, error::CommandError};

/// Configuration for a [`CommandQueue`](crate::engine::CommandQueue)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct QueueConfig {
    /// Label attached to every trace and event record
    pub name: String
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self { name: "default".to_string() }
    }
}

impl QueueConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, CommandError> {
        let config: QueueConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommandError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read queue config file: {}", path.display()))
            .map_err(|e| CommandError::Configuration(format!("{e:#}")))?;

        let loaded = Self::from_yaml(&content)?;
        event!(Level::DEBUG, event = config::CONFIG_LOADED, path = %path.display(), queue = %loaded.name);
        Ok(loaded)
    }

    pub fn validate(&self) -> Result<(), CommandError> {
        if self.name.trim().is_empty() {
            return Err(CommandError::Configuration("queue name must not be empty".to_string()));
        }
        Ok(())
    }
}
