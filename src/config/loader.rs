//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ServiceConfig;

/// Loads and provides access to the service configuration.
///
/// # File Format
///
/// ```text
/// server:
///   host: "127.0.0.1"
///   port: 8080
/// logging:
///   filter: "info"
/// ```
///
/// # Example
///
/// ```no_run
/// use pay_period_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml")?;
/// assert_eq!(loader.config().server.port, 8080);
/// # Ok::<(), pay_period_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or mistyped fields (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, path_str)
    }

    /// Parses configuration from an in-memory YAML document.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>".to_string())
    }

    fn parse(content: &str, path: String) -> EngineResult<Self> {
        // An empty document deserializes as unit, not as a defaulted struct
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Returns the underlying service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
