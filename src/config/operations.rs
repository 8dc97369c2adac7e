//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{Result, TgrepError};
use crate::template::TemplateTable;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(TgrepError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            TgrepError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load the config at `path`, or the defaults when no path is given.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = Self::load(path)?;
                tracing::debug!(
                    path = %path.display(),
                    templates = config.templates.len(),
                    "loaded config"
                );
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| TgrepError::ConfigError(format!("failed to parse config YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            TgrepError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Every entry in `templates` must be accepted by
    /// [`TemplateTable::with_templates`].
    pub fn validate(&self) -> Result<()> {
        self.template_table().map(|_| ())
    }

    /// Build the effective template table: built-ins plus `templates`.
    pub fn template_table(&self) -> Result<TemplateTable> {
        TemplateTable::with_templates(&self.templates).map_err(|e| {
            TgrepError::ConfigError(format!("config validation failed: {}", e))
        })
    }
}
