use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::args::tokenizer;
use crate::config::types::SchemaFile;

/// Errors that can occur when loading a schema file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read schema file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse schema file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Schema validation failed: {message}")]
    ValidationError { message: String },
}

impl SchemaFile {
    /// Returns the path to the default schema file.
    ///
    /// Uses `~/.config/argbind/schema.toml` on Unix,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("argbind").join("schema.toml")
    }

    /// Loads the schema from the default path.
    ///
    /// A missing file yields an empty schema.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::debug!("No schema file at {}, using empty schema", path.display());
            return Ok(SchemaFile::default());
        }

        Self::load_from(&path)
    }

    /// Reads, parses and validates a schema file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let schema: SchemaFile = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        schema.validate()?;
        tracing::debug!("Loaded {} fields from {}", schema.fields.len(), path.display());
        Ok(schema)
    }

    /// Validates the schema.
    ///
    /// Checks:
    /// - Field names are non-empty and unique
    /// - Declared flags are non-empty and start with neither a dash nor a digit
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for decl in &self.fields {
            if decl.name.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "Field name must not be empty".to_string(),
                });
            }

            if !seen.insert(decl.name.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Field '{}' declared more than once", decl.name),
                });
            }

            if let Some(flag) = &decl.flag {
                if !tokenizer::is_valid_flag_name(flag) {
                    return Err(ConfigError::ValidationError {
                        message: format!(
                            "Field '{}': flag '{}' must not be empty or start with '-' or a digit",
                            decl.name, flag
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}
