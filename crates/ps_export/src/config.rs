//! Export configuration
//!
//! One plain struct with named fields, loadable from TOML or RON. Only the
//! caller layer reads it; the serializer itself takes no configuration.

pub use serde::{Deserialize, Serialize};

/// Configuration trait for types loadable from TOML or RON files
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, is not valid for its extension's
    /// format, or has an extension other than `.toml` / `.ron`.
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Fails when serialization or the write itself fails, or when the
    /// extension is not `.toml` / `.ron`.
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Settings for one export invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Run the fan-triangulation pass before serializing.
    ///
    /// Read by the invoking layer only; turning it off with a mesh that
    /// still contains quads or n-gons makes the export fail.
    pub triangulate: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { triangulate: true }
    }
}

impl Config for ExportConfig {}
