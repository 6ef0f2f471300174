//! Format-agnostic argument document loading

use serde::de::DeserializeOwned;

use crate::{Error, NormalizedPath, Result, io};

/// Loads the argument document an orchestrator hands to a task.
///
/// The format is detected from the file extension:
/// - `.json` -> JSON
/// - `.yaml`, `.yml` -> YAML
/// - `.toml` -> TOML
#[derive(Debug, Default)]
pub struct ArgsStore;

impl ArgsStore {
    pub fn new() -> Self {
        Self
    }

    /// Load and deserialize an argument document.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let extension = path.extension().unwrap_or("").to_lowercase();
        let format = match extension.as_str() {
            "json" => "JSON",
            "yaml" | "yml" => "YAML",
            "toml" => "TOML",
            _ => return Err(Error::UnsupportedFormat { extension }),
        };

        let content = io::read_text(path)?;
        tracing::debug!(path = %path, format, "loading argument document");

        let parsed = match format {
            "JSON" => serde_json::from_str(&content).map_err(|e| e.to_string()),
            "YAML" => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
            _ => toml::from_str(&content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| Error::ArgsParse {
            path: path.to_native(),
            format: format.into(),
            message,
        })
    }
}
