//! Format-agnostic configuration loading and saving

use crate::{Error, NormalizedPath, Result, io};
use serde::{Serialize, de::DeserializeOwned};

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension and handles
/// serialization/deserialization transparently.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
    Toml,
}

impl Format {
    fn detect(path: &NormalizedPath) -> Result<Self> {
        let extension = path.extension().unwrap_or("");
        match extension.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
            Self::Toml => "TOML",
        }
    }
}

impl ConfigStore {
    /// Create a new ConfigStore.
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.yaml`, `.yml` -> YAML
    /// - `.json` -> JSON
    /// - `.toml` -> TOML
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let format = Format::detect(path)?;
        let content = io::read_text(path)?;
        tracing::debug!(path = %path, format = format.label(), "Loading config");
        Self::parse(path, format, &content)
    }

    fn parse<T: DeserializeOwned>(
        path: &NormalizedPath,
        format: Format,
        content: &str,
    ) -> Result<T> {
        let parse_error = |message: String| Error::ConfigParse {
            path: path.to_native(),
            format: format.label().into(),
            message,
        };

        match format {
            Format::Yaml => serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string())),
            Format::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
            Format::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
        }
    }

    /// Save configuration to a file.
    ///
    /// Format is determined from file extension.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let format = Format::detect(path)?;
        let serialize_error = |message: String| Error::ConfigParse {
            path: path.to_native(),
            format: format.label().into(),
            message,
        };

        let content = match format {
            Format::Yaml => {
                serde_yaml::to_string(value).map_err(|e| serialize_error(e.to_string()))?
            }
            Format::Json => {
                serde_json::to_string_pretty(value).map_err(|e| serialize_error(e.to_string()))?
            }
            Format::Toml => {
                toml::to_string_pretty(value).map_err(|e| serialize_error(e.to_string()))?
            }
        };

        io::write_text(path, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_load_detects_format_from_extension() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new();

        let yaml = NormalizedPath::new(temp.path().join("spec.yml"));
        io::write_text(&yaml, "answer: 42\n").unwrap();
        let json = NormalizedPath::new(temp.path().join("spec.json"));
        io::write_text(&json, r#"{"answer": 42}"#).unwrap();
        let toml_path = NormalizedPath::new(temp.path().join("spec.toml"));
        io::write_text(&toml_path, "answer = 42\n").unwrap();

        for path in [&yaml, &json, &toml_path] {
            let loaded: BTreeMap<String, i64> = store.load(path).unwrap();
            assert_eq!(loaded.get("answer"), Some(&42), "format of {}", path);
        }
    }

    #[test]
    fn test_unknown_extension_is_rejected_before_reading() {
        let store = ConfigStore::new();
        let path = NormalizedPath::new("/does/not/exist/spec.ini");

        let result: Result<serde_yaml::Value> = store.load(&path);
        assert!(
            matches!(result, Err(Error::UnsupportedFormat { extension }) if extension == "ini")
        );
    }

    #[test]
    fn test_parse_error_names_format() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new();
        let path = NormalizedPath::new(temp.path().join("spec.yaml"));
        io::write_text(&path, "key: [unclosed").unwrap();

        let err = store.load::<serde_yaml::Value>(&path).unwrap_err();
        assert!(err.to_string().contains("YAML"), "got: {}", err);
    }

    #[test]
    fn test_save_then_load_yaml() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new();
        let path = NormalizedPath::new(temp.path().join("nested/out.yaml"));

        let mut value = BTreeMap::new();
        value.insert("allow_extra_dirs".to_string(), true);
        store.save(&path, &value).unwrap();

        let loaded: BTreeMap<String, bool> = store.load(&path).unwrap();
        assert_eq!(loaded, value);
    }
}
