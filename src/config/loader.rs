//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading registry
//! settings from a YAML file and layering command line overrides on top.

use std::fs;
use std::path::{Path, PathBuf};

use crate::company::normalize_company_name;
use crate::error::{RegistryError, RegistryResult};

use super::types::RegistryConfig;

/// Loads and provides access to registry configuration.
///
/// # Example
///
/// ```no_run
/// use employee_registry::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./registry.yaml")?
///     .with_overrides(None, Some("acme corp".to_string()));
/// assert_eq!(loader.config().company.as_deref(), Some("Acme Corp"));
/// # Ok::<(), employee_registry::error::RegistryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: RegistryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file is not valid YAML or has unknown keys (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> RegistryResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RegistryError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let mut config: RegistryConfig =
            serde_yaml::from_str(&content).map_err(|e| RegistryError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;
        config.company = config
            .company
            .as_deref()
            .map(normalize_company_name)
            .filter(|name| !name.is_empty());

        Ok(Self { config })
    }

    /// Loads from `path` when given, otherwise starts from the defaults.
    pub fn load_optional<P: AsRef<Path>>(path: Option<P>) -> RegistryResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command line overrides. `None` keeps the loaded value.
    pub fn with_overrides(mut self, data_file: Option<PathBuf>, company: Option<String>) -> Self {
        if let Some(data_file) = data_file {
            self.config.data_file = data_file;
        }
        if let Some(company) = company {
            let company = normalize_company_name(&company);
            if !company.is_empty() {
                self.config.company = Some(company);
            }
        }
        self
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> RegistryConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("registry.yaml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_configuration() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "data_file: staff.json\ncompany: acme corp\n");

        let loader = ConfigLoader::load(&path).unwrap();
        assert_eq!(loader.config().data_file, PathBuf::from("staff.json"));
        assert_eq!(loader.config().company.as_deref(), Some("Acme Corp"));
        assert_eq!(loader.config().currency, "Rs.");
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/registry.yaml");
        match result {
            Err(RegistryError::ConfigNotFound { path }) => {
                assert!(path.contains("registry.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "company: [unclosed\n");

        match ConfigLoader::load(&path) {
            Err(RegistryError::ConfigParseError { path: p, message }) => {
                assert!(p.contains("registry.yaml"));
                assert!(!message.is_empty());
            }
            _ => panic!("Expected ConfigParseError"),
        }
    }

    #[test]
    fn test_blank_company_is_unset() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "company: \"   \"\n");

        let loader = ConfigLoader::load(&path).unwrap();
        assert_eq!(loader.config().company, None);
    }

    #[test]
    fn test_load_optional_without_path_uses_defaults() {
        let loader = ConfigLoader::load_optional(None::<&Path>).unwrap();
        assert_eq!(loader.into_config(), RegistryConfig::default());
    }

    #[test]
    fn test_overrides_replace_loaded_values() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "data_file: staff.json\ncompany: Acme\n");

        let config = ConfigLoader::load(&path)
            .unwrap()
            .with_overrides(Some(PathBuf::from("other.json")), Some("beta ltd".to_string()))
            .into_config();

        assert_eq!(config.data_file, PathBuf::from("other.json"));
        assert_eq!(config.company.as_deref(), Some("Beta Ltd"));
    }

    #[test]
    fn test_missing_overrides_keep_loaded_values() {
        let config = ConfigLoader::default()
            .with_overrides(None, None)
            .into_config();
        assert_eq!(config, RegistryConfig::default());
    }
}
