//! Configuration types for the employee registry.

use std::path::PathBuf;

use serde::Deserialize;

use crate::store::DEFAULT_DATA_FILE;

/// Currency label printed in reports when none is configured.
pub const DEFAULT_CURRENCY: &str = "Rs.";

/// Settings for one run of the registry.
///
/// ```yaml
/// data_file: employees.json
/// company: Acme
/// currency: Rs.
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Path of the shared JSON data file.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Company to operate on. The shell asks for one when unset.
    #[serde(default)]
    pub company: Option<String>,
    /// Label printed before amounts in reports.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            company: None,
            currency: default_currency(),
        }
    }
}
