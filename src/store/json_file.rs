//! The JSON data file store.
//!
//! This module provides [`JsonFileStore`], which keeps the shared document in
//! a single pretty-printed JSON file and rewrites the whole file on every
//! save.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{RegistryError, RegistryResult};

use super::{Partition, PartitionStore, partition_of};

/// The data file used when none is configured.
pub const DEFAULT_DATA_FILE: &str = "employees.json";

/// What was found at the data file path.
enum Document {
    /// No file exists yet.
    Missing,
    /// The file exists but is not a JSON object.
    Corrupt(String),
    /// The parsed top-level object.
    Parsed(Map<String, Value>),
}

/// A [`PartitionStore`] backed by one JSON file.
///
/// Saving re-reads the file first so partitions written by other companies
/// since this store was opened are kept. A missing file is an empty
/// document. A file that is not a JSON object is logged and treated as empty
/// on load, and overwritten with a fresh document on save.
///
/// # Example
///
/// ```no_run
/// use employee_registry::store::{JsonFileStore, PartitionStore};
///
/// let store = JsonFileStore::new("employees.json");
/// let partition = store.load_partition("Acme")?;
/// println!("{} stored records", partition.len());
/// # Ok::<(), employee_registry::error::RegistryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for the file at `path`. The file is not touched until
    /// the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, error: std::io::Error) -> RegistryError {
        RegistryError::StoreIo {
            path: self.path.display().to_string(),
            message: error.to_string(),
        }
    }

    fn read_document(&self) -> RegistryResult<Document> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Document::Missing),
            Err(e) => return Err(self.io_error(e)),
        };

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(Document::Parsed(map)),
            Ok(_) => Ok(Document::Corrupt(
                "top-level value is not a JSON object".to_string(),
            )),
            Err(e) => Ok(Document::Corrupt(e.to_string())),
        }
    }

    fn write_document(&self, document: &Map<String, Value>) -> RegistryResult<()> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        document
            .serialize(&mut serializer)
            .map_err(|e| RegistryError::Serialization {
                message: e.to_string(),
            })?;

        fs::write(&self.path, buffer).map_err(|e| self.io_error(e))
    }
}

impl PartitionStore for JsonFileStore {
    fn load_partition(&self, company: &str) -> RegistryResult<Partition> {
        match self.read_document()? {
            Document::Missing => {
                debug!(path = %self.path.display(), "Data file not found; starting empty");
                Ok(Partition::new())
            }
            Document::Corrupt(reason) => {
                warn!(
                    path = %self.path.display(),
                    reason = %reason,
                    "Data file is not a valid JSON object; starting with no employees"
                );
                Ok(Partition::new())
            }
            Document::Parsed(document) => Ok(partition_of(&document, company)),
        }
    }

    fn save_partition(&mut self, company: &str, partition: Partition) -> RegistryResult<()> {
        let mut document = match self.read_document()? {
            Document::Missing => Map::new(),
            Document::Corrupt(reason) => {
                warn!(
                    path = %self.path.display(),
                    reason = %reason,
                    "Data file is not a valid JSON object; overwriting it with this company only"
                );
                Map::new()
            }
            Document::Parsed(document) => document,
        };

        document.insert(company.to_string(), Value::Object(partition));
        self.write_document(&document)?;

        debug!(path = %self.path.display(), company = %company, "Saved company partition");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn partition(value: Value) -> Partition {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected an object"),
        }
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("employees.json"));

        assert!(store.load_partition("Acme").unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_creates_file_with_partition() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("employees.json"));

        store
            .save_partition("Acme", partition(json!({"E1": {"Name": "Alice"}})))
            .unwrap();

        assert_eq!(
            read_json(store.path()),
            json!({"Acme": {"E1": {"Name": "Alice"}}})
        );
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("employees.json"));

        store
            .save_partition("Acme", partition(json!({"E1": {}})))
            .unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert_eq!(text, "{\n    \"Acme\": {\n        \"E1\": {}\n    }\n}");
    }

    #[test]
    fn test_save_keeps_other_partitions_written_after_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("employees.json");
        let mut acme = JsonFileStore::new(&path);
        let mut beta = JsonFileStore::new(&path);

        acme.save_partition("Acme", partition(json!({"E1": {}})))
            .unwrap();
        beta.save_partition("Beta", partition(json!({"B1": {}})))
            .unwrap();
        acme.save_partition("Acme", partition(json!({"E2": {}})))
            .unwrap();

        assert_eq!(
            read_json(&path),
            json!({"Acme": {"E2": {}}, "Beta": {"B1": {}}})
        );
    }

    #[test]
    fn test_save_preserves_company_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("employees.json");
        fs::write(&path, r#"{"Zeta": {}, "Acme": {}}"#).unwrap();
        let mut store = JsonFileStore::new(&path);

        store.save_partition("Zeta", Partition::new()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.find("Zeta").unwrap() < text.find("Acme").unwrap());
    }

    #[test]
    fn test_load_non_object_document_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("employees.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load_partition("Acme").unwrap().is_empty());
    }

    #[test]
    fn test_load_unparseable_document_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("employees.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load_partition("Acme").unwrap().is_empty());
    }

    #[test]
    fn test_save_over_corrupt_document_writes_only_this_partition() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("employees.json");
        fs::write(&path, "\"just a string\"").unwrap();

        let mut store = JsonFileStore::new(&path);
        store
            .save_partition("Acme", partition(json!({"E1": {}})))
            .unwrap();

        assert_eq!(read_json(&path), json!({"Acme": {"E1": {}}}));
    }

    #[test]
    fn test_load_directory_path_is_store_io_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());

        match store.load_partition("Acme") {
            Err(RegistryError::StoreIo { path, .. }) => {
                assert_eq!(path, dir.path().display().to_string());
            }
            other => panic!("Expected StoreIo error, got {:?}", other),
        }
    }
}
