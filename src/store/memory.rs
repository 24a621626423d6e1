//! An in-memory partition store.

use serde_json::{Map, Value};

use crate::error::RegistryResult;

use super::{Partition, PartitionStore, partition_of};

/// A [`PartitionStore`] holding the shared document in memory.
///
/// Useful for embedding the registry without touching the filesystem and
/// for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    document: Map<String, Value>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with an existing document.
    pub fn with_document(document: Map<String, Value>) -> Self {
        Self { document }
    }

    /// Returns the whole shared document.
    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }
}

impl PartitionStore for MemoryStore {
    fn load_partition(&self, company: &str) -> RegistryResult<Partition> {
        Ok(partition_of(&self.document, company))
    }

    fn save_partition(&mut self, company: &str, partition: Partition) -> RegistryResult<()> {
        self.document
            .insert(company.to_string(), Value::Object(partition));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_save_then_load_returns_partition() {
        let mut store = MemoryStore::new();
        let mut partition = Partition::new();
        partition.insert("E1".to_string(), json!({"Name": "Alice"}));

        store.save_partition("Acme", partition.clone()).unwrap();

        assert_eq!(store.load_partition("Acme").unwrap(), partition);
        assert!(store.load_partition("Beta").unwrap().is_empty());
    }

    #[test]
    fn test_save_leaves_other_partitions_untouched() {
        let mut seeded = Map::new();
        seeded.insert("Beta".to_string(), json!({"B1": {"Name": "Bea"}}));
        let mut store = MemoryStore::with_document(seeded);

        store.save_partition("Acme", Partition::new()).unwrap();

        assert_eq!(store.document()["Beta"], json!({"B1": {"Name": "Bea"}}));
        assert_eq!(store.document().len(), 2);
    }
}
