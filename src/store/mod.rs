//! Persistence for company partitions.
//!
//! All companies share one document: a JSON object whose top-level keys are
//! company names and whose values map employee ids to employee records. The
//! [`PartitionStore`] trait hides how that document is kept so the company
//! layer only ever deals with its own partition.
//!
//! # Known risks
//!
//! There is no locking. Two processes writing the same file lose each
//! other's changes (last writer wins on the whole document). A data file
//! that is not a JSON object is replaced wholesale on the next save, taking
//! every other company's partition with it. Within a partition, records the
//! company layer cannot load are not written back: an unknown `Type`, a
//! missing or negative field, or an amount outside the range of `Decimal`
//! (such as `1e30`) disappears on the next add or remove.

mod json_file;
mod memory;

pub use json_file::{DEFAULT_DATA_FILE, JsonFileStore};
pub use memory::MemoryStore;

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::RegistryResult;

/// One company's slice of the shared document: employee id to raw record.
pub type Partition = Map<String, Value>;

/// Reads and writes single company partitions of a shared document.
pub trait PartitionStore {
    /// Returns the stored partition for `company`, empty if there is none.
    fn load_partition(&self, company: &str) -> RegistryResult<Partition>;

    /// Replaces the partition for `company`, leaving other partitions intact.
    fn save_partition(&mut self, company: &str, partition: Partition) -> RegistryResult<()>;
}

/// Extracts a company's partition from a parsed document.
///
/// A partition stored as anything other than a JSON object is treated as
/// empty.
fn partition_of(document: &Map<String, Value>, company: &str) -> Partition {
    match document.get(company) {
        Some(Value::Object(partition)) => partition.clone(),
        Some(_) => {
            warn!(company = %company, "Company partition is not a JSON object; treating it as empty");
            Partition::new()
        }
        None => Partition::new(),
    }
}
