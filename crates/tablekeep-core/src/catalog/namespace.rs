//! Mapping table names to isolated regions of the key space.
//!
//! Layout: root directory `"Tables"` → one child per table → children
//! `"meta"` (schema records) and `"raw"` (reserved for row storage).
//! Handles are explicit values threaded through each call; nothing here
//! keeps mutable directory state between calls.

use crate::encoding::attribute::encode_attribute_key;
use crate::encoding::string::encode_string;
use crate::error::StoreError;
use crate::store::{KeyRange, KvStore, Subspace};
use crate::types::AttributeType;

/// Root namespace segment holding one child directory per table.
pub const ROOT_DIRECTORY: &str = "Tables";

/// Per-table segment holding the schema records.
pub const SCHEMA_DIRECTORY: &str = "meta";

/// Per-table segment reserved for row storage (out of catalog scope).
pub const DATA_DIRECTORY: &str = "raw";

/// A resolved table subtree.
#[derive(Debug, Clone)]
pub struct TableHandle {
    name: String,
    table: Subspace,
    schema: Subspace,
    data: Subspace,
}

impl TableHandle {
    fn new(name: &str, table: Subspace) -> Self {
        let schema = table.subspace(SCHEMA_DIRECTORY);
        let data = table.subspace(DATA_DIRECTORY);
        Self {
            name: name.to_string(),
            table,
            schema,
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The contiguous range covering every key of this table, schema and
    /// data regions included.
    pub fn table_range(&self) -> KeyRange {
        self.table.range()
    }

    /// The contiguous range covering all schema records of this table.
    pub fn schema_range(&self) -> KeyRange {
        self.schema.range()
    }

    /// The range reserved for row storage.
    pub fn data_range(&self) -> KeyRange {
        self.data.range()
    }

    /// The range covering every schema record for one attribute name,
    /// regardless of type tag.
    pub fn attribute_range(&self, attribute_name: &str) -> KeyRange {
        KeyRange::prefix(self.schema.key(&encode_string(attribute_name)))
    }

    /// The full key of one attribute record.
    pub fn attribute_key(&self, attribute_name: &str, attr_type: AttributeType) -> Vec<u8> {
        self.schema.key(&encode_attribute_key(attribute_name, attr_type))
    }

    /// Strip the schema-subspace prefix from a scanned key.
    pub fn schema_suffix<'a>(&self, key: &'a [u8]) -> Option<&'a [u8]> {
        self.schema.unpack(key)
    }
}

/// Resolve a table's subtree, creating it (root included) if absent.
///
/// Idempotent: never fails solely because the table pre-exists. Existence
/// conflicts are a service-level policy, not a namespace concern.
pub fn create_or_open_table<S: KvStore>(store: &S, name: &str) -> Result<TableHandle, StoreError> {
    let table = store.create_or_open(&[ROOT_DIRECTORY, name])?;
    store.create_or_open(&[ROOT_DIRECTORY, name, SCHEMA_DIRECTORY])?;
    store.create_or_open(&[ROOT_DIRECTORY, name, DATA_DIRECTORY])?;
    Ok(TableHandle::new(name, table))
}

/// Resolve an existing table's subtree.
pub fn open_table<S: KvStore>(store: &S, name: &str) -> Result<Option<TableHandle>, StoreError> {
    Ok(store
        .open(&[ROOT_DIRECTORY, name])?
        .map(|table| TableHandle::new(name, table)))
}

/// Names of all tables in the root namespace, sorted.
pub fn list_table_names<S: KvStore>(store: &S) -> Result<Vec<String>, StoreError> {
    store.list(&[ROOT_DIRECTORY])
}

/// Remove a table's namespace entries. The caller is responsible for
/// clearing the keys under its range; removal alone leaves them behind.
pub fn remove_table<S: KvStore>(store: &S, name: &str) -> Result<bool, StoreError> {
    store.remove(&[ROOT_DIRECTORY, name])
}

/// The range covering every table's keys.
pub fn root_range() -> KeyRange {
    Subspace::from_path(&[ROOT_DIRECTORY]).range()
}
