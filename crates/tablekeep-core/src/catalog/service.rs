//! The public catalog surface.
//!
//! Every operation validates fail-fast, resolves handles through the
//! namespace module, and maps expected outcomes to [`StatusCode`]s.
//! Store and decode failures are never converted to status codes; they
//! propagate so callers can retry.

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::Error;
use crate::store::{KvStore, StoreTransaction};
use crate::types::{AttributeSpec, AttributeType, StatusCode, TableMetadata};

use super::namespace::{self, TableHandle};
use super::reader;
use super::writer::{self, DEFAULT_BATCH_SIZE};

/// The catalog service over a key-value store.
///
/// Holds no table state of its own: the store is the sole source of
/// truth, and every read re-derives metadata from it.
pub struct Catalog<S: KvStore> {
    store: S,
    batch_size: usize,
}

impl<S: KvStore> Catalog<S> {
    /// Open the catalog with the default write batch size.
    pub fn new(store: S) -> Result<Self, Error> {
        Self::with_batch_size(store, DEFAULT_BATCH_SIZE)
    }

    /// Open the catalog with an explicit write batch size (records per
    /// transaction).
    pub fn with_batch_size(store: S, batch_size: usize) -> Result<Self, Error> {
        // Make sure the root namespace exists so listings work on a
        // fresh store.
        store.create_or_open(&[namespace::ROOT_DIRECTORY])?;
        Ok(Self {
            store,
            batch_size: batch_size.max(1),
        })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Create a table with the given attributes and primary keys.
    ///
    /// Creating a name that already exists re-declares its attributes;
    /// records are content-addressed, so this is idempotent rather than
    /// an error.
    pub fn create_table(
        &self,
        name: &str,
        attribute_names: &[&str],
        attribute_types: &[AttributeType],
        primary_key_names: &[&str],
    ) -> Result<StatusCode, Error> {
        if name.is_empty()
            || attribute_names.is_empty()
            || attribute_names.len() != attribute_types.len()
        {
            return Ok(StatusCode::TableCreationAttributeInvalid);
        }
        for (i, attr) in attribute_names.iter().enumerate() {
            if attr.is_empty() || attribute_names[..i].contains(attr) {
                return Ok(StatusCode::TableCreationAttributeInvalid);
            }
        }
        if primary_key_names.is_empty() || primary_key_names.iter().any(|pk| pk.is_empty()) {
            return Ok(StatusCode::TableCreationNoPrimaryKey);
        }
        if primary_key_names
            .iter()
            .any(|pk| !attribute_names.contains(pk))
        {
            return Ok(StatusCode::TableCreationPrimaryKeyNotFound);
        }

        let handle = namespace::create_or_open_table(&self.store, name)?;
        let specs: Vec<AttributeSpec> = attribute_names
            .iter()
            .zip(attribute_types.iter())
            .map(|(&attr, &attr_type)| {
                AttributeSpec::new(attr, attr_type, primary_key_names.contains(&attr))
            })
            .collect();
        writer::write_attributes(&self.store, &handle, &specs, self.batch_size)?;
        Ok(StatusCode::Success)
    }

    /// Delete a table: clear its entire key range in one transaction,
    /// then remove the namespace entry.
    pub fn delete_table(&self, name: &str) -> Result<StatusCode, Error> {
        let Some(handle) = namespace::open_table(&self.store, name)? else {
            return Ok(StatusCode::TableNotFound);
        };

        let mut txn = self.store.transaction();
        txn.clear_range(handle.table_range());
        txn.commit().map_err(Error::from)?;

        namespace::remove_table(&self.store, name)?;
        Ok(StatusCode::Success)
    }

    /// All visible tables with their reconstructed metadata.
    ///
    /// A table is reported only when it has a non-empty, well-formed
    /// attribute set with at least one primary key; anything else (for
    /// example a table stranded mid-batch-failure) is skipped with a
    /// warning.
    pub fn list_tables(&self) -> Result<BTreeMap<String, TableMetadata>, Error> {
        let mut tables = BTreeMap::new();
        for name in namespace::list_table_names(&self.store)? {
            let Some(handle) = namespace::open_table(&self.store, &name)? else {
                continue;
            };
            match self.visible_metadata(&handle)? {
                Some(metadata) => {
                    tables.insert(name, metadata);
                }
                None => {
                    warn!(table = %name, "hiding table with empty or primary-key-less schema");
                }
            }
        }
        Ok(tables)
    }

    /// Metadata for one table, under the same visibility policy as
    /// [`Self::list_tables`]. `None` for absent or hidden tables.
    pub fn describe_table(&self, name: &str) -> Result<Option<TableMetadata>, Error> {
        let Some(handle) = namespace::open_table(&self.store, name)? else {
            return Ok(None);
        };
        self.visible_metadata(&handle)
    }

    /// Add one attribute to an existing table. Newly added attributes
    /// can never be primary keys.
    pub fn add_attribute(
        &self,
        name: &str,
        attribute_name: &str,
        attr_type: AttributeType,
    ) -> Result<StatusCode, Error> {
        let Some(handle) = namespace::open_table(&self.store, name)? else {
            return Ok(StatusCode::TableNotFound);
        };
        if attribute_name.is_empty() {
            return Ok(StatusCode::TableCreationAttributeInvalid);
        }
        let current = reader::read_schema(&self.store, &handle)?;
        if current.contains_attribute(attribute_name) {
            return Ok(StatusCode::AttributeAlreadyExists);
        }

        let spec = AttributeSpec::new(attribute_name, attr_type, false);
        writer::write_attributes(&self.store, &handle, &[spec], self.batch_size)?;
        Ok(StatusCode::Success)
    }

    /// Drop one attribute from an existing table.
    ///
    /// Clears every record matching the attribute name — there should be
    /// exactly one, but the whole per-name range is cleared defensively.
    pub fn drop_attribute(&self, name: &str, attribute_name: &str) -> Result<StatusCode, Error> {
        let Some(handle) = namespace::open_table(&self.store, name)? else {
            return Ok(StatusCode::TableNotFound);
        };
        let current = reader::read_schema(&self.store, &handle)?;
        if !current.contains_attribute(attribute_name) {
            return Ok(StatusCode::AttributeNotFound);
        }

        let mut txn = self.store.transaction();
        txn.clear_range(handle.attribute_range(attribute_name));
        txn.commit().map_err(Error::from)?;
        Ok(StatusCode::Success)
    }

    /// Drop every table: remove each namespace entry, then clear the
    /// entire root key range in one transaction.
    pub fn drop_all_tables(&self) -> Result<StatusCode, Error> {
        for name in namespace::list_table_names(&self.store)? {
            namespace::remove_table(&self.store, &name)?;
        }

        let mut txn = self.store.transaction();
        txn.clear_range(namespace::root_range());
        txn.commit().map_err(Error::from)?;
        Ok(StatusCode::Success)
    }

    fn visible_metadata(&self, handle: &TableHandle) -> Result<Option<TableMetadata>, Error> {
        let metadata = reader::read_schema(&self.store, handle)?;
        if metadata.is_empty() || !metadata.has_primary_key() {
            return Ok(None);
        }
        Ok(Some(metadata))
    }
}
