//! Schema reconstruction by range scan.
//!
//! A table's metadata is never stored as a blob; it is re-derived on
//! every read from the per-attribute records, so there is no cached copy
//! to go stale.

use tracing::warn;

use crate::encoding::attribute::{decode_attribute_key, decode_flag};
use crate::error::Error;
use crate::store::{KvStore, StoreTransaction};
use crate::types::TableMetadata;

use super::namespace::TableHandle;

/// Scan the table's schema range and rebuild its [`TableMetadata`].
///
/// The whole scan happens inside one transaction for a consistent
/// snapshot. Records that fail to decode are skipped with a warning:
/// one malformed entry must not hide every other attribute — or, at the
/// catalog level, every other table.
pub fn read_schema<S: KvStore>(store: &S, handle: &TableHandle) -> Result<TableMetadata, Error> {
    let txn = store.transaction();
    let pairs = txn.scan(&handle.schema_range()).map_err(Error::from)?;

    let mut metadata = TableMetadata::default();
    for (key, value) in pairs {
        let Some(suffix) = handle.schema_suffix(&key) else {
            warn!(table = handle.name(), "scanned key outside schema subspace, skipping");
            continue;
        };
        let (name, attr_type) = match decode_attribute_key(suffix) {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!(table = handle.name(), error = %e, "skipping corrupt schema key");
                continue;
            }
        };
        let primary_key = match decode_flag(&value) {
            Ok(flag) => flag,
            Err(e) => {
                warn!(
                    table = handle.name(),
                    attribute = %name,
                    error = %e,
                    "skipping schema record with corrupt flag"
                );
                continue;
            }
        };

        metadata.attribute_names.push(name.clone());
        metadata.attribute_types.push(attr_type);
        if primary_key {
            metadata.primary_key_names.insert(name);
        }
    }
    Ok(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::namespace;
    use crate::catalog::writer::{self, DEFAULT_BATCH_SIZE};
    use crate::store::{KvStore, MemoryStore, StoreTransaction};
    use crate::types::{AttributeSpec, AttributeType};

    fn setup() -> (MemoryStore, TableHandle) {
        let store = MemoryStore::new();
        let handle = namespace::create_or_open_table(&store, "employee").unwrap();
        (store, handle)
    }

    fn write(store: &MemoryStore, handle: &TableHandle, specs: &[AttributeSpec]) {
        writer::write_attributes(store, handle, specs, DEFAULT_BATCH_SIZE).unwrap();
    }

    #[test]
    fn test_reconstructs_names_types_and_keys() {
        let (store, handle) = setup();
        write(
            &store,
            &handle,
            &[
                AttributeSpec::new("id", AttributeType::Int, true),
                AttributeSpec::new("name", AttributeType::String, false),
                AttributeSpec::new("active", AttributeType::Boolean, false),
            ],
        );

        let meta = read_schema(&store, &handle).unwrap();
        assert_eq!(meta.attribute_count(), 3);
        // Scan order is key order, not declaration order.
        assert_eq!(meta.attribute_names, vec!["active", "id", "name"]);
        assert_eq!(meta.type_of("id"), Some(AttributeType::Int));
        assert_eq!(meta.type_of("active"), Some(AttributeType::Boolean));
        assert_eq!(
            meta.primary_key_names.iter().collect::<Vec<_>>(),
            vec!["id"]
        );
    }

    #[test]
    fn test_empty_table_yields_empty_metadata() {
        let (store, handle) = setup();
        let meta = read_schema(&store, &handle).unwrap();
        assert!(meta.is_empty());
    }

    #[test]
    fn test_corrupt_key_skipped() {
        let (store, handle) = setup();
        write(
            &store,
            &handle,
            &[AttributeSpec::new("id", AttributeType::Int, true)],
        );

        // Plant a record with an unknown type tag inside the schema range.
        let mut bogus = handle.attribute_key("zz", AttributeType::Int);
        *bogus.last_mut().unwrap() = 0x77;
        let mut txn = store.transaction();
        txn.set(bogus, vec![0x00]);
        txn.commit().unwrap();

        let meta = read_schema(&store, &handle).unwrap();
        assert_eq!(meta.attribute_names, vec!["id"]);
    }

    #[test]
    fn test_corrupt_flag_skipped() {
        let (store, handle) = setup();
        write(
            &store,
            &handle,
            &[AttributeSpec::new("id", AttributeType::Int, true)],
        );

        let mut txn = store.transaction();
        txn.set(
            handle.attribute_key("broken", AttributeType::String),
            vec![0x09, 0x09],
        );
        txn.commit().unwrap();

        let meta = read_schema(&store, &handle).unwrap();
        assert_eq!(meta.attribute_names, vec!["id"]);
        assert!(meta.has_primary_key());
    }

    #[test]
    fn test_scan_stays_inside_table() {
        let (store, handle) = setup();
        write(
            &store,
            &handle,
            &[AttributeSpec::new("id", AttributeType::Int, true)],
        );

        // A sibling table's records must not bleed into this scan.
        let other = namespace::create_or_open_table(&store, "employees").unwrap();
        write(
            &store,
            &other,
            &[AttributeSpec::new("other", AttributeType::Double, true)],
        );

        let meta = read_schema(&store, &handle).unwrap();
        assert_eq!(meta.attribute_names, vec!["id"]);
    }
}
