//! # TableKeep
//!
//! A lightweight relational-catalog layer over an ordered, transactional
//! key-value store.
//!
//! TableKeep maintains schema metadata (attribute names, attribute types,
//! primary-key membership) for named tables. Each table owns an isolated
//! subtree of the key space; every attribute is persisted as one
//! order-preserving composite key plus a one-byte primary-key flag, and a
//! table's full schema is reconstructed by scanning its subtree. Mutations
//! are committed in size-bounded transactional batches, so atomicity is
//! per batch rather than per operation.
//!
//! ## Quick Start
//!
//! ```
//! use tablekeep_core::catalog::Catalog;
//! use tablekeep_core::store::MemoryStore;
//! use tablekeep_core::types::{AttributeType, StatusCode};
//!
//! let catalog = Catalog::new(MemoryStore::new()).unwrap();
//!
//! let status = catalog
//!     .create_table(
//!         "employee",
//!         &["id", "name"],
//!         &[AttributeType::Int, AttributeType::String],
//!         &["id"],
//!     )
//!     .unwrap();
//! assert_eq!(status, StatusCode::Success);
//!
//! let tables = catalog.list_tables().unwrap();
//! assert!(tables["employee"].primary_key_names.contains("id"));
//! ```

pub mod catalog;
pub mod encoding;
pub mod error;
pub mod store;
pub mod types;

pub use error::{EncodingError, Error, Result, StoreError};
