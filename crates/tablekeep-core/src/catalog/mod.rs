//! The catalog: namespace resolution, batched schema writes, schema
//! reconstruction, and the public service surface.

pub mod namespace;
pub mod reader;
pub mod service;
pub mod writer;

pub use namespace::TableHandle;
pub use service::Catalog;
pub use writer::DEFAULT_BATCH_SIZE;
