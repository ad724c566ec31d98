//! Batched persistence of attribute records.
//!
//! Schema mutations are committed in size-bounded transactional batches.
//! Atomicity is per batch, not per attribute set: if a batch fails to
//! commit, the batches before it stay durable and the error propagates.
//! A caller observing a partial failure must treat the table as being in
//! an indeterminate partial-schema state; re-invoking with the remaining
//! specs is safe because record keys are content-addressed by
//! (attribute name, type).

use tracing::debug;

use crate::encoding::attribute::encode_flag;
use crate::error::Error;
use crate::store::{KvStore, StoreTransaction};
use crate::types::AttributeSpec;

use super::namespace::TableHandle;

/// Default number of records per transaction. Kept small to stay well
/// under the per-transaction size/operation limits stores impose.
pub const DEFAULT_BATCH_SIZE: usize = 3;

/// Persist one record per attribute under the table's schema subtree,
/// committing in batches of at most `batch_size` records.
///
/// Batches commit strictly in sequence: batch *k+1* is not started until
/// batch *k* has committed.
pub fn write_attributes<S: KvStore>(
    store: &S,
    handle: &TableHandle,
    specs: &[AttributeSpec],
    batch_size: usize,
) -> Result<(), Error> {
    let batch_size = batch_size.max(1);
    for (batch, chunk) in specs.chunks(batch_size).enumerate() {
        let mut txn = store.transaction();
        for spec in chunk {
            let key = handle.attribute_key(&spec.name, spec.attr_type);
            txn.set(key, encode_flag(spec.primary_key).to_vec());
        }
        txn.commit().map_err(Error::from)?;
        debug!(
            table = handle.name(),
            batch,
            records = chunk.len(),
            "committed schema batch"
        );
    }
    Ok(())
}
