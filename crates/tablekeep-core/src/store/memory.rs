//! In-memory reference implementation of the store contract.
//!
//! Backed by an ordered `BTreeMap` key space plus a directory registry,
//! both behind `parking_lot` locks. Transactions buffer staged operations
//! and apply them under a single write lock on commit, so each commit is
//! atomic and transactions dropped without committing leave no trace.
//! A configurable per-transaction operation limit stands in for the
//! size/operation limits real stores impose, so commit-failure paths are
//! exercisable in tests.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::StoreError;

use super::{KeyRange, KvStore, StoreTransaction, Subspace};

/// Default per-transaction operation limit. Generously above the
/// catalog's batch sizes; tests lower it to force commit failures.
pub const DEFAULT_OP_LIMIT: usize = 1024;

struct StoreInner {
    data: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
    directories: RwLock<BTreeSet<Vec<String>>>,
    op_limit: usize,
}

/// An ordered, transactional, in-memory key-value store.
///
/// Cheaply clonable (`Arc`-based) and `Send + Sync`; clones share the
/// same key space.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<StoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_op_limit(DEFAULT_OP_LIMIT)
    }

    /// A store that rejects any transaction staging more than `op_limit`
    /// operations.
    pub fn with_op_limit(op_limit: usize) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                data: RwLock::new(BTreeMap::new()),
                directories: RwLock::new(BTreeSet::new()),
                op_limit,
            }),
        }
    }

    /// Total number of keys currently stored, across all directories.
    pub fn key_count(&self) -> usize {
        self.inner.data.read().len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

enum StagedOp {
    Set { key: Vec<u8>, value: Vec<u8> },
    ClearRange(KeyRange),
}

/// A buffered transaction against a [`MemoryStore`].
pub struct MemoryTransaction {
    inner: Arc<StoreInner>,
    staged: Vec<StagedOp>,
}

impl StoreTransaction for MemoryTransaction {
    fn set(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.staged.push(StagedOp::Set { key, value });
    }

    fn clear_range(&mut self, range: KeyRange) {
        self.staged.push(StagedOp::ClearRange(range));
    }

    fn scan(&self, range: &KeyRange) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StoreError> {
        let data = self.inner.data.read();
        let bounds = (
            Bound::Included(range.begin.as_slice()),
            Bound::Excluded(range.end.as_slice()),
        );
        Ok(data
            .range::<[u8], _>(bounds)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }

    fn commit(self) -> Result<(), StoreError> {
        if self.staged.len() > self.inner.op_limit {
            return Err(StoreError::TransactionTooLarge {
                limit: self.inner.op_limit,
                actual: self.staged.len(),
            });
        }
        let mut data = self.inner.data.write();
        for op in self.staged {
            match op {
                StagedOp::Set { key, value } => {
                    data.insert(key, value);
                }
                StagedOp::ClearRange(range) => {
                    let doomed: Vec<Vec<u8>> = data
                        .range::<[u8], _>((
                            Bound::Included(range.begin.as_slice()),
                            Bound::Excluded(range.end.as_slice()),
                        ))
                        .map(|(k, _)| k.clone())
                        .collect();
                    for key in doomed {
                        data.remove(&key);
                    }
                }
            }
        }
        Ok(())
    }
}

impl KvStore for MemoryStore {
    type Txn = MemoryTransaction;

    fn transaction(&self) -> MemoryTransaction {
        MemoryTransaction {
            inner: Arc::clone(&self.inner),
            staged: Vec::new(),
        }
    }

    fn create_or_open(&self, path: &[&str]) -> Result<Subspace, StoreError> {
        let mut dirs = self.inner.directories.write();
        for depth in 1..=path.len() {
            let ancestor: Vec<String> = path[..depth].iter().map(|s| s.to_string()).collect();
            dirs.insert(ancestor);
        }
        Ok(Subspace::from_path(path))
    }

    fn open(&self, path: &[&str]) -> Result<Option<Subspace>, StoreError> {
        let wanted: Vec<String> = path.iter().map(|s| s.to_string()).collect();
        if self.inner.directories.read().contains(&wanted) {
            Ok(Some(Subspace::from_path(path)))
        } else {
            Ok(None)
        }
    }

    fn list(&self, path: &[&str]) -> Result<Vec<String>, StoreError> {
        let dirs = self.inner.directories.read();
        let names = dirs
            .iter()
            .filter(|entry| {
                entry.len() == path.len() + 1
                    && entry.iter().zip(path.iter()).all(|(a, b)| a == b)
            })
            .map(|entry| entry[path.len()].clone())
            .collect();
        Ok(names)
    }

    fn remove(&self, path: &[&str]) -> Result<bool, StoreError> {
        let mut dirs = self.inner.directories.write();
        let wanted: Vec<String> = path.iter().map(|s| s.to_string()).collect();
        if !dirs.contains(&wanted) {
            return Ok(false);
        }
        dirs.retain(|entry| {
            !(entry.len() >= wanted.len() && entry.iter().zip(wanted.iter()).all(|(a, b)| a == b))
        });
        Ok(true)
    }
}
