//! The ordered, transactional key-value store the catalog is built on.
//!
//! The catalog layer only ever talks to the [`KvStore`] and
//! [`StoreTransaction`] traits, which capture the collaborator contract:
//! a hierarchical namespace primitive (create-or-open, open, list-children,
//! remove, keyed by path segments) and transactions supporting point
//! writes, range clears, and snapshot-consistent range scans.
//! [`MemoryStore`] is the in-tree reference implementation.

pub mod memory;

pub use memory::MemoryStore;

use crate::encoding::string::encode_string;
use crate::error::StoreError;

/// A half-open range `[begin, end)` of keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRange {
    pub begin: Vec<u8>,
    pub end: Vec<u8>,
}

impl KeyRange {
    /// The range of every key starting with `prefix`.
    ///
    /// The end bound is `prefix ++ 0xFF`, which is a strict upper bound
    /// here because every key under a subspace extends its prefix with an
    /// encoded string or a type tag, neither of which starts with 0xFF.
    pub fn prefix(prefix: Vec<u8>) -> Self {
        let mut end = prefix.clone();
        end.push(0xFF);
        Self { begin: prefix, end }
    }

    pub fn contains(&self, key: &[u8]) -> bool {
        self.begin.as_slice() <= key && key < self.end.as_slice()
    }
}

/// A region of the key space owned by one directory.
///
/// Directory prefixes nest byte-wise: a child's prefix extends its
/// parent's with the encoded child segment. A parent's range therefore
/// covers every descendant key, which is what lets a table be deleted
/// with a single range clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subspace {
    prefix: Vec<u8>,
}

impl Subspace {
    /// The subspace owned by a directory path, one encoded segment per
    /// path element.
    pub fn from_path(path: &[&str]) -> Self {
        let mut prefix = Vec::new();
        for segment in path {
            prefix.extend_from_slice(&encode_string(segment));
        }
        Self { prefix }
    }

    /// The child subspace for one more path segment.
    pub fn subspace(&self, segment: &str) -> Subspace {
        let mut prefix = self.prefix.clone();
        prefix.extend_from_slice(&encode_string(segment));
        Subspace { prefix }
    }

    /// Build a full key from a suffix local to this subspace.
    pub fn key(&self, suffix: &[u8]) -> Vec<u8> {
        let mut key = Vec::with_capacity(self.prefix.len() + suffix.len());
        key.extend_from_slice(&self.prefix);
        key.extend_from_slice(suffix);
        key
    }

    /// Strip this subspace's prefix from a full key, returning the local
    /// suffix, or `None` if the key is not inside this subspace.
    pub fn unpack<'a>(&self, key: &'a [u8]) -> Option<&'a [u8]> {
        key.strip_prefix(self.prefix.as_slice())
    }

    /// The contiguous key range covering everything in this subspace.
    pub fn range(&self) -> KeyRange {
        KeyRange::prefix(self.prefix.clone())
    }

    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }
}

/// One transaction against the store.
///
/// Writes and range clears are staged locally and applied atomically by
/// `commit`; a transaction dropped without committing has no effect.
/// `scan` reads a snapshot of committed state (read-your-writes across
/// staged operations is not part of the contract — the catalog never
/// needs it).
pub trait StoreTransaction {
    /// Stage a point write.
    fn set(&mut self, key: Vec<u8>, value: Vec<u8>);

    /// Stage a range clear.
    fn clear_range(&mut self, range: KeyRange);

    /// Snapshot-consistent scan of the committed state, sorted by key.
    fn scan(&self, range: &KeyRange) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StoreError>;

    /// Apply all staged operations atomically.
    fn commit(self) -> Result<(), StoreError>;
}

/// An ordered, transactional key-value store with a hierarchical
/// namespace.
///
/// Directory operations are keyed by path segments. Removing a directory
/// removes the namespace entry (recursively) but not the keys under its
/// prefix — namespace removal and key-range clearing are independent
/// operations that must both happen for a clean delete.
pub trait KvStore {
    type Txn: StoreTransaction;

    /// Begin a transaction.
    fn transaction(&self) -> Self::Txn;

    /// Create the directory (and any missing ancestors) if absent, then
    /// return its subspace. Idempotent.
    fn create_or_open(&self, path: &[&str]) -> Result<Subspace, StoreError>;

    /// The directory's subspace, or `None` if it was never created.
    fn open(&self, path: &[&str]) -> Result<Option<Subspace>, StoreError>;

    /// Names of the immediate children of a directory, sorted. A missing
    /// directory has no children.
    fn list(&self, path: &[&str]) -> Result<Vec<String>, StoreError>;

    /// Remove the directory entry and all descendant entries. Returns
    /// whether the directory existed.
    fn remove(&self, path: &[&str]) -> Result<bool, StoreError>;
}
