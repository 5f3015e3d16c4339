//! Fixed-bucket chained hash store with externally supplied hashes.
//!
//! The store never hashes anything itself: every call takes the caller's
//! hash of the key, so the same key must always be paired with the same
//! hash function for a given store. Bucket chains are doubly linked through
//! an owned node arena (`SlotMap`), which makes removal O(1) once the node is
//! found and keeps stale handles harmless.

pub mod hash;

use slotmap::{SlotMap, new_key_type};
use std::collections::TryReserveError;
use thiserror::Error;

new_key_type! {
    /// Handle for a node in a store's chain arena.
    struct NodeKey;
}

/// Largest node count the arena can address before its key space runs out.
const MAX_ENTRIES: usize = (u32::MAX - 1) as usize;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a store needs at least one bucket")]
    ZeroBuckets,
    #[error("failed to allocate store memory: {0}")]
    Alloc(#[from] TryReserveError),
    #[error("store node arena is full")]
    Full,
}

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<NodeKey>,
    next: Option<NodeKey>,
}

/// A hash table with a fixed number of buckets (no rehashing).
///
/// Within one bucket chain a key appears at most once: `put` on an existing
/// key replaces its value in place.
#[derive(Debug)]
pub struct Store<K, V> {
    buckets: Vec<Option<NodeKey>>,
    nodes: SlotMap<NodeKey, Node<K, V>>,
}

impl<K: Eq, V> Store<K, V> {
    /// Allocate `bucket_count` empty chains.
    pub fn new(bucket_count: usize) -> Result<Self, StoreError> {
        if bucket_count == 0 {
            return Err(StoreError::ZeroBuckets);
        }
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(bucket_count)?;
        buckets.resize(bucket_count, None);
        Ok(Self {
            buckets,
            nodes: SlotMap::with_key(),
        })
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    fn bucket_of(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    fn find(&self, key: &K, hash: u64) -> Option<NodeKey> {
        let mut cursor = self.buckets[self.bucket_of(hash)];
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            if node.key == *key {
                return Some(id);
            }
            cursor = node.next;
        }
        None
    }

    pub fn get(&self, key: &K, hash: u64) -> Option<&V> {
        self.find(key, hash).map(|id| &self.nodes[id].value)
    }

    pub fn get_mut(&mut self, key: &K, hash: u64) -> Option<&mut V> {
        let id = self.find(key, hash)?;
        Some(&mut self.nodes[id].value)
    }

    pub fn contains_key(&self, key: &K, hash: u64) -> bool {
        self.find(key, hash).is_some()
    }

    /// Insert or update. Returns the value that was replaced, if any.
    ///
    /// New entries are prepended to their bucket's chain. Fails only when
    /// the node arena cannot grow.
    pub fn put(&mut self, key: K, value: V, hash: u64) -> Result<Option<V>, StoreError> {
        if let Some(id) = self.find(&key, hash) {
            return Ok(Some(std::mem::replace(&mut self.nodes[id].value, value)));
        }
        if self.nodes.len() >= MAX_ENTRIES {
            return Err(StoreError::Full);
        }
        self.nodes.try_reserve(1)?;

        let bucket = self.bucket_of(hash);
        let head = self.buckets[bucket];
        let id = self.nodes.insert(Node {
            key,
            value,
            prev: None,
            next: head,
        });
        if let Some(old_head) = head {
            self.nodes[old_head].prev = Some(id);
        }
        self.buckets[bucket] = Some(id);
        Ok(None)
    }

    /// Unlink the entry for `key` and hand its value back. No-op if absent.
    pub fn remove(&mut self, key: &K, hash: u64) -> Option<V> {
        let id = self.find(key, hash)?;
        let node = self.nodes.remove(id)?;

        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => {
                let bucket = self.bucket_of(hash);
                self.buckets[bucket] = node.next;
            }
        }
        if let Some(next) = node.next {
            self.nodes[next].prev = node.prev;
        }
        Some(node.value)
    }

    /// A fresh cursor positioned before the first entry.
    pub fn cursor(&self) -> Cursor {
        Cursor::default()
    }

    /// Yield the next entry in bucket-then-chain order.
    ///
    /// The cursor records the following node before returning, so the entry
    /// just yielded may be removed before the next call. Removing any other
    /// entry mid-walk may cut the rest of its chain short.
    pub fn advance(&self, cursor: &mut Cursor) -> Option<(&K, &V)> {
        loop {
            if let Some(id) = cursor.next.take() {
                if let Some(node) = self.nodes.get(id) {
                    cursor.next = node.next;
                    return Some((&node.key, &node.value));
                }
            }
            if cursor.bucket >= self.buckets.len() {
                return None;
            }
            cursor.next = self.buckets[cursor.bucket];
            cursor.bucket += 1;
        }
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            store: self,
            cursor: Cursor::default(),
        }
    }

    /// Mutable access to every value, in arena order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.nodes.values_mut().map(|node| &mut node.value)
    }
}

/// Position of a walk through a [`Store`].
///
/// Holds no borrow of the store, so the store can be mutated between
/// [`Store::advance`] calls.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    /// Next bucket whose chain has not been entered yet.
    bucket: usize,
    next: Option<NodeKey>,
}

pub struct Iter<'a, K, V> {
    store: &'a Store<K, V>,
    cursor: Cursor,
}

impl<'a, K: Eq, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.store.advance(&mut self.cursor)
    }
}

impl<'a, K: Eq, V> IntoIterator for &'a Store<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
