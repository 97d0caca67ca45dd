//! HashTable implementation
//!
//! Separate chaining over a fixed bucket array. Keys are stored in canonical
//! (uppercase) form and hashed with a polynomial accumulator:
//!
//! ```text
//! hash = (hash * 31 + byte) mod capacity
//! ```
//!
//! The table never rehashes. Chains grow without bound, so lookups degrade
//! toward O(n) once the load factor climbs well past 1.

use std::fmt;

use crate::config::{Config, DEFAULT_HASH_TABLE_CAPACITY};
use crate::key;

/// A single chained entry (key is already canonical)
#[derive(Debug, Clone)]
struct Entry<V> {
    key: String,
    value: V,
}

/// Case-insensitive chained hash map from string keys to owned values
#[derive(Clone)]
pub struct HashTable<V> {
    /// One chain per bucket. New entries are pushed at the back, and the
    /// logical chain order is newest-first, so chains are read in reverse.
    buckets: Vec<Vec<Entry<V>>>,

    /// Number of distinct canonical keys
    count: usize,
}

impl<V> HashTable<V> {
    /// Create a table with a fixed number of buckets (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Vec::new);

        Self { buckets, count: 0 }
    }

    /// Table with `config.hash_table_capacity` buckets
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.hash_table_capacity)
    }

    /// Insert or overwrite the value stored under `key`
    ///
    /// Returns the previous value when the canonical key was already present;
    /// the entry count only changes for new keys.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        let canonical = key::canonical(key);
        let index = self.bucket_index(&canonical);
        let chain = &mut self.buckets[index];

        if let Some(entry) = chain.iter_mut().find(|e| e.key == canonical) {
            return Some(std::mem::replace(&mut entry.value, value));
        }

        chain.push(Entry {
            key: canonical,
            value,
        });
        self.count += 1;
        None
    }

    /// Look up a value by key (case-insensitive)
    pub fn search(&self, key: &str) -> Option<&V> {
        let canonical = key::canonical(key);
        self.buckets[self.bucket_index(&canonical)]
            .iter()
            .find(|e| e.key == canonical)
            .map(|e| &e.value)
    }

    /// Mutable lookup by key (case-insensitive)
    pub fn search_mut(&mut self, key: &str) -> Option<&mut V> {
        let canonical = key::canonical(key);
        let index = self.bucket_index(&canonical);
        self.buckets[index]
            .iter_mut()
            .find(|e| e.key == canonical)
            .map(|e| &mut e.value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Remove an entry, returning its value
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let canonical = key::canonical(key);
        let index = self.bucket_index(&canonical);
        let chain = &mut self.buckets[index];

        let position = chain.iter().position(|e| e.key == canonical)?;
        self.count -= 1;
        Some(chain.remove(position).value)
    }

    /// All canonical keys, bucket by bucket, each chain newest-first
    pub fn get_all_keys(&self) -> Vec<&str> {
        self.keys().collect()
    }

    /// Iterator over canonical keys in bucket/chain order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Iterator over `(canonical key, value)` in bucket/chain order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().rev())
            .map(|e| (e.key.as_str(), &e.value))
    }

    /// Number of stored keys
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of buckets (fixed at construction)
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Entries per bucket
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.buckets.len() as f64
    }

    /// Drop every entry, keeping the bucket array
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.count = 0;
    }

    fn bucket_index(&self, canonical: &str) -> usize {
        Self::hash(canonical, self.buckets.len())
    }

    /// Polynomial hash of an already canonical key
    fn hash(canonical: &str, capacity: usize) -> usize {
        let capacity = capacity as u64;
        canonical.bytes().fold(0u64, |hash, byte| {
            hash.wrapping_mul(31).wrapping_add(u64::from(byte)) % capacity
        }) as usize
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_TABLE_CAPACITY)
    }
}

impl<V: fmt::Debug> fmt::Debug for HashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
