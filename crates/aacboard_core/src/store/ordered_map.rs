//! Insertion-ordered map over string keys.
//!
//! # Responsibility
//! - Back both board levels with one container shape.
//! - Reject empty keys before they can reach persisted state.
//!
//! # Invariants
//! - `set` on an existing key overwrites in place; the key keeps its
//!   original position in enumeration order.
//! - Lookups never panic; absence is reported through `StoreError`.

use super::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};

/// Ordered mapping from a string key to a value of a declared type.
///
/// Boards hold a handful of categories with a handful of items each, so
/// entries are kept in a plain vector and looked up by linear scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> OrderedMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or overwrites the value stored under `key`.
    ///
    /// # Errors
    /// - Returns `StoreError::EmptyKey` when `key` is empty; the map is
    ///   left unchanged.
    pub fn set(&mut self, key: &str, value: V) -> StoreResult<()> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        match self.entries.iter_mut().find(|(k, _)| k.as_str() == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key.to_string(), value)),
        }
        Ok(())
    }

    /// Looks up the value stored under `key`.
    ///
    /// # Errors
    /// - Returns `StoreError::KeyNotFound` when `key` is absent.
    pub fn get(&self, key: &str) -> StoreResult<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
            .ok_or_else(|| StoreError::KeyNotFound(key.to_string()))
    }

    /// Mutable variant of [`OrderedMap::get`].
    pub fn get_mut(&mut self, key: &str) -> StoreResult<&mut V> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
            .ok_or_else(|| StoreError::KeyNotFound(key.to_string()))
    }

    /// Returns whether `key` is present. Never fails; an empty key is
    /// simply absent.
    pub fn has_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k.as_str() == key)
    }

    /// Returns all keys in first-insertion order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Iterates `(key, value)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
