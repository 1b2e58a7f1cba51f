//! Bounded position → score memo.
//!
//! Keys are canonical FEN strings. When the cache grows past its capacity
//! the oldest half (by first insertion) is kept and everything newer is
//! dropped. This is truncation, not LRU: reads do not refresh entries.

use std::collections::HashMap;

/// Entries held before an eviction pass runs.
pub const DEFAULT_CAPACITY: usize = 10_000;

#[derive(Debug, Clone)]
pub struct EvalCache {
    entries: HashMap<String, i32>,
    /// Keys in first-insertion order
    order: Vec<String>,
    capacity: usize,
}

impl Default for EvalCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl EvalCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            capacity,
        }
    }

    pub fn get(&self, key: &str) -> Option<i32> {
        self.entries.get(key).copied()
    }

    /// Stores `score` under `key`, evicting first if the cache is over
    /// capacity. Overwriting an existing key keeps its original position.
    pub fn insert(&mut self, key: String, score: i32) {
        self.evict();
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = score;
            return;
        }
        self.order.push(key.clone());
        self.entries.insert(key, score);
    }

    /// Runs an eviction pass if the cache holds more than its capacity.
    /// Returns the number of entries removed.
    pub fn evict(&mut self) -> usize {
        if self.entries.len() <= self.capacity {
            return 0;
        }
        let keep = self.capacity / 2;
        let before = self.entries.len();
        for key in self.order.drain(keep..) {
            self.entries.remove(&key);
        }
        let removed = before - self.entries.len();
        tracing::debug!(removed, kept = self.entries.len(), "evaluation cache evicted");
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
