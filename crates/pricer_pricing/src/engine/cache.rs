//! Result cache for the pricing engine.
//!
//! Entries are keyed by the contract itself together with the model. Contracts
//! are immutable and compare by the bit pattern of their fields, so an entry
//! can never go stale and field-identical contracts share it. There is no
//! eviction: the cache grows with the number of distinct requests.

use std::collections::HashMap;

use pricer_core::types::{MeasureSet, PricingModel};
use pricer_core::Contract;

/// Cache key: contract plus requested model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    contract: Contract,
    model: PricingModel,
}

impl CacheKey {
    /// Create a new cache key.
    pub fn new(contract: Contract, model: PricingModel) -> Self {
        Self { contract, model }
    }

    /// Model part of the key.
    #[inline]
    pub fn model(&self) -> PricingModel {
        self.model
    }
}

/// Cache statistics for monitoring and debugging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
}

impl CacheStats {
    /// Calculate the cache hit rate.
    ///
    /// Returns 0.0 if no lookups have occurred.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Map from `(contract, model)` to the complete measure set.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: HashMap<CacheKey, MeasureSet>,
    stats: CacheStats,
}

impl ResultCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks an entry up, recording a hit or a miss.
    pub fn get(&mut self, key: &CacheKey) -> Option<&MeasureSet> {
        match self.entries.get(key) {
            Some(measures) => {
                self.stats.hits += 1;
                Some(measures)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Stores a complete result.
    pub fn insert(&mut self, key: CacheKey, measures: MeasureSet) {
        self.entries.insert(key, measures);
    }

    /// Drops every entry produced by `model`.
    pub fn invalidate_model(&mut self, model: PricingModel) {
        self.entries.retain(|key, _| key.model() != model);
    }

    /// Drops all entries. Statistics are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hit and miss counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
