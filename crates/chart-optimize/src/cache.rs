// File: crates/chart-optimize/src/cache.rs
// Summary: TTL cache for downsampled series, keyed by series shape rather than content.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::trace;

use crate::options::SamplingMethod;
use crate::point::Point;

/// Cache key for one reduction.
///
/// The key carries the series type, input length, method and target but not
/// the data itself, so two same-shaped series alias the same slot. Callers
/// that need stronger isolation keep separate caches.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub series_kind: String,
    pub len: usize,
    pub method: SamplingMethod,
    pub target: usize,
}

struct CacheEntry {
    data: Vec<Point>,
    stamp: Instant,
}

/// In-memory store of recent reductions with read-time expiry.
#[derive(Default)]
pub struct SampleCache {
    entries: HashMap<CacheKey, CacheEntry>,
    hits: u64,
    misses: u64,
}

impl SampleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a reduction if one is stored and younger than `ttl`.
    /// Stale entries are dropped on the spot.
    pub fn get(&mut self, key: &CacheKey, ttl: Duration) -> Option<Vec<Point>> {
        if let Some(entry) = self.entries.get(key) {
            if entry.stamp.elapsed() < ttl {
                self.hits += 1;
                return Some(entry.data.clone());
            }
        } else {
            self.misses += 1;
            return None;
        }

        trace!("cache entry expired for {:?}", key);
        self.entries.remove(key);
        self.misses += 1;
        None
    }

    pub fn put(&mut self, key: CacheKey, data: Vec<Point>) {
        trace!("cache store {:?} ({} points)", key, data.len());
        self.entries.insert(key, CacheEntry { data, stamp: Instant::now() });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Lookups answered from the store since creation.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that missed or hit an expired entry.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
