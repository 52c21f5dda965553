//! Byte-budgeted LRU cache

use std::collections::HashMap;
use std::fmt;

use ahash::RandomState;
use tracing::{debug, trace};

use crate::config::CacheConfig;
use crate::lru::LruList;
use crate::stats::CacheStats;
use crate::value::Value;

/// Callback run with the key and value of every evicted entry
pub type OnEvict<V> = Box<dyn FnMut(String, V) + Send>;

/// Resident (key, value) pair
struct Entry<V> {
    key: String,
    value: V,
}

impl<V: Value> Entry<V> {
    /// Bytes this entry charges against the budget
    fn size(&self) -> usize {
        self.key.len() + self.value.len()
    }
}

/// LRU cache bounded by the total declared size of its entries.
///
/// Every entry costs `key.len() + value.len()` bytes. After each
/// [`add`](Cache::add) the least recently used entries are evicted until the
/// total fits in `max_bytes` again. A `max_bytes` of `0` never evicts.
///
/// The cache is not synchronized; wrap it in a lock to share it.
///
/// # Examples
/// ```
/// use bytelru::Cache;
///
/// let mut cache = Cache::new(16, None);
/// cache.add("key1", String::from("1234"));
/// cache.add("key2", String::from("5678"));
///
/// assert_eq!(cache.get("key1").map(String::as_str), Some("1234"));
/// assert_eq!(cache.bytes(), 16);
/// ```
pub struct Cache<V> {
    map: HashMap<String, usize, RandomState>,
    order: LruList<Entry<V>>,
    max_bytes: usize,
    current_bytes: usize,
    on_evict: Option<OnEvict<V>>,
    stats: CacheStats,
}

impl<V: Value> Cache<V> {
    /// Create an empty cache holding at most `max_bytes` (0 = unbounded)
    pub fn new(max_bytes: usize, on_evict: Option<OnEvict<V>>) -> Self {
        Self {
            map: HashMap::with_hasher(RandomState::new()),
            order: LruList::new(),
            max_bytes,
            current_bytes: 0,
            on_evict,
            stats: CacheStats::new(),
        }
    }

    /// Create an empty cache from a [`CacheConfig`]
    pub fn with_config(config: CacheConfig, on_evict: Option<OnEvict<V>>) -> Self {
        Self::new(config.max_bytes, on_evict)
    }

    /// Install or replace the eviction callback
    pub fn set_on_evict(&mut self, on_evict: Option<OnEvict<V>>) {
        self.on_evict = on_evict;
    }

    /// Insert or replace a value and mark it most recently used.
    ///
    /// Evicts from the LRU end afterwards while over budget. An entry larger
    /// than the whole budget ends up evicting itself as well.
    pub fn add(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();

        if let Some(&idx) = self.map.get(&key) {
            self.order.move_to_front(idx);
            if let Some(entry) = self.order.get_mut(idx) {
                let old_len = entry.value.len();
                let new_len = value.len();
                entry.value = value;
                self.current_bytes = self.current_bytes - old_len + new_len;
            }
            self.stats.record_update();
        } else {
            self.current_bytes += key.len() + value.len();
            let idx = self.order.push_front(Entry {
                key: key.clone(),
                value,
            });
            self.map.insert(key, idx);
            self.stats.record_insert();
        }

        let mut evicted = 0;
        while self.max_bytes != 0 && self.current_bytes > self.max_bytes {
            self.remove_oldest();
            evicted += 1;
        }

        if evicted > 0 {
            debug!(
                evicted,
                bytes = self.current_bytes,
                max_bytes = self.max_bytes,
                "add exceeded byte budget"
            );
        }
    }

    /// Look up a value and mark it most recently used
    pub fn get(&mut self, key: &str) -> Option<&V> {
        match self.map.get(key) {
            Some(&idx) => {
                self.order.move_to_front(idx);
                self.stats.record_hit();
                self.order.get(idx).map(|entry| &entry.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Look up a value without touching recency or stats
    pub fn peek(&self, key: &str) -> Option<&V> {
        let idx = *self.map.get(key)?;
        self.order.get(idx).map(|entry| &entry.value)
    }

    /// Check whether a key is resident without touching recency
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Evict the least recently used entry, running the eviction callback.
    ///
    /// Does nothing on an empty cache.
    pub fn remove_oldest(&mut self) {
        let Some(entry) = self.order.pop_back() else {
            return;
        };

        self.map.remove(&entry.key);
        let size = entry.size();
        self.current_bytes -= size;
        self.stats.record_eviction();
        trace!(
            key = %entry.key,
            freed = size,
            bytes = self.current_bytes,
            "evicted entry"
        );

        if let Some(on_evict) = self.on_evict.as_mut() {
            on_evict(entry.key, entry.value);
        }
    }

    /// Remove a key explicitly. The eviction callback is not run.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let idx = self.map.remove(key)?;
        let entry = self.order.remove(idx)?;
        self.current_bytes -= entry.size();
        Some(entry.value)
    }

    /// Drop every entry without running the eviction callback
    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
        self.current_bytes = 0;
    }

    /// Number of resident entries
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.order.len() == 0
    }

    /// Bytes currently charged against the budget
    pub fn bytes(&self) -> usize {
        self.current_bytes
    }

    /// Configured byte budget, 0 when unbounded
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Resident keys from most to least recently used
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(|entry| entry.key.as_str())
    }

    /// Usage counters
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Zero the usage counters
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }
}

impl<V> fmt::Debug for Cache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("len", &self.order.len())
            .field("bytes", &self.current_bytes)
            .field("max_bytes", &self.max_bytes)
            .field("on_evict", &self.on_evict.is_some())
            .finish()
    }
}
