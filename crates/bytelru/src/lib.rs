//! # bytelru
//!
//! Single-threaded LRU cache bounded by a byte budget.
//!
//! ## Architecture
//! - **HashMap**: AHash index from key to list slot (O(1))
//! - **LRU List**: Slab-backed doubly-linked list for recency (O(1))
//! - **Accounting**: every entry costs `key.len() + value.len()` bytes
//! - **Eviction**: least recently used entries go first, each one reported
//!   to an optional callback
//!
//! Values declare their own size through the [`Value`] trait. The cache
//! performs no locking; share it behind a mutex if needed.

#![warn(missing_docs)]

mod cache;
mod config;
mod error;
mod lru;
mod stats;
mod value;


pub use cache::{Cache, OnEvict};
pub use config::{parse_byte_size, CacheConfig, MAX_BYTES_ENV};
pub use error::{Error, Result};
pub use stats::CacheStats;
pub use value::Value;
