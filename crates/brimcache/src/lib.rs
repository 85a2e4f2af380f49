//! # brimcache
//!
//! Bounded in-process LRU cache with O(1) operations.
//!
//! ## Architecture
//! - **Index**: AHash map from key to slot handle for O(1) lookup
//! - **Recency list**: arena-backed doubly linked list, head = most
//!   recently used, tail = next to evict
//! - **Stats**: hit/miss/insert/eviction counters
//!
//! The cache is single-threaded by design: no operation blocks or performs
//! I/O, and nothing is synchronized internally. To share one across threads,
//! serialize access around the whole object.
//!
//! ```
//! use brimcache::LruCache;
//!
//! let mut cache = LruCache::new(2)?;
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");      // "a" becomes most recently used
//! cache.put("c", 3);    // "b" evicted
//! assert_eq!(cache.get(&"b"), None);
//! # Ok::<(), brimcache::Error>(())
//! ```

#![warn(missing_docs)]

mod error;
mod list;
mod lru;
mod stats;

pub use error::{Error, Result};
pub use lru::LruCache;
pub use stats::CacheStats;
