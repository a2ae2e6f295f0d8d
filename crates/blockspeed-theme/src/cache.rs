#![forbid(unsafe_code)]

//! Least-recently-used cache of derived themes, keyed by chain id.
//!
//! # Usage
//!
//! ```
//! use blockspeed_theme::cache::ThemeCache;
//! use blockspeed_theme::chain::{ChainId, ChainRegistry};
//! use blockspeed_theme::theme::derive_theme;
//!
//! let registry = ChainRegistry::builtin();
//! let mut cache = ThemeCache::new(4);
//! cache.insert(ChainId::BASE, derive_theme(&registry, ChainId::BASE));
//! assert!(cache.get(ChainId::BASE).is_some());
//! ```

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::chain::ChainId;
use crate::theme::Theme;

/// Cache statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub len: usize,
    pub capacity: usize,
}

impl ThemeCacheStats {
    /// Hit rate as a fraction (0.0 to 1.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of themes.
#[derive(Debug, Clone)]
pub struct ThemeCache {
    cache: LruCache<ChainId, Theme>,
    stats: ThemeCacheStats,
}

impl ThemeCache {
    /// Create a cache holding at most `capacity` themes (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(cap),
            stats: ThemeCacheStats {
                capacity: cap.get(),
                ..Default::default()
            },
        }
    }

    /// Look up a theme and mark it most recently used.
    pub fn get(&mut self, chain_id: ChainId) -> Option<&Theme> {
        match self.cache.get(&chain_id) {
            Some(theme) => {
                self.stats.hits += 1;
                Some(theme)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Insert a theme as most recently used.
    ///
    /// Returns the previous theme for the same id, if one was replaced.
    /// Inserting past capacity evicts the least recently used entry.
    pub fn insert(&mut self, chain_id: ChainId, theme: Theme) -> Option<Theme> {
        match self.cache.push(chain_id, theme) {
            Some((old_id, old)) if old_id == chain_id => Some(old),
            Some(_) => {
                self.stats.evictions += 1;
                None
            }
            None => None,
        }
    }

    pub fn remove(&mut self, chain_id: ChainId) -> Option<Theme> {
        self.cache.pop(&chain_id)
    }

    /// Membership check without touching recency or statistics.
    pub fn contains_key(&self, chain_id: ChainId) -> bool {
        self.cache.contains(&chain_id)
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    /// Ids from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.cache.iter().map(|(id, _)| *id)
    }

    pub fn stats(&self) -> ThemeCacheStats {
        ThemeCacheStats {
            len: self.cache.len(),
            ..self.stats
        }
    }
}
