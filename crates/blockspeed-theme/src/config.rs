#![forbid(unsafe_code)]

//! Theme engine configuration.
//!
//! # Environment Variables
//!
//! | Variable | Type | Default | Description |
//! |----------|------|---------|-------------|
//! | `BLOCKSPEED_DEFAULT_CHAIN` | u64 | 1 | Chain selected before the benchmark reports one |
//! | `BLOCKSPEED_THEME_CACHE` | usize | 8 | Theme cache capacity, `0` disables caching |
//!
//! Unparseable values are ignored and the default is kept.
//!
//! # Example: Configure in code
//!
//! ```
//! use blockspeed_theme::chain::ChainId;
//! use blockspeed_theme::config::ThemeConfig;
//!
//! let config = ThemeConfig::default()
//!     .with_default_chain(ChainId::BASE)
//!     .with_cache_capacity(0);
//! assert_eq!(config.default_chain, ChainId::BASE);
//! ```

use crate::chain::ChainId;

pub const ENV_DEFAULT_CHAIN: &str = "BLOCKSPEED_DEFAULT_CHAIN";
pub const ENV_THEME_CACHE: &str = "BLOCKSPEED_THEME_CACHE";

pub const DEFAULT_CACHE_CAPACITY: usize = 8;
pub const MAX_CACHE_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThemeConfig {
    /// Chain shown on first render.
    pub default_chain: ChainId,
    /// Theme cache capacity; `0` disables the cache.
    pub cache_capacity: usize,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_chain: ChainId::ETHEREUM,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl ThemeConfig {
    #[must_use]
    pub fn with_default_chain(mut self, chain: ChainId) -> Self {
        self.default_chain = chain;
        self
    }

    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Load config from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_DEFAULT_CHAIN) {
            match raw.trim().parse::<u64>() {
                Ok(id) => config.default_chain = ChainId(id),
                Err(_) => {
                    tracing::debug!(
                        var = ENV_DEFAULT_CHAIN,
                        value = %raw,
                        "ignoring invalid value"
                    );
                }
            }
        }

        if let Some(raw) = lookup(ENV_THEME_CACHE) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) => config.cache_capacity = capacity,
                Err(_) => {
                    tracing::debug!(
                        var = ENV_THEME_CACHE,
                        value = %raw,
                        "ignoring invalid value"
                    );
                }
            }
        }

        config.validated()
    }

    /// Clamp the cache capacity to [`MAX_CACHE_CAPACITY`].
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.cache_capacity = self.cache_capacity.min(MAX_CACHE_CAPACITY);
        self
    }
}
