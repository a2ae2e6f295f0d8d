#![forbid(unsafe_code)]

//! Chain registry and chain-adaptive theme derivation.
//!
//! # Role in Blockspeed
//! `blockspeed-theme` maps the selected chain id to a [`Theme`]: accent
//! triplet, relative luminance, and a foreground that stays legible on the
//! accent. Lookups never fail; unknown ids get [`FALLBACK_CHAIN`].
//!
//! # This crate provides
//! - [`ChainRegistry`] and the built-in [`BUILTIN_CHAINS`] table.
//! - [`derive_theme`] and [`ThemeEngine`] for per-render derivation.
//! - [`ThemeCache`], an optional LRU keyed by chain id.
//! - [`ThemeConfig`] with environment loading.

/// Least-recently-used theme cache.
pub mod cache;
/// Chain identifiers and the chain UI registry.
pub mod chain;
/// Engine configuration and environment loading.
pub mod config;
/// Theme derivation.
pub mod theme;

pub use cache::{ThemeCache, ThemeCacheStats};
pub use chain::{
    BUILTIN_CHAINS, ChainDescriptor, ChainId, ChainRegistry, FALLBACK_CHAIN, builtin_registry,
    get_chain_ui,
};
pub use config::ThemeConfig;
pub use theme::{Theme, ThemeEngine, derive_theme};

pub use blockspeed_style::{Foreground, Rgb, Rgba};
