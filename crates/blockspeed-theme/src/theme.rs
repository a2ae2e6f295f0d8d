#![forbid(unsafe_code)]

//! Theme derivation for the selected chain.
//!
//! A [`Theme`] is a pure function of the chain's descriptor: accent triplet,
//! luminance, and the foreground that sits on the accent. It is cheap to
//! recompute and carries no identity, so every render pass derives a fresh one
//! (optionally through [`ThemeCache`](crate::cache::ThemeCache)).

use std::borrow::Cow;

use blockspeed_style::color::{
    Foreground, Rgb, Rgba, choose_foreground, hex_to_rgb, relative_luminance,
};

use crate::cache::{ThemeCache, ThemeCacheStats};
use crate::chain::{ChainDescriptor, ChainId, ChainRegistry};
use crate::config::ThemeConfig;

/// Luminance tolerance for floating-point rounding at the white end.
const LUMINANCE_EPSILON: f64 = 1e-9;

/// Derived visual theme for one chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// The id the theme was requested for (not the fallback's id).
    pub chain_id: ChainId,
    pub display_name: Cow<'static, str>,
    pub accent: Rgb,
    /// Canonical `#RRGGBB` of [`Theme::accent`].
    pub accent_hex: String,
    pub luminance: f64,
    pub foreground: Foreground,
    /// The registry did not know `chain_id`.
    pub is_fallback: bool,
}

impl Theme {
    /// Derive the theme for a descriptor.
    pub fn from_descriptor(
        chain_id: ChainId,
        descriptor: &ChainDescriptor,
        is_fallback: bool,
    ) -> Self {
        let accent = hex_to_rgb(&descriptor.accent_hex);
        let luminance = checked_luminance(accent);
        Self {
            chain_id,
            display_name: descriptor.display_name.clone(),
            accent,
            accent_hex: accent.to_hex(),
            luminance,
            foreground: choose_foreground(luminance),
            is_fallback,
        }
    }

    /// Accent with a CSS alpha, e.g. `rgba(98, 126, 234, 0.15)`.
    #[must_use]
    pub fn accent_rgba(&self, alpha: f32) -> Rgba {
        self.accent.with_alpha(alpha)
    }

    /// Accent as `#RRGGBBAA`.
    #[must_use]
    pub fn accent_hex_alpha(&self, alpha: u8) -> String {
        self.accent.hex_with_alpha_byte(alpha)
    }

    pub fn foreground_hex(&self) -> &'static str {
        self.foreground.hex()
    }
}

/// Luminance of `rgb`, asserted in development and clamped in release.
fn checked_luminance(rgb: Rgb) -> f64 {
    let luminance = relative_luminance(rgb);
    debug_assert!(
        luminance.is_finite()
            && (-LUMINANCE_EPSILON..=1.0 + LUMINANCE_EPSILON).contains(&luminance),
        "luminance {luminance} out of range for {rgb}"
    );
    if luminance.is_finite() {
        luminance.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Derive the theme for `chain_id`, falling back for unknown ids.
pub fn derive_theme(registry: &ChainRegistry, chain_id: ChainId) -> Theme {
    match registry.get(chain_id) {
        Some(descriptor) => Theme::from_descriptor(chain_id, descriptor, false),
        None => Theme::from_descriptor(chain_id, registry.get_chain_ui(chain_id), true),
    }
}

/// Registry plus an optional least-recently-used theme cache.
///
/// Results are identical with and without the cache; it only skips the
/// parse/luminance work for recently selected chains.
#[derive(Debug, Clone)]
pub struct ThemeEngine {
    registry: ChainRegistry,
    cache: Option<ThemeCache>,
}

impl ThemeEngine {
    /// Engine without a cache.
    #[must_use]
    pub fn new(registry: ChainRegistry) -> Self {
        Self {
            registry,
            cache: None,
        }
    }

    /// Built-in registry with the configured cache capacity.
    #[must_use]
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::new(ChainRegistry::builtin()).with_cache(config.cache_capacity)
    }

    /// Enable a cache holding up to `capacity` themes; `0` disables caching.
    #[must_use]
    pub fn with_cache(mut self, capacity: usize) -> Self {
        self.cache = (capacity > 0).then(|| ThemeCache::new(capacity));
        self
    }

    pub fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    /// Add or replace a descriptor, dropping any cached theme for its id.
    ///
    /// Returns the replaced descriptor, if any.
    pub fn insert_chain(&mut self, descriptor: ChainDescriptor) -> Option<ChainDescriptor> {
        if let Some(cache) = &mut self.cache {
            cache.remove(descriptor.id);
        }
        self.registry.insert(descriptor)
    }

    /// Theme for `chain_id`.
    pub fn theme_for(&mut self, chain_id: ChainId) -> Theme {
        let Some(cache) = &mut self.cache else {
            return derive_theme(&self.registry, chain_id);
        };
        if let Some(theme) = cache.get(chain_id) {
            tracing::trace!(chain_id = chain_id.get(), "theme cache hit");
            return theme.clone();
        }
        let theme = derive_theme(&self.registry, chain_id);
        cache.insert(chain_id, theme.clone());
        theme
    }

    pub fn cache_stats(&self) -> Option<ThemeCacheStats> {
        self.cache.as_ref().map(ThemeCache::stats)
    }
}

impl Default for ThemeEngine {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
