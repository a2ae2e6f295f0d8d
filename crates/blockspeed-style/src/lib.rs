#![forbid(unsafe_code)]

//! Color primitives for Blockspeed's chain-adaptive themes.
//!
//! # Role in Blockspeed
//! `blockspeed-style` is the leaf of the theming stack. It turns an accent
//! hex string into an [`Rgb`] triplet, measures its WCAG relative luminance,
//! and picks a [`Foreground`] that stays readable on top of it. Everything
//! here is pure and total: malformed input degrades to [`Rgb::FALLBACK`].
//!
//! # How it fits in the system
//! `blockspeed-theme` combines these functions with the chain registry to
//! derive a `Theme`; `blockspeed-page` formats the triplet into CSS fills via
//! [`Rgba`].

/// RGB triplets, hex parsing, luminance, and contrast.
pub mod color;

pub use color::{
    ColorError, FOREGROUND_LUMINANCE_THRESHOLD, Foreground, Rgb, Rgba, WCAG_AA_NORMAL_TEXT,
    choose_foreground, contrast_ratio, hex_to_rgb, meets_wcag_aa, relative_luminance,
    srgb_to_linear,
};
