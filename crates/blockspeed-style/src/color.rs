#![forbid(unsafe_code)]

//! RGB triplets, hex parsing, and WCAG relative luminance.
//!
//! Accent colors arrive as `#RRGGBB` strings from the chain registry. Every
//! theme evaluation re-derives the triplet from that string, so parsing has to
//! be total: malformed input resolves to [`Rgb::FALLBACK`] instead of failing.
//!
//! # Example
//!
//! ```
//! use blockspeed_style::color::{Foreground, Rgb, choose_foreground, hex_to_rgb};
//!
//! let rgb = hex_to_rgb("#10B981");
//! assert_eq!(rgb, Rgb::new(16, 185, 129));
//! assert_eq!(choose_foreground(rgb.relative_luminance()), Foreground::White);
//! assert_eq!(rgb.with_alpha(0.05).to_string(), "rgba(16, 185, 129, 0.05)");
//! ```

use std::fmt;

use thiserror::Error;

/// Luminance above which dark text is chosen.
pub const FOREGROUND_LUMINANCE_THRESHOLD: f64 = 0.5;

/// WCAG AA minimum contrast for normal text.
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;

/// Breakpoint of the piecewise sRGB transfer function.
const SRGB_LINEAR_BREAKPOINT: f64 = 0.03928;

const LUMA_R: f64 = 0.2126;
const LUMA_G: f64 = 0.7152;
const LUMA_B: f64 = 0.0722;

/// Reasons a string is not a 6-digit hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,
    #[error("expected 6 hex digits, found {len}")]
    InvalidLength { len: usize },
    #[error("invalid hex digit {ch:?} at position {index}")]
    InvalidDigit { ch: char, index: usize },
}

/// An 8-bit-per-channel sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Emerald, used whenever an accent string cannot be parsed.
    pub const FALLBACK: Rgb = Rgb::new(16, 185, 129);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse an optionally `#`-prefixed, case-insensitive `RRGGBB` string.
    ///
    /// Surrounding whitespace is not trimmed; `" #10B981"` is rejected.
    pub fn parse_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.is_empty() {
            return Err(ColorError::Empty);
        }
        let len = digits.chars().count();
        if len != 6 {
            return Err(ColorError::InvalidLength { len });
        }
        if let Some((index, ch)) = digits.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(ColorError::InvalidDigit { ch, index });
        }

        // All six chars are ASCII hex digits, so byte slicing is safe.
        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::new(r, g, b)),
            _ => Err(ColorError::InvalidLength { len }),
        }
    }

    /// Canonical uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// `#RRGGBBAA`, the 8-digit form CSS accepts for translucent shadows.
    #[must_use]
    pub fn hex_with_alpha_byte(self, alpha: u8) -> String {
        format!("{}{alpha:02X}", self.to_hex())
    }

    /// Pair this color with a CSS alpha in `[0, 1]`.
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba::new(self, alpha)
    }

    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        relative_luminance(self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// An RGB triplet with a CSS alpha; displays as `rgba(r, g, b, a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    /// Alpha is clamped into `[0, 1]`; NaN becomes fully transparent.
    pub fn new(rgb: Rgb, alpha: f32) -> Self {
        let alpha = if alpha.is_nan() {
            0.0
        } else {
            alpha.clamp(0.0, 1.0)
        };
        Self { rgb, alpha }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }
}

/// Text color placed on top of an accent fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Foreground {
    Black,
    White,
}

impl Foreground {
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Black => Rgb::BLACK,
            Self::White => Rgb::WHITE,
        }
    }

    /// Lowercase CSS hex.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Black => "#000000",
            Self::White => "#ffffff",
        }
    }
}

impl fmt::Display for Foreground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

/// Parse an accent hex string, falling back to [`Rgb::FALLBACK`].
///
/// Never fails: a broken accent must not break the page, so the parse error
/// is only logged.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    match Rgb::parse_hex(hex) {
        Ok(rgb) => rgb,
        Err(err) => {
            tracing::warn!(input = hex, error = %err, "accent color rejected, using fallback");
            Rgb::FALLBACK
        }
    }
}

/// sRGB channel in `[0, 1]` to linear light.
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= SRGB_LINEAR_BREAKPOINT {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG 2.x relative luminance in `[0, 1]`.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let r = srgb_to_linear(f64::from(rgb.r) / 255.0);
    let g = srgb_to_linear(f64::from(rgb.g) / 255.0);
    let b = srgb_to_linear(f64::from(rgb.b) / 255.0);
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// Black for luminance strictly above 0.5, white otherwise.
pub fn choose_foreground(luminance: f64) -> Foreground {
    if luminance > FOREGROUND_LUMINANCE_THRESHOLD {
        Foreground::Black
    } else {
        Foreground::White
    }
}

/// WCAG contrast ratio in `[1, 21]`.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let lighter = la.max(lb);
    let darker = la.min(lb);
    (lighter + 0.05) / (darker + 0.05)
}

pub fn meets_wcag_aa(fg: Rgb, bg: Rgb) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AA_NORMAL_TEXT
}
