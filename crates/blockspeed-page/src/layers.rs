#![forbid(unsafe_code)]

//! Background layer stack.
//!
//! The page background is a fixed, ordered stack of layers: a black base,
//! ten accent-tinted orbs, an image overlay, two texture patterns, an accent
//! flare, and two darkening gradients. [`BACKGROUND_LAYERS`] owns every
//! geometric property; the theme only supplies the RGB channels of the
//! accent-tinted fills.
//!
//! # Invariants
//!
//! 1. Layer order, geometry, and alpha are static; [`compose`] only recolors.
//! 2. The alpha table ([`accent_alphas`]) does not depend on the chain.
//! 3. `compose` is deterministic and side-effect free.

use std::fmt::{self, Write as _};

use blockspeed_style::color::{Rgb, Rgba};

use crate::viewport::{Breakpoint, Visibility};

/// Path of the line-art overlay asset.
pub const LINES_OVERLAY_SRC: &str = "/3d-lines.svg";

/// What a layer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Base,
    Orb,
    ImageOverlay,
    Pattern,
    Flare,
    Shade,
}

/// Slow opacity pulse applied to orbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pulse {
    None,
    Slow,
    Slower,
}

impl Pulse {
    pub const fn class(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Slow => Some("animate-pulse-slow"),
            Self::Slower => Some("animate-pulse-slower"),
        }
    }
}

/// CSS length of a layer box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extent {
    Auto,
    Full,
    Px(u16),
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Full => f.write_str("100%"),
            Self::Px(px) => write!(f, "{px}px"),
        }
    }
}

/// Static placement of a layer; never theme-driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    pub top: Option<&'static str>,
    pub right: Option<&'static str>,
    pub bottom: Option<&'static str>,
    pub left: Option<&'static str>,
    pub width: Extent,
    pub height: Extent,
    pub blur_px: Option<u16>,
    pub rounded: bool,
    /// Shift left by half the width (horizontal centering from `left: 50%`).
    pub center_x: bool,
}

impl Geometry {
    /// Covers the whole viewport.
    pub const FILL: Self = Self {
        top: Some("0"),
        right: Some("0"),
        bottom: Some("0"),
        left: Some("0"),
        width: Extent::Auto,
        height: Extent::Auto,
        blur_px: None,
        rounded: false,
        center_x: false,
    };

    const NONE: Self = Self {
        top: None,
        right: None,
        bottom: None,
        left: None,
        width: Extent::Auto,
        height: Extent::Auto,
        blur_px: None,
        rounded: false,
        center_x: false,
    };

    /// Round blurred square of `size_px`.
    pub const fn orb(size_px: u16, blur_px: u16) -> Self {
        Self {
            width: Extent::Px(size_px),
            height: Extent::Px(size_px),
            blur_px: Some(blur_px),
            rounded: true,
            ..Self::NONE
        }
    }

    pub const fn top(mut self, v: &'static str) -> Self {
        self.top = Some(v);
        self
    }

    pub const fn right(mut self, v: &'static str) -> Self {
        self.right = Some(v);
        self
    }

    pub const fn bottom(mut self, v: &'static str) -> Self {
        self.bottom = Some(v);
        self
    }

    pub const fn left(mut self, v: &'static str) -> Self {
        self.left = Some(v);
        self
    }

    pub const fn centered_x(mut self) -> Self {
        self.left = Some("50%");
        self.center_x = true;
        self
    }

    const fn size(mut self, width: Extent, height: Extent) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    fn write_css(&self, out: &mut String) -> fmt::Result {
        out.push_str("position: absolute;");
        for (prop, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if let Some(value) = value {
                write!(out, " {prop}: {value};")?;
            }
        }
        if self.width != Extent::Auto {
            write!(out, " width: {};", self.width)?;
        }
        if self.height != Extent::Auto {
            write!(out, " height: {};", self.height)?;
        }
        if self.rounded {
            out.push_str(" border-radius: 9999px;");
        }
        if let Some(blur) = self.blur_px {
            write!(out, " filter: blur({blur}px);")?;
        }
        if self.center_x {
            out.push_str(" transform: translateX(-50%);");
        }
        Ok(())
    }
}

/// How a layer is filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Fixed color, independent of the theme.
    Solid(&'static str),
    /// Accent color at a fixed alpha.
    Accent { alpha: f32 },
    /// Accent at a fixed alpha fading to transparent downward.
    AccentFade { alpha: f32 },
    /// Fixed CSS gradient.
    Gradient(&'static str),
    /// External image, screen-blended.
    Image { src: &'static str },
    /// Stylesheet texture class.
    Pattern(&'static str),
}

impl Paint {
    /// Fixed accent alpha, for the theme-tinted paints.
    pub const fn accent_alpha(&self) -> Option<f32> {
        match self {
            Self::Accent { alpha } | Self::AccentFade { alpha } => Some(*alpha),
            _ => None,
        }
    }
}

/// One row of the layer table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerSpec {
    pub name: &'static str,
    pub kind: LayerKind,
    pub geometry: Geometry,
    pub paint: Paint,
    /// Whole-layer opacity on top of the paint alpha.
    pub opacity: Option<f32>,
    pub pulse: Pulse,
    pub visibility: Visibility,
}

const fn orb(
    name: &'static str,
    geometry: Geometry,
    alpha: f32,
    pulse: Pulse,
    visibility: Visibility,
) -> LayerSpec {
    LayerSpec {
        name,
        kind: LayerKind::Orb,
        geometry,
        paint: Paint::Accent { alpha },
        opacity: None,
        pulse,
        visibility,
    }
}

const ALWAYS: Visibility = Visibility::ALWAYS;
const LARGE: Visibility = Visibility::visible_from(Breakpoint::Lg);

/// The background stack, back to front.
pub static BACKGROUND_LAYERS: [LayerSpec; 17] = [
    LayerSpec {
        name: "base",
        kind: LayerKind::Base,
        geometry: Geometry::FILL,
        paint: Paint::Solid("#000000"),
        opacity: None,
        pulse: Pulse::None,
        visibility: ALWAYS,
    },
    orb(
        "orb-top-left",
        Geometry::orb(700, 64).top("-10rem").left("-10rem"),
        0.05,
        Pulse::Slow,
        ALWAYS,
    ),
    orb(
        "orb-top-right",
        Geometry::orb(800, 64).top("-8rem").right("-10rem"),
        0.08,
        Pulse::Slow,
        ALWAYS,
    ),
    orb(
        "orb-top-center",
        Geometry::orb(600, 120).top("5rem").centered_x(),
        0.15,
        Pulse::Slower,
        LARGE,
    ),
    orb(
        "orb-middle-right",
        Geometry::orb(650, 100).top("50%").right("-12rem"),
        0.12,
        Pulse::Slower,
        LARGE,
    ),
    orb(
        "orb-middle-left",
        Geometry::orb(650, 64).top("50%").left("-12rem"),
        0.12,
        Pulse::Slower,
        LARGE,
    ),
    orb(
        "orb-bottom-left",
        Geometry::orb(750, 64).bottom("-10rem").left("-10rem"),
        0.08,
        Pulse::Slower,
        ALWAYS,
    ),
    orb(
        "orb-bottom-right",
        Geometry::orb(750, 120).bottom("-10rem").right("-10rem"),
        0.08,
        Pulse::Slow,
        ALWAYS,
    ),
    orb(
        "orb-bottom-center",
        Geometry::orb(600, 110).bottom("5rem").centered_x(),
        0.12,
        Pulse::Slower,
        LARGE,
    ),
    orb(
        "orb-upper-left-accent",
        Geometry::orb(500, 100).top("33.333333%").left("25%"),
        0.10,
        Pulse::Slow,
        LARGE,
    ),
    orb(
        "orb-lower-right-accent",
        Geometry::orb(550, 110).bottom("33.333333%").right("25%"),
        0.10,
        Pulse::Slower,
        LARGE,
    ),
    LayerSpec {
        name: "lines-overlay",
        kind: LayerKind::ImageOverlay,
        geometry: Geometry::NONE
            .bottom("0")
            .left("0")
            .right("0")
            .size(Extent::Auto, Extent::Px(600)),
        paint: Paint::Image {
            src: LINES_OVERLAY_SRC,
        },
        opacity: Some(0.45),
        pulse: Pulse::None,
        visibility: ALWAYS,
    },
    LayerSpec {
        name: "grid",
        kind: LayerKind::Pattern,
        geometry: Geometry::FILL,
        paint: Paint::Pattern("bg-grid-pattern"),
        opacity: Some(0.10),
        pulse: Pulse::None,
        visibility: ALWAYS,
    },
    LayerSpec {
        name: "stars",
        kind: LayerKind::Pattern,
        geometry: Geometry::FILL,
        paint: Paint::Pattern("bg-stars"),
        opacity: Some(0.30),
        pulse: Pulse::None,
        visibility: ALWAYS,
    },
    LayerSpec {
        name: "top-flare",
        kind: LayerKind::Flare,
        geometry: Geometry::NONE
            .top("0")
            .centered_x()
            .size(Extent::Full, Extent::Px(500)),
        paint: Paint::AccentFade { alpha: 0.10 },
        opacity: None,
        pulse: Pulse::None,
        visibility: ALWAYS,
    },
    LayerSpec {
        name: "depth",
        kind: LayerKind::Shade,
        geometry: Geometry::FILL,
        paint: Paint::Gradient(
            "linear-gradient(to bottom, transparent, rgba(0, 0, 0, 0.2), rgba(0, 0, 0, 0.6))",
        ),
        opacity: None,
        pulse: Pulse::None,
        visibility: ALWAYS,
    },
    LayerSpec {
        name: "vignette",
        kind: LayerKind::Shade,
        geometry: Geometry::FILL,
        paint: Paint::Gradient(
            "radial-gradient(circle at center, transparent 0%, transparent 60%, black 100%)",
        ),
        opacity: Some(0.30),
        pulse: Pulse::None,
        visibility: ALWAYS,
    },
];

/// A layer of [`BACKGROUND_LAYERS`] recolored for one accent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    pub spec: &'static LayerSpec,
    /// Accent fill; `None` for layers the theme does not touch.
    pub tint: Option<Rgba>,
}

impl LayerStyle {
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn is_visible(&self, bp: Breakpoint) -> bool {
        self.spec.visibility.is_visible(bp)
    }

    /// Space-separated class list (visibility, pulse, pattern).
    pub fn class(&self) -> String {
        let mut classes: Vec<String> = Vec::new();
        let visibility = self.spec.visibility.class();
        if !visibility.is_empty() {
            classes.push(visibility);
        }
        if let Some(pulse) = self.spec.pulse.class() {
            classes.push(pulse.to_string());
        }
        if let Paint::Pattern(pattern) = self.spec.paint {
            classes.push(pattern.to_string());
        }
        classes.join(" ")
    }

    /// Inline style declaration for the layer element.
    pub fn css(&self) -> String {
        let mut out = String::with_capacity(192);
        // Writing into a String cannot fail.
        let _ = self.write_css(&mut out);
        out
    }

    fn write_css(&self, out: &mut String) -> fmt::Result {
        self.spec.geometry.write_css(out)?;
        match (self.spec.paint, self.tint) {
            (Paint::Solid(color), _) => write!(out, " background-color: {color};")?,
            (Paint::Accent { .. }, Some(tint)) => write!(out, " background-color: {tint};")?,
            (Paint::AccentFade { .. }, Some(tint)) => write!(
                out,
                " background: linear-gradient(to bottom, {tint}, transparent, transparent);"
            )?,
            (Paint::Gradient(gradient), _) => write!(out, " background: {gradient};")?,
            (Paint::Image { .. }, _) => out.push_str(
                " width: 100%; object-fit: cover; object-position: bottom; \
                 mix-blend-mode: screen; pointer-events: none;",
            ),
            (Paint::Accent { .. } | Paint::AccentFade { .. }, None) | (Paint::Pattern(_), _) => {}
        }
        if let Some(opacity) = self.spec.opacity {
            write!(out, " opacity: {opacity};")?;
        }
        Ok(())
    }
}

/// Recolor the layer stack for `rgb`.
pub fn compose(rgb: Rgb) -> Vec<LayerStyle> {
    BACKGROUND_LAYERS
        .iter()
        .map(|spec| LayerStyle {
            spec,
            tint: spec.paint.accent_alpha().map(|alpha| rgb.with_alpha(alpha)),
        })
        .collect()
}

/// Accent alphas of the tinted layers, in stack order.
pub fn accent_alphas() -> Vec<f32> {
    BACKGROUND_LAYERS
        .iter()
        .filter_map(|spec| spec.paint.accent_alpha())
        .collect()
}
