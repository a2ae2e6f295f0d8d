#![forbid(unsafe_code)]

//! Hero icon hover state and its glow escalation.
//!
//! The hero icon sits on three concentric accent glows. Pointer enter/leave
//! toggles a two-state [`HoverState`]; every glow's scale and opacity, and the
//! icon's own scale and drop shadow, are pure functions of that state. The
//! browser interpolates between the two end targets, so rapid toggling can
//! never leave a layer stranded at an intermediate value.
//!
//! # Example
//!
//! ```
//! use blockspeed_page::hero::{HoverState, PointerEvent, hero_frame};
//! use blockspeed_theme::{ChainId, ChainRegistry, derive_theme};
//!
//! let theme = derive_theme(&ChainRegistry::builtin(), ChainId::ETHEREUM);
//! let state = HoverState::Idle.on_event(PointerEvent::Enter);
//! let frame = hero_frame(state, &theme);
//! assert_eq!(frame.glows[0].target.scale, 1.5);
//! ```

use std::fmt::Write as _;

use blockspeed_style::color::Rgba;
use blockspeed_theme::Theme;

use crate::viewport::{Breakpoint, Visibility};

pub const HERO_TITLE: &str = "BLOCKCHAIN SPEED TESTER";
pub const HERO_SUBTITLE: &str =
    "MEASURE AND COMPARE TRANSACTION SPEEDS ACROSS DIFFERENT BLOCKCHAIN NETWORKS";

/// Pointer input over an interactive region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    Enter,
    Leave,
}

/// Two-state hover machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hover,
}

impl HoverState {
    /// `Enter` always yields `Hover`, `Leave` always yields `Idle`.
    #[must_use]
    pub const fn on_event(self, event: PointerEvent) -> Self {
        match event {
            PointerEvent::Enter => Self::Hover,
            PointerEvent::Leave => Self::Idle,
        }
    }

    #[must_use]
    pub const fn is_hovering(self) -> bool {
        matches!(self, Self::Hover)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Hover => "hover",
        }
    }
}

/// A hover state owned by one named region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverRegion {
    name: &'static str,
    state: HoverState,
}

impl HoverRegion {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            state: HoverState::Idle,
        }
    }

    pub const fn state(&self) -> HoverState {
        self.state
    }

    /// Apply a pointer event. Returns `true` if the state changed.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        let from = self.state;
        let to = from.on_event(event);
        if from == to {
            return false;
        }
        self.state = to;
        tracing::debug!(
            message = "hover.transition",
            region = self.name,
            from = from.as_str(),
            to = to.as_str()
        );
        true
    }
}

/// Scale and opacity end-point of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualTarget {
    pub scale: f32,
    pub opacity: f32,
}

impl VisualTarget {
    pub const fn new(scale: f32, opacity: f32) -> Self {
        Self { scale, opacity }
    }

    /// Linear interpolation, `t` clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        Self {
            scale: self.scale + (to.scale - self.scale) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
        }
    }
}

/// One concentric glow behind the icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowSpec {
    pub name: &'static str,
    pub blur_px: u16,
    pub tint_alpha: f32,
    pub idle: VisualTarget,
    pub hover: VisualTarget,
    pub transition_ms: u32,
    pub visibility: Visibility,
}

impl GlowSpec {
    #[must_use]
    pub const fn target(&self, state: HoverState) -> VisualTarget {
        match state {
            HoverState::Idle => self.idle,
            HoverState::Hover => self.hover,
        }
    }
}

/// Outer to inner; each tier escalates less than the one outside it.
pub static GLOW_LAYERS: [GlowSpec; 3] = [
    GlowSpec {
        name: "glow-outer",
        blur_px: 64,
        tint_alpha: 0.15,
        idle: VisualTarget::new(1.0, 0.6),
        hover: VisualTarget::new(1.5, 1.0),
        transition_ms: 700,
        visibility: Visibility::ALWAYS,
    },
    GlowSpec {
        name: "glow-middle",
        blur_px: 40,
        tint_alpha: 0.25,
        idle: VisualTarget::new(1.0, 0.4),
        hover: VisualTarget::new(1.25, 0.8),
        transition_ms: 500,
        visibility: Visibility::visible_from(Breakpoint::Md),
    },
    GlowSpec {
        name: "glow-inner",
        blur_px: 24,
        tint_alpha: 0.35,
        idle: VisualTarget::new(1.0, 0.3),
        hover: VisualTarget::new(1.1, 0.7),
        transition_ms: 300,
        visibility: Visibility::visible_from(Breakpoint::Lg),
    },
];

pub const ICON_IDLE_SCALE: f32 = 1.0;
pub const ICON_HOVER_SCALE: f32 = 1.1;
pub const ICON_TRANSITION_MS: u32 = 500;
const ICON_SHADOW_BLUR_PX: u16 = 20;
const ICON_SHADOW_ALPHA: f32 = 0.6;

/// Diamond icon facets: polygon points and fill opacity.
const ICON_FACETS: [(&str, f32); 6] = [
    ("127.9611 0 125.1661 9.5 125.1661 285.168 127.9611 287.958 255.9231 212.32", 1.0),
    ("127.962 0 0 212.32 127.962 287.959 127.962 154.158", 0.8),
    (
        "127.9611 312.1866 126.3861 314.1066 126.3861 412.3056 127.9611 416.9066 255.9991 236.5866",
        0.6,
    ),
    ("127.962 416.9052 127.962 312.1852 0 236.5852", 0.8),
    ("127.9611 287.9577 255.9211 212.3207 127.9611 154.1587", 0.4),
    ("0.0009 212.3208 127.9609 287.9578 127.9609 154.1588", 1.0),
];

/// Resolved glow for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowStyle {
    pub spec: &'static GlowSpec,
    pub tint: Rgba,
    pub target: VisualTarget,
}

impl GlowStyle {
    pub fn class(&self) -> String {
        self.spec.visibility.class()
    }

    pub fn css(&self) -> String {
        format!(
            "position: absolute; inset: 0; border-radius: 9999px; filter: blur({}px); \
             background-color: {}; transform: scale({}); opacity: {}; \
             transition: all {}ms;",
            self.spec.blur_px,
            self.tint,
            self.target.scale,
            self.target.opacity,
            self.spec.transition_ms
        )
    }
}

/// Resolved icon styling for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    pub scale: f32,
    /// Present only while hovering.
    pub drop_shadow: Option<Rgba>,
    pub accent_hex: String,
}

impl IconStyle {
    pub fn css(&self) -> String {
        let mut css = format!(
            "position: relative; z-index: 10; transform: scale({}); transition: all {ICON_TRANSITION_MS}ms;",
            self.scale
        );
        if let Some(shadow) = self.drop_shadow {
            let _ = write!(
                css,
                " filter: drop-shadow(0 0 {ICON_SHADOW_BLUR_PX}px {shadow});"
            );
        }
        css
    }

    /// 80x80 diamond SVG filled with the accent.
    pub fn svg(&self) -> String {
        let mut svg = format!(
            r#"<svg width="80" height="80" viewBox="0 0 256 417" xmlns="http://www.w3.org/2000/svg" style="{}"><g>"#,
            self.css()
        );
        for (points, opacity) in ICON_FACETS {
            if opacity < 1.0 {
                let _ = write!(
                    svg,
                    r#"<polygon fill="{}" fill-opacity="{opacity}" points="{points}"/>"#,
                    self.accent_hex
                );
            } else {
                let _ = write!(
                    svg,
                    r#"<polygon fill="{}" points="{points}"/>"#,
                    self.accent_hex
                );
            }
        }
        svg.push_str("</g></svg>");
        svg
    }
}

/// Everything the hero region needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroFrame {
    pub state: HoverState,
    pub glows: [GlowStyle; 3],
    pub icon: IconStyle,
}

/// Resolve the hero visuals for `state` under `theme`.
pub fn hero_frame(state: HoverState, theme: &Theme) -> HeroFrame {
    let glows = std::array::from_fn(|i| {
        let spec = &GLOW_LAYERS[i];
        GlowStyle {
            spec,
            tint: theme.accent_rgba(spec.tint_alpha),
            target: spec.target(state),
        }
    });
    let icon = IconStyle {
        scale: if state.is_hovering() {
            ICON_HOVER_SCALE
        } else {
            ICON_IDLE_SCALE
        },
        drop_shadow: state
            .is_hovering()
            .then(|| theme.accent_rgba(ICON_SHADOW_ALPHA)),
        accent_hex: theme.accent_hex.clone(),
    };
    HeroFrame { state, glows, icon }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockspeed_theme::{ChainDescriptor, ChainId, ChainRegistry, derive_theme};
    use tracing_test::traced_test;

    fn emerald() -> Theme {
        let registry = ChainRegistry::empty()
            .with_chain(ChainDescriptor::new(ChainId(1), "Emerald", "#10B981"));
        derive_theme(&registry, ChainId(1))
    }

    #[test]
    fn transitions_follow_events_only() {
        for state in [HoverState::Idle, HoverState::Hover] {
            assert_eq!(state.on_event(PointerEvent::Enter), HoverState::Hover);
            assert_eq!(state.on_event(PointerEvent::Leave), HoverState::Idle);
        }
        assert_eq!(HoverState::default(), HoverState::Idle);
    }

    #[test]
    fn glow_escalation_decreases_inward() {
        let extra: Vec<f32> = GLOW_LAYERS
            .iter()
            .map(|g| g.hover.scale - g.idle.scale)
            .collect();
        assert!(extra.windows(2).all(|w| w[0] > w[1]), "{extra:?}");
        for glow in &GLOW_LAYERS {
            assert_eq!(glow.idle.scale, 1.0);
            assert!(glow.hover.opacity > glow.idle.opacity);
        }
    }

    #[test]
    fn hover_frame_targets() {
        let frame = hero_frame(HoverState::Hover, &emerald());
        let scales: Vec<f32> = frame.glows.iter().map(|g| g.target.scale).collect();
        let opacities: Vec<f32> = frame.glows.iter().map(|g| g.target.opacity).collect();
        assert_eq!(scales, vec![1.5, 1.25, 1.1]);
        assert_eq!(opacities, vec![1.0, 0.8, 0.7]);
        assert_eq!(frame.icon.scale, 1.1);
        assert_eq!(
            frame.icon.drop_shadow.map(|s| s.to_string()),
            Some("rgba(16, 185, 129, 0.6)".to_string())
        );
    }

    #[test]
    fn idle_frame_targets() {
        let frame = hero_frame(HoverState::Idle, &emerald());
        let opacities: Vec<f32> = frame.glows.iter().map(|g| g.target.opacity).collect();
        assert_eq!(opacities, vec![0.6, 0.4, 0.3]);
        assert!(frame.glows.iter().all(|g| g.target.scale == 1.0));
        assert_eq!(frame.icon.scale, 1.0);
        assert!(frame.icon.drop_shadow.is_none());
        assert!(!frame.icon.css().contains("drop-shadow"));
    }

    #[test]
    fn glow_css() {
        let frame = hero_frame(HoverState::Hover, &emerald());
        assert_eq!(
            frame.glows[1].css(),
            "position: absolute; inset: 0; border-radius: 9999px; filter: blur(40px); \
             background-color: rgba(16, 185, 129, 0.25); transform: scale(1.25); opacity: 0.8; \
             transition: all 500ms;"
        );
        assert_eq!(frame.glows[1].class(), "hidden md:block");
        assert_eq!(frame.glows[0].class(), "");
    }

    #[test]
    fn svg_uses_accent_for_every_facet() {
        let frame = hero_frame(HoverState::Idle, &emerald());
        let svg = frame.icon.svg();
        assert_eq!(svg.matches(r##"fill="#10B981""##).count(), 6);
        assert_eq!(svg.matches("fill-opacity=").count(), 4);
        assert!(svg.contains(r#"fill-opacity="0.4""#));
    }

    #[test]
    fn lerp_clamps() {
        let a = VisualTarget::new(1.0, 0.6);
        let b = VisualTarget::new(1.5, 1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 7.0), b);
        assert_eq!(a.lerp(b, f32::NAN), a);
        let mid = a.lerp(b, 0.5);
        assert!((mid.scale - 1.25).abs() < 1e-6);
    }

    #[test]
    #[traced_test]
    fn region_logs_only_real_transitions() {
        let mut region = HoverRegion::new("hero-icon");
        assert!(region.handle(PointerEvent::Enter));
        assert!(!region.handle(PointerEvent::Enter));
        assert!(region.handle(PointerEvent::Leave));
        assert_eq!(region.state(), HoverState::Idle);
        assert!(logs_contain("hover.transition"));
    }

    #[test]
    fn rapid_toggling_ends_idle() {
        let theme = emerald();
        let mut region = HoverRegion::new("hero-icon");
        for _ in 0..50 {
            region.handle(PointerEvent::Enter);
            region.handle(PointerEvent::Leave);
        }
        assert_eq!(hero_frame(region.state(), &theme), hero_frame(HoverState::Idle, &theme));
    }
}
