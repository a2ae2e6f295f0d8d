#![forbid(unsafe_code)]

//! Breakpoint-based visibility for page layers.
//!
//! Mirrors the two responsive tiers the page uses: some glows and orbs only
//! appear from `Md` or `Lg` upward. Hidden layers keep their table slot; only
//! their display is suppressed.
//!
//! # Invariants
//!
//! 1. `Visibility::ALWAYS` is visible at every breakpoint.
//! 2. `Visibility::visible_from(bp)` shows at `bp` and all larger breakpoints.

/// Viewport width tiers, ordered small to large.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    Base,
    /// 768px and wider.
    Md,
    /// 1024px and wider.
    Lg,
}

impl Breakpoint {
    #[must_use]
    pub const fn min_width_px(self) -> u32 {
        match self {
            Self::Base => 0,
            Self::Md => 768,
            Self::Lg => 1024,
        }
    }

    /// Tier for a viewport width in CSS pixels.
    #[must_use]
    pub const fn from_width(width_px: u32) -> Self {
        if width_px >= Self::Lg.min_width_px() {
            Self::Lg
        } else if width_px >= Self::Md.min_width_px() {
            Self::Md
        } else {
            Self::Base
        }
    }

    const fn prefix(self) -> &'static str {
        match self {
            Self::Base => "",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// Smallest breakpoint at which a layer is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Visibility {
    from: Breakpoint,
}

impl Visibility {
    pub const ALWAYS: Self = Self {
        from: Breakpoint::Base,
    };

    #[must_use]
    pub const fn visible_from(bp: Breakpoint) -> Self {
        Self { from: bp }
    }

    #[must_use]
    pub const fn min_breakpoint(self) -> Breakpoint {
        self.from
    }

    #[must_use]
    pub fn is_visible(self, bp: Breakpoint) -> bool {
        bp >= self.from
    }

    /// Utility classes, e.g. `hidden lg:block`; empty when always visible.
    #[must_use]
    pub fn class(self) -> String {
        match self.from {
            Breakpoint::Base => String::new(),
            bp => format!("hidden {}:block", bp.prefix()),
        }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::ALWAYS
    }
}
