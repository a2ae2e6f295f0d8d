#![forbid(unsafe_code)]

//! Landing page container.
//!
//! [`LandingPage`] is the single owner of the selected chain. Each
//! [`render`](LandingPage::render) derives one [`Theme`] and hands the same
//! value to the background, the hero, and the wallet affordance, so a frame
//! can never pair one chain's accent with another chain's foreground.
//!
//! # Example
//!
//! ```
//! use blockspeed_page::page::{Chain, LandingPage};
//! use blockspeed_page::wallet::StubWallet;
//! use blockspeed_theme::{ChainId, ThemeConfig};
//!
//! let mut page = LandingPage::new(&ThemeConfig::default());
//! page.on_chain_change(&Chain::new(ChainId::BASE, "Base"));
//! let frame = page.render(&StubWallet::disconnected());
//! assert_eq!(frame.theme.accent_hex, "#0052FF");
//! ```

use blockspeed_theme::{ChainId, Theme, ThemeConfig, ThemeEngine};

use crate::hero::{HeroFrame, HoverRegion, HoverState, PointerEvent, hero_frame};
use crate::layers::{LayerStyle, compose};
use crate::wallet::{WalletAction, WalletConnector, WalletView};

/// Chain record reported by the benchmark selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub id: ChainId,
    pub name: String,
}

impl Chain {
    pub fn new(id: ChainId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Interactive regions that receive pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerTarget {
    HeroIcon,
    ConnectButton,
}

/// Page state: selected chain, theme engine, and hover regions.
#[derive(Debug, Clone)]
pub struct LandingPage {
    selected: ChainId,
    engine: ThemeEngine,
    hero_hover: HoverRegion,
    button_hover: HoverRegion,
}

impl LandingPage {
    /// Page on the configured default chain with a built-in registry.
    #[must_use]
    pub fn new(config: &ThemeConfig) -> Self {
        Self::with_engine(config.default_chain, ThemeEngine::from_config(config))
    }

    #[must_use]
    pub fn with_engine(selected: ChainId, engine: ThemeEngine) -> Self {
        Self {
            selected,
            engine,
            hero_hover: HoverRegion::new("hero-icon"),
            button_hover: HoverRegion::new("connect-button"),
        }
    }

    pub fn selected_chain(&self) -> ChainId {
        self.selected
    }

    pub fn engine(&self) -> &ThemeEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ThemeEngine {
        &mut self.engine
    }

    /// Selector callback. Only the id is kept.
    pub fn on_chain_change(&mut self, chain: &Chain) {
        tracing::debug!(
            message = "chain.change",
            from = self.selected.get(),
            to = chain.id.get(),
            name = %chain.name
        );
        self.selected = chain.id;
    }

    pub fn select_chain(&mut self, id: ChainId) {
        self.selected = id;
    }

    pub fn hover_state(&self, target: PointerTarget) -> HoverState {
        match target {
            PointerTarget::HeroIcon => self.hero_hover.state(),
            PointerTarget::ConnectButton => self.button_hover.state(),
        }
    }

    /// Route a pointer event. Returns `true` if the target's state changed.
    pub fn pointer(&mut self, target: PointerTarget, event: PointerEvent) -> bool {
        match target {
            PointerTarget::HeroIcon => self.hero_hover.handle(event),
            PointerTarget::ConnectButton => self.button_hover.handle(event),
        }
    }

    /// Theme for the current selection.
    pub fn theme(&mut self) -> Theme {
        self.engine.theme_for(self.selected)
    }

    /// Resolve every themed region for one frame.
    pub fn render(&mut self, wallet: &impl WalletConnector) -> PageFrame {
        let theme = self.theme();
        let layers = compose(theme.accent);
        let hero = hero_frame(self.hero_hover.state(), &theme);
        let wallet = WalletView::render(wallet, &theme, self.button_hover.state());
        PageFrame {
            theme,
            layers,
            hero,
            wallet,
        }
    }

    /// Activate the wallet affordance as currently rendered.
    pub fn activate_wallet(&mut self, wallet: &mut impl WalletConnector) -> WalletAction {
        let theme = self.theme();
        WalletView::render(wallet, &theme, self.button_hover.state()).activate(wallet)
    }
}

impl Default for LandingPage {
    fn default() -> Self {
        Self::new(&ThemeConfig::default())
    }
}

/// One fully resolved render of the landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFrame {
    pub theme: Theme,
    pub layers: Vec<LayerStyle>,
    pub hero: HeroFrame,
    pub wallet: WalletView,
}
