#![forbid(unsafe_code)]

//! Chain-themed landing page composition.
//!
//! # Role in Blockspeed
//! `blockspeed-page` turns one derived [`Theme`](blockspeed_theme::Theme)
//! into every visual the landing page shows: the background layer stack, the
//! hero icon and its hover glows, and the wallet connect affordance.
//!
//! # This crate provides
//! - [`LandingPage`], the single owner of the selected chain.
//! - [`compose`] over the static [`BACKGROUND_LAYERS`] table.
//! - [`HoverState`] and the [`GLOW_LAYERS`] escalation table.
//! - [`WalletConnector`] and [`WalletView`] for the connect affordance.
//! - [`PageFrame::to_html`] for static markup.

/// Hero icon, glows, and hover state.
pub mod hero;
/// Static HTML rendering.
pub mod html;
/// Background layer stack.
pub mod layers;
/// Landing page container.
pub mod page;
/// Responsive breakpoints.
pub mod viewport;
/// Wallet connect affordance.
pub mod wallet;

pub use hero::{
    GLOW_LAYERS, GlowSpec, GlowStyle, HeroFrame, HoverRegion, HoverState, IconStyle, PointerEvent,
    VisualTarget, hero_frame,
};
pub use layers::{BACKGROUND_LAYERS, LayerKind, LayerSpec, LayerStyle, accent_alphas, compose};
pub use page::{Chain, LandingPage, PageFrame, PointerTarget};
pub use viewport::{Breakpoint, Visibility};
pub use wallet::{
    ConnectButton, ConnectionState, StubWallet, WalletAccount, WalletAction, WalletConnector,
    WalletControl, WalletView,
};
