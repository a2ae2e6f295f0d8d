//! Property-based invariant tests for page composition.
//!
//! 1. Recoloring never touches layer order, geometry, or alpha.
//! 2. Hero visuals depend only on the final hover state.
//! 3. Every frame pairs the accent with its own foreground.

use blockspeed_page::hero::{HoverState, PointerEvent, hero_frame};
use blockspeed_page::layers::{BACKGROUND_LAYERS, accent_alphas, compose};
use blockspeed_page::page::{Chain, LandingPage, PointerTarget};
use blockspeed_page::wallet::{StubWallet, WalletControl};
use blockspeed_theme::{
    BUILTIN_CHAINS, ChainDescriptor, ChainId, ChainRegistry, Foreground, Rgb, ThemeConfig,
    derive_theme,
};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

fn event_strategy() -> impl Strategy<Value = PointerEvent> {
    prop_oneof![Just(PointerEvent::Enter), Just(PointerEvent::Leave)]
}

fn chain_id_strategy() -> impl Strategy<Value = ChainId> {
    prop_oneof![
        (0..BUILTIN_CHAINS.len()).prop_map(|i| BUILTIN_CHAINS[i].id),
        any::<u64>().prop_map(ChainId),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// Layer stack
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn recolor_preserves_structure(a in rgb_strategy(), b in rgb_strategy()) {
        let first = compose(a);
        let second = compose(b);
        prop_assert_eq!(first.len(), BACKGROUND_LAYERS.len());
        for (x, y) in first.iter().zip(&second) {
            prop_assert!(std::ptr::eq(x.spec, y.spec));
            prop_assert_eq!(x.class(), y.class());
            prop_assert_eq!(x.tint.map(|t| t.alpha), y.tint.map(|t| t.alpha));
        }
    }

    #[test]
    fn tints_carry_the_accent(rgb in rgb_strategy()) {
        let tinted: Vec<f32> = compose(rgb)
            .iter()
            .filter_map(|layer| layer.tint)
            .inspect(|tint| assert_eq!(tint.rgb, rgb))
            .map(|tint| tint.alpha)
            .collect();
        prop_assert_eq!(tinted, accent_alphas());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Hover
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hero_depends_only_on_final_state(
        events in proptest::collection::vec(event_strategy(), 0..64),
        id in chain_id_strategy(),
    ) {
        let theme = derive_theme(&ChainRegistry::builtin(), id);
        let mut page = LandingPage::new(&ThemeConfig::default().with_default_chain(id));
        for event in &events {
            page.pointer(PointerTarget::HeroIcon, *event);
        }
        let expected = match events.last() {
            Some(PointerEvent::Enter) => HoverState::Hover,
            _ => HoverState::Idle,
        };
        let frame = page.render(&StubWallet::disconnected());
        prop_assert_eq!(frame.hero.state, expected);
        prop_assert_eq!(frame.hero, hero_frame(expected, &theme));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Whole frame
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn frame_pairs_accent_with_its_foreground(
        ids in proptest::collection::vec(chain_id_strategy(), 1..16),
    ) {
        let mut page = LandingPage::default();
        let wallet = StubWallet::disconnected();
        for id in ids {
            page.on_chain_change(&Chain::new(id, "selected"));
            let frame = page.render(&wallet);
            prop_assert_eq!(frame.theme.chain_id, id);
            prop_assert!(!frame.theme.accent_hex.is_empty());
            let expected = if frame.theme.luminance > 0.5 {
                Foreground::Black
            } else {
                Foreground::White
            };
            prop_assert_eq!(frame.theme.foreground, expected);
            match &frame.wallet.control {
                WalletControl::Connect(button) => {
                    prop_assert_eq!(&button.accent_hex, &frame.theme.accent_hex);
                    prop_assert_eq!(button.foreground_hex, expected.hex());
                }
                WalletControl::Account(_) => prop_assert!(false, "disconnected wallet"),
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// End-to-end scenarios
// ═════════════════════════════════════════════════════════════════════════

fn page_for(hex: &'static str) -> LandingPage {
    let registry = ChainRegistry::empty().with_chain(ChainDescriptor::new(ChainId(77), "Probe", hex));
    LandingPage::with_engine(ChainId(77), blockspeed_theme::ThemeEngine::new(registry))
}

#[test]
fn black_accent_renders_white_text() {
    let frame = page_for("#000000").render(&StubWallet::disconnected());
    assert_eq!(frame.theme.foreground, Foreground::White);
    assert!(frame.to_html().contains("color: #ffffff;"));
}

#[test]
fn white_accent_renders_black_text() {
    let frame = page_for("#FFFFFF").render(&StubWallet::disconnected());
    assert_eq!(frame.theme.foreground, Foreground::Black);
    assert!(frame.to_html().contains("color: #000000;"));
}

#[test]
fn unknown_chain_renders_complete_page() {
    let mut page = LandingPage::default();
    page.on_chain_change(&Chain::new(ChainId(123_456_789), "Mystery"));
    let frame = page.render(&StubWallet::disconnected());
    assert!(frame.theme.is_fallback);
    assert_eq!(frame.theme.accent_hex, "#10B981");
    let html = frame.to_html();
    assert!(html.contains("rgba(16, 185, 129, 0.15)"));
    assert!(html.contains("data-chain-id=\"123456789\""));
}
