#![forbid(unsafe_code)]

//! Wallet connect affordance, re-skinned with the active theme.
//!
//! The wallet widget itself (account discovery, modals, signing) lives behind
//! [`WalletConnector`]. This module only decides what the affordance looks
//! like for the widget's current state and routes activation to the right
//! modal.

use blockspeed_theme::{ChainId, Rgb, Theme};

use crate::hero::HoverState;

pub const CONNECT_LABEL: &str = "CONNECT WALLET";

/// Classes of the neutral pill shown once an account is connected.
pub const ACCOUNT_PILL_CLASS: &str =
    "bg-zinc-800 border border-zinc-700 text-white hover:bg-zinc-700";

/// Alpha bytes appended to the accent for the button shadow.
const SHADOW_ALPHA_IDLE: u8 = 0x20;
const SHADOW_ALPHA_HOVER: u8 = 0x30;

/// Account reported by the wallet widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletAccount {
    /// Label shown in the pill (ENS name or shortened address).
    pub display_name: String,
}

impl WalletAccount {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }
}

/// Boundary to the external wallet widget.
pub trait WalletConnector {
    /// The widget has finished hydrating and can take input.
    fn mounted(&self) -> bool;
    fn account(&self) -> Option<&WalletAccount>;
    fn chain(&self) -> Option<ChainId>;
    fn open_connect_modal(&mut self);
    fn open_account_modal(&mut self);

    /// Current readiness/connection state.
    fn connection_state(&self) -> ConnectionState {
        if !self.mounted() {
            return ConnectionState::NotReady;
        }
        match (self.account(), self.chain()) {
            (Some(account), Some(chain)) => ConnectionState::Connected {
                account: account.clone(),
                chain,
            },
            (Some(_), None) => ConnectionState::Connecting,
            (None, _) => ConnectionState::Disconnected,
        }
    }
}

/// Readiness and connection of the wallet widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    NotReady,
    Disconnected,
    /// Account known, chain not reported yet.
    Connecting,
    Connected { account: WalletAccount, chain: ChainId },
}

impl ConnectionState {
    pub const fn is_ready(&self) -> bool {
        !matches!(self, Self::NotReady)
    }

    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }
}

/// Accent-styled connect button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectButton {
    pub label: &'static str,
    pub accent: Rgb,
    pub accent_hex: String,
    pub foreground_hex: &'static str,
    pub hover: HoverState,
}

impl ConnectButton {
    pub fn new(theme: &Theme, hover: HoverState) -> Self {
        Self {
            label: CONNECT_LABEL,
            accent: theme.accent,
            accent_hex: theme.accent_hex.clone(),
            foreground_hex: theme.foreground_hex(),
            hover,
        }
    }

    pub fn box_shadow(&self) -> String {
        match self.hover {
            HoverState::Idle => format!(
                "0 2px 10px {}",
                self.accent.hex_with_alpha_byte(SHADOW_ALPHA_IDLE)
            ),
            HoverState::Hover => format!(
                "0 4px 15px {}",
                self.accent.hex_with_alpha_byte(SHADOW_ALPHA_HOVER)
            ),
        }
    }

    pub const fn transform(&self) -> &'static str {
        match self.hover {
            HoverState::Idle => "translateY(0px)",
            HoverState::Hover => "translateY(-1px)",
        }
    }

    pub fn css(&self) -> String {
        format!(
            "background-color: {hex}; border-color: {hex}; color: {fg}; \
             box-shadow: {shadow}; transform: {transform};",
            hex = self.accent_hex,
            fg = self.foreground_hex,
            shadow = self.box_shadow(),
            transform = self.transform()
        )
    }
}

/// Neutral pill showing the connected account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountPill {
    pub display_name: String,
    pub chain: ChainId,
}

impl AccountPill {
    pub const fn class(&self) -> &'static str {
        ACCOUNT_PILL_CLASS
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletControl {
    Connect(ConnectButton),
    Account(AccountPill),
}

/// What activating the affordance does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletAction {
    None,
    OpenConnect,
    OpenAccount,
}

/// Rendered affordance for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletView {
    /// Placeholder that keeps its layout space but takes no input.
    pub hidden: bool,
    pub control: WalletControl,
}

impl WalletView {
    /// Resolve the affordance from the widget state.
    ///
    /// A widget that is not ready still yields the connect button so the
    /// header does not shift when it appears.
    pub fn render(
        wallet: &impl WalletConnector,
        theme: &Theme,
        button_hover: HoverState,
    ) -> Self {
        match wallet.connection_state() {
            ConnectionState::Connected { account, chain } => Self {
                hidden: false,
                control: WalletControl::Account(AccountPill {
                    display_name: account.display_name,
                    chain,
                }),
            },
            state => {
                let hidden = !state.is_ready();
                // A hidden button cannot be hovered.
                let hover = if hidden { HoverState::Idle } else { button_hover };
                Self {
                    hidden,
                    control: WalletControl::Connect(ConnectButton::new(theme, hover)),
                }
            }
        }
    }

    pub fn is_interactive(&self) -> bool {
        !self.hidden
    }

    /// Wrapper styles; empty once the widget is ready.
    pub const fn wrapper_css(&self) -> &'static str {
        if self.hidden {
            "opacity: 0; pointer-events: none; user-select: none;"
        } else {
            ""
        }
    }

    pub fn action(&self) -> WalletAction {
        match (&self.control, self.hidden) {
            (_, true) => WalletAction::None,
            (WalletControl::Connect(_), false) => WalletAction::OpenConnect,
            (WalletControl::Account(_), false) => WalletAction::OpenAccount,
        }
    }

    /// Dispatch activation to the widget. Ignored while not ready.
    pub fn activate(&self, wallet: &mut impl WalletConnector) -> WalletAction {
        let action = self.action();
        match action {
            WalletAction::None => {
                tracing::debug!(message = "wallet.activate.ignored", reason = "not ready");
            }
            WalletAction::OpenConnect => wallet.open_connect_modal(),
            WalletAction::OpenAccount => wallet.open_account_modal(),
        }
        action
    }
}

/// In-memory [`WalletConnector`] with controllable state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StubWallet {
    pub mounted: bool,
    pub account: Option<WalletAccount>,
    pub chain: Option<ChainId>,
    pub connect_modal_opens: u32,
    pub account_modal_opens: u32,
}

impl StubWallet {
    pub fn unmounted() -> Self {
        Self::default()
    }

    pub fn disconnected() -> Self {
        Self {
            mounted: true,
            ..Self::default()
        }
    }

    pub fn connecting(display_name: impl Into<String>) -> Self {
        Self {
            mounted: true,
            account: Some(WalletAccount::new(display_name)),
            ..Self::default()
        }
    }

    pub fn connected(display_name: impl Into<String>, chain: ChainId) -> Self {
        Self {
            mounted: true,
            account: Some(WalletAccount::new(display_name)),
            chain: Some(chain),
            ..Self::default()
        }
    }
}

impl WalletConnector for StubWallet {
    fn mounted(&self) -> bool {
        self.mounted
    }

    fn account(&self) -> Option<&WalletAccount> {
        self.account.as_ref()
    }

    fn chain(&self) -> Option<ChainId> {
        self.chain
    }

    fn open_connect_modal(&mut self) {
        self.connect_modal_opens += 1;
    }

    fn open_account_modal(&mut self) {
        self.account_modal_opens += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockspeed_theme::{ChainDescriptor, ChainRegistry, derive_theme};
    use tracing_test::traced_test;

    fn theme(hex: &'static str) -> Theme {
        let registry =
            ChainRegistry::empty().with_chain(ChainDescriptor::new(ChainId(7), "T", hex));
        derive_theme(&registry, ChainId(7))
    }

    fn button(view: &WalletView) -> &ConnectButton {
        match &view.control {
            WalletControl::Connect(button) => button,
            WalletControl::Account(_) => panic!("expected connect button"),
        }
    }

    #[test]
    fn disconnected_button_uses_theme() {
        let view = WalletView::render(
            &StubWallet::disconnected(),
            &theme("#10B981"),
            HoverState::Idle,
        );
        assert!(view.is_interactive());
        assert_eq!(view.wrapper_css(), "");
        assert_eq!(
            button(&view).css(),
            "background-color: #10B981; border-color: #10B981; color: #ffffff; \
             box-shadow: 0 2px 10px #10B98120; transform: translateY(0px);"
        );
        assert_eq!(button(&view).label, "CONNECT WALLET");
    }

    #[test]
    fn hovered_button_lifts() {
        let view = WalletView::render(
            &StubWallet::disconnected(),
            &theme("#FFFFFF"),
            HoverState::Hover,
        );
        let button = button(&view);
        assert_eq!(button.foreground_hex, "#000000");
        assert_eq!(button.box_shadow(), "0 4px 15px #FFFFFF30");
        assert_eq!(button.transform(), "translateY(-1px)");
    }

    #[test]
    fn shadow_tracks_accent_alpha_bytes() {
        let theme = theme("#627eea");
        let idle = ConnectButton::new(&theme, HoverState::Idle);
        let hover = ConnectButton::new(&theme, HoverState::Hover);
        assert_eq!(idle.accent, Rgb::new(98, 126, 234));
        assert_eq!(
            idle.box_shadow(),
            format!("0 2px 10px {}", theme.accent_hex_alpha(0x20))
        );
        assert_eq!(hover.box_shadow(), "0 4px 15px #627EEA30");
    }

    #[test]
    fn not_ready_is_hidden_placeholder() {
        let mut wallet = StubWallet::unmounted();
        let view = WalletView::render(&wallet, &theme("#10B981"), HoverState::Hover);
        assert!(view.hidden);
        assert_eq!(view.wrapper_css(), "opacity: 0; pointer-events: none; user-select: none;");
        assert_eq!(button(&view).hover, HoverState::Idle);
        assert_eq!(view.activate(&mut wallet), WalletAction::None);
        assert_eq!(wallet.connect_modal_opens, 0);
    }

    #[test]
    fn account_without_chain_is_not_connected() {
        let mut wallet = StubWallet::connecting("vitalik.eth");
        assert_eq!(wallet.connection_state(), ConnectionState::Connecting);
        let view = WalletView::render(&wallet, &theme("#10B981"), HoverState::Idle);
        assert!(!view.hidden);
        assert_eq!(view.activate(&mut wallet), WalletAction::OpenConnect);
        assert!(!StubWallet::disconnected().connection_state().is_connected());
    }

    #[test]
    fn connected_shows_account_pill() {
        let mut wallet = StubWallet::connected("0xAb…cD", ChainId::BASE);
        let view = WalletView::render(&wallet, &theme("#0052FF"), HoverState::Idle);
        match &view.control {
            WalletControl::Account(pill) => {
                assert_eq!(pill.display_name, "0xAb…cD");
                assert_eq!(pill.chain, ChainId::BASE);
                assert_eq!(pill.class(), ACCOUNT_PILL_CLASS);
            }
            WalletControl::Connect(_) => panic!("expected account pill"),
        }
        assert_eq!(view.activate(&mut wallet), WalletAction::OpenAccount);
        assert_eq!((wallet.connect_modal_opens, wallet.account_modal_opens), (0, 1));
    }

    #[test]
    fn disconnected_activation_opens_connect() {
        let mut wallet = StubWallet::disconnected();
        let view = WalletView::render(&wallet, &theme("#10B981"), HoverState::Idle);
        assert_eq!(view.activate(&mut wallet), WalletAction::OpenConnect);
        assert_eq!(wallet.connect_modal_opens, 1);
    }

    #[test]
    #[traced_test]
    fn ignored_activation_is_logged() {
        let mut wallet = StubWallet::unmounted();
        let view = WalletView::render(&wallet, &theme("#10B981"), HoverState::Idle);
        view.activate(&mut wallet);
        assert!(logs_contain("wallet.activate.ignored"));
    }
}
