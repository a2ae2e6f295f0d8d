#![forbid(unsafe_code)]

//! Static HTML rendering of a [`PageFrame`].

use crate::hero::{HERO_SUBTITLE, HERO_TITLE};
use crate::layers::{LINES_OVERLAY_SRC, LayerKind};
use crate::page::PageFrame;
use crate::viewport::Breakpoint;
use crate::wallet::WalletControl;

const STYLESHEET: &str = r"  <style>
    body { margin: 0; min-height: 100vh; background: #000; color: #fff; font-family: ui-monospace, SFMono-Regular, Menlo, monospace; }
    .backdrop { position: fixed; inset: 0; overflow: hidden; z-index: -1; }
    .hidden { display: none; }
    @media (min-width: 768px) { .md\:block { display: block; } }
    @media (min-width: 1024px) { .lg\:block { display: block; } }
    @keyframes pulse { 50% { opacity: .5; } }
    .animate-pulse-slow { animation: pulse 8s cubic-bezier(0.4, 0, 0.6, 1) infinite; }
    .animate-pulse-slower { animation: pulse 12s cubic-bezier(0.4, 0, 0.6, 1) infinite; }
    .bg-grid-pattern { position: absolute; inset: 0; background-image: linear-gradient(#fff 1px, transparent 1px), linear-gradient(90deg, #fff 1px, transparent 1px); background-size: 40px 40px; }
    .bg-stars { position: absolute; inset: 0; background-image: radial-gradient(1px 1px at 20px 30px, #fff, transparent), radial-gradient(1px 1px at 80px 120px, #fff, transparent), radial-gradient(1px 1px at 150px 60px, #fff, transparent); background-size: 200px 200px; }
    header { display: flex; justify-content: flex-end; padding: 16px 24px; }
    header button { font: inherit; padding: 8px 16px; border: 1px solid; border-radius: 6px; cursor: pointer; transition: all 200ms; }
    .bg-zinc-800 { background: #27272a; }
    .border-zinc-700 { border-color: #3f3f46; }
    .text-white { color: #fff; }
    .hover\:bg-zinc-700:hover { background: #3f3f46; }
    .hero { display: flex; flex-direction: column; align-items: center; text-align: center; padding: 64px 16px 32px; }
    .hero-icon { position: relative; width: 80px; height: 80px; margin-bottom: 32px; }
  </style>
";

fn html_escape(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}

fn class_attr(class: &str) -> String {
    if class.is_empty() {
        String::new()
    } else {
        format!(" class=\"{class}\"")
    }
}

impl PageFrame {
    /// Render the complete landing page document.
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(16 * 1024);

        html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"utf-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        html.push_str(&format!(
            "  <title>{} | {}</title>\n",
            HERO_TITLE,
            html_escape(&self.theme.display_name)
        ));
        html.push_str(STYLESHEET);
        html.push_str("</head>\n<body>\n");

        self.push_backdrop(&mut html);
        self.push_header(&mut html);
        self.push_hero(&mut html);

        html.push_str(&format!(
            "<section id=\"benchmark\" data-chain-id=\"{}\" data-chain-name=\"{}\"></section>\n",
            self.theme.chain_id,
            html_escape(&self.theme.display_name)
        ));
        html.push_str("</body>\n</html>\n");
        html
    }

    /// Background layers visible at `bp`, by name.
    pub fn visible_layers(&self, bp: Breakpoint) -> Vec<&'static str> {
        self.layers
            .iter()
            .filter(|layer| layer.is_visible(bp))
            .map(|layer| layer.name())
            .collect()
    }

    fn push_backdrop(&self, html: &mut String) {
        html.push_str("<div class=\"backdrop\" aria-hidden=\"true\">\n");
        for layer in &self.layers {
            let class = class_attr(&layer.class());
            if layer.spec.kind == LayerKind::ImageOverlay {
                html.push_str(&format!(
                    "  <img data-layer=\"{}\" src=\"{LINES_OVERLAY_SRC}\" alt=\"\"{class} style=\"{}\">\n",
                    layer.name(),
                    layer.css()
                ));
            } else {
                html.push_str(&format!(
                    "  <div data-layer=\"{}\"{class} style=\"{}\"></div>\n",
                    layer.name(),
                    layer.css()
                ));
            }
        }
        html.push_str("</div>\n");
    }

    fn push_header(&self, html: &mut String) {
        html.push_str("<header>\n");
        if self.wallet.hidden {
            html.push_str(&format!(
                "  <div aria-hidden=\"true\" style=\"{}\">\n",
                self.wallet.wrapper_css()
            ));
        } else {
            html.push_str("  <div>\n");
        }
        match &self.wallet.control {
            WalletControl::Connect(button) => {
                html.push_str(&format!(
                    "    <button type=\"button\" data-action=\"connect\" style=\"{}\">{}</button>\n",
                    button.css(),
                    button.label
                ));
            }
            WalletControl::Account(pill) => {
                html.push_str(&format!(
                    "    <button type=\"button\" data-action=\"account\" class=\"{}\">{}</button>\n",
                    pill.class(),
                    html_escape(&pill.display_name)
                ));
            }
        }
        html.push_str("  </div>\n</header>\n");
    }

    fn push_hero(&self, html: &mut String) {
        html.push_str(&format!(
            "<section class=\"hero\" data-hover=\"{}\">\n  <div class=\"hero-icon\">\n",
            self.hero.state.as_str()
        ));
        for glow in &self.hero.glows {
            html.push_str(&format!(
                "    <div data-glow=\"{}\"{} style=\"{}\"></div>\n",
                glow.spec.name,
                class_attr(&glow.class()),
                glow.css()
            ));
        }
        html.push_str("    ");
        html.push_str(&self.hero.icon.svg());
        html.push_str("\n  </div>\n");
        html.push_str(&format!("  <h1>{HERO_TITLE}</h1>\n  <p>{HERO_SUBTITLE}</p>\n"));
        html.push_str("</section>\n");
    }
}

#[cfg(test)]
mod tests {
    use crate::hero::PointerEvent;
    use crate::page::{LandingPage, PointerTarget};
    use crate::viewport::Breakpoint;
    use crate::wallet::StubWallet;
    use blockspeed_theme::{ChainId, ThemeConfig};

    #[test]
    fn document_contains_every_region() {
        let mut page = LandingPage::new(&ThemeConfig::default());
        let html = page.render(&StubWallet::disconnected()).to_html();
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>BLOCKCHAIN SPEED TESTER | Ethereum</title>"));
        assert_eq!(html.matches("data-layer=").count(), 17);
        assert_eq!(html.matches("data-glow=").count(), 3);
        assert!(html.contains("src=\"/3d-lines.svg\""));
        assert!(html.contains(">CONNECT WALLET</button>"));
        assert!(html.contains("data-chain-id=\"1\""));
        assert!(html.contains("MEASURE AND COMPARE TRANSACTION SPEEDS"));
    }

    #[test]
    fn stylesheet_has_one_rule_per_line() {
        let mut page = LandingPage::new(&ThemeConfig::default());
        let html = page.render(&StubWallet::disconnected()).to_html();
        assert!(html.contains("  <style>\n    body {"));
        assert!(html.contains("\n    .hidden { display: none; }\n"));
        assert!(
            html.contains("\n    @media (min-width: 768px) { .md\\:block { display: block; } }\n")
        );
        assert!(html.contains("\n  </style>\n</head>"));
    }

    #[test]
    fn overlay_image_spans_the_viewport() {
        let mut page = LandingPage::new(&ThemeConfig::default());
        let html = page.render(&StubWallet::disconnected()).to_html();
        let img = html
            .lines()
            .find(|line| line.contains("<img data-layer=\"lines-overlay\""))
            .expect("overlay element");
        assert!(img.contains("width: 100%; object-fit: cover; object-position: bottom;"));
        assert!(img.contains("height: 600px;"));
    }

    #[test]
    fn account_label_is_escaped() {
        let mut page = LandingPage::new(&ThemeConfig::default());
        let wallet = StubWallet::connected("<script>alert(1)</script>", ChainId::ETHEREUM);
        let html = page.render(&wallet).to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("data-action=\"account\""));
    }

    #[test]
    fn hidden_wallet_keeps_placeholder() {
        let mut page = LandingPage::new(&ThemeConfig::default());
        let html = page.render(&StubWallet::unmounted()).to_html();
        assert!(html.contains(
            "<div aria-hidden=\"true\" style=\"opacity: 0; pointer-events: none; user-select: none;\">"
        ));
        assert!(html.contains("CONNECT WALLET"));
    }

    #[test]
    fn hover_state_is_reflected() {
        let mut page = LandingPage::new(&ThemeConfig::default());
        page.pointer(PointerTarget::HeroIcon, PointerEvent::Enter);
        let html = page.render(&StubWallet::disconnected()).to_html();
        assert!(html.contains("data-hover=\"hover\""));
        assert!(html.contains("drop-shadow(0 0 20px rgba(98, 126, 234, 0.6))"));
    }

    #[test]
    fn fewer_layers_on_small_viewports() {
        let mut page = LandingPage::new(&ThemeConfig::default());
        let frame = page.render(&StubWallet::disconnected());
        let base = frame.visible_layers(Breakpoint::Base).len();
        let md = frame.visible_layers(Breakpoint::Md).len();
        let lg = frame.visible_layers(Breakpoint::Lg).len();
        assert!(base <= md && md <= lg);
        assert_eq!(lg, 17);
    }
}
