use dioxus::prelude::*;

use crate::components::{ScrollNavbar, ToggleNavbar};
use crate::core::platform::Platform;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// The two alternative navbars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVariant {
    /// Hamburger button revealing a dropdown panel.
    Toggle,
    /// Scroll-aware bar plus a mobile bottom tab bar.
    Scroll,
}

impl NavVariant {
    /// Touch-first hosts get the tab bar; desktop windows get the dropdown.
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Web | Platform::Mobile => Self::Scroll,
            Platform::Desktop => Self::Toggle,
        }
    }
}

/// Stylesheet plus the selected variant.
#[component]
pub fn Navbar(variant: NavVariant) -> Element {
    crate::i18n::init();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        // Packaged native builds cannot rely on the asset server.
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        {match variant {
            NavVariant::Toggle => rsx! { ToggleNavbar {} },
            NavVariant::Scroll => rsx! { ScrollNavbar {} },
        }}
    }
}
