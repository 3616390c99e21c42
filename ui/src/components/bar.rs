//! Pieces shared by both top bars.

use dioxus::prelude::*;

use crate::components::icons::Icon;
use crate::core::glyph::Glyph;
use crate::core::motion;
use crate::core::nav::{desktop_links, LOGIN_HREF};

/// Horizontal link list, hidden below the desktop breakpoint.
#[component]
pub fn DesktopLinks() -> Element {
    rsx! {
        ul { class: "navbar__links",
            for entry in desktop_links() {
                DesktopLink { key: "{entry.link.name()}", name: entry.link.name(), label: entry.link.label(), href: entry.link.href(), delay_secs: entry.delay_secs }
            }
        }
    }
}

#[component]
fn DesktopLink(name: &'static str, label: String, href: &'static str, delay_secs: f64) -> Element {
    let enter = motion::desktop_link(delay_secs);

    rsx! {
        li {
            class: "{enter.class(false)} navbar__link-item",
            style: "{enter.style()}",
            "data-link": name,
            a { class: "navbar__link", href: href,
                "{label}"
                span { class: "navbar__underline" }
            }
        }
    }
}

/// Desktop call-to-action.
#[component]
pub fn LoginButton() -> Element {
    let cta = motion::login_button();

    rsx! {
        a {
            class: "{cta.class(false)} navbar__login",
            style: "{cta.style()}",
            href: LOGIN_HREF,
            Icon { glyph: Glyph::User, size: 16, class: "navbar__login-icon" }
            {crate::t!("nav-login")}
        }
    }
}

/// Breathing glow under the bar.
#[component]
pub fn GlowBar() -> Element {
    let glow = motion::glow_pulse();

    rsx! {
        div {
            class: "{glow.class(false)} navbar__glow",
            style: "{glow.style()}",
            "aria-hidden": "true",
        }
    }
}
