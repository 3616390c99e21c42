use dioxus::prelude::*;

use crate::core::nav::NavLink;

/// Demo landing page. Tall enough that every shell can scroll past the
/// navbar's threshold, with one anchored section per link.
#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "page page-home",
            header { class: "page-home__hero",
                h1 { {crate::t!("home-title")} }
                p { {crate::t!("home-intro")} }
            }

            for link in NavLink::ALL {
                Section { key: "{link.name()}", link: link }
            }
        }
    }
}

#[component]
fn Section(link: NavLink) -> Element {
    let (title, body) = match link {
        NavLink::Work => (crate::t!("home-section-work"), crate::t!("home-section-work-body")),
        NavLink::About => (crate::t!("home-section-about"), crate::t!("home-section-about-body")),
        NavLink::Playground => (
            crate::t!("home-section-playground"),
            crate::t!("home-section-playground-body"),
        ),
        NavLink::Resource => (
            crate::t!("home-section-resource"),
            crate::t!("home-section-resource-body"),
        ),
    };
    let anchor = link.href().trim_start_matches('#');

    rsx! {
        section { id: "{anchor}", class: "page-home__section",
            h2 { "{title}" }
            p { "{body}" }
        }
    }
}
