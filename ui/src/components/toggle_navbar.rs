use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::bar::{DesktopLinks, GlowBar, LoginButton};
use crate::components::icons::Icon;
use crate::components::logo::ProjectLogo;
use crate::core::glyph::Glyph;
use crate::core::menu::{MenuState, PanelPresence, PANEL_EXIT_MS};
use crate::core::motion;
use crate::core::nav::{menu_entries, MenuEntry};
use crate::core::timing;

/// Variant 1: floating top bar whose mobile menu is a dropdown panel.
#[component]
pub fn ToggleNavbar() -> Element {
    let menu = use_signal(MenuState::new);
    let panel = use_signal(PanelPresence::default);

    let open = menu().is_open();
    let phase = panel().phase();
    let enter = motion::navbar_enter();
    let panel_motion = motion::menu_panel();
    let toggle_label = if open {
        crate::t!("nav-toggle-close")
    } else {
        crate::t!("nav-toggle-open")
    };
    let toggle_glyph = if open { Glyph::Close } else { Glyph::Menu };

    rsx! {
        nav {
            class: "{enter.class(false)} navbar navbar--toggle",
            style: "{enter.style()}",
            "aria-label": crate::t!("nav-primary-label"),

            ProjectLogo {}

            DesktopLinks {}

            LoginButton {}

            button {
                r#type: "button",
                class: "navbar__toggle",
                "aria-expanded": "{open}",
                "aria-label": "{toggle_label}",
                onclick: move |_| {
                    let mut next = menu();
                    next.toggle();
                    apply_menu(menu, panel, next);
                },
                Icon { glyph: toggle_glyph, size: 28 }
            }

            if phase.is_mounted() {
                div {
                    class: "{panel_motion.class(phase.is_exiting())} navbar__panel",
                    style: "{panel_motion.style()}",
                    "data-motion": panel_motion.to_json().unwrap_or_default(),
                    ul { class: "navbar__panel-list",
                        for (index, entry) in menu_entries().into_iter().enumerate() {
                            MenuRow {
                                key: "{index}",
                                index: index,
                                entry: entry,
                                onselect: move |_| {
                                    let mut next = menu();
                                    next.select();
                                    apply_menu(menu, panel, next);
                                },
                            }
                        }
                    }
                }
            }

            GlowBar {}
        }
    }
}

#[component]
fn MenuRow(index: usize, entry: MenuEntry, onselect: EventHandler<MouseEvent>) -> Element {
    let motion = motion::menu_item(index, entry.is_login());
    let class = if entry.is_login() {
        "navbar__panel-login"
    } else {
        "navbar__panel-link"
    };

    rsx! {
        li {
            class: "{motion.class(false)} navbar__panel-item",
            style: "{motion.style()}",
            a {
                class: "{class}",
                href: entry.href(),
                onclick: move |evt| onselect.call(evt),
                {entry.label()}
            }
        }
    }
}

/// Commit the menu flag and keep the panel mounted through its exit.
fn apply_menu(mut menu: Signal<MenuState>, mut panel: Signal<PanelPresence>, next: MenuState) {
    if *menu.peek() == next {
        return;
    }
    debug!(open = next.is_open(), "menu toggled");
    menu.set(next);

    let exit = panel.with_mut(|p| p.sync(next.is_open()));
    if let Some(generation) = exit {
        spawn(async move {
            timing::sleep_ms(PANEL_EXIT_MS).await;
            if panel.with_mut(|p| p.finish_exit(generation)) {
                debug!(generation, "menu panel unmounted");
            }
        });
    }
}
