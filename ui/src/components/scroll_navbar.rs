use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::components::bar::{DesktopLinks, GlowBar, LoginButton};
use crate::components::icons::Icon;
use crate::components::logo::ProjectLogo;
use crate::core::motion;
use crate::core::nav::{TabEntry, TabItem};
use crate::core::platform::HostScroll;
use crate::core::scroll::{ManualScroll, ScrollSource, ScrollState, ScrollSubscription};
use crate::core::tabs::TabState;

/// Variant 2: scroll-aware top bar plus a bottom tab bar on mobile.
#[component]
pub fn ScrollNavbar() -> Element {
    let scrolled = use_scrolled();
    let tabs = use_signal(TabState::new);

    let enter = motion::navbar_enter();
    let tab_bar = motion::tab_bar_enter();
    let bar_state = if scrolled() {
        "navbar--scrolled"
    } else {
        "navbar--resting"
    };

    rsx! {
        nav {
            class: "{enter.class(false)} navbar navbar--scroll {bar_state}",
            style: "{enter.style()}",
            "aria-label": crate::t!("nav-primary-label"),

            div { class: "navbar__brand navbar__brand--desktop",
                ProjectLogo { onactivate: move |_| press_tab(tabs, TabItem::Home) }
            }
            div { class: "navbar__brand navbar__brand--mobile",
                ProjectLogo { mobile: true, onactivate: move |_| press_tab(tabs, TabItem::Home) }
            }

            DesktopLinks {}

            LoginButton {}

            GlowBar {}
        }

        nav {
            class: "{tab_bar.class(false)} tabbar",
            style: "{tab_bar.style()}",
            "aria-label": crate::t!("nav-tabbar-label"),
            for entry in tabs().entries() {
                TabButton {
                    key: "{entry.item.name()}",
                    entry: entry,
                    onpress: move |item| press_tab(tabs, item),
                }
            }
        }
    }
}

#[component]
fn TabButton(entry: TabEntry, onpress: EventHandler<TabItem>) -> Element {
    let press = motion::tab_press();
    let item = entry.item;
    let current = if entry.highlighted { "page" } else { "false" };

    rsx! {
        button {
            r#type: "button",
            class: "{press.class(false)} {entry.css_class()}",
            style: "{press.style()}",
            "aria-current": current,
            "data-tab": item.name(),
            onclick: move |_| onpress.call(item),
            Icon { glyph: item.glyph(), size: 22, class: "tabbar__icon" }
            span { class: "tabbar__label", {item.label()} }
        }
    }
}

fn press_tab(mut tabs: Signal<TabState>, item: TabItem) {
    let changed = tabs.with_mut(|t| t.press(item));
    if changed {
        debug!(active = item.name(), "tab selected");
    }
}

/// Track whether the viewport is scrolled past the threshold.
///
/// Follows the host window unless an ancestor provides a [`ManualScroll`]
/// context, which headless renders use to drive the bar.
pub fn use_scrolled() -> ReadOnlySignal<bool> {
    let manual = try_use_context::<ManualScroll>();
    use_scrolled_with(move || HostScroll::resolve(manual))
}

/// [`use_scrolled`] over an explicit source. `make` runs once, after the
/// first render; the listener is released when the caller unmounts.
pub fn use_scrolled_with<S, F>(make: F) -> ReadOnlySignal<bool>
where
    S: ScrollSource + 'static,
    F: FnOnce() -> S + 'static,
{
    let mut scrolled = use_signal(|| false);
    let slot: Rc<RefCell<Option<ScrollSubscription<S>>>> = use_hook(|| Rc::new(RefCell::new(None)));

    {
        let slot = slot.clone();
        let mut make = Some(make);
        use_effect(move || {
            if slot.borrow().is_some() {
                return;
            }
            let Some(make) = make.take() else {
                return;
            };
            let mut state = ScrollState::default();
            let acquired = ScrollSubscription::acquire(make(), move |offset| {
                if state.observe(offset) {
                    scrolled.set(state.is_scrolled());
                }
            });
            match acquired {
                Ok(subscription) => {
                    debug!("scroll listener attached");
                    *slot.borrow_mut() = Some(subscription);
                }
                Err(err) => warn!(%err, "scroll tracking unavailable"),
            }
        });
    }

    use_drop(move || {
        if slot.borrow_mut().take().is_some() {
            debug!("scroll listener released");
        }
    });

    scrolled.into()
}
