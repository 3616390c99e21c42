/*!
Selector lint for the navbar stylesheet.

Components build class names in Rust (`Transition::class`, `TabEntry::css_class`,
the `navbar__*` literals) and the stylesheet must keep matching them. A
renamed selector would only show up as unstyled markup at runtime, so the
contract is checked here with plain substring matches.

If you rename a class, update the component markup and `REQUIRED_SELECTORS`
together.
*/

use ui::core::motion;
use ui::core::nav::{tab_entries, TabItem};

const NAVBAR_CSS: &str = include_str!("../assets/styling/navbar.css");

const REQUIRED_SELECTORS: &[&str] = &[
    // Motion engine
    ".motion {",
    ".motion--exit",
    ".motion--loop",
    ".motion--hover:hover",
    ".motion--tap:active",
    "@keyframes motion-enter",
    "@keyframes motion-exit",
    "@keyframes motion-pulse",
    // Top bar
    ".navbar {",
    ".navbar--scrolled",
    ".navbar--resting",
    ".navbar__links",
    ".navbar__link:hover .navbar__underline",
    ".navbar__login",
    ".navbar__login-icon",
    ".navbar__toggle",
    ".navbar__panel",
    ".navbar__panel-link",
    ".navbar__panel-login",
    ".navbar__glow",
    ".navbar__brand--mobile",
    // Logo
    ".logo {",
    ".logo__mark",
    ".logo__wordmark",
    ".logo__wordmark--compact",
    ".logo__tagline",
    // Tab bar
    ".tabbar {",
    ".tabbar__item {",
    ".tabbar__item--active",
    // Desktop breakpoint
    "@media (min-width: 1024px)",
];

#[test]
fn stylesheet_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !NAVBAR_CSS.contains(**sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} selector(s) in navbar.css:\n{:?}",
        missing.len(),
        missing
    );
}

#[test]
fn every_motion_var_rendered_by_presets_is_consumed() {
    let presets = [
        motion::navbar_enter(),
        motion::desktop_link(0.12),
        motion::login_button(),
        motion::logo_mark(),
        motion::brand_word(),
        motion::menu_panel(),
        motion::menu_item(0, false),
        motion::glow_pulse(),
        motion::tab_bar_enter(),
        motion::tab_press(),
    ];

    for preset in presets {
        let style = preset.style();
        for decl in style.split(';').map(str::trim).filter(|d| !d.is_empty()) {
            let (name, _) = decl.split_once(':').expect("custom property declaration");
            let used = format!("var({name}");
            assert!(
                NAVBAR_CSS.contains(&used),
                "`{name}` is rendered but never read by navbar.css"
            );
        }
        for class in preset.class(true).split_whitespace() {
            assert!(NAVBAR_CSS.contains(&format!(".{class}")), "no rule for `{class}`");
        }
    }
}

#[test]
fn tab_classes_have_rules() {
    for entry in tab_entries(TabItem::Work) {
        for class in entry.css_class().split_whitespace() {
            assert!(NAVBAR_CSS.contains(&format!(".{class}")), "no rule for `{class}`");
        }
    }
}

#[test]
fn tab_bar_is_hidden_on_desktop() {
    let desktop = NAVBAR_CSS
        .split("@media (min-width: 1024px)")
        .nth(1)
        .expect("desktop breakpoint block");
    assert!(desktop.contains(".tabbar"));
    assert!(desktop.contains(".navbar__toggle"));
}
