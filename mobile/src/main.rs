use dioxus::prelude::*;

use ui::core::platform::default_log_level;
use ui::views::{Home, THEME_CSS};
use ui::{NavVariant, Navbar};

fn main() {
    dioxus::logger::init(default_log_level()).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        // Phones always get the bottom tab bar.
        Navbar { variant: NavVariant::Scroll }
        Home {}
    }
}
