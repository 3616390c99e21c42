use dioxus::prelude::*;

use ui::core::platform::{default_log_level, Platform};
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

        Navbar { variant: NavVariant::for_platform(Platform::current()) }
        Home {}
    }
}
