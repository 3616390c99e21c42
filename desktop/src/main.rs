#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config,
};
use dioxus::prelude::*;

use ui::core::platform::{default_log_level, Platform};
use ui::views::Home;
use ui::{NavVariant, Navbar};

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme; packaged builds have no asset server.

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::init(default_log_level()).expect("failed to init logger");

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("ProjectUI – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(1280.0, 800.0)),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::logger::init(default_log_level()).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Navbar { variant: NavVariant::for_platform(Platform::current()) }
        Home {}
    }
}
