use dioxus::prelude::*;

mod home;
pub use home::Home;

/// Page theme shared by every shell.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
