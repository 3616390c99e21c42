//! Shared UI crate for the ProjectUI navbar. Both navbar variants, their
//! state machines and the demo page live here; platform crates only launch.

pub mod core;
pub mod i18n;
pub mod views;

mod navbar;
pub use navbar::{NavVariant, Navbar};

pub mod components {
    pub mod bar;
    pub mod icons;
    pub mod logo;
    pub mod scroll_navbar;
    pub mod toggle_navbar;

    pub use icons::Icon;
    pub use logo::ProjectLogo;
    pub use scroll_navbar::{use_scrolled, ScrollNavbar};
    pub use toggle_navbar::ToggleNavbar;
}
