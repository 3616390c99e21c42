//! Localized strings for the navbar and demo page.
//!
//! Built on:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/projectui-ui.ftl   (fallback/reference)
//!   es-ES/projectui-ui.ftl
//! ```
//!
//! The language is picked once from the host (OS locale list on native,
//! `navigator.languages` on the web). There is no runtime picker: the link
//! set is fixed, only its wording follows the host locale.
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Shorthand for `fl!(&*LOADER, ...)`.
///
/// ```ignore
/// t!("nav-work")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "projectui-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles matching the host languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => debug!(?selected, available = ?available_languages(), "i18n bundles loaded"),
            Err(err) => warn!(%err, "failed selecting languages; continuing with fallback"),
        }
    });
}

/// Embedded language tags, sorted.
fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use i18n_embed::LanguageLoader;

    #[test]
    fn fallback_and_spanish_are_embedded() {
        let langs = available_languages();
        assert_eq!(langs, vec!["en-US".to_string(), "es-ES".to_string()]);
    }

    #[test]
    fn fallback_bundle_resolves_every_nav_key() {
        // Query the fallback bundle directly so the host locale cannot interfere.
        let loader = FluentLanguageLoader::new(DOMAIN, "en-US".parse().unwrap());
        loader.load_fallback_language(&Localizations).unwrap();

        for (key, expected) in [
            ("nav-home", "Home"),
            ("nav-work", "Work"),
            ("nav-about", "About"),
            ("nav-playground", "Playground"),
            ("nav-resource", "Resource"),
            ("nav-login", "Login"),
        ] {
            assert_eq!(loader.get(key), expected, "unexpected text for {key}");
        }
    }

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        assert!(!t!("nav-work").is_empty());
    }
}
