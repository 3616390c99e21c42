use dioxus::prelude::*;

use crate::components::icons::Icon;
use crate::core::glyph::Glyph;
use crate::core::motion;

pub const BRAND_NAME: &str = "ProjectUI";

/// Brand mark. `mobile` renders the compact wordmark only; otherwise the
/// gradient tile, wordmark and tagline lockup.
#[component]
pub fn ProjectLogo(
    #[props(default)] mobile: bool,
    onactivate: Option<EventHandler<MouseEvent>>,
) -> Element {
    let onclick = move |evt: MouseEvent| {
        if let Some(handler) = onactivate {
            handler.call(evt);
        }
    };

    if mobile {
        return rsx! {
            div { class: "logo logo--compact", onclick: onclick,
                span { class: "logo__wordmark logo__wordmark--compact", "{BRAND_NAME}" }
            }
        };
    }

    let mark = motion::logo_mark();
    let word = motion::brand_word();

    rsx! {
        div { class: "logo", onclick: onclick,
            div {
                class: "{mark.class(false)} logo__mark",
                style: "{mark.style()}",
                "data-motion": mark.to_json().unwrap_or_default(),
                Icon { glyph: Glyph::Layers, size: 20, class: "logo__glyph logo__glyph--layers" }
                Icon { glyph: Glyph::Code, size: 16, class: "logo__glyph logo__glyph--code" }
                Icon { glyph: Glyph::Sparkles, size: 12, class: "logo__glyph logo__glyph--sparkles" }
            }
            div { class: "logo__text",
                span {
                    class: "{word.class(false)} logo__wordmark",
                    style: "{word.style()}",
                    "{BRAND_NAME}"
                }
                span { class: "logo__tagline", {crate::t!("brand-tagline")} }
            }
        }
    }
}
