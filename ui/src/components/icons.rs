use dioxus::prelude::*;

use crate::core::glyph::{Glyph, Shape, VIEW_BOX};

#[component]
pub fn Icon(glyph: Glyph, #[props(default = 24)] size: u32, #[props(default)] class: String) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: VIEW_BOX,
            fill: "none",
            stroke: "currentColor",
            stroke_width: glyph.stroke_width(),
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            class: "icon {class}",
            {glyph.shapes().iter().map(|shape| render_shape(*shape))}
        }
    }
}

fn render_shape(shape: Shape) -> Element {
    match shape {
        Shape::Path(d) => rsx! {
            path { d: "{d}" }
        },
        Shape::Polyline(points) => rsx! {
            polyline { points: "{points}" }
        },
        Shape::Polygon(points) => rsx! {
            polygon { points: "{points}" }
        },
        Shape::Line { x1, y1, x2, y2 } => rsx! {
            line {
                x1: "{x1}",
                y1: "{y1}",
                x2: "{x2}",
                y2: "{y2}",
            }
        },
        Shape::Rect {
            x,
            y,
            width,
            height,
            rx,
        } => rsx! {
            rect {
                x: "{x}",
                y: "{y}",
                width: "{width}",
                height: "{height}",
                rx: "{rx}",
            }
        },
        Shape::Circle { cx, cy, r } => rsx! {
            circle { cx: "{cx}", cy: "{cy}", r: "{r}" }
        },
    }
}
