//! Circular spinner glyph.

use dioxus::prelude::*;

use crate::theme::{BRAND_COLOR, SPINNER_CLASS, SPINNER_SIZE_PX};

/// Three quarters of a circle, open at the top right.
const SPINNER_PATH: &str = "M21 12a9 9 0 1 1-6.219-8.56";

/// Inline SVG spinner, 48x48, stroked in the brand color and rotating forever.
#[component]
pub fn SpinnerIcon() -> Element {
    rsx! {
        svg {
            class: SPINNER_CLASS,
            width: "{SPINNER_SIZE_PX}",
            height: "{SPINNER_SIZE_PX}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: BRAND_COLOR,
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            role: "status",
            "aria-label": "Loading",
            path { d: SPINNER_PATH }
        }
    }
}
