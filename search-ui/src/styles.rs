//! Stylesheet for the loading indicator.
//!
//! Pages that already ship a utility-CSS framework can skip this. Everything
//! else mounts [`LoadingStyles`] once so the classes in [`crate::theme`] resolve.

use dioxus::prelude::*;

/// One rule per class token in `CONTAINER_CLASS` and `SPINNER_CLASS`, plus the spin keyframes.
pub const LOADING_CSS: Asset = asset!("/assets/loading.css");

/// Links [`LOADING_CSS`] into the document head.
#[component]
pub fn LoadingStyles() -> Element {
    rsx! {
        document::Stylesheet { href: LOADING_CSS }
    }
}
