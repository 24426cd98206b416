//! Loading indicator component.

use dioxus::prelude::*;

use super::SpinnerIcon;
use crate::theme::CONTAINER_CLASS;

/// Centered spinner shown in the search route's suspense slot.
///
/// Takes no props and holds no state. The surrounding `SuspenseBoundary`
/// decides when it is mounted.
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: CONTAINER_CLASS,
            SpinnerIcon {}
        }
    }
}
