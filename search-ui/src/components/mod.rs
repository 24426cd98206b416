//! Reusable Dioxus RSX components for the search route.

mod loading_indicator;
mod spinner_icon;

pub use loading_indicator::LoadingIndicator;
pub use spinner_icon::SpinnerIcon;
