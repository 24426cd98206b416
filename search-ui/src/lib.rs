//! Shared Dioxus components for the search route.
//!
//! This crate provides:
//! - `theme`: brand color, spacing scale and utility-class strings
//! - `styles`: a stylesheet backing every utility class the components use
//! - `components`: the route's `LoadingIndicator` and its `SpinnerIcon`

pub mod components;
pub mod styles;
pub mod theme;
