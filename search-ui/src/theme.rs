//! Visual constants shared by the search route components.
//!
//! Class strings use the utility-class vocabulary (`w-12`, `animate-spin`, ...).
//! Every token used here has a matching rule in [`crate::styles`].

/// Brand color used for the loading spinner.
pub const BRAND_COLOR: &str = "#670D2F";

/// Pixel size of one step on the utility spacing scale.
pub const SPACING_UNIT_PX: u32 = 4;

/// Spinner size in spacing units (`w-12` / `h-12`).
pub const SPINNER_SIZE_UNITS: u32 = 12;

/// Spinner size in pixels.
pub const SPINNER_SIZE_PX: u32 = spacing_px(SPINNER_SIZE_UNITS);

/// Full width, centered column, generous vertical padding, child centered on both axes.
pub const CONTAINER_CLASS: &str = "w-full max-w-7xl mx-auto py-20 flex justify-center items-center";

/// Fixed 48x48 box with an endless rotation.
pub const SPINNER_CLASS: &str = "w-12 h-12 animate-spin";

/// Convert a spacing-scale step to pixels.
pub const fn spacing_px(units: u32) -> u32 {
    units * SPACING_UNIT_PX
}

/// Split a class attribute into its individual tokens.
#[cfg(test)]
pub(crate) fn class_tokens(class: &str) -> impl Iterator<Item = &str> {
    class.split_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_is_48px_square() {
        assert_eq!(SPINNER_SIZE_PX, 48);
        assert_eq!(spacing_px(SPINNER_SIZE_UNITS), SPINNER_SIZE_PX);
    }

    #[test]
    fn spinner_class_matches_size_units() {
        let tokens: Vec<&str> = class_tokens(SPINNER_CLASS).collect();
        let width = format!("w-{}", SPINNER_SIZE_UNITS);
        let height = format!("h-{}", SPINNER_SIZE_UNITS);
        assert!(tokens.contains(&width.as_str()));
        assert!(tokens.contains(&height.as_str()));
        assert!(tokens.contains(&"animate-spin"));
    }

    #[test]
    fn container_centers_on_both_axes() {
        let tokens: Vec<&str> = class_tokens(CONTAINER_CLASS).collect();
        assert!(tokens.contains(&"flex"));
        assert!(tokens.contains(&"justify-center"), "horizontal centering");
        assert!(tokens.contains(&"items-center"), "vertical centering");
        assert!(tokens.contains(&"mx-auto"), "centered content column");
    }

    #[test]
    fn brand_color_is_uppercase_hex() {
        assert_eq!(BRAND_COLOR.len(), 7);
        assert!(BRAND_COLOR.starts_with('#'));
        assert!(BRAND_COLOR[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}
