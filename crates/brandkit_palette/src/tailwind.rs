//! Kebab-case color map for the site's utility-class layer
//! (`bg-true-white`, `text-dark-navy`, `border-warm-gray`).

use std::collections::BTreeMap;

use crate::palette::{corporate, extended};

/// Utility-class color names mapped to canonical hex, brand colors first,
/// then the semantic roles, as the site's config consumes them.
pub const COLORS: &[(&str, &str)] = &[
    ("innovation-orange", corporate::INNOVATION_ORANGE),
    ("dark-navy", corporate::DARK_NAVY),
    ("warm-gray", corporate::WARM_GRAY),
    ("true-white", corporate::TRUE_WHITE),
    ("teal", extended::TEAL),
    ("teal-dark", extended::TEAL_DARK),
    ("teal-light", extended::TEAL_LIGHT),
    ("orange-light", extended::ORANGE_LIGHT),
    ("orange-dark", extended::ORANGE_DARK),
    ("yellow", extended::YELLOW),
    ("yellow-light", extended::YELLOW_LIGHT),
    ("yellow-dark", extended::YELLOW_DARK),
    ("green", extended::GREEN),
    ("green-light", extended::GREEN_LIGHT),
    ("green-dark", extended::GREEN_DARK),
    ("burgundy", extended::BURGUNDY),
    ("burgundy-light", extended::BURGUNDY_LIGHT),
    ("burgundy-dark", extended::BURGUNDY_DARK),
    ("gray-medium", extended::GRAY_MEDIUM),
    ("slate-dark", extended::SLATE_DARK),
    ("primary", corporate::INNOVATION_ORANGE),
    ("secondary", corporate::WARM_GRAY),
    ("accent", corporate::INNOVATION_ORANGE),
    ("success", extended::GREEN),
    ("warning", extended::YELLOW),
    ("error", corporate::INNOVATION_ORANGE),
    ("info", extended::TEAL),
];

/// The same table as an ordered map.
pub fn map() -> BTreeMap<&'static str, &'static str> {
    COLORS.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_count() {
        assert_eq!(COLORS.len(), 27);
        assert_eq!(map().len(), 27, "duplicate utility-class names");
    }

    #[test]
    fn test_spot_values() {
        let map = map();
        assert_eq!(map["true-white"], "#FFFFFF");
        assert_eq!(map["dark-navy"], "#1B3139");
        assert_eq!(map["error"], "#FF5F46");
    }

    #[test]
    fn test_names_are_kebab_case() {
        for (name, _) in COLORS {
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
                "{name}"
            );
        }
    }
}
