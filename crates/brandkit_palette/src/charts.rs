//! Chart palettes built on the brand colors.
//!
//! The sequential and diverging ramps are hand-authored constants anchored on
//! brand hues; the in-between steps are curated, not generated by an
//! interpolation routine.

use crate::palette::{corporate, extended};

/// Categorical palette for simple charts, corporate colors first.
pub const PRIMARY: [&str; 5] = [
    corporate::INNOVATION_ORANGE,
    corporate::DARK_NAVY,
    extended::TEAL,
    extended::GREEN,
    extended::YELLOW,
];

/// Categorical palette for visualizations with many series.
pub const EXTENDED: [&str; 12] = [
    corporate::INNOVATION_ORANGE,
    corporate::DARK_NAVY,
    extended::TEAL,
    extended::GREEN,
    extended::YELLOW,
    extended::BURGUNDY,
    extended::MINT,
    extended::CORAL,
    extended::PEACH,
    extended::SAGE,
    extended::ROSE,
    extended::GOLD,
];

/// Light-to-dark ramp around Innovation Orange, for heatmaps.
pub const SEQUENTIAL_ORANGE: [&str; 8] = [
    "#FFF5F3",
    "#FFE5E0",
    "#FFBFB3",
    extended::ORANGE_LIGHT,
    corporate::INNOVATION_ORANGE,
    extended::ORANGE_DARK,
    "#8A1F1A",
    "#571413",
];

/// Light-to-dark ramp around Dark Navy.
pub const SEQUENTIAL_NAVY: [&str; 8] = [
    "#F0F1F2",
    "#D4D7DA",
    "#A8AEB4",
    corporate::WARM_GRAY,
    "#6B7A87",
    "#4A5A67",
    corporate::DARK_NAVY,
    "#0F1D22",
];

/// Signed-value ramp: orange for negative, white midpoint, teal for positive.
pub const DIVERGING: [&str; 7] = [
    extended::ORANGE_DARK,
    corporate::INNOVATION_ORANGE,
    extended::ORANGE_LIGHT,
    corporate::TRUE_WHITE,
    extended::TEAL_LIGHT,
    extended::TEAL,
    extended::TEAL_DARK,
];

/// Every chart palette by name, in listing order.
pub const ALL: &[(&str, &[&str])] = &[
    ("primary", &PRIMARY),
    ("extended", &EXTENDED),
    ("sequential-orange", &SEQUENTIAL_ORANGE),
    ("sequential-navy", &SEQUENTIAL_NAVY),
    ("diverging", &DIVERGING),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgb::Rgb;

    #[test]
    fn test_palette_lengths() {
        assert_eq!(PRIMARY.len(), 5);
        assert_eq!(EXTENDED.len(), 12);
        assert_eq!(SEQUENTIAL_ORANGE.len(), 8);
        assert_eq!(SEQUENTIAL_NAVY.len(), 8);
        assert_eq!(DIVERGING.len(), 7);
    }

    #[test]
    fn test_categorical_palettes_lead_with_corporate_colors() {
        assert_eq!(PRIMARY[0], corporate::INNOVATION_ORANGE);
        assert_eq!(PRIMARY[1], corporate::DARK_NAVY);
        assert_eq!(&EXTENDED[..5], &PRIMARY[..]);
    }

    #[test]
    fn test_sequential_ramps_contain_their_anchors() {
        assert!(SEQUENTIAL_ORANGE.contains(&corporate::INNOVATION_ORANGE));
        assert!(SEQUENTIAL_NAVY.contains(&corporate::DARK_NAVY));
    }

    #[test]
    fn test_diverging_midpoint_is_white() {
        assert_eq!(DIVERGING[3], corporate::TRUE_WHITE);
    }

    #[test]
    fn test_every_chart_color_is_valid_hex() {
        for (name, colors) in ALL {
            for hex in colors.iter() {
                assert!(Rgb::from_hex(hex).is_ok(), "{name}: {hex}");
            }
        }
    }

    #[test]
    fn test_all_lists_every_palette_once() {
        let names: Vec<_> = ALL.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "primary",
                "extended",
                "sequential-orange",
                "sequential-navy",
                "diverging"
            ]
        );
    }
}
