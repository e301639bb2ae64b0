//! Role-based aliases over the brand palette, so consumers reference intent
//! (`primary`, `error`) rather than a literal brand color.

use crate::palette::{Token, corporate, extended};

/// Light surface behind cards and code blocks. Not part of the brand sets.
pub const SURFACE: &str = "#F8F9FA";

/// Semantic roles in declaration order. Each alias points at the same hex as
/// its underlying brand token.
pub const ROLES: &[Token] = &[
    Token {
        name: "primary",
        hex: corporate::INNOVATION_ORANGE,
    },
    Token {
        name: "secondary",
        hex: corporate::WARM_GRAY,
    },
    Token {
        name: "accent",
        hex: corporate::INNOVATION_ORANGE,
    },
    Token {
        name: "background",
        hex: corporate::TRUE_WHITE,
    },
    Token {
        name: "backgroundDark",
        hex: corporate::DARK_NAVY,
    },
    Token {
        name: "backgroundNeutral",
        hex: corporate::WARM_GRAY,
    },
    Token {
        name: "surface",
        hex: SURFACE,
    },
    Token {
        name: "textPrimary",
        hex: corporate::DARK_NAVY,
    },
    Token {
        name: "textSecondary",
        hex: corporate::WARM_GRAY,
    },
    Token {
        name: "textOnDark",
        hex: corporate::TRUE_WHITE,
    },
    Token {
        name: "textOnLight",
        hex: corporate::DARK_NAVY,
    },
    Token {
        name: "textAccent",
        hex: corporate::INNOVATION_ORANGE,
    },
    Token {
        name: "success",
        hex: extended::GREEN,
    },
    Token {
        name: "warning",
        hex: extended::YELLOW,
    },
    Token {
        name: "error",
        hex: corporate::INNOVATION_ORANGE,
    },
    Token {
        name: "info",
        hex: extended::TEAL,
    },
];
