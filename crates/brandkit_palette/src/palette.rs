//! Canonical Databricks brand palette. Hex strings here are the source of
//! truth; every derived form (HSL, variable map, utility map) must reproduce
//! them exactly.

use crate::error::{PaletteError, Result};

/// A named brand color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub name: &'static str,
    pub hex: &'static str,
}

const fn token(name: &'static str, hex: &'static str) -> Token {
    Token { name, hex }
}

/// Primary corporate colors. Navy, gray and white are recommended for large
/// surfaces; Innovation Orange is reserved for bright accents.
pub mod corporate {
    /// Primary accent — #FF5F46
    pub const INNOVATION_ORANGE: &str = "#FF5F46";
    /// Primary dark, backgrounds and text — #1B3139
    pub const DARK_NAVY: &str = "#1B3139";
    /// Primary neutral — #A0ACBE
    pub const WARM_GRAY: &str = "#A0ACBE";
    /// Primary light — #FFFFFF
    pub const TRUE_WHITE: &str = "#FFFFFF";
}

/// Extended brand palette: supporting families plus accent colors for data
/// visualization. Only the entries referenced by the semantic, chart, or
/// utility layers get named constants; the rest live in [`EXTENDED`].
pub mod extended {
    pub const TEAL: &str = "#618794";
    pub const TEAL_DARK: &str = "#143D4A";
    pub const TEAL_LIGHT: &str = "#70C4AB";

    pub const ORANGE_LIGHT: &str = "#FF9E94";
    pub const ORANGE_DARK: &str = "#BD2B26";

    pub const YELLOW: &str = "#FCBA33";
    pub const YELLOW_LIGHT: &str = "#FFCC66";
    pub const YELLOW_DARK: &str = "#BD802B";

    pub const GREEN: &str = "#42BA91";
    pub const GREEN_LIGHT: &str = "#9ED6C4";
    pub const GREEN_DARK: &str = "#00875C";

    pub const BURGUNDY: &str = "#AB4057";
    pub const BURGUNDY_LIGHT: &str = "#BF7080";
    pub const BURGUNDY_DARK: &str = "#4A121A";

    pub const GRAY_MEDIUM: &str = "#C4CCD6";
    pub const SLATE_DARK: &str = "#1B5162";

    pub const CORAL: &str = "#FF9E94";
    pub const PEACH: &str = "#FFDB96";
    pub const MINT: &str = "#70C4AB";
    pub const SAGE: &str = "#9ED6C4";
    pub const ROSE: &str = "#BF7080";
    pub const GOLD: &str = "#FFAB00";
}

/// Corporate tokens in declaration order.
pub const CORPORATE: &[Token] = &[
    token("innovationOrange", corporate::INNOVATION_ORANGE),
    token("darkNavy", corporate::DARK_NAVY),
    token("warmGray", corporate::WARM_GRAY),
    token("trueWhite", corporate::TRUE_WHITE),
];

/// Extended tokens in declaration order. Some accent names intentionally
/// share a value with a family entry (coral/orangeLight, mint/tealLight);
/// they are distinct tokens with equal hex.
pub const EXTENDED: &[Token] = &[
    token("teal", extended::TEAL),
    token("tealDark", extended::TEAL_DARK),
    token("tealLight", extended::TEAL_LIGHT),
    token("orangeLight", extended::ORANGE_LIGHT),
    token("orangeDark", extended::ORANGE_DARK),
    token("yellow", extended::YELLOW),
    token("yellowLight", extended::YELLOW_LIGHT),
    token("yellowDark", extended::YELLOW_DARK),
    token("green", extended::GREEN),
    token("greenLight", extended::GREEN_LIGHT),
    token("greenDark", extended::GREEN_DARK),
    token("burgundy", extended::BURGUNDY),
    token("burgundyLight", extended::BURGUNDY_LIGHT),
    token("burgundyDark", extended::BURGUNDY_DARK),
    token("grayMedium", extended::GRAY_MEDIUM),
    token("slateDark", extended::SLATE_DARK),
    token("coral", extended::CORAL),
    token("pink", "#FABFBA"),
    token("peach", extended::PEACH),
    token("mint", extended::MINT),
    token("sage", extended::SAGE),
    token("rose", extended::ROSE),
    token("mauve", "#D69EA8"),
    token("crimson", "#801C17"),
    token("brown", "#7D5319"),
    token("forest", "#095A35"),
    token("wine", "#4A121A"),
    token("scarlet", "#FF3621"),
    token("gold", extended::GOLD),
    token("emerald", "#00875C"),
    token("jade", "#00A972"),
    token("maroon", "#730D21"),
    token("ruby", "#98102A"),
];

/// A palette namespace and its tokens.
#[derive(Clone, Copy, Debug)]
pub struct Category {
    pub name: &'static str,
    pub tokens: &'static [Token],
}

/// Brand namespaces in emission order. Categories are disjoint, so the
/// variable map builder never sees a key collision.
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "corporate",
        tokens: CORPORATE,
    },
    Category {
        name: "extended",
        tokens: EXTENDED,
    },
];

/// Resolve a dot-path token id: `corporate.innovationOrange`,
/// `extended.teal`, `semantic.primary`.
pub fn resolve(path: &str) -> Result<Token> {
    let unknown = || PaletteError::UnknownToken(path.to_string());
    let (category, name) = path.split_once('.').ok_or_else(unknown)?;
    let tokens = match category {
        "corporate" => CORPORATE,
        "extended" => EXTENDED,
        "semantic" => crate::semantic::ROLES,
        _ => return Err(unknown()),
    };
    tokens.iter().copied().find(|t| t.name == name).ok_or_else(unknown)
}
