//! Databricks brand palette: canonical hex tokens, HSL conversion, and the
//! derived CSS custom-property map.
//!
//! Hex strings are the source of truth. Every other form (HSL triplets, the
//! variable map, the kebab-case utility map) is derived from them once and
//! immutable afterwards.
//!
//! # Example
//!
//! ```
//! use brandkit_palette::{css, hex_to_hsl, palette, resolve};
//!
//! let hsl = hex_to_hsl(palette::corporate::INNOVATION_ORANGE)?;
//! assert_eq!(hsl.css_value(), "8 100% 64%");
//!
//! let vars = css::variables();
//! assert_eq!(vars["--databricks-primary-hex"], "#FF5F46");
//!
//! let token = resolve("semantic.error")?;
//! assert_eq!(token.hex, "#FF5F46");
//! # Ok::<(), brandkit_palette::PaletteError>(())
//! ```

pub mod charts;
pub mod css;
pub mod error;
pub mod hsl;
pub mod palette;
pub mod rgb;
pub mod semantic;
pub mod tailwind;

#[cfg(test)]
mod tests;

pub use error::{PaletteError, Result};
pub use hsl::{Hsl, hex_to_hsl};
pub use palette::{Category, Token, resolve};
pub use rgb::Rgb;
