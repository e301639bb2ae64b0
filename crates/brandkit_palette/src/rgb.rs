//! RGB color with a strict `#RRGGBB` codec.

use std::fmt;
use std::str::FromStr;

use crate::error::{PaletteError, Result};

/// RGB triplet. Palette hex strings decode to this; use with any color API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    pub fn r(self) -> u8 {
        self.0
    }
    pub fn g(self) -> u8 {
        self.1
    }
    pub fn b(self) -> u8 {
        self.2
    }

    /// Tuple form: `(r, g, b)`.
    pub fn tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }

    /// Parse a strict `#RRGGBB` string: 7 chars, leading `#`, hex digits only.
    /// No shorthand, no alpha channel.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let bytes = hex.as_bytes();
        if bytes.len() != 7 || bytes[0] != b'#' {
            return Err(PaletteError::InvalidHex(hex.to_string()));
        }
        if !bytes[1..].iter().all(u8::is_ascii_hexdigit) {
            return Err(PaletteError::InvalidHex(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| PaletteError::InvalidHex(hex.to_string()))
        };
        Ok(Rgb(channel(1)?, channel(3)?, channel(5)?))
    }

    /// Canonical uppercase `#RRGGBB` form.
    pub fn hex_string(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        c.tuple()
    }
}

impl FromStr for Rgb {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        Rgb::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex_string())
    }
}
