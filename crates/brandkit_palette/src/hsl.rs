//! Hex/RGB to HSL conversion for CSS custom properties.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::rgb::Rgb;

/// Integer-rounded HSL triplet: hue in degrees `[0, 360)`, saturation and
/// lightness in percent. Always derived; the hex form stays authoritative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// CSS value form `"<h> <s>% <l>%"`. The stylesheet layer supplies the
    /// `hsl()` wrapper.
    pub fn css_value(&self) -> String {
        format!("{} {}% {}%", self.h, self.s, self.l)
    }

    /// Reconstruct RGB. Lossy: integer rounding of h/s/l costs a few units
    /// per channel on the way back.
    pub fn approx_rgb(&self) -> Rgb {
        let h = self.h as f64 / 360.0;
        let s = self.s as f64 / 100.0;
        let l = self.l as f64 / 100.0;

        if self.s == 0 {
            let v = (l * 255.0).round() as u8;
            return Rgb(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Rgb(
            (hue_channel(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
            (hue_channel(p, q, h) * 255.0).round() as u8,
            (hue_channel(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
        )
    }
}

fn hue_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

#[allow(clippy::float_cmp)]
impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let r = rgb.r() as f64 / 255.0;
        let g = rgb.g() as f64 / 255.0;
        let b = rgb.b() as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic: hue 0 by convention, including black and white.
            return Hsl {
                h: 0,
                s: 0,
                l: (l * 100.0).round() as u8,
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let sextant = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        let h = sextant / 6.0;

        Hsl {
            // A hue that rounds up to a full turn wraps back to 0.
            h: (h * 360.0).round() as u16 % 360,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css_value())
    }
}

/// Convert a `#RRGGBB` string, rejecting malformed input.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Ok(Hsl::from(Rgb::from_hex(hex)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_white() {
        assert_eq!(hex_to_hsl("#000000").unwrap(), Hsl { h: 0, s: 0, l: 0 });
        assert_eq!(hex_to_hsl("#FFFFFF").unwrap(), Hsl { h: 0, s: 0, l: 100 });
    }

    #[test]
    fn test_primaries() {
        assert_eq!(hex_to_hsl("#FF0000").unwrap(), Hsl { h: 0, s: 100, l: 50 });
        assert_eq!(
            hex_to_hsl("#00FF00").unwrap(),
            Hsl {
                h: 120,
                s: 100,
                l: 50
            }
        );
        assert_eq!(
            hex_to_hsl("#0000FF").unwrap(),
            Hsl {
                h: 240,
                s: 100,
                l: 50
            }
        );
    }

    #[test]
    fn test_grayscale_has_zero_hue_and_saturation() {
        let hsl = hex_to_hsl("#808080").unwrap();
        assert_eq!((hsl.h, hsl.s), (0, 0));
        assert_eq!(hsl.l, 50);
    }

    #[test]
    fn test_innovation_orange_tracks_the_formula() {
        // Near 10° hue, full saturation, lightness just under two thirds.
        let hsl = hex_to_hsl("#FF5F46").unwrap();
        assert!((6..=10).contains(&hsl.h), "hue was {}", hsl.h);
        assert!(hsl.s >= 98, "saturation was {}", hsl.s);
        assert!((62..=66).contains(&hsl.l), "lightness was {}", hsl.l);
    }

    #[test]
    fn test_css_value_form() {
        let hsl = hex_to_hsl("#1B3139").unwrap();
        assert_eq!(hsl.css_value(), "196 36% 16%");
        assert_eq!(hsl.to_string(), hsl.css_value());
    }

    #[test]
    fn test_approx_rgb_round_trip() {
        let rgb = Rgb::from_hex("#A0ACBE").unwrap();
        let back = Hsl::from(rgb).approx_rgb();
        for (a, b) in [
            (rgb.r(), back.r()),
            (rgb.g(), back.g()),
            (rgb.b(), back.b()),
        ] {
            assert!((a as i16 - b as i16).abs() <= 2, "{rgb} came back as {back}");
        }
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        assert!(hex_to_hsl("FF5F46").is_err());
        assert!(hex_to_hsl("#F5F46").is_err());
        assert!(hex_to_hsl("#FF5F4G").is_err());
    }

    #[test]
    fn test_serializes_as_plain_fields() {
        let json = serde_json::to_value(Hsl { h: 8, s: 100, l: 64 }).unwrap();
        assert_eq!(json, serde_json::json!({"h": 8, "s": 100, "l": 64}));
    }
}
