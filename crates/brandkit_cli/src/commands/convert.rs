//! `brandkit convert`: ad-hoc hex to HSL conversion.

use anyhow::Result;
use brandkit_palette::hex_to_hsl;

use crate::output;

pub fn handle(hex: &str) -> Result<()> {
    let hsl = hex_to_hsl(hex)?;
    if output::json_mode() {
        output::data(
            hex,
            &serde_json::json!({ "hex": hex, "hsl": hsl, "css_value": hsl.css_value() }),
        );
    } else {
        output::kv(hex, &hsl.css_value());
    }
    Ok(())
}
