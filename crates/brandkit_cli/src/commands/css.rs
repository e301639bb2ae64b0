//! `brandkit css`: emit the generated CSS custom properties.
//!
//! The `:root { ... }` wrapper is presentation added here; the library only
//! produces property names and values.

use anyhow::Result;
use brandkit_palette::css;

use crate::output;

pub fn handle(prefix: &str, root_block: bool) -> Result<()> {
    let owned;
    let vars = if prefix == css::DEFAULT_NAMESPACE {
        css::variables()
    } else {
        owned = css::build_variables(prefix)?;
        &owned
    };

    if output::json_mode() {
        output::data("css-variables", vars);
        return Ok(());
    }

    if root_block {
        println!(":root {{");
        for (name, value) in vars {
            println!("  {name}: {value};");
        }
        println!("}}");
    } else {
        for (name, value) in vars {
            output::kv(name, value);
        }
    }
    Ok(())
}
