//! `brandkit charts`: print the chart palettes.

use anyhow::{Result, anyhow};
use brandkit_palette::charts;

use crate::output;

pub fn handle(name: Option<&str>) -> Result<()> {
    match name {
        Some(name) => {
            let (_, colors) = charts::ALL
                .iter()
                .copied()
                .find(|(n, _)| *n == name)
                .ok_or_else(|| anyhow!("unknown chart palette '{name}'"))?;
            print_palette(name, colors);
        }
        None => {
            for (name, colors) in charts::ALL.iter().copied() {
                print_palette(name, colors);
            }
        }
    }
    Ok(())
}

fn print_palette(name: &str, colors: &[&str]) {
    if output::json_mode() {
        output::data(name, &serde_json::json!({ "name": name, "colors": colors }));
    } else {
        output::header(name);
        for (i, hex) in colors.iter().enumerate() {
            output::kv(&format!("{i}"), hex);
        }
    }
}
