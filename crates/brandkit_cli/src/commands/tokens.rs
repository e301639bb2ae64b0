//! `brandkit tokens` subcommands.

use anyhow::Result;
use brandkit_palette::{hex_to_hsl, palette, resolve, semantic};

use crate::cli::TokensAction;
use crate::output;

pub fn handle(action: TokensAction) -> Result<()> {
    match action {
        TokensAction::List => list(),
        TokensAction::Show { path } => show(&path),
    }
}

fn list() -> Result<()> {
    let mut rows = Vec::new();
    for category in palette::CATEGORIES {
        for token in category.tokens {
            rows.push((category.name, token.name, token.hex));
        }
    }
    for role in semantic::ROLES {
        rows.push(("semantic", role.name, role.hex));
    }

    let mut table = output::table();
    output::table_header(&mut table, &["category", "name", "hex", "hsl"]);
    let mut items = Vec::with_capacity(rows.len());
    for (category, name, hex) in rows {
        let hsl = hex_to_hsl(hex)?;
        let css_value = hsl.css_value();
        output::table_row(&mut table, &[category, name, hex, css_value.as_str()]);
        items.push(serde_json::json!({
            "category": category,
            "name": name,
            "hex": hex,
            "hsl": hsl,
        }));
    }
    output::table_print(&table, &items);
    Ok(())
}

fn show(path: &str) -> Result<()> {
    let token = resolve(path)?;
    let hsl = hex_to_hsl(token.hex)?;
    if output::json_mode() {
        output::data(
            path,
            &serde_json::json!({
                "token": path,
                "hex": token.hex,
                "hsl": hsl,
                "css_value": hsl.css_value(),
            }),
        );
    } else {
        output::kv("token", path);
        output::kv("hex", token.hex);
        output::kv("hsl", &hsl.css_value());
    }
    Ok(())
}
