//! CSS custom-property map derived from the palette registry.
//!
//! Built once, read-only afterwards. Values are raw strings; the consuming
//! stylesheet wraps the HSL form in `hsl()` itself.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{PaletteError, Result};
use crate::hsl::hex_to_hsl;
use crate::palette::CATEGORIES;
use crate::semantic;

/// Namespace prefix used for the default map.
pub const DEFAULT_NAMESPACE: &str = "databricks";

static VARIABLES: Lazy<BTreeMap<String, String>> = Lazy::new(|| {
    build_variables(DEFAULT_NAMESPACE).expect("brand palette constants are valid and collision-free")
});

/// The default `databricks`-prefixed variable map, built on first access.
pub fn variables() -> &'static BTreeMap<String, String> {
    &VARIABLES
}

/// Look up one variable from the default map by full property name.
pub fn variable(name: &str) -> Option<&'static str> {
    variables().get(name).map(String::as_str)
}

/// Flatten the registry into a variable map under the given namespace.
///
/// Every brand leaf emits two entries: `--<ns>-<category>-<name>` holding the
/// `"h s% l%"` triplet and a `-hex` variant holding the canonical hex.
/// Semantic roles drop the category segment. A key collision is an error,
/// never last-write-wins.
pub fn build_variables(namespace: &str) -> Result<BTreeMap<String, String>> {
    let mut vars = BTreeMap::new();
    for category in CATEGORIES {
        for token in category.tokens {
            let key = format!("--{namespace}-{}-{}", category.name, token.name);
            insert_pair(&mut vars, key, token.hex)?;
        }
    }
    for role in semantic::ROLES {
        let key = format!("--{namespace}-{}", role.name);
        insert_pair(&mut vars, key, role.hex)?;
    }
    debug!(count = vars.len(), namespace, "built css variable map");
    Ok(vars)
}

fn insert_pair(vars: &mut BTreeMap<String, String>, key: String, hex: &str) -> Result<()> {
    let hsl = hex_to_hsl(hex)?;
    let hex_key = format!("{key}-hex");
    if vars.insert(key.clone(), hsl.css_value()).is_some() {
        return Err(PaletteError::DuplicateVariable(key));
    }
    if vars.insert(hex_key.clone(), hex.to_string()).is_some() {
        return Err(PaletteError::DuplicateVariable(hex_key));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_map_spot_values() {
        let vars = variables();
        assert_eq!(vars["--databricks-corporate-innovationOrange"], "8 100% 64%");
        assert_eq!(vars["--databricks-corporate-innovationOrange-hex"], "#FF5F46");
        assert_eq!(vars["--databricks-extended-teal-hex"], "#618794");
        assert_eq!(vars["--databricks-primary"], "8 100% 64%");
        assert_eq!(vars["--databricks-primary-hex"], "#FF5F46");
    }

    #[test]
    fn test_variable_lookup() {
        assert_eq!(variable("--databricks-secondary-hex"), Some("#A0ACBE"));
        assert_eq!(variable("--databricks-missing"), None);
    }

    #[test]
    fn test_custom_namespace() {
        let vars = build_variables("brand").unwrap();
        assert_eq!(vars["--brand-corporate-darkNavy-hex"], "#1B3139");
        assert!(!vars.contains_key("--databricks-corporate-darkNavy-hex"));
    }

    #[test]
    fn test_collision_detection() {
        let mut vars = BTreeMap::new();
        insert_pair(&mut vars, "--x-primary".to_string(), "#FF5F46").unwrap();
        let err = insert_pair(&mut vars, "--x-primary".to_string(), "#1B3139").unwrap_err();
        assert!(matches!(err, PaletteError::DuplicateVariable(_)));
    }
}
