//! From a `:root` block to config values.

use swatch_color::{BorderRadii, convert};
use tracing::{debug, warn};

use crate::error::SyncError;
use crate::mapping::ColorMap;
use crate::stylesheet::{oklch_properties, radius_rem};
use crate::tree::ColorTree;

/// Converted colors plus the mapped variables the style sheet lacked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub tree: ColorTree,
    pub missing: Vec<String>,
}

/// Convert every mapped variable found in `block` to uppercase hex.
///
/// A variable absent from the block is logged and skipped; the rest of the
/// batch still converts.
///
/// # Errors
///
/// Returns [`SyncError::Color`] on the first present variable whose value
/// does not parse as OKLCH.
pub fn extract_colors(block: &str, map: &ColorMap) -> Result<Extraction, SyncError> {
    let properties = oklch_properties(block);
    let mut out = Extraction::default();

    for mapping in map {
        let Some(value) = properties.get(mapping.var.as_str()) else {
            warn!(var = %mapping.var, "missing CSS variable --{}", mapping.var);
            out.missing.push(mapping.var.clone());
            continue;
        };

        let hex = convert(value)?.to_hex();
        debug!(var = %mapping.var, path = %mapping.path, %value, %hex, "converted");
        out.tree.insert(&mapping.path, hex);
    }

    Ok(out)
}

/// Derive the border radius scale from `--radius`, or fall back to the
/// default scale with a warning.
#[must_use]
pub fn extract_radius(block: &str) -> BorderRadii {
    radius_rem(block).map_or_else(
        || {
            warn!("could not find --radius in :root, using defaults");
            BorderRadii::default()
        },
        BorderRadii::from_rem,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::ColorMapping;
    use crate::tree::ColorValue;
    use pretty_assertions::assert_eq;

    const BLOCK: &str = "
  --radius: 0.5rem;
  --background: oklch(1 0 0);
  --foreground: oklch(0.145 0 0);
  --primary: oklch(0.205 0 0);
  --primary-foreground: oklch(0.985 0 0);
  --destructive: oklch(0.577 0.245 27.325);
";

    #[test]
    fn converts_mapped_variables() {
        let out = extract_colors(BLOCK, &ColorMap::default()).unwrap();
        assert_eq!(out.tree.lookup("background"), Some("#FFFFFF"));
        assert_eq!(out.tree.lookup("foreground"), Some("#0A0A0A"));
        assert_eq!(out.tree.lookup("primary.DEFAULT"), Some("#171717"));
        assert_eq!(out.tree.lookup("primary.foreground"), Some("#FAFAFA"));
        assert_eq!(out.tree.lookup("destructive"), Some("#E7000B"));
    }

    #[test]
    fn missing_variables_are_skipped() {
        let out = extract_colors(BLOCK, &ColorMap::default()).unwrap();
        assert_eq!(
            out.missing,
            [
                "secondary",
                "secondary-foreground",
                "muted",
                "muted-foreground",
                "accent",
                "accent-foreground",
                "border",
                "input",
                "ring",
            ]
        );
        assert!(out.tree.get("secondary").is_none());
    }

    #[test]
    fn custom_map_order_drives_tree_order() {
        let map = ColorMap::new(vec![
            ColorMapping::new("destructive", "danger"),
            ColorMapping::new("background", "surface.base"),
        ]);
        let out = extract_colors(BLOCK, &map).unwrap();
        assert_eq!(
            out.tree.entries(),
            &[
                ("danger".to_owned(), ColorValue::Flat("#E7000B".into())),
                (
                    "surface".to_owned(),
                    ColorValue::Nested(vec![("base".into(), "#FFFFFF".into())])
                ),
            ]
        );
    }

    #[test]
    fn malformed_value_aborts() {
        // Matches the declaration pattern but not the OKLCH grammar.
        let block = "--ring: oklch(0.7 none 0);";
        let map = ColorMap::new(vec![ColorMapping::new("ring", "ring")]);
        let err = extract_colors(block, &map).unwrap_err();
        assert!(matches!(err, SyncError::Color(_)));
    }

    #[test]
    fn radius_from_block() {
        assert_eq!(extract_radius(BLOCK), BorderRadii::from_rem(0.5));
        assert_eq!(extract_radius(BLOCK).lg, 8);
    }

    #[test]
    fn radius_with_extra_dots_uses_number_prefix() {
        let radii = extract_radius("--radius: 1.2.3rem;");
        assert_eq!(radii, BorderRadii::from_rem(1.2));
        assert_eq!((radii.sm, radii.md, radii.lg, radii.xl), (15, 17, 19, 23));
    }

    #[test]
    fn radius_defaults_when_absent() {
        assert_eq!(extract_radius("--background: oklch(1 0 0);"), BorderRadii::default());
    }
}
