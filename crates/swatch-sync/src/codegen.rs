//! Source text for the generated config blocks.
//!
//! Output shape (two-space indent, trailing commas, `\n` line endings):
//!
//! ```text
//! const colors = {
//!   background: "#FFFFFF",
//!   ring: "#A1A1A1",
//!
//!   primary: {
//!     DEFAULT: "#171717",
//!     foreground: "#FAFAFA",
//!   },
//! } as const;
//! ```
//!
//! Flat entries come first, then a blank line, then the nested objects,
//! each group in tree order.

use swatch_color::BorderRadii;

use crate::tree::{ColorTree, ColorValue};

/// `const colors = { ... } as const;`
#[must_use]
pub fn colors_code(tree: &ColorTree) -> String {
    let mut out = String::from("const colors = {\n");

    for (key, value) in tree.entries() {
        if let ColorValue::Flat(hex) = value {
            out.push_str(&format!("  {key}: \"{hex}\",\n"));
        }
    }

    out.push('\n');

    for (key, value) in tree.entries() {
        if let ColorValue::Nested(children) = value {
            out.push_str(&format!("  {key}: {{\n"));
            for (child, hex) in children {
                out.push_str(&format!("    {child}: \"{hex}\",\n"));
            }
            out.push_str("  },\n");
        }
    }

    out.push_str("} as const;");
    out
}

/// `const borderRadius = { sm: "6px", ... } as const;`
#[must_use]
pub fn radius_code(radii: &BorderRadii) -> String {
    let mut out = String::from("const borderRadius = {\n");
    for (name, px) in radii.entries() {
        out.push_str(&format!("  {name}: \"{px}px\",\n"));
    }
    out.push_str("} as const;");
    out
}
