//! Style sheet scanning.
//!
//! This is pattern matching, not CSS parsing: only the first `:root`
//! block is read (the light theme), and only up to its first `}`.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use swatch_color::parse_decimal;

use crate::error::SyncError;

static ROOT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":root\s*\{([^}]+)\}").expect("valid :root pattern"));

static OKLCH_PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)--([a-z-]+):\s*(oklch\([^)]+\))").expect("valid custom property pattern")
});

static RADIUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--radius:\s*([0-9.]+)rem").expect("valid radius pattern"));

/// Body of the first `:root { ... }` block.
///
/// # Errors
///
/// Returns [`SyncError::MissingRootBlock`] if the style sheet has none.
pub fn root_block(css: &str) -> Result<&str, SyncError> {
    ROOT_BLOCK
        .captures(css)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(SyncError::MissingRootBlock)
}

/// Every `--name: oklch(...)` declaration in `block`, keyed by name
/// (without the leading `--`). A repeated name keeps its last value.
#[must_use]
pub fn oklch_properties(block: &str) -> HashMap<&str, &str> {
    OKLCH_PROPERTY
        .captures_iter(block)
        .filter_map(|caps| Some((caps.get(1)?.as_str(), caps.get(2)?.as_str())))
        .collect()
}

/// The `--radius: <n>rem` value, if declared and readable.
///
/// The number reads leniently, like the color channels: `1.2.3rem` is 1.2.
#[must_use]
pub fn radius_rem(block: &str) -> Option<f64> {
    RADIUS
        .captures(block)
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_decimal(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CSS: &str = "\
@import \"tailwindcss\";

:root {
  --radius: 0.625rem;
  --background: oklch(1 0 0);
  --primary: oklch(0.205 0 0);
  --Ring: OKLCH(0.708 0 0);
  --chart-1: oklch(0.646 0.222 41.116);
  --font-sans: \"Inter\", sans-serif;
}

.dark {
  --background: oklch(0.145 0 0);
}
";

    #[test]
    fn finds_root_block() {
        let block = root_block(CSS).unwrap();
        assert!(block.contains("--radius: 0.625rem;"));
        assert!(!block.contains("0.145"));
    }

    #[test]
    fn missing_root_block_is_an_error() {
        let err = root_block(".dark { --x: oklch(0 0 0); }").unwrap_err();
        assert!(matches!(err, SyncError::MissingRootBlock));
    }

    #[test]
    fn empty_root_block_does_not_match() {
        assert!(root_block(":root {}").is_err());
    }

    #[test]
    fn collects_oklch_declarations() {
        let props = oklch_properties(root_block(CSS).unwrap());
        assert_eq!(props.len(), 3);
        assert_eq!(props["background"], "oklch(1 0 0)");
        assert_eq!(props["primary"], "oklch(0.205 0 0)");
        // Names keep their case; the keyword match ignores it.
        assert_eq!(props["Ring"], "OKLCH(0.708 0 0)");
        // Digits are not part of the name grammar.
        assert!(!props.keys().any(|name| name.starts_with("chart")));
        assert!(!props.contains_key("font-sans"));
    }

    #[test]
    fn later_declaration_wins() {
        let props = oklch_properties("--a: oklch(0 0 0); --a: oklch(1 0 0);");
        assert_eq!(props["a"], "oklch(1 0 0)");
    }

    #[test]
    fn reads_radius() {
        assert_eq!(radius_rem(root_block(CSS).unwrap()), Some(0.625));
        assert_eq!(radius_rem("--radius: 10px;"), None);
        assert_eq!(radius_rem("--radius: .5rem;"), Some(0.5));
        assert_eq!(radius_rem("--radius: .rem;"), None);
        assert_eq!(radius_rem("--background: oklch(1 0 0);"), None);
    }

    #[test]
    fn radius_reads_longest_number_prefix() {
        assert_eq!(radius_rem("--radius: 1.2.3rem;"), Some(1.2));
    }
}
