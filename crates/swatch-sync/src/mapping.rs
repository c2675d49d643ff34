//! Which style sheet variables feed which config keys.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SyncError;

/// One `--var` → config path assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMapping {
    /// Custom property name without the leading `--`.
    pub var: String,
    /// `name` for a top-level color, `parent.child` for a nested one.
    pub path: String,
}

impl ColorMapping {
    #[must_use]
    pub fn new(var: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            var: var.into(),
            path: path.into(),
        }
    }
}

/// The ordered list of mappings. Order decides the order of the generated
/// config entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorMap {
    entries: Vec<ColorMapping>,
}

/// The email config's colors, as `(var, path)`.
const DEFAULT_MAP: [(&str, &str); 14] = [
    ("background", "background"),
    ("foreground", "foreground"),
    ("primary", "primary.DEFAULT"),
    ("primary-foreground", "primary.foreground"),
    ("secondary", "secondary.DEFAULT"),
    ("secondary-foreground", "secondary.foreground"),
    ("muted", "muted.DEFAULT"),
    ("muted-foreground", "muted.foreground"),
    ("accent", "accent.DEFAULT"),
    ("accent-foreground", "accent.foreground"),
    ("destructive", "destructive"),
    ("border", "border"),
    ("input", "input"),
    ("ring", "ring"),
];

impl ColorMap {
    #[must_use]
    pub const fn new(entries: Vec<ColorMapping>) -> Self {
        Self { entries }
    }

    /// Parse a JSON array of `{ "var": ..., "path": ... }` objects.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::ColorMap`] if the JSON does not have that shape.
    pub fn from_json(text: &str) -> Result<Self, SyncError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON color map file.
    ///
    /// # Errors
    ///
    /// [`SyncError::Io`] if the file cannot be read, [`SyncError::ColorMap`]
    /// if it does not parse.
    pub fn load(path: &Path) -> Result<Self, SyncError> {
        let text = fs::read_to_string(path).map_err(|source| SyncError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorMapping> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAP
                .iter()
                .map(|&(var, path)| ColorMapping::new(var, path))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a ColorMap {
    type Item = &'a ColorMapping;
    type IntoIter = std::slice::Iter<'a, ColorMapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_map_covers_email_palette() {
        let map = ColorMap::default();
        assert_eq!(map.len(), 14);
        let first = map.iter().next().unwrap();
        assert_eq!(first, &ColorMapping::new("background", "background"));
        assert!(
            map.iter()
                .any(|m| m.var == "muted-foreground" && m.path == "muted.foreground")
        );
    }

    #[test]
    fn parses_json_array() {
        let map = ColorMap::from_json(
            r#"[{"var": "brand", "path": "brand.DEFAULT"}, {"var": "ink", "path": "ink"}]"#,
        )
        .unwrap();
        assert_eq!(
            map,
            ColorMap::new(vec![
                ColorMapping::new("brand", "brand.DEFAULT"),
                ColorMapping::new("ink", "ink"),
            ])
        );
    }

    #[test]
    fn rejects_wrong_shape() {
        let err = ColorMap::from_json(r#"{"brand": "brand"}"#).unwrap_err();
        assert!(matches!(err, SyncError::ColorMap(_)));
    }

    #[test]
    fn json_round_trip_of_default() {
        let map = ColorMap::default();
        let text = serde_json::to_string(&map).unwrap();
        assert_eq!(ColorMap::from_json(&text).unwrap(), map);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ColorMap::load(Path::new("/nonexistent/swatch-map.json")).unwrap_err();
        assert!(matches!(err, SyncError::Io { .. }));
        assert!(err.to_string().starts_with("/nonexistent/swatch-map.json: "));
    }
}
