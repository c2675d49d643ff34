//! The generated color object: an insertion-ordered map with one level of
//! nesting.
//!
//! `insert("ring", ..)` sets a top-level string; `insert("primary.DEFAULT", ..)`
//! sets `DEFAULT` inside the `primary` object. Keys keep the position of
//! their first insertion, so the generated source is stable across runs.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A top-level entry of the color object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorValue {
    /// `key: "#RRGGBB"`
    Flat(String),
    /// `key: { child: "#RRGGBB", ... }`
    Nested(Vec<(String, String)>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTree {
    entries: Vec<(String, ColorValue)>,
}

impl ColorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set the value at a config path (`name` or `parent.child`).
    ///
    /// The parent is the text before the first dot and the child the text
    /// up to the next one; further segments are ignored, and an empty
    /// child sets the parent as a flat value. Setting a nested path under a
    /// flat entry replaces the flat value with an object; setting a flat
    /// path over an object replaces the object.
    pub fn insert(&mut self, path: &str, hex: impl Into<String>) {
        let hex = hex.into();
        match split_path(path) {
            (parent, Some(child)) => {
                let slot = self.slot(parent);
                if !matches!(slot, ColorValue::Nested(_)) {
                    *slot = ColorValue::Nested(Vec::new());
                }
                if let ColorValue::Nested(children) = slot {
                    match children.iter_mut().find(|(key, _)| key == child) {
                        Some((_, value)) => *value = hex,
                        None => children.push((child.to_owned(), hex)),
                    }
                }
            }
            (parent, None) => *self.slot(parent) = ColorValue::Flat(hex),
        }
    }

    /// The entry stored under a top-level key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ColorValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// The hex at a config path, flat or nested. Paths split the same way
    /// as in [`insert`](Self::insert).
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&str> {
        let (parent, child) = split_path(path);
        match (child, self.get(parent)?) {
            (None, ColorValue::Flat(hex)) => Some(hex),
            (Some(child), ColorValue::Nested(children)) => children
                .iter()
                .find(|(key, _)| key == child)
                .map(|(_, hex)| hex.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[(String, ColorValue)] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for `key`, appended as an empty flat value if absent.
    fn slot(&mut self, key: &str) -> &mut ColorValue {
        let idx = match self.entries.iter().position(|(k, _)| k == key) {
            Some(idx) => idx,
            None => {
                self.entries
                    .push((key.to_owned(), ColorValue::Flat(String::new())));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }
}

/// `parent.child.rest` → `("parent", Some("child"))`; `name` → `("name", None)`.
fn split_path(path: &str) -> (&str, Option<&str>) {
    let mut segments = path.split('.');
    let parent = segments.next().unwrap_or_default();
    let child = segments.next().filter(|child| !child.is_empty());
    (parent, child)
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flat(hex) => serializer.serialize_str(hex),
            Self::Nested(children) => {
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for (key, hex) in children {
                    map.serialize_entry(key, hex)?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for ColorTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
