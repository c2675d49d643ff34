//! Splicing generated blocks into the config source, and the file driver.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use serde::{Serialize, Serializer};
use serde::ser::SerializeMap;
use swatch_color::BorderRadii;
use tracing::info;

use crate::codegen::{colors_code, radius_code};
use crate::error::SyncError;
use crate::extract::{extract_colors, extract_radius};
use crate::mapping::ColorMap;
use crate::stylesheet::root_block;
use crate::tree::ColorTree;

static COLORS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)const colors = \{.*?\} as const;").expect("valid colors block pattern")
});

static RADIUS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)const borderRadius = \{.*?\} as const;").expect("valid radius block pattern")
});

/// Replace the first `const colors = {...} as const;` and the first
/// `const borderRadius = {...} as const;` in `config` with the given code.
///
/// The replacement text is inserted literally; `$` has no special meaning.
///
/// # Errors
///
/// Returns [`SyncError::MissingBlock`] naming whichever block is absent.
pub fn rewrite_config(config: &str, colors: &str, radius: &str) -> Result<String, SyncError> {
    if !COLORS_BLOCK.is_match(config) {
        return Err(SyncError::MissingBlock("colors"));
    }
    let config = COLORS_BLOCK.replace(config, NoExpand(colors));

    if !RADIUS_BLOCK.is_match(&config) {
        return Err(SyncError::MissingBlock("borderRadius"));
    }
    Ok(RADIUS_BLOCK.replace(&config, NoExpand(radius)).into_owned())
}

// ─── File driver ────────────────────────────────────────────────────────────

/// What a [`sync`] run wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    #[serde(skip)]
    pub config: PathBuf,
    pub colors: ColorTree,
    #[serde(serialize_with = "radii_as_px")]
    pub border_radius: BorderRadii,
    /// Mapped variables the style sheet did not declare.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}

fn radii_as_px<S: Serializer>(radii: &BorderRadii, serializer: S) -> Result<S::Ok, S::Error> {
    let entries = radii.entries();
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (name, px) in entries {
        map.serialize_entry(name, &format!("{px}px"))?;
    }
    map.end()
}

/// Regenerate the color and radius blocks of `config` from `stylesheet`.
///
/// Reads both files, converts the mapped `:root` colors, splices the new
/// blocks in, and writes `config` back in place.
///
/// # Errors
///
/// - [`SyncError::Io`] if either file cannot be read or `config` cannot be
///   written
/// - [`SyncError::MissingRootBlock`] / [`SyncError::MissingBlock`] if the
///   style sheet or config lacks the expected structure
/// - [`SyncError::Color`] if a mapped variable holds a malformed color
///
/// The config file is left untouched on any error.
pub fn sync(stylesheet: &Path, config: &Path, map: &ColorMap) -> Result<SyncReport, SyncError> {
    let css = read(stylesheet)?;
    let block = root_block(&css)?;

    let extraction = extract_colors(block, map)?;
    let radii = extract_radius(block);

    let source = read(config)?;
    let updated = rewrite_config(&source, &colors_code(&extraction.tree), &radius_code(&radii))?;

    fs::write(config, updated).map_err(|source| SyncError::Io {
        path: config.to_path_buf(),
        source,
    })?;
    info!(
        path = %config.display(),
        colors = extraction.tree.len(),
        missing = extraction.missing.len(),
        "updated email config"
    );

    Ok(SyncReport {
        config: config.to_path_buf(),
        colors: extraction.tree,
        border_radius: radii,
        missing: extraction.missing,
    })
}

fn read(path: &Path) -> Result<String, SyncError> {
    fs::read_to_string(path).map_err(|source| SyncError::Io {
        path: path.to_path_buf(),
        source,
    })
}
