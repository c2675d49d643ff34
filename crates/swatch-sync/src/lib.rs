//! # swatch-sync — style sheet colors into the email template config
//!
//! The web app's theme lives in a style sheet as OKLCH custom properties.
//! Email templates cannot use those, so this crate regenerates the hex
//! literals in the email config source file from the style sheet:
//!
//! ```text
//! app.css  :root { --primary: oklch(0.205 0 0); --radius: 0.625rem; ... }
//!     │
//!     ▼
//! stylesheet.rs: :root block, `--name: oklch(...)` declarations, `--radius`
//!     │
//!     ▼
//! extract.rs:    ColorMap lookup + conversion → ColorTree, BorderRadii
//!     │
//!     ▼
//! codegen.rs:    `const colors = {...} as const;` / `const borderRadius = ...`
//!     │
//!     ▼
//! rewrite.rs:    splice both blocks into the config file, write it back
//! ```
//!
//! A mapped variable missing from the style sheet is skipped with a
//! warning; a variable that is present but malformed aborts the run.

pub mod codegen;
pub mod error;
pub mod extract;
pub mod mapping;
pub mod rewrite;
pub mod stylesheet;
pub mod tree;

pub use error::SyncError;
pub use extract::{Extraction, extract_colors, extract_radius};
pub use mapping::{ColorMap, ColorMapping};
pub use rewrite::{SyncReport, rewrite_config, sync};
pub use tree::{ColorTree, ColorValue};
