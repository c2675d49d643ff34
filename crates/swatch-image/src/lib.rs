//! # swatch-image — responsive image props over a breakpoint table
//!
//! Given an image's intrinsic size, derives the smallest set of resized
//! variants that covers it and renders them as `src` / `srcset` / `sizes`
//! / `width` / `height` attribute values.
//!
//! - **[`breakpoint`]**: `BreakpointSet`, the ascending table of widths a
//!   resizing endpoint can serve, and the covering-subset selection
//! - **[`endpoint`]**: `UrlTemplate`, how a (source, width, quality)
//!   triple becomes a URL; `ResizeEndpoint` is the query-string form
//! - **[`responsive`]**: `ImageDescriptor` in, `ResponsiveImageProps` out
//!
//! Everything here is a pure function of its input. Building the same
//! descriptor twice yields byte-identical strings.

pub mod breakpoint;
pub mod endpoint;
pub mod error;
pub mod responsive;

pub use breakpoint::{BreakpointSet, DEFAULT_BREAKPOINTS};
pub use endpoint::{ResizeEndpoint, UrlTemplate};
pub use error::ImageError;
pub use responsive::{ImageDescriptor, ResponsiveImageBuilder, ResponsiveImageProps, build};
