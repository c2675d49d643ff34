// SPDX-License-Identifier: MIT
//
// swatch-color — OKLCH to 8-bit sRGB, bit for bit.
//
// The style sheets of the web starter declare every theme color as an
// `oklch(...)` custom property. Email clients only understand hex, so the
// build-time sync converts each declaration with the exact transform the
// browser-side tooling uses. Two conversions of the same string always
// produce the same bytes, and the low bits match the reference transform:
// all math is `f64`, evaluated in reference order, without fused
// multiply-add.
//
// Pipeline:
//
//   "oklch(...)" → OklchColor → Oklab → LMS → linear sRGB → sRGB → SrgbColor
//
// The crate also owns the border-radius derivation that the same sync
// performs on the `--radius` custom property.

pub mod convert;
pub mod error;
pub mod oklch;
pub mod radius;
pub mod srgb;

pub use convert::convert;
pub use error::ParseError;
pub use oklch::{OklchColor, parse_decimal};
pub use radius::BorderRadii;
pub use srgb::SrgbColor;
