// SPDX-License-Identifier: MIT
//
// OKLCH → sRGB conversion math.
//
// These implement the Oklab color space math created by Björn Ottosson.
// Reference: https://bottosson.github.io/posts/oklab/
//
// Pipeline: OKLCH → Oklab → LMS → linear sRGB → sRGB → 8-bit
//
// Every expression keeps the reference evaluation order and plain
// multiply-then-add. Fused multiply-add and `to_radians` both round
// differently and shift some channels by one step.
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use std::f64::consts::PI;

use crate::error::ParseError;
use crate::oklch::OklchColor;
use crate::srgb::SrgbColor;

/// Convert an `oklch(...)` string to 8-bit sRGB.
///
/// ```
/// assert_eq!(swatch_color::convert("oklch(0.577 0.245 27.325)").unwrap().to_hex(), "#E7000B");
/// ```
///
/// # Errors
///
/// Returns [`ParseError`] when the input does not match the OKLCH grammar.
/// There is no fallback color.
pub fn convert(input: &str) -> Result<SrgbColor, ParseError> {
    OklchColor::parse(input).map(OklchColor::to_srgb)
}

// ─── OKLCH → Oklab ──────────────────────────────────────────────────────────

/// Convert OKLCH chroma and hue (degrees) to Oklab a, b components.
#[inline]
pub(crate) fn oklch_to_oklab_ab(c: f64, h: f64) -> (f64, f64) {
    let h_rad = h * PI / 180.0;
    (c * h_rad.cos(), c * h_rad.sin())
}

// ─── Oklab → Linear sRGB ────────────────────────────────────────────────────
//
// The Oklab → linear sRGB conversion goes through an intermediate LMS
// (Long, Medium, Short cone response) space.

/// Convert Oklab (L, a, b) to linear sRGB. Results may fall outside 0–1.
#[inline]
pub(crate) fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    // Oklab → LMS (cube roots)
    let l_ = l_ok + 0.396_337_777_4 * a + 0.215_803_757_3 * b;
    let m_ = l_ok - 0.105_561_345_8 * a - 0.063_854_172_8 * b;
    let s_ = l_ok - 0.089_484_177_5 * a - 1.291_485_548 * b;

    // Undo cube root
    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    // LMS → Linear sRGB
    let r = 4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s;
    let g = -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s;
    let bl = -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701 * s;

    (r, g, bl)
}

// ─── Linear sRGB → sRGB (Gamma) ─────────────────────────────────────────────

/// Apply the sRGB transfer curve to one linear component.
///
/// Non-positive input encodes to exactly 0.
#[inline]
#[must_use]
pub fn linear_to_srgb(v: f64) -> f64 {
    if v <= 0.0 {
        0.0
    } else if v <= 0.003_130_8 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

// ─── Quantization ───────────────────────────────────────────────────────────

/// Round half toward positive infinity (2.5 → 3, -2.5 → -2).
///
/// `f64::round` rounds halves away from zero, which disagrees on negative
/// halves.
#[inline]
#[must_use]
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Scale a 0.0–1.0 value to a byte: ×255, round half up, clamp.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_u8(v: f64) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before the cast; NaN casts to 0.
    round_half_up(v * 255.0).clamp(0.0, 255.0) as u8
}

/// Gamma-encode a linear component and quantize it.
#[inline]
pub(crate) fn linear_srgb_to_u8(v: f64) -> u8 {
    to_u8(linear_to_srgb(v))
}

// ─── Tests ──────────────────────────────────────────────────────────────────
