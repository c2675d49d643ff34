// SPDX-License-Identifier: MIT
//
// OKLCH color values and their textual grammar.
//
// Accepted form (keyword case-insensitive, whitespace tolerant):
//
//   oklch(<L>[%] <C> <H>[deg] [/ <A>[%]])
//
// Each number is a run of digits and dots. The match is a search, not an
// anchored parse: `color: oklch(0.5 0.1 20);` is accepted and the
// surrounding text ignored, which is what a CSS declaration scanner needs.
#![allow(clippy::many_single_char_names)]

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::convert::{linear_srgb_to_u8, oklab_to_linear_srgb, oklch_to_oklab_ab, to_u8};
use crate::error::ParseError;
use crate::srgb::SrgbColor;

static OKLCH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)oklch\s*\(\s*([0-9.]+)(%?)\s+([0-9.]+)\s+([0-9.]+)(deg)?(?:\s*/\s*([0-9.]+)(%?))?\s*\)",
    )
    .expect("OKLCH pattern is a valid regex")
});

// ─── OklchColor ─────────────────────────────────────────────────────────────

/// A parsed OKLCH color.
///
/// Values are stored exactly as read: percentages are divided by 100, but
/// nothing is clamped. Out-of-range lightness or alpha is resolved by the
/// 8-bit clamp at the end of the conversion, not here.
///
/// ```
/// use swatch_color::OklchColor;
///
/// let color: OklchColor = "oklch(70% 0.15 30deg / 50%)".parse().unwrap();
/// assert_eq!(color.alpha, Some(0.5));
/// assert_eq!(color.to_srgb().to_hex().len(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OklchColor {
    /// Lightness, nominally 0.0 (black) to 1.0 (white).
    pub l: f64,

    /// Chroma, 0.0 (gray) upward. The sRGB gamut tops out near 0.37.
    pub c: f64,

    /// Hue angle in degrees. Periodic, never normalized.
    pub h: f64,

    /// Opacity, nominally 0.0 to 1.0. `None` when the input had no alpha
    /// clause, which also drops the fourth hex byte.
    pub alpha: Option<f64>,
}

impl OklchColor {
    /// Create an opaque color from OKLCH components.
    #[inline]
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h, alpha: None }
    }

    /// Return a copy carrying an explicit alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: Some(alpha),
            ..self
        }
    }

    /// Parse the first `oklch(...)` expression in `input`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if no expression matches the grammar, or if a
    /// numeric group has no readable decimal prefix (e.g. a lone `.`).
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let caps = OKLCH_PATTERN
            .captures(input)
            .ok_or_else(|| ParseError::new(input))?;

        let number = |idx: usize| {
            caps.get(idx)
                .and_then(|m| parse_decimal(m.as_str()))
                .ok_or_else(|| ParseError::new(input))
        };
        let is_percent = |idx: usize| caps.get(idx).is_some_and(|m| m.as_str() == "%");

        let mut l = number(1)?;
        if is_percent(2) {
            l /= 100.0;
        }
        let c = number(3)?;
        let h = number(4)?;

        let alpha = match caps.get(6) {
            Some(_) => {
                let a = number(6)?;
                Some(if is_percent(7) { a / 100.0 } else { a })
            }
            None => None,
        };

        Ok(Self { l, c, h, alpha })
    }

    /// Convert to 8-bit sRGB.
    ///
    /// Out-of-gamut channels are clipped per channel after gamma encoding;
    /// there is no chroma reduction.
    #[must_use]
    pub fn to_srgb(self) -> SrgbColor {
        let (a, b) = oklch_to_oklab_ab(self.c, self.h);
        let (r, g, bl) = oklab_to_linear_srgb(self.l, a, b);
        SrgbColor {
            r: linear_srgb_to_u8(r),
            g: linear_srgb_to_u8(g),
            b: linear_srgb_to_u8(bl),
            alpha: self.alpha.map(to_u8),
        }
    }
}

impl FromStr for OklchColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for OklchColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({} {} {}", self.l, self.c, self.h)?;
        if let Some(alpha) = self.alpha {
            write!(f, " / {alpha}")?;
        }
        f.write_str(")")
    }
}

// ─── Numbers ────────────────────────────────────────────────────────────────

/// Read a `[0-9.]+` group as a lenient float reader does: the longest
/// prefix with at most one dot. `"1.2.3"` reads as 1.2, `"."` reads as
/// nothing.
///
/// ```
/// assert_eq!(swatch_color::parse_decimal("0.625"), Some(0.625));
/// assert_eq!(swatch_color::parse_decimal("1.2.3"), Some(1.2));
/// ```
#[must_use]
pub fn parse_decimal(s: &str) -> Option<f64> {
    let end = s
        .match_indices('.')
        .nth(1)
        .map_or(s.len(), |(idx, _)| idx);
    s[..end].parse().ok()
}

// ─── Tests ──────────────────────────────────────────────────────────────────
