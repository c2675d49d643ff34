// SPDX-License-Identifier: MIT
//
// Border radius scale derived from a single `--radius` rem value.
//
// The base size is the rem value in pixels (1rem = 16px, rounded half up);
// the four named sizes sit at fixed pixel offsets from it:
//
//   sm = base - 4   md = base - 2   lg = base   xl = base + 4
//
// The two smaller sizes floor at 0.

use std::fmt;

use crate::convert::round_half_up;

const PX_PER_REM: f64 = 16.0;

/// The four named radius sizes, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderRadii {
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
}

impl BorderRadii {
    /// Derive the scale from a rem value.
    ///
    /// ```
    /// use swatch_color::BorderRadii;
    ///
    /// let radii = BorderRadii::from_rem(0.625);
    /// assert_eq!((radii.sm, radii.md, radii.lg, radii.xl), (6, 8, 10, 14));
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_rem(rem: f64) -> Self {
        // Negative and NaN bases saturate to 0 in the cast.
        let base = round_half_up(rem * PX_PER_REM) as u32;
        Self::from_base_px(base)
    }

    /// Build the scale around a base pixel radius.
    #[must_use]
    pub const fn from_base_px(base: u32) -> Self {
        Self {
            sm: base.saturating_sub(4),
            md: base.saturating_sub(2),
            lg: base,
            xl: base.saturating_add(4),
        }
    }

    /// `(name, pixels)` pairs in ascending order.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, u32); 4] {
        [("sm", self.sm), ("md", self.md), ("lg", self.lg), ("xl", self.xl)]
    }
}

impl Default for BorderRadii {
    /// The scale for a 0.625rem (10px) base.
    fn default() -> Self {
        Self::from_base_px(10)
    }
}

impl fmt::Display for BorderRadii {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sm: {}px, md: {}px, lg: {}px, xl: {}px",
            self.sm, self.md, self.lg, self.xl
        )
    }
}
