// SPDX-License-Identifier: MIT

use std::fmt;

/// An 8-bit sRGB color, the output of the OKLCH conversion.
///
/// Renders as `#RRGGBB`, or `#RRGGBBAA` when an alpha byte is present.
/// `Display` and `{:X}` use uppercase digits; `{:x}` uses lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SrgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: Option<u8>,
}

impl SrgbColor {
    /// An opaque color (no alpha byte).
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: None }
    }

    /// A color with an explicit alpha byte.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: Some(a),
        }
    }

    /// The three color channels.
    #[inline]
    #[must_use]
    pub const fn to_rgb8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Uppercase hex string: `#RRGGBB` or `#RRGGBBAA`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("{self:X}")
    }
}

impl fmt::UpperHex for SrgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b, alpha } = *self;
        write!(f, "#{r:02X}{g:02X}{b:02X}")?;
        if let Some(a) = alpha {
            write!(f, "{a:02X}")?;
        }
        Ok(())
    }
}

impl fmt::LowerHex for SrgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b, alpha } = *self;
        write!(f, "#{r:02x}{g:02x}{b:02x}")?;
        if let Some(a) = alpha {
            write!(f, "{a:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SrgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}
