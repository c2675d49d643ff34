//! Breakpoint tables — the widths a resizing endpoint will serve.
//!
//! A breakpoint set is an ascending list of pixel widths. For an image of
//! intrinsic width `w`, the *fallback width* is the smallest breakpoint
//! `>= w` (or the largest breakpoint if `w` exceeds them all), and the
//! *covering* set is every breakpoint up to and including it. Anything
//! larger would only upscale.

use std::borrow::Cow;

use crate::error::ImageError;

/// The widths served by the default image endpoint.
pub const DEFAULT_BREAKPOINTS: [u32; 16] = [
    16, 32, 48, 64, 96, 128, 256, 384, 640, 750, 828, 1080, 1200, 1920, 2048, 3840,
];

/// A non-empty, strictly ascending list of positive pixel widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointSet {
    widths: Cow<'static, [u32]>,
}

impl BreakpointSet {
    /// The default table, [`DEFAULT_BREAKPOINTS`].
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            widths: Cow::Borrowed(&DEFAULT_BREAKPOINTS),
        }
    }

    /// Build a custom table.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidBreakpoints`] if `widths` is empty,
    /// contains 0, or is not strictly ascending.
    pub fn new(widths: impl Into<Vec<u32>>) -> Result<Self, ImageError> {
        let widths = widths.into();
        if widths.is_empty() {
            return Err(ImageError::InvalidBreakpoints("no widths"));
        }
        if widths.contains(&0) {
            return Err(ImageError::InvalidBreakpoints("width 0"));
        }
        if !widths.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(ImageError::InvalidBreakpoints("widths not strictly ascending"));
        }
        Ok(Self {
            widths: Cow::Owned(widths),
        })
    }

    /// All widths, ascending.
    #[must_use]
    pub fn widths(&self) -> &[u32] {
        &self.widths
    }

    /// The widest variant the endpoint serves.
    #[must_use]
    pub fn largest(&self) -> u32 {
        // Non-empty by construction.
        self.widths[self.widths.len() - 1]
    }

    /// Smallest breakpoint `>= width`, or the largest breakpoint when none
    /// is wide enough.
    ///
    /// The comparison is inclusive: an image exactly 640px wide falls back
    /// to 640, not 750.
    #[must_use]
    pub fn fallback_width(&self, width: u32) -> u32 {
        self.widths
            .iter()
            .copied()
            .find(|&w| w >= width)
            .unwrap_or_else(|| self.largest())
    }

    /// Every breakpoint up to and including [`fallback_width`](Self::fallback_width).
    ///
    /// Never empty: the first breakpoint always qualifies.
    #[must_use]
    pub fn covering(&self, width: u32) -> &[u32] {
        let max = self.fallback_width(width);
        let end = self.widths.partition_point(|&w| w <= max);
        &self.widths[..end]
    }
}

impl Default for BreakpointSet {
    fn default() -> Self {
        Self::standard()
    }
}
