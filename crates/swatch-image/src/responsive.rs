//! Responsive image props — descriptor in, attribute values out.
//!
//! The builder picks the covering breakpoints for the image's intrinsic
//! width, renders one URL per breakpoint into a `srcset`, uses the widest
//! covering variant as the fallback `src`, and rescales the height to keep
//! the aspect ratio.
//!
//! A builder that is not optimizing (local development, where no resizing
//! endpoint exists) hands the source straight back: no `srcset`, original
//! dimensions, and the quality the caller asked for.

use serde::Serialize;

use crate::breakpoint::BreakpointSet;
use crate::endpoint::{ResizeEndpoint, UrlTemplate};
use crate::error::ImageError;

/// `sizes` hint used when the caller gives none.
pub const DEFAULT_SIZES: &str = "100vw";

/// Quality used when the caller gives none.
pub const DEFAULT_QUALITY: u8 = 75;

// ─── ImageDescriptor ────────────────────────────────────────────────────────

/// An image as the caller knows it: where it lives and how big it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// Source URL, passed to the endpoint opaquely.
    pub src: String,
    /// Intrinsic width in pixels.
    pub width: u32,
    /// Intrinsic height in pixels.
    pub height: u32,
    /// `sizes` attribute hint; [`DEFAULT_SIZES`] when `None`.
    pub sizes: Option<String>,
    /// Encoder quality 1–100; [`DEFAULT_QUALITY`] when `None`.
    pub quality: Option<u8>,
}

impl ImageDescriptor {
    #[must_use]
    pub fn new(src: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            src: src.into(),
            width,
            height,
            sizes: None,
            quality: None,
        }
    }

    #[must_use]
    pub fn with_sizes(self, sizes: impl Into<String>) -> Self {
        Self {
            sizes: Some(sizes.into()),
            ..self
        }
    }

    #[must_use]
    pub fn with_quality(self, quality: u8) -> Self {
        Self {
            quality: Some(quality),
            ..self
        }
    }

    fn validate(&self) -> Result<u8, ImageError> {
        if self.width == 0 || self.height == 0 {
            return Err(ImageError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        let quality = self.quality.unwrap_or(DEFAULT_QUALITY);
        if !(1..=100).contains(&quality) {
            return Err(ImageError::InvalidQuality(quality));
        }
        Ok(quality)
    }
}

// ─── ResponsiveImageProps ───────────────────────────────────────────────────

/// Attribute values for an `<img>` element.
///
/// Serializes with the attribute-style key `srcSet`; absent optional
/// fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveImageProps {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_set: Option<String>,
    pub sizes: String,
    pub width: u32,
    pub height: u32,
    /// Set only when passing the source through; optimized URLs already
    /// carry the quality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
}

// ─── ResponsiveImageBuilder ─────────────────────────────────────────────────

/// Builds [`ResponsiveImageProps`] against a breakpoint table and a URL
/// template.
///
/// ```
/// use swatch_image::{ImageDescriptor, ResponsiveImageBuilder};
///
/// let props = ResponsiveImageBuilder::new()
///     .build(&ImageDescriptor::new("/hero.jpg", 5472, 3648))
///     .unwrap();
/// assert_eq!((props.width, props.height), (3840, 2560));
/// ```
#[derive(Debug, Clone)]
pub struct ResponsiveImageBuilder<T = ResizeEndpoint> {
    breakpoints: BreakpointSet,
    template: T,
    optimize: bool,
}

impl ResponsiveImageBuilder {
    /// Default table, default endpoint, optimizing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            breakpoints: BreakpointSet::standard(),
            template: ResizeEndpoint::default(),
            optimize: true,
        }
    }
}

impl Default for ResponsiveImageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: UrlTemplate> ResponsiveImageBuilder<T> {
    /// Swap the URL template, keeping table and mode.
    #[must_use]
    pub fn with_template<U: UrlTemplate>(self, template: U) -> ResponsiveImageBuilder<U> {
        ResponsiveImageBuilder {
            breakpoints: self.breakpoints,
            template,
            optimize: self.optimize,
        }
    }

    #[must_use]
    pub fn with_breakpoints(self, breakpoints: BreakpointSet) -> Self {
        Self {
            breakpoints,
            ..self
        }
    }

    /// `false` makes [`build`](Self::build) pass the source through.
    #[must_use]
    pub fn optimize(self, optimize: bool) -> Self {
        Self { optimize, ..self }
    }

    #[must_use]
    pub const fn breakpoints(&self) -> &BreakpointSet {
        &self.breakpoints
    }

    #[must_use]
    pub const fn is_optimizing(&self) -> bool {
        self.optimize
    }

    /// Derive the attribute values for `image`.
    ///
    /// # Errors
    ///
    /// - [`ImageError::InvalidDimension`] if width or height is 0
    /// - [`ImageError::InvalidQuality`] if quality is outside 1–100
    pub fn build(&self, image: &ImageDescriptor) -> Result<ResponsiveImageProps, ImageError> {
        let quality = image.validate()?;
        let sizes = image
            .sizes
            .clone()
            .unwrap_or_else(|| DEFAULT_SIZES.to_owned());

        if !self.optimize {
            return Ok(ResponsiveImageProps {
                src: image.src.clone(),
                src_set: None,
                sizes,
                width: image.width,
                height: image.height,
                quality: Some(quality),
            });
        }

        let widths = self.breakpoints.covering(image.width);
        let src_set = widths
            .iter()
            .map(|&w| format!("{} {w}w", self.template.url(&image.src, w, quality)))
            .collect::<Vec<_>>()
            .join(", ");

        // `covering` is never empty; the first breakpoint always qualifies.
        let fallback = widths.last().copied().unwrap_or_else(|| self.breakpoints.largest());

        Ok(ResponsiveImageProps {
            src: self.template.url(&image.src, fallback, quality),
            src_set: Some(src_set),
            sizes,
            width: fallback,
            height: scaled_height(fallback, image.width, image.height),
            quality: None,
        })
    }
}

/// Build with the default table and endpoint.
///
/// # Errors
///
/// See [`ResponsiveImageBuilder::build`].
pub fn build(image: &ImageDescriptor) -> Result<ResponsiveImageProps, ImageError> {
    ResponsiveImageBuilder::new().build(image)
}

/// `round(new_width × height / width)`, halves rounding up, in exact
/// integer arithmetic. Saturates at `u32::MAX`.
fn scaled_height(new_width: u32, width: u32, height: u32) -> u32 {
    let num = 2 * u64::from(new_width) * u64::from(height) + u64::from(width);
    let den = 2 * u64::from(width);
    u32::try_from(num / den).unwrap_or(u32::MAX)
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::DEFAULT_BREAKPOINTS;
    use pretty_assertions::assert_eq;

    fn srcset_widths(props: &ResponsiveImageProps) -> Vec<u32> {
        props
            .src_set
            .as_deref()
            .unwrap()
            .split(", ")
            .map(|entry| {
                let (_, w) = entry.rsplit_once(' ').unwrap();
                w.trim_end_matches('w').parse().unwrap()
            })
            .collect()
    }

    // ── Breakpoint Selection ─────────────────────────────────────────────

    #[test]
    fn oversized_image_uses_every_breakpoint() {
        let props = build(&ImageDescriptor::new("/big.jpg", 5472, 3648)).unwrap();
        assert_eq!(props.width, 3840);
        assert_eq!(srcset_widths(&props), DEFAULT_BREAKPOINTS.to_vec());
    }

    #[test]
    fn small_image_stops_at_covering_breakpoint() {
        let props = build(&ImageDescriptor::new("/icon.png", 100, 50)).unwrap();
        assert_eq!(props.width, 128);
        assert_eq!(srcset_widths(&props), vec![16, 32, 48, 64, 96, 128]);
        assert_eq!(props.height, 64);
    }

    // ── Aspect Ratio ─────────────────────────────────────────────────────

    #[test]
    fn height_preserves_aspect_ratio() {
        let props = build(&ImageDescriptor::new("/big.jpg", 5472, 3648)).unwrap();
        assert_eq!(props.height, 2560);
    }

    #[test]
    fn height_rounds_rather_than_truncates() {
        // 128 × 33 / 100 = 42.24 → 42; 128 × 37 / 100 = 47.36 → 47
        assert_eq!(scaled_height(128, 100, 33), 42);
        assert_eq!(scaled_height(128, 100, 37), 47);
        // 16 × 3 / 32 = 1.5 → 2
        assert_eq!(scaled_height(16, 32, 3), 2);
        // 750 × 2 / 700 = 2.14 → 2; 750 × 3 / 700 = 3.21 → 3
        assert_eq!(scaled_height(750, 700, 2), 2);
        assert_eq!(scaled_height(750, 700, 3), 3);
        // 3 × 5 / 2 = 7.5 → 8
        assert_eq!(scaled_height(3, 2, 5), 8);
    }

    #[test]
    fn scaled_height_saturates() {
        assert_eq!(scaled_height(3840, 1, u32::MAX), u32::MAX);
    }

    // ── URLs ─────────────────────────────────────────────────────────────

    #[test]
    fn srcset_entries_and_fallback_src() {
        let props = build(&ImageDescriptor::new("/a.png", 30, 30)).unwrap();
        assert_eq!(
            props.src_set.as_deref(),
            Some(
                "/_vercel/image?url=%2Fa.png&w=16&q=75 16w, \
                 /_vercel/image?url=%2Fa.png&w=32&q=75 32w"
            )
        );
        assert_eq!(props.src, "/_vercel/image?url=%2Fa.png&w=32&q=75");
    }

    #[test]
    fn quality_flows_into_urls() {
        let image = ImageDescriptor::new("/a.png", 10, 10).with_quality(90);
        let props = build(&image).unwrap();
        assert_eq!(props.src, "/_vercel/image?url=%2Fa.png&w=16&q=90");
    }

    #[test]
    fn custom_template_and_table() {
        let builder = ResponsiveImageBuilder::new()
            .with_breakpoints(BreakpointSet::new([100, 200]).unwrap())
            .with_template(|src: &str, w: u32, q: u8| format!("/r/{w}/{q}{src}"));
        let props = builder.build(&ImageDescriptor::new("/x.webp", 150, 300)).unwrap();
        assert_eq!(props.src, "/r/200/75/x.webp");
        assert_eq!(props.src_set.as_deref(), Some("/r/100/75/x.webp 100w, /r/200/75/x.webp 200w"));
        assert_eq!((props.width, props.height), (200, 400));
    }

    #[test]
    fn builds_are_deterministic() {
        let image = ImageDescriptor::new("/p q.jpg", 1234, 987).with_sizes("50vw");
        assert_eq!(build(&image).unwrap(), build(&image).unwrap());
    }

    // ── Sizes ────────────────────────────────────────────────────────────

    #[test]
    fn sizes_defaults_and_passes_through() {
        let plain = build(&ImageDescriptor::new("/a.png", 10, 10)).unwrap();
        assert_eq!(plain.sizes, "100vw");

        let hinted = build(&ImageDescriptor::new("/a.png", 10, 10).with_sizes("(max-width: 600px) 100vw, 50vw")).unwrap();
        assert_eq!(hinted.sizes, "(max-width: 600px) 100vw, 50vw");
    }

    // ── Passthrough ──────────────────────────────────────────────────────

    #[test]
    fn passthrough_returns_source_unchanged() {
        let builder = ResponsiveImageBuilder::new().optimize(false);
        assert!(!builder.is_optimizing());
        let props = builder.build(&ImageDescriptor::new("/raw.jpg", 5472, 3648)).unwrap();
        assert_eq!(
            props,
            ResponsiveImageProps {
                src: "/raw.jpg".into(),
                src_set: None,
                sizes: "100vw".into(),
                width: 5472,
                height: 3648,
                quality: Some(75),
            }
        );
    }

    #[test]
    fn passthrough_reports_requested_quality() {
        let props = ResponsiveImageBuilder::new()
            .optimize(false)
            .build(&ImageDescriptor::new("/raw.jpg", 40, 30).with_quality(90))
            .unwrap();
        assert_eq!(props.quality, Some(90));
        assert_eq!(props.src, "/raw.jpg");
    }

    #[test]
    fn passthrough_still_validates() {
        let builder = ResponsiveImageBuilder::new().optimize(false);
        assert!(builder.build(&ImageDescriptor::new("/raw.jpg", 0, 10)).is_err());
    }

    // ── Errors ───────────────────────────────────────────────────────────

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            build(&ImageDescriptor::new("/a.png", 0, 10)),
            Err(ImageError::InvalidDimension { width: 0, height: 10 })
        );
        assert_eq!(
            build(&ImageDescriptor::new("/a.png", 10, 0)),
            Err(ImageError::InvalidDimension { width: 10, height: 0 })
        );
    }

    #[test]
    fn out_of_range_quality_is_rejected() {
        for q in [0, 101, 255] {
            let image = ImageDescriptor::new("/a.png", 10, 10).with_quality(q);
            assert_eq!(build(&image), Err(ImageError::InvalidQuality(q)));
        }
    }

    // ── Serialization ────────────────────────────────────────────────────

    #[test]
    fn serializes_with_attribute_names() {
        let props = build(&ImageDescriptor::new("/a.png", 10, 20)).unwrap();
        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "src": "/_vercel/image?url=%2Fa.png&w=16&q=75",
                "srcSet": "/_vercel/image?url=%2Fa.png&w=16&q=75 16w",
                "sizes": "100vw",
                "width": 16,
                "height": 32,
            })
        );
    }

    #[test]
    fn passthrough_omits_src_set() {
        let props = ResponsiveImageBuilder::new()
            .optimize(false)
            .build(&ImageDescriptor::new("/a.png", 10, 20))
            .unwrap();
        let json = serde_json::to_value(&props).unwrap();
        assert!(json.get("srcSet").is_none());
        assert_eq!(json["quality"], 75);
    }
}
