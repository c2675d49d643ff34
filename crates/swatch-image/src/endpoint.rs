//! URL templates for resized image variants.

use url::form_urlencoded;

/// Path of the default image-resizing endpoint.
pub const DEFAULT_ENDPOINT: &str = "/_vercel/image";

/// Turns a source URL, a target width, and a quality into the URL of the
/// resized variant.
///
/// Implemented by [`ResizeEndpoint`] and by any
/// `Fn(&str, u32, u8) -> String`, so a caller can target a different
/// image service without touching the breakpoint logic:
///
/// ```
/// use swatch_image::{ImageDescriptor, ResponsiveImageBuilder};
///
/// let builder = ResponsiveImageBuilder::new()
///     .with_template(|src: &str, w: u32, q: u8| format!("https://cdn.test{src}?width={w}&quality={q}"));
/// let props = builder.build(&ImageDescriptor::new("/a.png", 20, 10)).unwrap();
/// assert_eq!(props.src, "https://cdn.test/a.png?width=32&quality=75");
/// ```
pub trait UrlTemplate {
    fn url(&self, src: &str, width: u32, quality: u8) -> String;
}

impl<F> UrlTemplate for F
where
    F: Fn(&str, u32, u8) -> String,
{
    fn url(&self, src: &str, width: u32, quality: u8) -> String {
        self(src, width, quality)
    }
}

/// An endpoint taking `url`, `w` and `q` query parameters:
/// `<path>?url=<form-encoded src>&w=<width>&q=<quality>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeEndpoint {
    path: String,
}

impl ResizeEndpoint {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Default for ResizeEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl UrlTemplate for ResizeEndpoint {
    fn url(&self, src: &str, width: u32, quality: u8) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("url", src)
            .append_pair("w", &width.to_string())
            .append_pair("q", &quality.to_string())
            .finish();
        format!("{}?{query}", self.path)
    }
}
