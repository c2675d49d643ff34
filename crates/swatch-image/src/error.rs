use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// Width or height was zero. The aspect-ratio math needs both.
    #[error("invalid image dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: u32, height: u32 },

    #[error("invalid image quality {0}: expected 1-100")]
    InvalidQuality(u8),

    /// A custom breakpoint table was empty, unsorted, or contained 0.
    #[error("invalid breakpoint table: {0}")]
    InvalidBreakpoints(&'static str),
}
