/// Errors raised while preparing inputs for an [`crate::IntegralTable`].
#[derive(thiserror::Error, Debug)]
pub enum IntegralError {
    /// The interleaved RGB buffer does not hold `width * height * 3` bytes.
    #[error("Pixel buffer length ({0}) does not match the image size ({1})")]
    InvalidBufferLength(usize, usize),

    /// The intensity plane does not hold `width * height` values.
    #[error("Intensity plane length ({0}) does not match the image size ({1})")]
    InvalidPlaneLength(usize, usize),

    /// `width * height` pixels do not fit in memory addressing.
    #[error("Image size {0}x{1} is too large")]
    ImageTooLarge(usize, usize),

    /// Failed to decode an image file.
    #[error("Failed to load image")]
    Image(#[from] image::ImageError),
}
