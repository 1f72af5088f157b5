use crate::error::IntegralError;

/// Read-only access to an RGB image, one component triplet per pixel.
pub trait PixelSource {
    /// Image width in pixels
    fn width(&self) -> usize;

    /// Image height in pixels
    fn height(&self) -> usize;

    /// Components `[c0, c1, c2]` (red, green, blue) of the pixel at `(x, y)`
    fn pixel_at(&self, x: usize, y: usize) -> [u8; 3];
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn pixel_at(&self, x: usize, y: usize) -> [u8; 3] {
        (**self).pixel_at(x, y)
    }
}

/// Borrowed view over raw interleaved RGB bytes (3 bytes per pixel, row-major)
#[derive(Debug, Clone, Copy)]
pub struct RgbBuffer<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> RgbBuffer<'a> {
    /// Wrap `data` as a `width x height` RGB image
    pub fn new(data: &'a [u8], width: usize, height: usize) -> Result<Self, IntegralError> {
        let expected = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(3))
            .ok_or(IntegralError::ImageTooLarge(width, height))?;
        if data.len() != expected {
            return Err(IntegralError::InvalidBufferLength(data.len(), expected));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }
}

impl PixelSource for RgbBuffer<'_> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixel_at(&self, x: usize, y: usize) -> [u8; 3] {
        let idx = (y * self.width + x) * 3;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }
}

impl PixelSource for image::RgbImage {
    fn width(&self) -> usize {
        image::RgbImage::width(self) as usize
    }

    fn height(&self) -> usize {
        image::RgbImage::height(self) as usize
    }

    fn pixel_at(&self, x: usize, y: usize) -> [u8; 3] {
        self.get_pixel(x as u32, y as u32).0
    }
}
