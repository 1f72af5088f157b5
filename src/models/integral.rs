//! Summed-area table over the luma intensity of an image.
//!
//! Accumulation order is fixed: rows are scanned top to bottom, each row keeps
//! a running sum left to right, and that running sum is added to the cell
//! directly above. Floating-point addition is not associative, so every
//! constructor here performs exactly these additions in exactly this order and
//! produces bit-identical tables for the same input.
//!
//! Cells are stored row-major in a flat buffer and addressed as `(x, y)`,
//! `x` being the column and `y` the row.

use log::debug;
use rayon::prelude::*;

use crate::error::IntegralError;
use crate::models::pixel::PixelSource;
use crate::utils::intensity::intensity_of;

/// Immutable summed-area table.
///
/// `value_at(x, y)` holds the sum of the intensities of every pixel `(i, j)`
/// with `i <= x` and `j <= y`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegralTable {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl IntegralTable {
    /// Build the table from a pixel source in a single sequential pass
    pub fn new<S: PixelSource>(source: &S) -> Self {
        let width = source.width();
        let height = source.height();
        debug!("building integral table {}x{} (sequential)", width, height);

        let mut data = vec![0f32; width * height];
        for y in 0..height {
            let mut row_sum = 0f32;
            for x in 0..width {
                row_sum += intensity_of(source.pixel_at(x, y));
                let idx = y * width + x;
                data[idx] = if y == 0 {
                    row_sum
                } else {
                    row_sum + data[idx - width]
                };
            }
        }

        Self {
            width,
            height,
            data,
        }
    }

    /// Build the table computing per-row running sums in parallel.
    ///
    /// Rows are folded into the cumulative columns top to bottom afterwards,
    /// so the result equals [`IntegralTable::new`] bit for bit.
    pub fn new_parallel<S: PixelSource + Sync>(source: &S) -> Self {
        let width = source.width();
        let height = source.height();
        debug!("building integral table {}x{} (parallel)", width, height);

        let mut data = vec![0f32; width * height];
        if width == 0 || height == 0 {
            return Self {
                width,
                height,
                data,
            };
        }

        data.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
            let mut row_sum = 0f32;
            for (x, cell) in row.iter_mut().enumerate() {
                row_sum += intensity_of(source.pixel_at(x, y));
                *cell = row_sum;
            }
        });
        fold_rows(&mut data, width);

        Self {
            width,
            height,
            data,
        }
    }

    /// Build the table from a precomputed row-major intensity plane
    pub fn from_intensity(plane: &[f32], width: usize, height: usize) -> Result<Self, IntegralError> {
        let expected = width
            .checked_mul(height)
            .ok_or(IntegralError::ImageTooLarge(width, height))?;
        if plane.len() != expected {
            return Err(IntegralError::InvalidPlaneLength(plane.len(), expected));
        }
        debug!("building integral table {}x{} (intensity plane)", width, height);

        let mut data = vec![0f32; expected];
        if expected > 0 {
            for (src, dst) in plane.chunks_exact(width).zip(data.chunks_exact_mut(width)) {
                let mut row_sum = 0f32;
                for (value, cell) in src.iter().zip(dst.iter_mut()) {
                    row_sum += *value;
                    *cell = row_sum;
                }
            }
            fold_rows(&mut data, width);
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Table width (image columns)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Table height (image rows)
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the source image had no pixels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw cumulative value at column `x`, row `y`
    pub fn value_at(&self, x: usize, y: usize) -> f32 {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) outside {}x{} integral table",
            x,
            y,
            self.width,
            self.height
        );
        self.data[y * self.width + x]
    }

    /// Sum of every intensity in the image
    pub fn total(&self) -> f32 {
        self.data.last().copied().unwrap_or(0.0)
    }

    /// Sum of intensities over the rectangle whose top-left pixel is
    /// (`col`, `row`) and which spans `num_rows` rows and `num_cols` columns.
    ///
    /// Parts of the rectangle outside the image contribute nothing, and the
    /// result is clamped at zero to absorb rounding error. Panics on an empty
    /// table.
    pub fn rectangle_sum(&self, row: isize, col: isize, num_rows: usize, num_cols: usize) -> f32 {
        assert!(!self.is_empty(), "rectangle query on an empty integral table");

        let r1 = row.checked_sub(1);
        let c1 = col.checked_sub(1);
        let r2 = last_index(row, num_rows);
        let c2 = last_index(col, num_cols);

        let a = self.padded(c1, r1);
        let b = self.padded(c2, r1);
        let c = self.padded(c1, r2);
        let d = self.padded(c2, r2);

        (a - b - c + d).max(0.0)
    }

    /// Zero-padding policy: cells outside the table, or coordinates that
    /// overflowed `isize`, read as 0
    #[inline]
    fn padded(&self, x: Option<isize>, y: Option<isize>) -> f32 {
        let (Some(x), Some(y)) = (x, y) else {
            return 0.0;
        };
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return 0.0;
        };
        if x >= self.width || y >= self.height {
            return 0.0;
        }
        self.data[y * self.width + x]
    }
}

/// Index of the last cell covered by `extent` cells starting at `start`,
/// `None` when it does not fit in `isize`
#[inline]
fn last_index(start: isize, extent: usize) -> Option<isize> {
    isize::try_from(extent)
        .ok()
        .and_then(|extent| start.checked_add(extent))
        .and_then(|end| end.checked_sub(1))
}

/// Add each row's cell to the cumulative cell above it, top to bottom
fn fold_rows(data: &mut [f32], width: usize) {
    for idx in width..data.len() {
        data[idx] += data[idx - width];
    }
}
