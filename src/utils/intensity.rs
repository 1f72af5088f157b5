//! Luma intensity conversion
//! I = (0.299*R + 0.587*G + 0.114*B) / 255
//!
//! Weights are applied in `f64` and the result is narrowed to `f32`, so every
//! converter in this module yields the same bits for the same pixel.

use rayon::prelude::*;

/// Luma weights for the red, green and blue components
const COEF_R: f64 = 0.299;
const COEF_G: f64 = 0.587;
const COEF_B: f64 = 0.114;

const MAX_COMPONENT: f64 = 255.0;

/// Intensity in `[0, 1]` of a single pixel given its three components
#[inline]
pub fn intensity(c0: u8, c1: u8, c2: u8) -> f32 {
    let weighted = COEF_R * c0 as f64 + COEF_G * c1 as f64 + COEF_B * c2 as f64;
    (weighted / MAX_COMPONENT) as f32
}

/// Intensity of a `[c0, c1, c2]` triplet
#[inline]
pub fn intensity_of(pixel: [u8; 3]) -> f32 {
    intensity(pixel[0], pixel[1], pixel[2])
}

/// Convert an RGB image into a row-major intensity plane
pub fn rgb_to_intensity(rgb: &[u8], width: usize, height: usize) -> Vec<f32> {
    to_intensity(rgb, width, height, 3)
}

/// Convert an RGBA image into a row-major intensity plane (ignores alpha channel)
pub fn rgba_to_intensity(rgba: &[u8], width: usize, height: usize) -> Vec<f32> {
    to_intensity(rgba, width, height, 4)
}

fn to_intensity(data: &[u8], width: usize, height: usize, channels: usize) -> Vec<f32> {
    let pixel_count = width * height;
    assert!(data.len() >= pixel_count * channels, "Input buffer too small");

    data.chunks_exact(channels)
        .take(pixel_count)
        .map(|px| intensity(px[0], px[1], px[2]))
        .collect()
}

// ============== Parallel Processing with Rayon ==============

/// Convert RGB to an intensity plane using parallel processing
/// Processes rows in parallel for multi-core speedup
pub fn rgb_to_intensity_parallel(rgb: &[u8], width: usize, height: usize) -> Vec<f32> {
    let pixel_count = width * height;
    assert!(rgb.len() >= pixel_count * 3, "Input buffer too small");
    let mut plane = vec![0f32; pixel_count];
    if pixel_count == 0 {
        return plane;
    }

    plane.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let row_start = y * width * 3;
        for (x, value) in row.iter_mut().enumerate() {
            let idx = row_start + x * 3;
            *value = intensity(rgb[idx], rgb[idx + 1], rgb[idx + 2]);
        }
    });

    plane
}
