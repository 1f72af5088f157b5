//! Helpers shared by the command-line tool and benchmarks.

use crate::error::IntegralError;
use crate::models::IntegralTable;
use image::GenericImageView;
use log::debug;
use std::env;
use std::path::Path;

fn parse_max_dim(value: &str) -> Option<u32> {
    match value.trim().parse::<u32>() {
        Ok(0) => None,
        Ok(v) => Some(v),
        Err(_) => None,
    }
}

/// Longest-side limit from `INTEGRAL_MAX_DIM`.
///
/// Returns `None` (no downscaling) when unset, unparsable or `0`.
pub fn max_dim_from_env() -> Option<u32> {
    env::var("INTEGRAL_MAX_DIM")
        .ok()
        .and_then(|value| parse_max_dim(&value))
}

/// Load an image as RGB bytes along with its dimensions.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<(Vec<u8>, usize, usize), IntegralError> {
    let img = image::open(path)?;
    let rgb = match max_dim_from_env() {
        Some(max_dim) if img.dimensions().0.max(img.dimensions().1) > max_dim => {
            let (orig_w, orig_h) = img.dimensions();
            debug!("downscaling {}x{} to fit {}", orig_w, orig_h, max_dim);
            img.resize(max_dim, max_dim, image::imageops::FilterType::Triangle)
                .to_rgb8()
        }
        _ => img.to_rgb8(),
    };
    let (width, height) = rgb.dimensions();
    Ok((rgb.into_raw(), width as usize, height as usize))
}

/// Summary statistics for an integral table.
#[derive(Debug, Clone, Copy)]
pub struct TableStats {
    /// Table width.
    pub width: usize,
    /// Table height.
    pub height: usize,
    /// Sum of every intensity in the image.
    pub total: f32,
    /// Mean intensity per pixel.
    pub mean: f64,
}

/// Compute dimensions, total and mean intensity of a table.
pub fn table_stats(table: &IntegralTable) -> TableStats {
    let total = table.total();
    let pixels = table.width() * table.height();
    let mean = if pixels == 0 {
        0.0
    } else {
        total as f64 / pixels as f64
    };
    TableStats {
        width: table.width(),
        height: table.height(),
        total,
        mean,
    }
}
