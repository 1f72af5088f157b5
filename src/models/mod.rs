/// Summed-area table and rectangle queries
pub mod integral;
/// Pixel sources feeding the table
pub mod pixel;

pub use integral::IntegralTable;
pub use pixel::{PixelSource, RgbBuffer};
