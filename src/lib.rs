//! surf_integral - Summed-area tables for box-filter feature detectors
//!
//! Builds an integral table over the luma intensity of an RGB image and
//! answers rectangle-sum queries in constant time, whatever the rectangle
//! size. Hessian-style detectors evaluate many box filters per pixel on top
//! of this table.
//!
//! ```
//! use surf_integral::{IntegralTable, RgbBuffer};
//!
//! let white = vec![255u8; 4 * 4 * 3];
//! let source = RgbBuffer::new(&white, 4, 4).unwrap();
//! let table = IntegralTable::new(&source);
//! assert_eq!(table.rectangle_sum(1, 1, 2, 2), 4.0);
//! ```

#![warn(missing_docs)]

/// Error types
pub mod error;
/// Core data structures (IntegralTable, PixelSource)
pub mod models;
/// Image loading and table statistics for tools
pub mod tools;
/// Utility functions (intensity conversion)
pub mod utils;

pub use error::IntegralError;
pub use models::{IntegralTable, PixelSource, RgbBuffer};
pub use utils::intensity::intensity;
