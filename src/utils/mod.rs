//! Utility functions for image processing
//!
//! - Intensity conversion (RGB/RGBA to luma in `[0, 1]`)

pub mod intensity;
