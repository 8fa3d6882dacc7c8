//! Core types and utilities for whitefly detection.
//!
//! This crate is intentionally small and purely data-oriented. It does *not*
//! depend on any concrete detector or image decoding library.

mod geometry;
mod image;
mod logger;

pub use geometry::{GroundTruthBox, InvalidBoxError, PixelPoint};
pub use image::{rgb_to_hsv, HsvImage, RgbImageView};
pub use logger::init_with_level;
