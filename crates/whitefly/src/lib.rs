//! High-level facade crate for the `whitefly-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the core, filter and evaluation crates
//! - the [`Detector`] capability trait an external candidate proposer
//!   (typically a trained cascade classifier) plugs into
//! - (feature-gated) helpers that adapt `image` crate buffers and run the
//!   detect-then-filter pipeline end to end.
//!
//! ## Quickstart
//!
//! ```no_run
//! use whitefly::{run_pipeline, FilterParams, FixedDetector, PixelPoint};
//! use image::ImageReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = ImageReader::open("leaf.jpg")?.decode()?.to_rgb8();
//! // Stand-in for a real cascade detector.
//! let detector = FixedDetector::new(vec![PixelPoint::new(120, 80)]);
//! let kept = run_pipeline(&img, &detector, &FilterParams::default());
//! println!("candidates kept: {}", kept.len());
//! # Ok(())
//! # }
//! ```

pub use whitefly_core as core;
pub use whitefly_eval as eval;
pub use whitefly_filter as filter;

pub use whitefly_core::{GroundTruthBox, HsvImage, PixelPoint, RgbImageView};
pub use whitefly_eval::{AccuracyAccumulator, AccuracyReport, MatchCounts};
pub use whitefly_filter::{ColorFeatures, FilterParams, WindowSize};

mod detector;
pub use detector::{Detector, FixedDetector};

#[cfg(feature = "image")]
mod pipeline;
#[cfg(feature = "image")]
pub use pipeline::{hsv_from_image, run_pipeline};
