//! Heuristic false-positive filter for whitefly candidate points.
//!
//! A cascade detector proposes candidate centres; this crate inspects a small
//! HSV window around each one and keeps only candidates that look like a
//! whitefly on foliage: enough white pixels, and either a light-green
//! background or an overall light (low-saturation) patch.

mod classify;
mod features;
mod params;

pub use classify::{is_candidate_ok, retain_candidates};
pub use features::{color_features, ColorFeatures, EmptyWindowError};
pub use params::{FilterParams, WindowSize};
