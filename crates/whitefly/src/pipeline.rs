//! End-to-end helpers over `image` crate buffers.

use image::RgbImage;
use log::debug;

use whitefly_core::{HsvImage, PixelPoint, RgbImageView};
use whitefly_filter::{retain_candidates, FilterParams};

use crate::detector::Detector;

/// Convert a decoded RGB image into the HSV view the filter works on.
pub fn hsv_from_image(img: &RgbImage) -> HsvImage {
    let view = RgbImageView::new(img.width() as usize, img.height() as usize, img.as_raw());
    HsvImage::from_rgb(&view)
}

/// Run the two-stage pipeline on one image: propose candidates with the
/// injected detector, then drop false positives with the colour filter.
pub fn run_pipeline(
    img: &RgbImage,
    detector: &dyn Detector,
    params: &FilterParams,
) -> Vec<PixelPoint> {
    let view = RgbImageView::new(img.width() as usize, img.height() as usize, img.as_raw());
    let candidates = detector.detect(&view);
    let hsv = HsvImage::from_rgb(&view);
    let kept = retain_candidates(&hsv, &candidates, params);
    debug!(
        "pipeline: {} candidates proposed, {} kept",
        candidates.len(),
        kept.len()
    );
    kept
}
