use whitefly_core::{PixelPoint, RgbImageView};

/// External candidate-proposal capability.
///
/// Implementations wrap whatever object detector is available (the
/// production system uses a sliding-window cascade classifier loaded from a
/// model file passed at construction). The contract is small but strict:
/// returned points are centres of proposed detections, in *original* image
/// coordinates, in a significant order. Implementations that detect on a
/// rescaled copy must map coordinates back before returning. Determinism
/// across implementations is not guaranteed.
pub trait Detector {
    fn detect(&self, image: &RgbImageView<'_>) -> Vec<PixelPoint>;
}

/// A detector that always proposes the same candidate list.
///
/// Lets the filter and the evaluation harness run against synthetic
/// candidates without any vision dependency.
#[derive(Clone, Debug, Default)]
pub struct FixedDetector {
    candidates: Vec<PixelPoint>,
}

impl FixedDetector {
    pub fn new(candidates: Vec<PixelPoint>) -> Self {
        Self { candidates }
    }
}

impl Detector for FixedDetector {
    fn detect(&self, _image: &RgbImageView<'_>) -> Vec<PixelPoint> {
        self.candidates.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_detector_returns_candidates_in_order() {
        let candidates = vec![PixelPoint::new(3, 4), PixelPoint::new(1, 2)];
        let detector = FixedDetector::new(candidates.clone());
        let data = vec![0u8; 4 * 4 * 3];
        let view = RgbImageView::new(4, 4, &data);
        assert_eq!(detector.detect(&view), candidates);
    }
}
