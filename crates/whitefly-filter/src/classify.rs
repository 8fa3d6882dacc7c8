use log::warn;

use whitefly_core::{HsvImage, PixelPoint};

use crate::features::{color_features, EmptyWindowError};
use crate::params::FilterParams;

/// Decide whether one candidate point should be kept.
///
/// Rule order matters and is part of the contract:
/// 1. too few white pixels in the window → reject;
/// 2. average hue in the light-green foliage band → accept, regardless of
///    saturation (step 1 already guaranteed some whiteness);
/// 3. low average saturation (light, whitish patch, not soil) → accept;
/// 4. otherwise reject.
pub fn is_candidate_ok(
    hsv: &HsvImage,
    candidate: PixelPoint,
    params: &FilterParams,
) -> Result<bool, EmptyWindowError> {
    let f = color_features(hsv, candidate, params.window, params.white_value)?;

    if f.white_ratio < params.min_white_ratio {
        return Ok(false);
    }
    if f.avg_hue > params.hue_min && f.avg_hue < params.hue_max {
        return Ok(true);
    }
    Ok(f.avg_saturation < params.max_saturation)
}

/// Filter a detector's candidate list, preserving input order.
///
/// Candidates whose window clips to zero area are dropped conservatively
/// rather than failing the whole image.
pub fn retain_candidates(
    hsv: &HsvImage,
    candidates: &[PixelPoint],
    params: &FilterParams,
) -> Vec<PixelPoint> {
    let mut kept = Vec::new();
    for &c in candidates {
        match is_candidate_ok(hsv, c, params) {
            Ok(true) => kept.push(c),
            Ok(false) => {}
            Err(err) => warn!("rejecting candidate with empty window: {err}"),
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(px: [u8; 3]) -> HsvImage {
        HsvImage::from_raw(40, 40, vec![px; 40 * 40])
    }

    fn centre() -> PixelPoint {
        PixelPoint::new(20, 20)
    }

    #[test]
    fn green_background_with_white_pixels_accepts() {
        // Hue 50 sits in the foliage band; value 200 makes every pixel
        // white. High saturation must not matter here.
        let hsv = uniform([50, 240, 200]);
        assert!(is_candidate_ok(&hsv, centre(), &FilterParams::default()).unwrap());
    }

    #[test]
    fn no_white_pixels_rejects_regardless_of_hue() {
        let hsv = uniform([50, 10, 100]);
        assert!(!is_candidate_ok(&hsv, centre(), &FilterParams::default()).unwrap());
    }

    #[test]
    fn low_saturation_accepts_outside_green_band() {
        let hsv = uniform([100, 20, 200]);
        assert!(is_candidate_ok(&hsv, centre(), &FilterParams::default()).unwrap());
    }

    #[test]
    fn saturated_non_green_patch_rejects() {
        // Soil-like: white enough to pass step 1, but dark red and saturated.
        let hsv = uniform([10, 120, 180]);
        assert!(!is_candidate_ok(&hsv, centre(), &FilterParams::default()).unwrap());
    }

    #[test]
    fn hue_band_bounds_are_exclusive() {
        let params = FilterParams::default();
        // Exactly 35 fails the band and falls through to the saturation rule.
        let hsv = uniform([35, 120, 200]);
        assert!(!is_candidate_ok(&hsv, centre(), &params).unwrap());
        let hsv = uniform([36, 120, 200]);
        assert!(is_candidate_ok(&hsv, centre(), &params).unwrap());
    }

    #[test]
    fn retain_preserves_order_and_drops_empty_windows() {
        let hsv = uniform([50, 240, 200]);
        let candidates = vec![
            PixelPoint::new(5, 5),
            PixelPoint::new(20, 20),
            PixelPoint::new(35, 35),
        ];
        let kept = retain_candidates(&hsv, &candidates, &FilterParams::default());
        assert_eq!(kept, candidates);

        // On a 1x1 image every window is empty; nothing survives.
        let tiny = HsvImage::from_raw(1, 1, vec![[50, 240, 200]]);
        let kept = retain_candidates(&tiny, &[PixelPoint::new(0, 0)], &FilterParams::default());
        assert!(kept.is_empty());
    }
}
