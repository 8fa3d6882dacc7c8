use whitefly_core::{HsvImage, PixelPoint};

use crate::params::WindowSize;

/// Aggregate colour statistics over one inspection window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorFeatures {
    pub avg_hue: f64,
    pub avg_saturation: f64,
    pub avg_value: f64,
    /// Fraction of window pixels whose value channel exceeds the white
    /// threshold, in `[0, 1]`.
    pub white_ratio: f64,
}

/// The inspection window clipped to zero area.
#[derive(thiserror::Error, Debug, Clone, Copy, Eq, PartialEq)]
#[error("feature window around ({x}, {y}) clips to zero area")]
pub struct EmptyWindowError {
    pub x: u32,
    pub y: u32,
}

/// Compute colour features over an axis-aligned window centred on `center`,
/// clipped to the image bounds.
///
/// The half-window offsets use integer floor division, so odd window sizes
/// bias the window one pixel toward the top-left. Downstream thresholds were
/// tuned against that exact placement; keep it.
pub fn color_features(
    hsv: &HsvImage,
    center: PixelPoint,
    window: WindowSize,
    white_value: u8,
) -> Result<ColorFeatures, EmptyWindowError> {
    let empty = EmptyWindowError {
        x: center.x,
        y: center.y,
    };
    if hsv.width == 0 || hsv.height == 0 {
        return Err(empty);
    }

    let w = window.width as usize;
    let h = window.height as usize;
    let left = (center.x as usize).saturating_sub(w / 2);
    let top = (center.y as usize).saturating_sub(h / 2);
    let right = (left + w).min(hsv.width - 1);
    let bottom = (top + h).min(hsv.height - 1);

    if right <= left || bottom <= top {
        return Err(empty);
    }

    let mut sum_h = 0u64;
    let mut sum_s = 0u64;
    let mut sum_v = 0u64;
    let mut white = 0u64;
    for y in top..bottom {
        for x in left..right {
            let [ph, ps, pv] = hsv.pixel(x, y);
            sum_h += ph as u64;
            sum_s += ps as u64;
            sum_v += pv as u64;
            if pv > white_value {
                white += 1;
            }
        }
    }

    let count = ((right - left) * (bottom - top)) as f64;
    Ok(ColorFeatures {
        avg_hue: sum_h as f64 / count,
        avg_saturation: sum_s as f64 / count,
        avg_value: sum_v as f64 / count,
        white_ratio: white as f64 / count,
    })
}
