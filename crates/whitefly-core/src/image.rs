/// Borrowed view over a row-major, 8-bit RGB pixel buffer.
///
/// `data` is interleaved RGB, `len = width * height * 3`. The core never
/// mutates pixel data; callers own the buffer.
#[derive(Clone, Copy, Debug)]
pub struct RgbImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8],
}

impl<'a> RgbImageView<'a> {
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Self {
        debug_assert_eq!(data.len(), width * height * 3);
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

/// Owned HSV-converted copy of an image.
///
/// Channels follow the 8-bit convention used by the annotation tooling:
/// hue in `[0, 180)` (degrees halved), saturation and value in `[0, 255]`.
/// The heuristic filter thresholds are expressed in this space.
#[derive(Clone, Debug)]
pub struct HsvImage {
    pub width: usize,
    pub height: usize,
    data: Vec<[u8; 3]>,
}

impl HsvImage {
    /// Convert a full RGB view into HSV, pixel by pixel.
    pub fn from_rgb(src: &RgbImageView<'_>) -> Self {
        let mut data = Vec::with_capacity(src.width * src.height);
        for y in 0..src.height {
            for x in 0..src.width {
                data.push(rgb_to_hsv(src.pixel(x, y)));
            }
        }
        Self {
            width: src.width,
            height: src.height,
            data,
        }
    }

    /// Build directly from per-pixel HSV triples (row-major).
    pub fn from_raw(width: usize, height: usize, data: Vec<[u8; 3]>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        self.data[y * self.width + x]
    }
}

/// 8-bit RGB to 8-bit HSV, hue halved into `[0, 180)`.
pub fn rgb_to_hsv(rgb: [u8; 3]) -> [u8; 3] {
    let r = rgb[0] as f32;
    let g = rgb[1] as f32;
    let b = rgb[2] as f32;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;

    let v = max;
    let s = if max > 0.0 { 255.0 * diff / max } else { 0.0 };

    let h_deg = if diff == 0.0 {
        0.0
    } else if max == r {
        60.0 * (g - b) / diff
    } else if max == g {
        120.0 + 60.0 * (b - r) / diff
    } else {
        240.0 + 60.0 * (r - g) / diff
    };
    let h_deg = if h_deg < 0.0 { h_deg + 360.0 } else { h_deg };

    [
        ((h_deg / 2.0).round() as u16 % 180) as u8,
        s.round() as u8,
        v.round() as u8,
    ]
}
