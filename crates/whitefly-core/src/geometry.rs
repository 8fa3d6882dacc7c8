use serde::{Deserialize, Serialize};

/// A detection centre in original (unscaled) image coordinates.
///
/// Detectors that work on a rescaled copy of the image must map their output
/// back to original coordinates before handing points to this crate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: u32,
    pub y: u32,
}

impl PixelPoint {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("invalid bounding box: xmin={xmin} xmax={xmax} ymin={ymin} ymax={ymax}")]
pub struct InvalidBoxError {
    pub xmin: u32,
    pub xmax: u32,
    pub ymin: u32,
    pub ymax: u32,
}

/// A hand-annotated whitefly location: inclusive pixel bounds.
///
/// Coordinates are clamped to 1 at construction; annotation tools emit
/// 1-based coordinates and occasionally a rounded-down 0.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroundTruthBox {
    pub xmin: u32,
    pub xmax: u32,
    pub ymin: u32,
    pub ymax: u32,
}

impl GroundTruthBox {
    /// Build a box, clamping minima to 1 and rejecting inverted bounds.
    pub fn new(xmin: u32, xmax: u32, ymin: u32, ymax: u32) -> Result<Self, InvalidBoxError> {
        let xmin = xmin.max(1);
        let ymin = ymin.max(1);
        if xmin > xmax || ymin > ymax {
            return Err(InvalidBoxError {
                xmin,
                xmax,
                ymin,
                ymax,
            });
        }
        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    /// Inclusive containment test used by the match scorer.
    pub fn contains(&self, p: PixelPoint) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }
}
