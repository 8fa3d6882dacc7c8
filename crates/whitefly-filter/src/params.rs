use serde::{Deserialize, Serialize};

/// Size of the inspection window centred on a candidate point.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 15,
            height: 15,
        }
    }
}

/// Thresholds for the candidate filter.
///
/// Defaults are the values tuned on the original greenhouse dataset; hue and
/// saturation are in the 8-bit HSV convention (hue halved into `[0, 180)`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub window: WindowSize,
    /// Reject outright when the white-pixel fraction falls below this.
    #[serde(default = "default_min_white_ratio")]
    pub min_white_ratio: f64,
    /// Exclusive hue band treated as light-green foliage background.
    #[serde(default = "default_hue_min")]
    pub hue_min: f64,
    #[serde(default = "default_hue_max")]
    pub hue_max: f64,
    /// Average saturation below this counts as a light, whitish patch.
    #[serde(default = "default_max_saturation")]
    pub max_saturation: f64,
    /// Value channel above this marks a pixel as white.
    #[serde(default = "default_white_value")]
    pub white_value: u8,
}

fn default_min_white_ratio() -> f64 {
    0.0001
}

fn default_hue_min() -> f64 {
    35.0
}

fn default_hue_max() -> f64 {
    75.0
}

fn default_max_saturation() -> f64 {
    50.0
}

fn default_white_value() -> u8 {
    150
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            window: WindowSize::default(),
            min_white_ratio: default_min_white_ratio(),
            hue_min: default_hue_min(),
            hue_max: default_hue_max(),
            max_saturation: default_max_saturation(),
            white_value: default_white_value(),
        }
    }
}
