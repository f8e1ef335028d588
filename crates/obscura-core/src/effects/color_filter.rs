//! White-balance bucketing into named color filters.
//!
//! Rather than computing a continuous Planckian-locus shift, the
//! simulator buckets the chosen color temperature into a small set of
//! named tints — the pedagogical point is "tungsten light is warm, shade
//! is cool", not colorimetric precision.

use serde::{Deserialize, Serialize};

use crate::settings::{KELVIN_DOMAIN, WhiteBalance};

/// Named preview tint derived from the white-balance setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorFilter {
    /// No cast — auto white balance or daylight temperatures.
    None,
    /// Tungsten/candlelight range.
    Warm,
    /// Fluorescent range, with its characteristic magenta bias.
    Fluorescent,
    /// Overcast-sky range.
    CoolCloudy,
    /// Open-shade range.
    CoolShade,
}

/// Bucket upper bounds in Kelvin, inclusive, checked in order.
/// Temperatures above the last bound fall through to `CoolShade`.
const KELVIN_BUCKETS: [(u32, ColorFilter); 4] = [
    (3200, ColorFilter::Warm),
    (4000, ColorFilter::Fluorescent),
    (5500, ColorFilter::None),
    (6500, ColorFilter::CoolCloudy),
];

impl ColorFilter {
    /// Bucket a white-balance setting into its preview tint.
    pub fn from_white_balance(white_balance: WhiteBalance) -> Self {
        let kelvin = match white_balance {
            WhiteBalance::Auto => return Self::None,
            WhiteBalance::Kelvin(k) => k.clamp(KELVIN_DOMAIN.0, KELVIN_DOMAIN.1),
        };
        for (bound, filter) in KELVIN_BUCKETS {
            if kelvin <= bound {
                return filter;
            }
        }
        Self::CoolShade
    }

    /// Stable tag for consumers that localize their own copy.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Warm => "warm",
            Self::Fluorescent => "magenta-fluorescent",
            Self::CoolCloudy => "cool-cloudy",
            Self::CoolShade => "cool-shade",
        }
    }

    /// RGB multipliers for the tint, normalized to the green channel.
    pub const fn tint_rgb(&self) -> [f32; 3] {
        match self {
            Self::None => [1.0, 1.0, 1.0],
            Self::Warm => [1.15, 1.0, 0.80],
            Self::Fluorescent => [1.05, 0.95, 1.05],
            Self::CoolCloudy => [0.92, 1.0, 1.10],
            Self::CoolShade => [0.85, 0.95, 1.20],
        }
    }

    /// Every filter the bucketing can produce.
    pub fn all() -> &'static [Self] {
        const ALL: [ColorFilter; 5] = [
            ColorFilter::None,
            ColorFilter::Warm,
            ColorFilter::Fluorescent,
            ColorFilter::CoolCloudy,
            ColorFilter::CoolShade,
        ];
        &ALL
    }
}
