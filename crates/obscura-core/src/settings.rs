//! Camera parameter struct shared by every part of the simulator.
//!
//! `CameraSettings` is the single input contract: every control writes
//! here, and the exposure model, effect mappings, and feedback classifier
//! all read the full struct.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hard domain for the aperture f-number. Values outside are clamped.
pub const APERTURE_DOMAIN: (f32, f32) = (1.0, 32.0);

/// Kelvin range accepted for manual white balance. Values outside are
/// clamped before bucketing.
pub const KELVIN_DOMAIN: (u32, u32) = (1_000, 10_000);

/// White balance selection.
///
/// `Auto` leaves the preview untinted. A manual temperature is bucketed
/// into a named color filter by the effect mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhiteBalance {
    /// Neutral — no color cast applied.
    Auto,
    /// Manual color temperature in Kelvin.
    Kelvin(u32),
}

impl WhiteBalance {
    /// Build from a raw Kelvin integer, where `0` means Auto.
    pub const fn from_kelvin(kelvin: u32) -> Self {
        if kelvin == 0 {
            Self::Auto
        } else {
            Self::Kelvin(kelvin)
        }
    }
}

impl fmt::Display for WhiteBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Kelvin(k) => write!(f, "{k}K"),
        }
    }
}

/// Every control writes here. The model reads the full struct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    /// Aperture f-number. Typical range f/1.4–f/22. Default: 5.6.
    pub aperture: f32,
    /// Shutter speed in seconds. Typical range 1/4000–1. Default: 1/125.
    pub shutter_speed_s: f32,
    /// Sensor sensitivity. Typical range 100–6400. Default: 200.
    pub iso: u32,
    /// White balance. Default: `Auto`.
    pub white_balance: WhiteBalance,
    /// Lens focal length in millimeters. Typical range 24–200. Default: 50.
    pub focal_length_mm: f32,
    /// Key light intensity, 0–100%. 100% is neutral. Default: 100.
    pub light_intensity_percent: f32,
    /// Key light angle in degrees above the horizon, 0–90. Default: 45.
    pub light_angle_degrees: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            aperture: 5.6,
            shutter_speed_s: 1.0 / 125.0,
            iso: 200,
            white_balance: WhiteBalance::Auto,
            focal_length_mm: 50.0,
            light_intensity_percent: 100.0,
            light_angle_degrees: 45.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kelvin_zero_is_auto() {
        assert_eq!(WhiteBalance::from_kelvin(0), WhiteBalance::Auto);
    }

    #[test]
    fn test_from_kelvin_nonzero_is_manual() {
        assert_eq!(WhiteBalance::from_kelvin(5500), WhiteBalance::Kelvin(5500));
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(WhiteBalance::Auto.to_string(), "auto");
        assert_eq!(WhiteBalance::Kelvin(3200).to_string(), "3200K");
    }
}
