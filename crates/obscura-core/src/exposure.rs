//! Exposure model — maps camera parameters to EV and preview brightness.
//!
//! The exposure value follows the standard photographic relation
//!
//! ```text
//! EV = log2(N² / t) − log2(ISO / 100)
//! ```
//!
//! where `N` is the f-number and `t` the shutter duration in seconds.
//! Brightness is derived by the [`BrightnessCurve`] selected in the
//! tuning and clamped so that extreme inputs can only saturate the
//! preview, never produce a non-finite value.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::settings::{APERTURE_DOMAIN, CameraSettings};
use crate::tuning::{BrightnessCurve, ExposureTuning};

/// Result of an exposure computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureResult {
    /// Exposure value on a log2 scale. Higher means less light reaches
    /// the sensor.
    pub exposure_value: f32,
    /// Preview brightness multiplier, clamped to the tuned bounds.
    /// 1.0 renders the scene unchanged.
    pub brightness: f32,
}

/// Compute EV and preview brightness for the given settings.
///
/// Fails with [`SimulationError::InvalidParameter`] when a parameter the
/// logarithms depend on is non-positive or non-finite; every other
/// out-of-range input is clamped to its domain edge.
pub fn compute_exposure(
    settings: &CameraSettings,
    tuning: &ExposureTuning,
) -> Result<ExposureResult, SimulationError> {
    validate(settings)?;

    let aperture = settings
        .aperture
        .clamp(APERTURE_DOMAIN.0, APERTURE_DOMAIN.1);
    let shutter = settings.shutter_speed_s;
    let iso = settings.iso as f32;

    let exposure_value = (aperture * aperture / shutter).log2() - (iso / 100.0).log2();

    let raw = match tuning.brightness_curve {
        BrightnessCurve::WeightedLog => {
            // Each control contributes one logarithmic term; the key light
            // only ever darkens (100% is neutral and the upper bound).
            let light = settings.light_intensity_percent.clamp(1.0, 100.0);
            tuning.base_brightness
                + tuning.iso_gain * (iso / 100.0).log2()
                + tuning.shutter_gain * (shutter / tuning.reference_shutter_s).log2()
                - tuning.aperture_gain * (aperture / tuning.reference_aperture).log2()
                + tuning.light_gain * (light / 100.0).log2()
        }
        BrightnessCurve::EvCurve => {
            (-(exposure_value - tuning.ev_pivot) * tuning.ev_gain).exp2()
        }
    };

    Ok(ExposureResult {
        exposure_value,
        brightness: raw.clamp(tuning.brightness_min, tuning.brightness_max),
    })
}

fn validate(settings: &CameraSettings) -> Result<(), SimulationError> {
    if !settings.aperture.is_finite() || settings.aperture <= 0.0 {
        return Err(SimulationError::invalid("aperture", settings.aperture));
    }
    if !settings.shutter_speed_s.is_finite() || settings.shutter_speed_s <= 0.0 {
        return Err(SimulationError::invalid(
            "shutter_speed_s",
            settings.shutter_speed_s,
        ));
    }
    if settings.iso == 0 {
        return Err(SimulationError::invalid("iso", 0.0));
    }
    if !settings.light_intensity_percent.is_finite() {
        return Err(SimulationError::invalid(
            "light_intensity_percent",
            settings.light_intensity_percent,
        ));
    }
    Ok(())
}
