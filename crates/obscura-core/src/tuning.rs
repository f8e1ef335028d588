//! Central tuning struct that defines the entire simulation response.
//!
//! `ModelTuning` is the single source of truth for every named constant in
//! the model: curve gains, effect thresholds, clamp bounds, and feedback
//! cut-offs. The defaults are the hand-tuned values the simulator ships
//! with; a consumer may deserialize partial overrides on top of them.

use serde::{Deserialize, Serialize};

/// Strategy for mapping camera parameters to preview brightness.
///
/// Both strategies are monotonic — more sensitivity or a longer exposure
/// always brightens, a narrower aperture always darkens — and both clamp
/// to `[brightness_min, brightness_max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrightnessCurve {
    /// Per-parameter logarithmic terms summed onto a base brightness.
    ///
    /// ```text
    /// b = base + iso_gain × log2(iso / 100)
    ///          + shutter_gain × log2(t / reference_shutter_s)
    ///          − aperture_gain × log2(N / reference_aperture)
    ///          + light_gain × log2(light% / 100)
    /// ```
    ///
    /// The default. Each parameter carries its own perceptual weight, so a
    /// one-second exposure blows out the preview even though the f/22
    /// aperture partially compensates.
    WeightedLog,
    /// Single exposure-value curve.
    ///
    /// ```text
    /// b = 2^(−(EV − ev_pivot) × ev_gain)
    /// ```
    ///
    /// Follows the photographic convention that equal EV means equal
    /// exposure regardless of which parameter produced it.
    EvCurve,
}

/// Tuning for [`crate::compute_exposure`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureTuning {
    /// Brightness mapping strategy.
    pub brightness_curve: BrightnessCurve,
    /// Brightness with every control at its reference value.
    pub base_brightness: f32,
    /// Weight of the ISO term, per stop above ISO 100.
    pub iso_gain: f32,
    /// Weight of the shutter term, per stop above the reference shutter.
    pub shutter_gain: f32,
    /// Weight of the aperture term, per stop above the reference aperture.
    pub aperture_gain: f32,
    /// Weight of the key-light intensity term.
    pub light_gain: f32,
    /// Shutter duration that contributes zero to the shutter term.
    pub reference_shutter_s: f32,
    /// F-number that contributes zero to the aperture term.
    pub reference_aperture: f32,
    /// `EvCurve` only: brightness halvings per EV step.
    pub ev_gain: f32,
    /// `EvCurve` only: EV that maps to neutral brightness.
    pub ev_pivot: f32,
    /// Lower brightness clamp.
    pub brightness_min: f32,
    /// Upper brightness clamp.
    pub brightness_max: f32,
}

impl Default for ExposureTuning {
    fn default() -> Self {
        Self {
            brightness_curve: BrightnessCurve::WeightedLog,
            base_brightness: 0.5,
            iso_gain: 0.15,
            shutter_gain: 0.13,
            aperture_gain: 0.03,
            light_gain: 0.25,
            reference_shutter_s: 1.0 / 4000.0,
            reference_aperture: 1.4,
            ev_gain: 0.25,
            ev_pivot: 8.0,
            brightness_min: 0.1,
            brightness_max: 2.5,
        }
    }
}

/// Tuning for [`crate::compute_visual_effects`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectTuning {
    /// F-number producing maximum depth-of-field blur.
    pub aperture_min: f32,
    /// F-number producing zero depth-of-field blur.
    pub aperture_max: f32,
    /// Blur radius at the widest aperture, in pixels.
    pub blur_max_px: f32,
    /// Shutter duration above which motion blur appears.
    pub motion_threshold_s: f32,
    /// Motion blur per second of excess shutter duration, in pixels.
    pub motion_gain_px_per_s: f32,
    /// Motion blur cap, in pixels.
    pub motion_max_px: f32,
    /// ISO at or below which grain is invisible.
    pub grain_iso_threshold: u32,
    /// ISO at which grain reaches its ceiling.
    pub grain_iso_max: u32,
    /// Maximum grain overlay opacity. Kept well below 1 so grain never
    /// obscures the image.
    pub grain_ceiling: f32,
    /// Focal length rendered at 1:1 scale.
    pub focal_reference_mm: f32,
    /// Shortest supported focal length.
    pub focal_min_mm: f32,
    /// Longest supported focal length.
    pub focal_max_mm: f32,
    /// Lower field-of-view scale clamp.
    pub view_scale_min: f32,
    /// Upper field-of-view scale clamp.
    pub view_scale_max: f32,
}

impl Default for EffectTuning {
    fn default() -> Self {
        Self {
            aperture_min: 1.4,
            aperture_max: 22.0,
            blur_max_px: 20.0,
            motion_threshold_s: 1.0 / 30.0,
            motion_gain_px_per_s: 12.0,
            motion_max_px: 16.0,
            grain_iso_threshold: 400,
            grain_iso_max: 6400,
            grain_ceiling: 0.25,
            focal_reference_mm: 50.0,
            focal_min_mm: 24.0,
            focal_max_mm: 200.0,
            view_scale_min: 0.5,
            view_scale_max: 1.5,
        }
    }
}

/// Tuning for [`crate::classify_feedback`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackTuning {
    /// Brightness above which the shot reads as overexposed.
    pub overexposed_brightness: f32,
    /// Brightness below which the shot reads as underexposed.
    pub underexposed_brightness: f32,
    /// F-number at or below which the shallow depth-of-field hint fires.
    pub shallow_dof_aperture: f32,
    /// F-number at or above which the deep depth-of-field hint fires.
    pub deep_dof_aperture: f32,
    /// ISO above which the noise warning fires.
    pub noise_iso: u32,
}

impl Default for FeedbackTuning {
    fn default() -> Self {
        Self {
            overexposed_brightness: 1.8,
            underexposed_brightness: 0.6,
            shallow_dof_aperture: 2.8,
            deep_dof_aperture: 11.0,
            noise_iso: 1600,
        }
    }
}

/// The full tuning set consumed by [`crate::simulate`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelTuning {
    pub exposure: ExposureTuning,
    pub effects: EffectTuning,
    pub feedback: FeedbackTuning,
}
