//! Visual-effect mappings — the styling coefficients a preview renders.

pub mod color_filter;
pub mod grain;
pub mod motion;
pub mod optics;

use serde::{Deserialize, Serialize};

pub use color_filter::ColorFilter;

use crate::exposure::ExposureResult;
use crate::settings::CameraSettings;
use crate::tuning::EffectTuning;

/// Styling coefficients for one simulated frame.
///
/// The presentation layer renders these however it likes (CSS filters,
/// shader uniforms, terminal art); the core only guarantees every value
/// is finite and within its documented bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualEffectParams {
    /// Depth-of-field background blur radius in pixels. `≥ 0`.
    pub blur_px: f32,
    /// Motion blur length in pixels. `≥ 0`, zero at handheld speeds.
    pub motion_blur_px: f32,
    /// Grain overlay opacity in `[0, 1]`.
    pub grain_opacity: f32,
    /// Named tint from the white-balance bucketing.
    pub color_filter: ColorFilter,
    /// Field-of-view zoom factor. `> 0`, 1.0 at the reference lens.
    pub view_scale: f32,
    /// Brightness multiplier the preview combines with the blur filter,
    /// taken from the exposure result.
    pub brightness: f32,
    /// Key-light angle in degrees, clamped to `[0, 90]`, for shadow
    /// rendering.
    pub light_angle_degrees: f32,
}

/// Derive the visual-effect coefficients for a computed exposure.
///
/// Never fails: finite out-of-domain inputs clamp to their domain edges
/// and non-finite fields fall back to the neutral default, since a frozen
/// preview is worse than a clamped one.
pub fn compute_visual_effects(
    settings: &CameraSettings,
    exposure: &ExposureResult,
    tuning: &EffectTuning,
) -> VisualEffectParams {
    let defaults = CameraSettings::default();
    let aperture = sanitize(settings.aperture, defaults.aperture);
    let focal = sanitize(settings.focal_length_mm, defaults.focal_length_mm);
    let light_angle = sanitize(settings.light_angle_degrees, defaults.light_angle_degrees);

    VisualEffectParams {
        blur_px: optics::depth_of_field_blur(aperture, tuning),
        motion_blur_px: motion::motion_blur(settings.shutter_speed_s, tuning),
        grain_opacity: grain::grain_opacity(settings.iso, tuning),
        color_filter: ColorFilter::from_white_balance(settings.white_balance),
        view_scale: optics::field_of_view_scale(focal, tuning),
        brightness: exposure.brightness,
        light_angle_degrees: light_angle.clamp(0.0, 90.0),
    }
}

fn sanitize(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}
