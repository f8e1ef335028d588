//! Motion blur from slow shutter speeds.

use crate::tuning::EffectTuning;

/// Motion blur length for the given shutter duration.
///
/// Handheld-speed exposures stay sharp; blur appears only once the
/// duration exceeds `motion_threshold_s` and then grows linearly with the
/// excess, capped at `motion_max_px`.
pub fn motion_blur(shutter_speed_s: f32, tuning: &EffectTuning) -> f32 {
    if shutter_speed_s.is_nan() || shutter_speed_s <= tuning.motion_threshold_s {
        return 0.0;
    }
    ((shutter_speed_s - tuning.motion_threshold_s) * tuning.motion_gain_px_per_s)
        .clamp(0.0, tuning.motion_max_px)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_shutter_has_no_motion_blur() {
        let tuning = EffectTuning::default();
        assert_eq!(motion_blur(1.0 / 4000.0, &tuning), 0.0);
        assert_eq!(motion_blur(1.0 / 125.0, &tuning), 0.0);
    }

    #[test]
    fn test_threshold_itself_has_no_motion_blur() {
        let tuning = EffectTuning::default();
        assert_eq!(motion_blur(tuning.motion_threshold_s, &tuning), 0.0);
    }

    #[test]
    fn test_blur_grows_with_excess_duration() {
        let tuning = EffectTuning::default();
        let quarter = motion_blur(0.25, &tuning);
        let full = motion_blur(1.0, &tuning);
        assert!(quarter > 0.0);
        assert!(full > quarter);
    }

    #[test]
    fn test_blur_is_capped() {
        let tuning = EffectTuning::default();
        assert_eq!(motion_blur(30.0, &tuning), tuning.motion_max_px);
    }

    #[test]
    fn test_non_finite_shutter_yields_zero() {
        let tuning = EffectTuning::default();
        assert_eq!(motion_blur(f32::NAN, &tuning), 0.0);
    }
}
