//! Aperture and focal-length optics — depth-of-field blur and
//! field-of-view scale.

use crate::tuning::EffectTuning;

/// Background blur radius for the given f-number.
///
/// Wide-open apertures isolate the subject, so blur is strongest at
/// `aperture_min` and falls to zero at `aperture_max`:
///
/// ```text
/// blur = (1 − norm(N))² × blur_max
/// ```
///
/// The normalized position is squared for perceptual non-linearity — the
/// first few stops down from wide open shed blur quickly, the last few
/// barely change it.
pub fn depth_of_field_blur(aperture: f32, tuning: &EffectTuning) -> f32 {
    let span = tuning.aperture_max - tuning.aperture_min;
    if span <= 0.0 {
        return 0.0;
    }
    let norm = ((aperture - tuning.aperture_min) / span).clamp(0.0, 1.0);
    (1.0 - norm).powi(2) * tuning.blur_max_px
}

/// Preview scale simulating the field of view of the given focal length.
///
/// Inversely proportional to focal length relative to the reference lens,
/// clamped so extreme focal lengths cannot invert or degenerate the view.
pub fn field_of_view_scale(focal_length_mm: f32, tuning: &EffectTuning) -> f32 {
    let focal = focal_length_mm.clamp(tuning.focal_min_mm, tuning.focal_max_mm);
    (tuning.focal_reference_mm / focal).clamp(tuning.view_scale_min, tuning.view_scale_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_wide_open_aperture_gives_maximum_blur() {
        let tuning = EffectTuning::default();
        let blur = depth_of_field_blur(1.4, &tuning);
        assert!((blur - tuning.blur_max_px).abs() < EPSILON);
    }

    #[test]
    fn test_smallest_aperture_gives_zero_blur() {
        let blur = depth_of_field_blur(22.0, &EffectTuning::default());
        assert!(blur.abs() < EPSILON);
    }

    #[test]
    fn test_blur_decreases_monotonically_with_f_number() {
        let tuning = EffectTuning::default();
        let stops = [1.4, 2.0, 2.8, 4.0, 5.6, 8.0, 11.0, 22.0];
        for pair in stops.windows(2) {
            assert!(
                depth_of_field_blur(pair[1], &tuning) < depth_of_field_blur(pair[0], &tuning),
                "f/{} should blur less than f/{}",
                pair[1],
                pair[0]
            );
        }
    }

    #[test]
    fn test_blur_clamps_outside_the_aperture_domain() {
        let tuning = EffectTuning::default();
        assert!((depth_of_field_blur(0.95, &tuning) - tuning.blur_max_px).abs() < EPSILON);
        assert!(depth_of_field_blur(32.0, &tuning).abs() < EPSILON);
    }

    #[test]
    fn test_reference_focal_length_is_unit_scale() {
        let scale = field_of_view_scale(50.0, &EffectTuning::default());
        assert!((scale - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_view_scale_clamps_at_both_ends() {
        let tuning = EffectTuning::default();
        assert!((field_of_view_scale(24.0, &tuning) - tuning.view_scale_max).abs() < EPSILON);
        assert!((field_of_view_scale(200.0, &tuning) - tuning.view_scale_min).abs() < EPSILON);
        // Outside the focal domain clamps to the same extremes.
        assert!((field_of_view_scale(8.0, &tuning) - tuning.view_scale_max).abs() < EPSILON);
        assert!((field_of_view_scale(800.0, &tuning) - tuning.view_scale_min).abs() < EPSILON);
    }

    #[test]
    fn test_longer_lens_zooms_in() {
        let tuning = EffectTuning::default();
        assert!(field_of_view_scale(85.0, &tuning) < field_of_view_scale(35.0, &tuning));
    }
}
