//! Sensor-noise grain from high ISO settings.

use crate::tuning::EffectTuning;

/// Grain overlay opacity for the given ISO.
///
/// Invisible at or below `grain_iso_threshold`, then linear in the excess
/// up to `grain_iso_max`, scaled by the tuned ceiling:
///
/// ```text
/// grain = clamp((iso − threshold) / (iso_max − threshold), 0, 1) × ceiling
/// ```
pub fn grain_opacity(iso: u32, tuning: &EffectTuning) -> f32 {
    if iso <= tuning.grain_iso_threshold {
        return 0.0;
    }
    let span = tuning.grain_iso_max.saturating_sub(tuning.grain_iso_threshold);
    if span == 0 {
        return tuning.grain_ceiling;
    }
    let norm = (iso - tuning.grain_iso_threshold) as f32 / span as f32;
    norm.clamp(0.0, 1.0) * tuning.grain_ceiling
}
