//! Core entry point — runs the full simulation chain for one frame.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::effects::{VisualEffectParams, compute_visual_effects};
use crate::error::SimulationError;
use crate::exposure::{ExposureResult, compute_exposure};
use crate::feedback::{Feedback, classify_feedback};
use crate::settings::CameraSettings;
use crate::tuning::ModelTuning;

/// Everything a preview needs to render one simulated frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    pub exposure: ExposureResult,
    pub effects: VisualEffectParams,
    pub feedback: Feedback,
}

/// Run the full chain for one set of camera settings:
/// 1. Exposure model (EV + clamped brightness)
/// 2. Visual-effect mapping (blur, grain, tint, scale)
/// 3. Feedback classification
///
/// Fails only when the exposure model rejects an input; the later stages
/// clamp instead of failing.
pub fn simulate(
    settings: &CameraSettings,
    tuning: &ModelTuning,
) -> Result<Simulation, SimulationError> {
    let exposure = compute_exposure(settings, &tuning.exposure)?;
    let effects = compute_visual_effects(settings, &exposure, &tuning.effects);
    let feedback = classify_feedback(settings, &exposure, &tuning.feedback);

    debug!(
        ev = exposure.exposure_value,
        brightness = exposure.brightness,
        feedback = feedback.message(),
        "simulated frame"
    );

    Ok(Simulation {
        exposure,
        effects,
        feedback,
    })
}
