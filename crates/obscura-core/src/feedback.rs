//! Feedback classification — one hint per simulated frame.

use serde::{Deserialize, Serialize};

use crate::exposure::ExposureResult;
use crate::settings::CameraSettings;
use crate::tuning::FeedbackTuning;

/// Categorical feedback about the current settings.
///
/// Consumers may show [`Feedback::message`] directly or localize by tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    Overexposed,
    Underexposed,
    ShallowDepthOfField,
    DeepDepthOfField,
    HighIsoNoise,
    Neutral,
}

impl Feedback {
    /// Default English copy for the hint.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Overexposed => "Photo is overexposed",
            Self::Underexposed => "Photo is underexposed",
            Self::ShallowDepthOfField => "Perfect bokeh for portraits!",
            Self::DeepDepthOfField => "Everything in focus, ideal for landscapes",
            Self::HighIsoNoise => "High ISO causes visible noise",
            Self::Neutral => "Adjust the controls to find the perfect shot.",
        }
    }

    /// Every hint the classifier can return.
    pub fn all() -> &'static [Self] {
        const ALL: [Feedback; 6] = [
            Feedback::Overexposed,
            Feedback::Underexposed,
            Feedback::ShallowDepthOfField,
            Feedback::DeepDepthOfField,
            Feedback::HighIsoNoise,
            Feedback::Neutral,
        ];
        &ALL
    }
}

/// Pick the feedback hint for a computed exposure.
///
/// Rules are evaluated in order and the first match wins: exposure
/// problems outrank compositional hints, which outrank the generic
/// prompt. Reordering changes which hint surfaces whenever several rules
/// match, so the order is part of the contract.
pub fn classify_feedback(
    settings: &CameraSettings,
    exposure: &ExposureResult,
    tuning: &FeedbackTuning,
) -> Feedback {
    if exposure.brightness > tuning.overexposed_brightness {
        Feedback::Overexposed
    } else if exposure.brightness < tuning.underexposed_brightness {
        Feedback::Underexposed
    } else if settings.aperture <= tuning.shallow_dof_aperture {
        Feedback::ShallowDepthOfField
    } else if settings.aperture >= tuning.deep_dof_aperture {
        Feedback::DeepDepthOfField
    } else if settings.iso > tuning.noise_iso {
        Feedback::HighIsoNoise
    } else {
        Feedback::Neutral
    }
}
