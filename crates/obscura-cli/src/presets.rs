//! Scene presets — named starting points for the simulator.
//!
//! Presets are presentation data: a plain name-to-settings table the CLI
//! owns. The core never sees scene names.

use obscura_core::{CameraSettings, WhiteBalance};

/// A named bundle of camera settings with a one-line description.
pub struct ScenePreset {
    pub name: &'static str,
    pub description: &'static str,
    pub settings: CameraSettings,
}

/// Built-in scenes, in menu order.
pub const SCENES: &[ScenePreset] = &[
    ScenePreset {
        name: "studio",
        description: "Controlled light, everything at its reference value",
        settings: CameraSettings {
            aperture: 5.6,
            shutter_speed_s: 1.0 / 125.0,
            iso: 200,
            white_balance: WhiteBalance::Auto,
            focal_length_mm: 50.0,
            light_intensity_percent: 100.0,
            light_angle_degrees: 45.0,
        },
    },
    ScenePreset {
        name: "portrait",
        description: "Wide aperture and a short telephoto for soft backgrounds",
        settings: CameraSettings {
            aperture: 2.0,
            shutter_speed_s: 1.0 / 250.0,
            iso: 200,
            white_balance: WhiteBalance::Kelvin(5500),
            focal_length_mm: 85.0,
            light_intensity_percent: 100.0,
            light_angle_degrees: 30.0,
        },
    },
    ScenePreset {
        name: "landscape",
        description: "Narrow aperture and a wide lens for front-to-back focus",
        settings: CameraSettings {
            aperture: 11.0,
            shutter_speed_s: 1.0 / 125.0,
            iso: 100,
            white_balance: WhiteBalance::Kelvin(5500),
            focal_length_mm: 24.0,
            light_intensity_percent: 100.0,
            light_angle_degrees: 60.0,
        },
    },
    ScenePreset {
        name: "night",
        description: "Dim street light pushes the ISO into visible noise",
        settings: CameraSettings {
            aperture: 4.0,
            shutter_speed_s: 1.0 / 15.0,
            iso: 3200,
            white_balance: WhiteBalance::Kelvin(3200),
            focal_length_mm: 35.0,
            light_intensity_percent: 10.0,
            light_angle_degrees: 20.0,
        },
    },
    ScenePreset {
        name: "sports",
        description: "Fast shutter to freeze motion, aperture wide open",
        settings: CameraSettings {
            aperture: 2.8,
            shutter_speed_s: 1.0 / 1000.0,
            iso: 800,
            white_balance: WhiteBalance::Auto,
            focal_length_mm: 135.0,
            light_intensity_percent: 100.0,
            light_angle_degrees: 45.0,
        },
    },
    ScenePreset {
        name: "indoor",
        description: "Fluorescent office light, handheld shutter speeds",
        settings: CameraSettings {
            aperture: 2.8,
            shutter_speed_s: 1.0 / 60.0,
            iso: 1600,
            white_balance: WhiteBalance::Kelvin(4000),
            focal_length_mm: 35.0,
            light_intensity_percent: 60.0,
            light_angle_degrees: 70.0,
        },
    },
];

/// Look up a preset by name, case-insensitively.
pub fn find(name: &str) -> Option<&'static ScenePreset> {
    SCENES.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use obscura_core::{Feedback, ModelTuning, simulate};

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(find("Portrait").is_some());
        assert!(find("NIGHT").is_some());
        assert!(find("underwater").is_none());
    }

    #[test]
    fn test_every_preset_simulates_cleanly() {
        let tuning = ModelTuning::default();
        for preset in SCENES {
            let sim = simulate(&preset.settings, &tuning)
                .unwrap_or_else(|e| panic!("preset '{}' failed: {e}", preset.name));
            assert!(
                sim.exposure.brightness >= tuning.exposure.brightness_min
                    && sim.exposure.brightness <= tuning.exposure.brightness_max,
                "preset '{}' brightness out of bounds",
                preset.name
            );
        }
    }

    #[test]
    fn test_presets_demonstrate_their_hints() {
        let tuning = ModelTuning::default();
        let expected = [
            ("studio", Feedback::Neutral),
            ("portrait", Feedback::ShallowDepthOfField),
            ("landscape", Feedback::DeepDepthOfField),
            ("night", Feedback::HighIsoNoise),
            ("sports", Feedback::ShallowDepthOfField),
        ];
        for (name, feedback) in expected {
            let preset = find(name).expect("preset exists");
            let sim = simulate(&preset.settings, &tuning).expect("preset simulates");
            assert_eq!(sim.feedback, feedback, "preset '{name}'");
        }
    }
}
