//! Obscura Core — domain layer for the photography simulator.
//!
//! This crate contains the exposure model, visual-effect mappings, and
//! feedback classification. Pure value-in/value-out computation; no I/O,
//! no rendering, no framework dependencies.

pub mod effects;
pub mod error;
pub mod exposure;
pub mod feedback;
pub mod settings;
pub mod simulate;
pub mod tuning;

// Re-exports for convenience.
pub use effects::{ColorFilter, VisualEffectParams, compute_visual_effects};
pub use error::SimulationError;
pub use exposure::{ExposureResult, compute_exposure};
pub use feedback::{Feedback, classify_feedback};
pub use settings::{CameraSettings, WhiteBalance};
pub use simulate::{Simulation, simulate};
pub use tuning::{BrightnessCurve, ModelTuning};
