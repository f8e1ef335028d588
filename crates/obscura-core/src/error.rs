//! Error type for the simulation core.

/// Errors produced by the exposure model.
///
/// Out-of-range but finite-positive inputs are clamped rather than
/// rejected; this error is reserved for inputs where continuing would put
/// a non-positive value under a logarithm and propagate NaN.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid {name}: {value} (must be a finite, positive number)")]
    InvalidParameter { name: &'static str, value: f64 },
}

impl SimulationError {
    pub(crate) fn invalid(name: &'static str, value: impl Into<f64>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}
