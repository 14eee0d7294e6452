//! Derivation failure kinds.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Reasons a model-backed derivation attempt was abandoned.
///
/// All variants are handled the same way by the generator: log and fall back
/// to the heuristic extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerivationError {
    /// No model is available on this device/runtime.
    ModelUnavailable,
    /// The model did not answer within the configured budget.
    ModelTimeout(Duration),
    /// The model answered with a refusal, a non-answer or nothing at all.
    ModelRefusalResponse,
    /// The model runtime reported an error.
    ModelRuntimeError(String),
}

impl DerivationError {
    /// Stable snake_case reason used in log events.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::ModelUnavailable => "model_unavailable",
            Self::ModelTimeout(_) => "model_timeout",
            Self::ModelRefusalResponse => "model_refusal",
            Self::ModelRuntimeError(_) => "model_runtime_error",
        }
    }
}

impl Display for DerivationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ModelUnavailable => write!(f, "language model is unavailable"),
            Self::ModelTimeout(budget) => {
                write!(f, "language model timed out after {} ms", budget.as_millis())
            }
            Self::ModelRefusalResponse => write!(f, "language model returned a refusal response"),
            Self::ModelRuntimeError(details) => write!(f, "language model failed: {details}"),
        }
    }
}

impl Error for DerivationError {}
