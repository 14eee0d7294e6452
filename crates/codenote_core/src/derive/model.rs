//! Language model capability seam.
//!
//! # Responsibility
//! - Define the request/response contract the generator depends on.
//! - Ship adapters for hosts without an in-process model.
//!
//! # Invariants
//! - Implementations report failure through `DerivationError`; they must not
//!   panic for unavailable or failing backends.

use crate::derive::error::DerivationError;
use crate::derive::prompt::Prompt;
use async_trait::async_trait;

/// Request/response capability backed by a (usually on-device) model.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Returns generated text for `prompt`.
    async fn respond(&self, prompt: &Prompt) -> Result<String, DerivationError>;
}

/// Model stand-in for runtimes without any model support.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableModel;

#[async_trait]
impl LanguageModel for UnavailableModel {
    async fn respond(&self, _prompt: &Prompt) -> Result<String, DerivationError> {
        Err(DerivationError::ModelUnavailable)
    }
}

/// Response already produced by the host platform's model.
///
/// Mobile hosts run the on-device model themselves and hand the raw answer
/// to core for validation and fallback. `None` means the host had no model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostResponse {
    response: Option<String>,
}

impl HostResponse {
    pub fn new(response: Option<String>) -> Self {
        Self { response }
    }
}

#[async_trait]
impl LanguageModel for HostResponse {
    async fn respond(&self, _prompt: &Prompt) -> Result<String, DerivationError> {
        self.response
            .clone()
            .ok_or(DerivationError::ModelUnavailable)
    }
}
