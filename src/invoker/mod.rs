//! Model invocation boundary.
//!
//! The pipeline talks to the generative model through the [`ModelInvoker`]
//! trait: one prompt in, raw text out, or an [`InvokeError`]. The transport
//! behind it is none of the pipeline's business — [`GenAiInvoker`] goes over
//! the `genai` provider client, [`DeadlineInvoker`] bounds any inner invoker
//! with a caller-chosen timeout, and [`MockInvoker`] (behind the `mock`
//! feature) scripts responses for tests.
//!
//! Every invocation is treated as unreliable. The orchestrator never retries:
//! one failure of any kind triggers the lexical-overlap fallback.

mod deadline;
mod genai;

#[cfg(any(test, feature = "mock"))]
mod mock;


pub use deadline::DeadlineInvoker;
pub use genai::GenAiInvoker;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockInvoker;

use async_trait::async_trait;
use thiserror::Error;

/// Ways a model invocation can fail.
///
/// The orchestrator treats all variants identically (fall back, no retry);
/// the distinction exists for logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvokeError {
    /// The request never reached the provider.
    #[error("transport failure: {reason}")]
    Transport { reason: String },

    /// The call exceeded its deadline (see [`DeadlineInvoker`]).
    #[error("model call timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The provider refused the call for quota/rate reasons.
    #[error("provider quota exhausted: {reason}")]
    Quota { reason: String },

    /// Any other provider-side failure.
    #[error("provider error: {reason}")]
    Provider { reason: String },

    /// The provider answered with no usable text.
    #[error("provider returned an empty completion")]
    EmptyResponse,
}

/// A single request/response call into a generative model.
///
/// Implementations must be safe to share across concurrent evaluations; the
/// pipeline holds one behind an `Arc` and never serializes calls.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// Sends `prompt` to the model and returns its raw textual response.
    async fn invoke(&self, prompt: &str) -> Result<String, InvokeError>;
}
