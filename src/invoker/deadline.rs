//! Timeout decorator for any [`ModelInvoker`].

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use super::{InvokeError, ModelInvoker};

/// Races an inner invoker against a fixed deadline.
///
/// The pipeline itself imposes no timeout on model calls; wrap the invoker in
/// this when one is wanted. Expiry surfaces as [`InvokeError::Timeout`],
/// which the orchestrator already handles as a fallback trigger. The inner
/// future is dropped on expiry; no result can arrive late.
#[derive(Debug)]
pub struct DeadlineInvoker<I> {
    inner: I,
    deadline: Duration,
}

impl<I> DeadlineInvoker<I> {
    pub fn new(inner: I, deadline: Duration) -> Self {
        Self { inner, deadline }
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

#[async_trait]
impl<I: ModelInvoker> ModelInvoker for DeadlineInvoker<I> {
    async fn invoke(&self, prompt: &str) -> Result<String, InvokeError> {
        match tokio::time::timeout(self.deadline, self.inner.invoke(prompt)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(deadline_secs = self.deadline.as_secs(), "model call hit deadline");
                Err(InvokeError::Timeout {
                    seconds: self.deadline.as_secs(),
                })
            }
        }
    }
}
