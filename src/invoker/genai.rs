//! Production invoker over the `genai` multi-provider client.

use async_trait::async_trait;
use genai::Client;
use genai::chat::ChatRequest;
use tracing::{debug, error};

use super::{InvokeError, ModelInvoker};

/// Invokes a chat model through [`genai::Client`].
///
/// Provider credentials come from the environment the same way the client
/// itself resolves them (e.g. `GEMINI_API_KEY` for Gemini/Gemma models);
/// this type only carries the model name.
pub struct GenAiInvoker {
    client: Client,
    model: String,
}

impl std::fmt::Debug for GenAiInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenAiInvoker")
            .field("model", &self.model)
            .finish()
    }
}

impl GenAiInvoker {
    /// Creates an invoker for `model` with a default client.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: Client::default(),
            model: model.into(),
        }
    }

    /// Creates an invoker with a pre-built client (custom auth, endpoints).
    pub fn with_client(client: Client, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// The model this invoker targets.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ModelInvoker for GenAiInvoker {
    async fn invoke(&self, prompt: &str) -> Result<String, InvokeError> {
        debug!(model = %self.model, prompt_len = prompt.len(), "sending chat request");

        let request = ChatRequest::from_user(prompt);
        let response = self
            .client
            .exec_chat(&self.model, request, None)
            .await
            .map_err(|e| {
                error!(model = %self.model, "provider call failed: {e}");
                InvokeError::Provider {
                    reason: e.to_string(),
                }
            })?;

        match response.first_text() {
            Some(text) if !text.trim().is_empty() => Ok(text.to_owned()),
            _ => Err(InvokeError::EmptyResponse),
        }
    }
}
