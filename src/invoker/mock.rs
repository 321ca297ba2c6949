//! Scripted invoker for tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{InvokeError, ModelInvoker};

enum Script {
    Respond(String),
    Fail(InvokeError),
}

/// A [`ModelInvoker`] that returns a canned response or failure and records
/// how it was called.
pub struct MockInvoker {
    script: Script,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockInvoker {
    /// Always answers with `text`.
    pub fn respond_with(text: impl Into<String>) -> Self {
        Self {
            script: Script::Respond(text.into()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Always fails with `error`.
    pub fn fail_with(error: InvokeError) -> Self {
        Self {
            script: Script::Fail(error),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Number of `invoke` calls observed.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The prompt from the most recent call, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .expect("mock prompt lock poisoned")
            .clone()
    }
}

#[async_trait]
impl ModelInvoker for MockInvoker {
    async fn invoke(&self, prompt: &str) -> Result<String, InvokeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_prompt
            .lock()
            .expect("mock prompt lock poisoned") = Some(prompt.to_owned());

        match &self.script {
            Script::Respond(text) => Ok(text.clone()),
            Script::Fail(error) => Err(error.clone()),
        }
    }
}
