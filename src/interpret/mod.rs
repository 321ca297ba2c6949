//! Model-response interpretation.
//!
//! Turns whatever text the model returned into a complete
//! [`EvaluationResult`]. Two strategies, tried in order:
//!
//! 1. **Structured** ([`structured`]): find the outermost brace-delimited
//!    window and decode it as the JSON object the prompt asked for.
//! 2. **Heuristic** ([`heuristic`]): keyword/bullet line scan, only when the
//!    structured decode fails.
//!
//! Interpretation never fails and never panics; the worst possible input
//! yields the neutral result. The strategy that actually produced the value
//! is returned alongside it so the orchestrator can report the tier without
//! parsing twice.
//!
//! Model output crosses this boundary as an opaque `&str`. It is never passed
//! around as untyped decoded JSON; the only thing that leaves this module is
//! the fixed [`EvaluationResult`] shape.

mod heuristic;
mod structured;

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::eval::EvaluationResult;

/// Which internal strategy decoded the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpretStrategy {
    /// The brace-window JSON decode succeeded.
    Structured,
    /// Fell back to the keyword/bullet line scan.
    Heuristic,
}

/// An interpreted model response: the result and how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpretedResponse {
    pub result: EvaluationResult,
    pub strategy: InterpretStrategy,
}

/// Interprets raw model output. Infallible and deterministic: the same input
/// always yields the same [`InterpretedResponse`].
pub fn interpret(raw: &str) -> InterpretedResponse {
    if let Some(result) = structured::extract(raw) {
        debug!(score = result.accuracy_score, "structured decode succeeded");
        return InterpretedResponse {
            result,
            strategy: InterpretStrategy::Structured,
        };
    }

    debug!(raw_len = raw.len(), "structured decode failed, scanning lines");
    InterpretedResponse {
        result: heuristic::scan(raw),
        strategy: InterpretStrategy::Heuristic,
    }
}
