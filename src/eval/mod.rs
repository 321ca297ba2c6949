//! Evaluation types and the tier-arbitrating orchestrator.
//!
//! [`Evaluator::evaluate`] is the crate's front door: it builds the prompt,
//! calls the model through the injected [`ModelInvoker`](crate::invoker::ModelInvoker),
//! interprets whatever came back, and falls through to the lexical-overlap
//! scorer when there is nothing to interpret. The [`Tier`] on the returned
//! [`Evaluation`] says which strategy won.

pub mod evaluator;
pub mod types;


pub use evaluator::Evaluator;
pub use types::{Evaluation, EvaluationRequest, EvaluationResult, Tier};
