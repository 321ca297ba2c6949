//! Gistmark: tiered accuracy evaluation of user-written summaries.
//!
//! Given a reference text and a candidate summary, the pipeline produces an
//! integer accuracy score in `0..=100` plus three feedback lists (points
//! captured correctly, points missed, points that are wrong or misleading).
//! It degrades through three strategies and always returns a complete result:
//!
//! 1. **Structured model** — ask a generative model for a JSON verdict and
//!    decode it.
//! 2. **Heuristic model** — the model answered but not in JSON; scan its
//!    prose for a score and bulleted feedback.
//! 3. **Local overlap** — no model output at all; score by lexical word
//!    overlap between the two texts.
//!
//! # Public API Surface
//!
//! - [`Evaluator`], [`EvaluationRequest`], [`Evaluation`],
//!   [`EvaluationResult`], [`Tier`] — the pipeline and its data model
//! - [`ReadingMode`] — evaluative-intent catalog (unknown identifiers fall
//!   back to `detailed`)
//! - [`ModelInvoker`], [`InvokeError`], [`GenAiInvoker`],
//!   [`DeadlineInvoker`] — the model boundary
//! - [`Config`], [`ConfigError`] — environment-backed wiring
//! - [`interpret`], [`overlap_score`], [`build_prompt`] — the individual
//!   stages, exposed so each tier is testable in isolation
//!
//! # Example
//!
//! ```no_run
//! use gistmark::{Config, EvaluationRequest, Evaluator};
//!
//! # async fn run() -> Result<(), gistmark::ConfigError> {
//! let evaluator = Evaluator::from_config(&Config::from_env()?);
//!
//! let request = EvaluationRequest::new(
//!     "The Industrial Revolution began in Great Britain...",
//!     "Industrialization started in Britain and spread worldwide.",
//!     "comprehension",
//! );
//!
//! let evaluation = evaluator.evaluate(&request).await;
//! println!("{}: {}", evaluation.tier, evaluation.result.accuracy_score);
//! # Ok(())
//! # }
//! ```
//!
//! # Test/Mock Support
//!
//! [`MockInvoker`] is available behind `#[cfg(any(test, feature = "mock"))]`
//! for scripting model responses and failures.

pub mod config;
pub mod constants;
pub mod eval;
pub mod interpret;
pub mod invoker;
pub mod modes;
pub mod overlap;
pub mod prompt;

pub use config::{Config, ConfigError, DEFAULT_MODEL};
pub use constants::{MAX_SCORE, NEUTRAL_SCORE, clamp_score};
pub use eval::{Evaluation, EvaluationRequest, EvaluationResult, Evaluator, Tier};
pub use interpret::{InterpretStrategy, InterpretedResponse, interpret};
#[cfg(any(test, feature = "mock"))]
pub use invoker::MockInvoker;
pub use invoker::{DeadlineInvoker, GenAiInvoker, InvokeError, ModelInvoker};
pub use modes::ReadingMode;
pub use overlap::{OVERLAP_CORRECT_POINT, OVERLAP_MISSED_POINT, overlap_score};
pub use prompt::build_prompt;
