use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::interpret::{InterpretStrategy, interpret};
use crate::invoker::{DeadlineInvoker, GenAiInvoker, ModelInvoker};
use crate::overlap::overlap_score;
use crate::prompt::build_prompt;

use super::types::{Evaluation, EvaluationRequest, Tier};

/// Top-level entry point: runs one request through the three-tier
/// degradation chain.
///
/// Tiers, in order: structured model output, heuristic scan of model output,
/// lexical overlap. No retries within a tier and no re-entry — the first
/// terminal tier wins. [`evaluate`](Evaluator::evaluate) is infallible; every
/// failure class collapses into a lower tier.
///
/// Holds no mutable state. Cloning is cheap (the invoker sits behind an
/// `Arc`) and any number of evaluations may run concurrently; the model call
/// is the only suspension point.
#[derive(Clone)]
pub struct Evaluator {
    invoker: Option<Arc<dyn ModelInvoker>>,
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("model_configured", &self.invoker.is_some())
            .finish()
    }
}

impl Evaluator {
    /// Builds an evaluator around the given model invoker.
    pub fn new(invoker: Arc<dyn ModelInvoker>) -> Self {
        Self {
            invoker: Some(invoker),
        }
    }

    /// Builds an evaluator with no model at all; every request takes the
    /// lexical-overlap path.
    pub fn without_model() -> Self {
        Self { invoker: None }
    }

    /// Wires an evaluator from [`Config`]: a [`GenAiInvoker`] for the
    /// configured model, wrapped in a [`DeadlineInvoker`] when a timeout is
    /// set, or no invoker when the model is disabled.
    pub fn from_config(config: &Config) -> Self {
        if !config.model_enabled {
            return Self::without_model();
        }

        let invoker = GenAiInvoker::new(config.model.clone());
        match config.request_timeout {
            Some(deadline) => Self::new(Arc::new(DeadlineInvoker::new(invoker, deadline))),
            None => Self::new(Arc::new(invoker)),
        }
    }

    /// Whether a model invoker is wired.
    pub fn is_model_configured(&self) -> bool {
        self.invoker.is_some()
    }

    /// Evaluates one request, always producing a complete result.
    #[instrument(
        skip(self, request),
        fields(
            reference_len = request.reference_text().len(),
            candidate_len = request.candidate_text().len(),
            mode = %request.mode(),
        )
    )]
    pub async fn evaluate(&self, request: &EvaluationRequest) -> Evaluation {
        let Some(invoker) = &self.invoker else {
            debug!("no model invoker configured");
            return self.overlap_fallback(request);
        };

        let prompt = build_prompt(request);
        let raw = match invoker.invoke(&prompt).await {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "model invocation failed");
                return self.overlap_fallback(request);
            }
        };

        let interpreted = interpret(&raw);
        let tier = match interpreted.strategy {
            InterpretStrategy::Structured => Tier::StructuredModel,
            InterpretStrategy::Heuristic => Tier::HeuristicModel,
        };

        info!(
            tier = %tier,
            score = interpreted.result.accuracy_score,
            correct = interpreted.result.correct_points.len(),
            missed = interpreted.result.missed_points.len(),
            wrong = interpreted.result.wrong_points.len(),
            "evaluation complete"
        );

        Evaluation {
            result: interpreted.result,
            tier,
        }
    }

    fn overlap_fallback(&self, request: &EvaluationRequest) -> Evaluation {
        let result = overlap_score(request.reference_text(), request.candidate_text());
        info!(
            tier = %Tier::LocalOverlap,
            score = result.accuracy_score,
            "evaluation complete"
        );

        Evaluation {
            result,
            tier: Tier::LocalOverlap,
        }
    }
}
