use serde::{Deserialize, Serialize};

use crate::constants::{NEUTRAL_SCORE, clamp_score};
use crate::modes::ReadingMode;

/// A single evaluation request: the reference text, the summary to judge, and
/// the reading mode selecting the evaluative intent.
///
/// Immutable once constructed. Callers are expected to have validated that
/// both texts are non-empty; the mode string is resolved leniently via
/// [`ReadingMode::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRequest {
    reference_text: String,
    candidate_text: String,
    mode: ReadingMode,
}

impl EvaluationRequest {
    /// Builds a request, resolving the mode identifier (unknown identifiers
    /// fall back to `detailed`).
    pub fn new(
        reference_text: impl Into<String>,
        candidate_text: impl Into<String>,
        mode: &str,
    ) -> Self {
        Self {
            reference_text: reference_text.into(),
            candidate_text: candidate_text.into(),
            mode: ReadingMode::parse(mode),
        }
    }

    /// Builds a request with an already-resolved mode.
    pub fn with_mode(
        reference_text: impl Into<String>,
        candidate_text: impl Into<String>,
        mode: ReadingMode,
    ) -> Self {
        Self {
            reference_text: reference_text.into(),
            candidate_text: candidate_text.into(),
            mode,
        }
    }

    /// The original content the summary is judged against.
    pub fn reference_text(&self) -> &str {
        &self.reference_text
    }

    /// The user-written summary being evaluated.
    pub fn candidate_text(&self) -> &str {
        &self.candidate_text
    }

    /// The resolved reading mode.
    pub fn mode(&self) -> ReadingMode {
        self.mode
    }
}

/// Outcome of evaluating a candidate summary.
///
/// Always fully formed: the score is in `0..=100` and all three point lists
/// are present (possibly empty), regardless of which tier produced it. The
/// serde field names match the wire shape the model is instructed to emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// How well the candidate captures the reference, `0..=100`.
    pub accuracy_score: u8,
    /// Points from the reference the candidate captured correctly.
    pub correct_points: Vec<String>,
    /// Important points the candidate left out.
    pub missed_points: Vec<String>,
    /// Incorrect or misleading claims in the candidate.
    pub wrong_points: Vec<String>,
}

impl EvaluationResult {
    /// Builds a result, clamping the raw score into range.
    pub fn new(
        raw_score: i64,
        correct_points: Vec<String>,
        missed_points: Vec<String>,
        wrong_points: Vec<String>,
    ) -> Self {
        Self {
            accuracy_score: clamp_score(raw_score),
            correct_points,
            missed_points,
            wrong_points,
        }
    }

    /// The "nothing could be determined" result: neutral score, no points.
    pub fn neutral() -> Self {
        Self {
            accuracy_score: NEUTRAL_SCORE,
            correct_points: Vec::new(),
            missed_points: Vec::new(),
            wrong_points: Vec::new(),
        }
    }
}

/// Which strategy produced the final result.
///
/// Diagnostic only: callers get a complete [`EvaluationResult`] either way,
/// but degraded evaluations must stay distinguishable from high-confidence
/// ones in logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// The model responded with a decodable JSON object.
    StructuredModel,
    /// The model responded, but only the keyword/bullet line scan applied.
    HeuristicModel,
    /// No model output at all; lexical word-overlap fallback.
    LocalOverlap,
}

impl Tier {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::StructuredModel => "STRUCTURED_MODEL",
            Tier::HeuristicModel => "HEURISTIC_MODEL",
            Tier::LocalOverlap => "LOCAL_OVERLAP",
        }
    }

    /// Returns `true` when the model contributed to the result.
    #[inline]
    pub fn used_model(&self) -> bool {
        !matches!(self, Tier::LocalOverlap)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result plus the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub result: EvaluationResult,
    pub tier: Tier,
}
