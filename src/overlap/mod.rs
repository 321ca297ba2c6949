//! Lexical overlap fallback.
//!
//! Terminal tier of the degradation chain: used when no model output exists
//! at all. Deliberately crude — it guarantees the caller always gets a
//! complete result, nothing more.


use std::collections::HashSet;

use crate::constants::{MAX_SCORE, NEUTRAL_SCORE, clamp_score};
use crate::eval::EvaluationResult;

/// Placeholder correct point attached to every overlap result.
pub const OVERLAP_CORRECT_POINT: &str = "Basic content overlap detected";

/// Placeholder missed point attached to every overlap result.
pub const OVERLAP_MISSED_POINT: &str = "Detailed analysis not available";

/// Scores the candidate by word-set overlap with the reference.
///
/// Both texts are lowercased and split on whitespace into sets (duplicates
/// collapse). The score is the rounded percentage of reference words that
/// also appear in the candidate, capped at 100; an empty reference set scores
/// [`NEUTRAL_SCORE`]. The point lists are fixed placeholders because no real
/// analysis happened.
pub fn overlap_score(reference_text: &str, candidate_text: &str) -> EvaluationResult {
    let reference_lower = reference_text.to_lowercase();
    let candidate_lower = candidate_text.to_lowercase();

    let reference_words: HashSet<&str> = reference_lower.split_whitespace().collect();
    let candidate_words: HashSet<&str> = candidate_lower.split_whitespace().collect();

    let score = if reference_words.is_empty() {
        NEUTRAL_SCORE
    } else {
        let overlap = reference_words.intersection(&candidate_words).count();
        let ratio = overlap as f64 / reference_words.len() as f64;
        clamp_score((ratio * f64::from(MAX_SCORE)).round() as i64)
    };

    EvaluationResult {
        accuracy_score: score,
        correct_points: vec![OVERLAP_CORRECT_POINT.to_owned()],
        missed_points: vec![OVERLAP_MISSED_POINT.to_owned()],
        wrong_points: Vec::new(),
    }
}
