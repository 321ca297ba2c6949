//! Cross-cutting, shared constants.
//!
//! Every accuracy score in the crate is clamped through [`clamp_score`], so the
//! `0..=MAX_SCORE` invariant holds no matter which tier produced the value.

/// Upper bound of the accuracy scale.
pub const MAX_SCORE: u8 = 100;

/// Score reported when no signal is available at all (no recognizable score
/// pattern in a model response, or an empty reference text in the lexical
/// fallback).
///
/// 50 is a neutral midpoint inherited from the original service. It carries no
/// calibrated meaning beyond "unknown"; do not compare it against real scores.
pub const NEUTRAL_SCORE: u8 = 50;

/// Clamps a raw score into `0..=MAX_SCORE`.
#[inline]
pub fn clamp_score(raw: i64) -> u8 {
    raw.clamp(0, i64::from(MAX_SCORE)) as u8
}
