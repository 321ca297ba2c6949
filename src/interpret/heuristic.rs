//! Heuristic line scan for responses that are not decodable JSON.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::NEUTRAL_SCORE;
use crate::eval::EvaluationResult;

/// Matches "accuracy score: 70" and variants ("accuracy_score 70", mixed
/// case). The first match wins.
static SCORE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)accuracy[_\s]?score[:\s]*(\d+)").expect("score pattern is valid")
});

/// Tracks which feedback list bullet lines are appended to.
#[derive(Clone, Copy)]
enum Section {
    Correct,
    Missed,
    Wrong,
}

const BULLET_MARKERS: [char; 3] = ['-', '•', '*'];

/// Lossy, order-preserving scan of a free-form model response.
///
/// The score is seeded from the first "accuracy score" pattern found, or
/// [`NEUTRAL_SCORE`] when absent. Section state switches on keyword lines and
/// bullet lines feed the active section. Keyword detection runs before the
/// bullet check, so a bullet whose text mentions "wrong" switches sections
/// instead of contributing a point; this matches the section-header-first
/// shape of real responses, where headers are far more likely to carry these
/// keywords than bullets are.
///
/// Never panics; completely unrecognizable input yields the neutral result.
pub(super) fn scan(raw: &str) -> EvaluationResult {
    let raw_score = SCORE_PATTERN
        .captures(raw)
        .and_then(|captures| captures.get(1))
        // digit runs too long for i64 can only mean an absurdly large score
        .map(|digits| digits.as_str().parse::<i64>().unwrap_or(i64::MAX))
        .unwrap_or(i64::from(NEUTRAL_SCORE));

    let mut correct_points = Vec::new();
    let mut missed_points = Vec::new();
    let mut wrong_points = Vec::new();
    let mut section: Option<Section> = None;

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let lower = line.to_lowercase();
        if contains_any(&lower, &["correct", "good", "accurate"]) {
            section = Some(Section::Correct);
        } else if contains_any(&lower, &["missed", "missing"]) {
            section = Some(Section::Missed);
        } else if contains_any(&lower, &["wrong", "incorrect", "error"]) {
            section = Some(Section::Wrong);
        } else if let Some(rest) = strip_bullet(line) {
            let point = rest.trim();
            if !point.is_empty() {
                match section {
                    Some(Section::Correct) => correct_points.push(point.to_owned()),
                    Some(Section::Missed) => missed_points.push(point.to_owned()),
                    Some(Section::Wrong) => wrong_points.push(point.to_owned()),
                    None => {}
                }
            }
        }
    }

    EvaluationResult::new(raw_score, correct_points, missed_points, wrong_points)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn strip_bullet(line: &str) -> Option<&str> {
    BULLET_MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(*marker))
}
