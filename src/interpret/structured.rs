//! Structured extraction: decode the brace-delimited JSON window.

use serde_json::Value;

use crate::eval::EvaluationResult;

/// Attempts to decode the first-to-last brace window of `raw` as the expected
/// evaluation object. `None` means "not decodable" and hands control to the
/// heuristic scan.
///
/// Field handling is deliberately forgiving: a missing or non-numeric
/// `accuracy_score` reads as 0 (then clamps), a missing or non-array point
/// field reads as empty, and non-string array members are skipped. Models
/// frequently wrap the object in prose or code fences, which the brace window
/// strips.
pub(super) fn extract(raw: &str) -> Option<EvaluationResult> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }

    let window = &raw[start..=end];
    let value: Value = serde_json::from_str(window).ok()?;
    let object = value.as_object()?;

    let raw_score = object
        .get("accuracy_score")
        .and_then(numeric_as_i64)
        .unwrap_or(0);

    Some(EvaluationResult::new(
        raw_score,
        string_list(object, "correct_points"),
        string_list(object, "missed_points"),
        string_list(object, "wrong_points"),
    ))
}

/// Accepts integer or float scores; floats truncate toward zero.
fn numeric_as_i64(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
}

fn string_list(object: &serde_json::Map<String, Value>, key: &str) -> Vec<String> {
    object
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}
