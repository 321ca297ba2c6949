use super::*;

fn structured(raw: &str) -> EvaluationResult {
    let interpreted = interpret(raw);
    assert_eq!(interpreted.strategy, InterpretStrategy::Structured, "raw: {raw}");
    interpreted.result
}

fn heuristic(raw: &str) -> EvaluationResult {
    let interpreted = interpret(raw);
    assert_eq!(interpreted.strategy, InterpretStrategy::Heuristic, "raw: {raw}");
    interpreted.result
}

#[test]
fn test_well_formed_object_round_trips() {
    let result = structured(
        r#"{"accuracy_score": 82, "correct_points": ["a"], "missed_points": ["b"], "wrong_points": []}"#,
    );

    assert_eq!(result.accuracy_score, 82);
    assert_eq!(result.correct_points, vec!["a"]);
    assert_eq!(result.missed_points, vec!["b"]);
    assert!(result.wrong_points.is_empty());
}

#[test]
fn test_object_wrapped_in_prose_and_fences() {
    let raw = "Sure! Here is my analysis:\n```json\n{\"accuracy_score\": 64, \"correct_points\": [\"x\"], \"missed_points\": [], \"wrong_points\": [\"y\"]}\n```\nLet me know if you need more.";
    let result = structured(raw);

    assert_eq!(result.accuracy_score, 64);
    assert_eq!(result.correct_points, vec!["x"]);
    assert_eq!(result.wrong_points, vec!["y"]);
}

#[test]
fn test_score_clamps_high_and_low() {
    let high = structured(r#"{"accuracy_score": 140, "correct_points": []}"#);
    assert_eq!(high.accuracy_score, 100);

    let low = structured(r#"{"accuracy_score": -5, "correct_points": []}"#);
    assert_eq!(low.accuracy_score, 0);
}

#[test]
fn test_float_score_truncates() {
    let result = structured(r#"{"accuracy_score": 73.9}"#);
    assert_eq!(result.accuracy_score, 73);
}

#[test]
fn test_missing_or_non_numeric_score_reads_as_zero() {
    let missing = structured(r#"{"correct_points": ["a"]}"#);
    assert_eq!(missing.accuracy_score, 0);
    assert_eq!(missing.correct_points, vec!["a"]);

    let non_numeric = structured(r#"{"accuracy_score": "great"}"#);
    assert_eq!(non_numeric.accuracy_score, 0);
}

#[test]
fn test_missing_point_lists_default_to_empty() {
    let result = structured(r#"{"accuracy_score": 10}"#);

    assert!(result.correct_points.is_empty());
    assert!(result.missed_points.is_empty());
    assert!(result.wrong_points.is_empty());
}

#[test]
fn test_non_string_array_members_are_skipped() {
    let result = structured(
        r#"{"accuracy_score": 55, "correct_points": ["keep", 7, null, "also keep"]}"#,
    );
    assert_eq!(result.correct_points, vec!["keep", "also keep"]);
}

#[test]
fn test_braceless_text_falls_through_to_heuristic() {
    let interpreted = interpret("[1, 2, 3]");
    assert_eq!(interpreted.strategy, InterpretStrategy::Heuristic);
}

#[test]
fn test_empty_object_is_structured_with_defaults() {
    let result = structured("the model said {} and nothing more");

    assert_eq!(result.accuracy_score, 0);
    assert!(result.correct_points.is_empty());
}

#[test]
fn test_heuristic_section_scan() {
    let result = heuristic("Accuracy Score: 70\nCorrect:\n- point one\nMissed:\n- point two");

    assert_eq!(result.accuracy_score, 70);
    assert_eq!(result.correct_points, vec!["point one"]);
    assert_eq!(result.missed_points, vec!["point two"]);
    assert!(result.wrong_points.is_empty());
}

#[test]
fn test_heuristic_all_three_sections_and_markers() {
    let raw = "accuracy_score 88\n\
               The good parts:\n\
               • captured the thesis\n\
               * captured the dates\n\
               What was missing:\n\
               - the counterargument\n\
               Errors found:\n\
               - claims the study was from 2010";
    let result = heuristic(raw);

    assert_eq!(result.accuracy_score, 88);
    assert_eq!(
        result.correct_points,
        vec!["captured the thesis", "captured the dates"]
    );
    assert_eq!(result.missed_points, vec!["the counterargument"]);
    assert_eq!(result.wrong_points, vec!["claims the study was from 2010"]);
}

#[test]
fn test_heuristic_bullets_before_any_section_are_dropped() {
    let result = heuristic("- orphan bullet\nCorrect:\n- kept");

    assert_eq!(result.correct_points, vec!["kept"]);
    assert!(result.missed_points.is_empty());
    assert!(result.wrong_points.is_empty());
}

#[test]
fn test_heuristic_keyword_in_bullet_switches_section() {
    // Keyword detection runs before the bullet check, so this bullet flips
    // the section instead of contributing a point.
    let result = heuristic("Correct:\n- this part is wrong\n- a real point");

    assert!(result.correct_points.is_empty());
    assert_eq!(result.wrong_points, vec!["a real point"]);
}

#[test]
fn test_heuristic_score_clamps() {
    let result = heuristic("accuracy score: 250\nno sections here");
    assert_eq!(result.accuracy_score, 100);

    let absurd = heuristic("accuracy score: 99999999999999999999999999");
    assert_eq!(absurd.accuracy_score, 100);
}

#[test]
fn test_uninterpretable_text_yields_neutral_result() {
    let result = heuristic("The weather was nice and nothing else happened.");

    assert_eq!(result, EvaluationResult::neutral());
}

#[test]
fn test_empty_input_yields_neutral_result() {
    assert_eq!(heuristic(""), EvaluationResult::neutral());
}

#[test]
fn test_interpret_is_idempotent() {
    let raw = "Accuracy Score: 70\nCorrect:\n- point one\nMissed:\n- point two";
    let first = interpret(raw);
    let second = interpret(raw);

    assert_eq!(first, second);
}

#[test]
fn test_unbalanced_braces_fall_through_without_panic() {
    let interpreted = interpret("}{");
    assert_eq!(interpreted.strategy, InterpretStrategy::Heuristic);

    let interpreted = interpret("{\"accuracy_score\": 80");
    assert_eq!(interpreted.strategy, InterpretStrategy::Heuristic);
}
