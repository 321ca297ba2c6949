//! Evaluation prompt composition.
//!
//! Produces the single instruction text sent to the model: the reading mode's
//! intent, both texts verbatim, and output-format instructions pinning the
//! JSON shape that [`interpret`](crate::interpret::interpret) expects on the
//! structured path. Composition cannot fail.


use crate::eval::EvaluationRequest;

/// Builds the instruction prompt for one evaluation request.
pub fn build_prompt(request: &EvaluationRequest) -> String {
    let mode = request.mode();

    format!(
        r#"You are an expert text analyst. Compare the original text with the user's summary and provide a detailed analysis.

**Reading Mode**: {mode_description}

**Original Text**:
{reference}

**User's Summary**:
{candidate}

**Analysis Instructions**:
1. Evaluate how well the summary captures the key points from the original text
2. Provide an accuracy score from 0 to 100
3. Identify correctly captured points
4. Identify important points that were missed
5. Identify any incorrect or misleading information

**Response Format**:
Respond with a JSON object in exactly this format:

{{
    "accuracy_score": <0-100>,
    "correct_points": [
        "Point 1 description",
        "Point 2 description"
    ],
    "missed_points": [
        "Important point that was missed",
        "Another missed point"
    ],
    "wrong_points": [
        "Incorrect information in summary",
        "Misleading statement"
    ]
}}

**Guidelines**:
- Be objective and fair in your assessment
- Focus on the points most salient to the given reading mode
- Provide specific, actionable feedback
- Accuracy score should reflect overall quality and completeness
"#,
        mode_description = mode.description(),
        reference = request.reference_text(),
        candidate = request.candidate_text(),
    )
}
