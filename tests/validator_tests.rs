// Validation pipeline: parse, schema, completeness, sanity, in that order,
// first failure wins.

use serde_json::json;

use structbench::errors::{FailureKind, ValidationFailure};
use structbench::suite;
use structbench::validator::validate_reply;

const EXPECTED: usize = 10;

fn joke(id: i64, rating: f64, explanation: &str) -> serde_json::Value {
    json!({"id": id, "rating": rating, "explanation": explanation})
}

fn full_set() -> Vec<serde_json::Value> {
    (1..=10)
        .map(|id| {
            joke(
                id,
                7.0,
                &format!("Joke {} lands because the wordplay is tight.", id),
            )
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────
// Check 1: parse
// ─────────────────────────────────────────────────────────────

#[test]
fn unparseable_body_is_invalid_json() {
    let result = validate_reply("I rate these jokes 8/10 overall!", EXPECTED);
    assert_eq!(result.unwrap_err().kind(), FailureKind::InvalidJson);
}

#[test]
fn truncated_json_is_invalid_json() {
    let result = validate_reply(r#"{"jokes": [{"id": 1,"#, EXPECTED);
    assert_eq!(result.unwrap_err().kind(), FailureKind::InvalidJson);
}

// ─────────────────────────────────────────────────────────────
// Check 2: schema conformance
// ─────────────────────────────────────────────────────────────

#[test]
fn missing_jokes_field_is_schema_violation() {
    let content = json!({"ratings": []}).to_string();
    let result = validate_reply(&content, EXPECTED);
    assert_eq!(result.unwrap_err().kind(), FailureKind::SchemaViolation);
}

#[test]
fn item_missing_rating_is_schema_violation() {
    let mut jokes = full_set();
    jokes[4] = json!({"id": 5, "explanation": "missing the rating entirely"});
    let content = json!({"jokes": jokes}).to_string();
    let result = validate_reply(&content, EXPECTED);
    assert_eq!(result.unwrap_err().kind(), FailureKind::SchemaViolation);
}

#[test]
fn extra_item_field_is_schema_violation() {
    let mut jokes = full_set();
    jokes[0]["confidence"] = json!(0.9);
    let content = json!({"jokes": jokes}).to_string();
    let result = validate_reply(&content, EXPECTED);
    assert_eq!(result.unwrap_err().kind(), FailureKind::SchemaViolation);
}

#[test]
fn extra_root_field_is_schema_violation() {
    let content = json!({"jokes": full_set(), "overall": "funny"}).to_string();
    let result = validate_reply(&content, EXPECTED);
    assert_eq!(result.unwrap_err().kind(), FailureKind::SchemaViolation);
}

#[test]
fn rating_above_bound_is_schema_violation() {
    let mut jokes = full_set();
    jokes[2]["rating"] = json!(11);
    let content = json!({"jokes": jokes}).to_string();
    let result = validate_reply(&content, EXPECTED);
    assert_eq!(result.unwrap_err().kind(), FailureKind::SchemaViolation);
}

#[test]
fn short_explanation_is_schema_violation() {
    let mut jokes = full_set();
    jokes[7]["explanation"] = json!("too short");
    let content = json!({"jokes": jokes}).to_string();
    let result = validate_reply(&content, EXPECTED);
    assert_eq!(result.unwrap_err().kind(), FailureKind::SchemaViolation);
}

// ─────────────────────────────────────────────────────────────
// Check 3: completeness
// ─────────────────────────────────────────────────────────────

#[test]
fn short_array_is_incomplete_even_when_schema_valid() {
    let jokes: Vec<_> = full_set().into_iter().take(7).collect();
    let content = json!({"jokes": jokes}).to_string();
    match validate_reply(&content, EXPECTED) {
        Err(ValidationFailure::Incomplete { expected, received }) => {
            assert_eq!(expected, 10);
            assert_eq!(received, 7);
        }
        other => panic!("expected Incomplete, got {:?}", other),
    }
}

#[test]
fn surplus_items_are_incomplete_too() {
    let mut jokes = full_set();
    jokes.push(joke(11, 5.0, "an eleventh joke nobody asked about"));
    let content = json!({"jokes": jokes}).to_string();
    let result = validate_reply(&content, EXPECTED);
    assert_eq!(result.unwrap_err().kind(), FailureKind::IncompleteResponse);
}

// ─────────────────────────────────────────────────────────────
// Check 4: explanation sanity
// ─────────────────────────────────────────────────────────────

#[test]
fn digit_only_explanation_is_nonsensical() {
    let mut jokes = full_set();
    // Long enough for minLength, but no two consecutive letters.
    jokes[3]["explanation"] = json!("1010101010");
    let content = json!({"jokes": jokes}).to_string();
    match validate_reply(&content, EXPECTED) {
        Err(ValidationFailure::Nonsensical { id }) => assert_eq!(id, 4),
        other => panic!("expected Nonsensical, got {:?}", other),
    }
}

#[test]
fn interleaved_single_letters_are_nonsensical() {
    let mut jokes = full_set();
    jokes[9]["explanation"] = json!("a1b2c3d4e5");
    let content = json!({"jokes": jokes}).to_string();
    let result = validate_reply(&content, EXPECTED);
    assert_eq!(result.unwrap_err().kind(), FailureKind::NonsensicalExplanation);
}

#[test]
fn two_letter_run_amid_noise_is_sane() {
    let mut jokes = full_set();
    jokes[0]["explanation"] = json!("ok 1234567890!!");
    let content = json!({"jokes": jokes}).to_string();
    assert!(validate_reply(&content, EXPECTED).is_ok());
}

// ─────────────────────────────────────────────────────────────
// Full pass + ordering
// ─────────────────────────────────────────────────────────────

#[test]
fn conforming_reply_passes() {
    let content = json!({"jokes": full_set()}).to_string();
    assert!(validate_reply(&content, EXPECTED).is_ok());
}

#[test]
fn expected_count_matches_prompt() {
    assert_eq!(suite::expected_joke_count(), EXPECTED);
}

#[test]
fn schema_violation_wins_over_incomplete() {
    // Both broken: 3 items, one missing `id`. Schema runs first.
    let jokes = vec![
        joke(1, 6.0, "a perfectly reasonable rating here"),
        json!({"rating": 5, "explanation": "dropped the id on the floor"}),
        joke(3, 4.0, "still funny on the third reading"),
    ];
    let content = json!({"jokes": jokes}).to_string();
    let result = validate_reply(&content, EXPECTED);
    assert_eq!(result.unwrap_err().kind(), FailureKind::SchemaViolation);
}
