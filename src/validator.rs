//! Per-reply validation pipeline.
//!
//! Four checks in strict order, first failure wins: JSON parse, schema
//! conformance, joke-count completeness, explanation sanity. Pure: no
//! printing, no accumulation, just a verdict.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::ValidationFailure;
use crate::suite;

/// Crude signal that an explanation holds words rather than digits or
/// punctuation noise: at least one run of two consecutive ASCII letters.
static WORDISH: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Za-z]{2}").expect("valid pattern"));

/// Validate one raw reply body against the fixed schema and expectations.
pub fn validate_reply(content: &str, expected: usize) -> Result<(), ValidationFailure> {
    // 1. Parse.
    let data: Value = serde_json::from_str(content)
        .map_err(|e| ValidationFailure::InvalidJson(e.to_string()))?;

    // 2. Schema conformance.
    if let Err(err) = suite::SCHEMA_VALIDATOR.validate(&data) {
        return Err(ValidationFailure::SchemaViolation(err.to_string()));
    }

    // 3. Completeness. The schema guarantees `jokes` exists and is an array.
    let empty = Vec::new();
    let jokes = data
        .get("jokes")
        .and_then(Value::as_array)
        .unwrap_or(&empty);
    if jokes.len() != expected {
        return Err(ValidationFailure::Incomplete {
            expected,
            received: jokes.len(),
        });
    }

    // 4. Explanation sanity.
    for joke in jokes {
        let explanation = joke
            .get("explanation")
            .and_then(Value::as_str)
            .unwrap_or("");
        if !WORDISH.is_match(explanation) {
            let id = joke.get("id").and_then(Value::as_i64).unwrap_or_default();
            return Err(ValidationFailure::Nonsensical { id });
        }
    }

    Ok(())
}
