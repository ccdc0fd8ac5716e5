//! The fixed test definition: prompt, output schema and derived expectations.
//!
//! Everything here is immutable and shared by every trial for every model.
//! The schema is compiled once; the expected joke count is derived from the
//! prompt rather than hardcoded, so editing the joke list keeps the
//! completeness check honest.

use once_cell::sync::Lazy;
use serde_json::{json, Value};

/// Name handed to the endpoint's structured-output directive.
pub const SCHEMA_NAME: &str = "joke_rating_output";

/// The fixed prompt sent on every trial.
pub const PROMPT: &str = "\
Judge and rate every one of these jokes on a scale of 1-10, and provide a short explanation:

1. I’m reading a book on anti‑gravity—it’s impossible to put it down!
2. Why did the scarecrow win an award? Because he was outstanding in his field!
3. Parallel lines have so much in common… It’s a shame they’ll never meet.
4. Why don’t skeletons fight each other? They just don’t have the guts.
5. The roundest knight at King Arthur’s table is Sir Cumference.
6. Did you hear about the claustrophobic astronaut? He needed a little space.
7. I’d tell you a chemistry joke, but I wouldn’t get a reaction.
8. I used to play piano by ear, but now I just use my hands.
9. I tried to catch some fog yesterday… I mist.
10. I told my wife she was drawing her eyebrows too high—she looked surprised!
";

/// Draft-07 schema the model output must satisfy: a `jokes` array whose
/// items carry `id`, `rating` (1..=10) and `explanation` (min 10 chars),
/// with no extra fields anywhere.
pub static SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "Joke Rating Schema",
        "type": "object",
        "properties": {
            "jokes": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": {"type": "integer", "description": "Joke ID"},
                        "rating": {"type": "number", "minimum": 1, "maximum": 10},
                        "explanation": {"type": "string", "minLength": 10}
                    },
                    "required": ["id", "rating", "explanation"],
                    "additionalProperties": false
                }
            }
        },
        "required": ["jokes"],
        "additionalProperties": false
    })
});

pub(crate) static SCHEMA_VALIDATOR: Lazy<jsonschema::Validator> =
    Lazy::new(|| jsonschema::draft7::new(&SCHEMA).expect("joke rating schema compiles"));

/// Borrow the schema value (for building request payloads).
pub fn schema() -> &'static Value {
    &SCHEMA
}

/// Number of jokes enumerated in [`PROMPT`]: lines whose first non-blank
/// character is an ASCII digit.
pub fn expected_joke_count() -> usize {
    PROMPT
        .lines()
        .filter(|line| {
            line.trim_start()
                .chars()
                .next()
                .map_or(false, |c| c.is_ascii_digit())
        })
        .count()
}
