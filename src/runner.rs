//! Trial execution: one request/validate cycle per run, outcomes folded
//! into the per-model accumulator.
//!
//! Every failure is trial-local. A bad trial is recorded and the loop moves
//! on; nothing here aborts the run or retries a request.

use std::time::Instant;

use tracing::{debug, warn};

use crate::providers::{ChatBackend, ChatRequest};
use crate::report::RunResults;
use crate::suite;
use crate::validator;

/// Run `runs` sequential trials for one model, accumulating into `results`.
pub async fn run_model(
    backend: &dyn ChatBackend,
    model: &str,
    runs: u32,
    results: &mut RunResults,
) {
    println!("\nTesting model: {} (x{} runs)", model, runs);

    let expected = suite::expected_joke_count();
    // Touch the accumulator up front so a model with zero runs still
    // appears in the summary.
    results.stats_mut(model);

    for run in 1..=runs {
        println!("\nRun {}/{}:", run, runs);

        let request = ChatRequest {
            model,
            prompt: suite::PROMPT,
            schema_name: suite::SCHEMA_NAME,
            schema: suite::schema(),
        };

        let started = Instant::now();
        let outcome = backend.complete(request).await;
        let elapsed = started.elapsed().as_secs_f64();

        let stats = results.stats_mut(model);
        match outcome {
            Err(err) => {
                println!("Test Result: ✗ {}", err);
                warn!(model, error = %err, "trial failed before validation");
                stats.record_failure(err.kind());
            }
            Ok(reply) => {
                dump_content(&reply.content);

                // Throughput counts for every successful transport call,
                // whatever the validation verdict turns out to be.
                if let Some(tokens) = reply.completion_tokens {
                    if elapsed > 0.0 {
                        let tps = tokens / elapsed;
                        debug!(model, tokens, elapsed, tps, "throughput sample");
                        stats.record_throughput(tps);
                    }
                }

                match validator::validate_reply(&reply.content, expected) {
                    Ok(()) => {
                        println!("Test Result: ✓ Success");
                        stats.record_pass();
                    }
                    Err(failure) => {
                        println!("Test Result: ✗ {}: {}", failure.kind(), failure);
                        stats.record_failure(failure.kind());
                    }
                }
            }
        }
    }
}

/// Dump the reply body, pretty-printed when it parses as JSON.
fn dump_content(content: &str) {
    println!("--- Model Output ---");
    match serde_json::from_str::<serde_json::Value>(content) {
        Ok(parsed) => {
            let pretty = serde_json::to_string_pretty(&parsed).unwrap_or_else(|_| content.to_string());
            println!("{}", pretty);
        }
        Err(_) => println!("(invalid JSON)\n{}", content),
    }
    println!("--------------------");
}
