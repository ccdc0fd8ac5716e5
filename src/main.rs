//! structbench - structured-output reliability harness for local
//! OpenAI-compatible model servers.
//!
//! For each configured model: send the fixed joke-rating prompt N times
//! with a json_schema response constraint, validate every reply, then
//! print a per-model pass-rate and throughput summary. Fully sequential;
//! failures are recorded, never fatal.

use tracing::{debug, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use structbench::config;
use structbench::providers::{ChatBackend, OpenAICompatBackend};
use structbench::report::{self, RunResults};
use structbench::runner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();

    let cfg = config::load_config(None);
    info!(
        models = cfg.models.len(),
        runs = cfg.runs,
        url = %cfg.api_url,
        timeout_secs = cfg.timeout_secs,
        "structbench starting"
    );

    let backend = OpenAICompatBackend::new(&cfg.api_url, cfg.timeout_secs)?;
    preflight(&backend, &cfg.models).await;

    let mut results = RunResults::new();
    for model in &cfg.models {
        runner::run_model(&backend, model, cfg.runs, &mut results).await;
    }

    report::print_final_summary(&results);
    Ok(())
}

/// Warn about configured models the endpoint does not list. Best-effort:
/// a server without a model listing just gets a debug line.
async fn preflight(backend: &dyn ChatBackend, models: &[String]) {
    match backend.list_models().await {
        Ok(served) if !served.is_empty() => {
            for model in models {
                if !served.iter().any(|s| s == model) {
                    warn!(model = %model, "model not present in the server's model listing");
                }
            }
        }
        Ok(_) => debug!("server returned an empty model listing"),
        Err(err) => debug!(error = %err, "model listing unavailable, continuing"),
    }
}
