//! Configuration schema for structbench.
//!
//! All structs use `#[serde(rename_all = "camelCase")]` so that the JSON
//! config file can use camelCase keys while Rust code uses snake_case
//! fields. Defaults mirror a stock LM Studio setup; edit the file (or the
//! defaults below) to point the harness elsewhere. There are no CLI flags
//! and no environment variables.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Model identifiers to test, in report order.
    #[serde(default = "default_models")]
    pub models: Vec<String>,
    /// Trials per model.
    #[serde(default = "default_runs")]
    pub runs: u32,
    /// Chat-completions endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Seconds to wait for a response before failing the trial.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_models() -> Vec<String> {
    [
        "openai/gpt-oss-20b",
        "openai/gpt-oss-120b",
        "qwen/qwen3-next-80b",
        "qwen/qwen3-vl-30b",
        "qwen/qwen3-30b-a3b-2507",
        "qwen/qwen3-4b-thinking-2507",
        "mistralai/magistral-small-2509",
        "mlx-community/apriel-1.5-15b-thinker",
        "kimi-vl-a3b-thinking@8bit",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn default_runs() -> u32 {
    10
}

fn default_api_url() -> String {
    "http://localhost:1234/v1/chat/completions".to_string()
}

fn default_timeout_secs() -> u64 {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            models: default_models(),
            runs: default_runs(),
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
