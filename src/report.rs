//! Per-model accumulators and the final console summary.

use std::collections::BTreeMap;

use crate::errors::FailureKind;

/// Running tally for one model across its trials.
#[derive(Debug, Default, Clone)]
pub struct ModelStats {
    pub pass_count: u32,
    pub fail_count: u32,
    /// Failure histogram. `FailureKind`'s ordering keeps iteration in
    /// alphabetical label order.
    pub errors: BTreeMap<FailureKind, u32>,
    /// Throughput samples (tokens per second), one per trial that returned
    /// a usable token count.
    pub throughput: Vec<f64>,
}

impl ModelStats {
    pub fn record_pass(&mut self) {
        self.pass_count += 1;
    }

    pub fn record_failure(&mut self, kind: FailureKind) {
        self.fail_count += 1;
        *self.errors.entry(kind).or_insert(0) += 1;
    }

    pub fn record_throughput(&mut self, tokens_per_sec: f64) {
        self.throughput.push(tokens_per_sec);
    }

    /// Trials attempted so far. Always `pass_count + fail_count`.
    pub fn total(&self) -> u32 {
        self.pass_count + self.fail_count
    }

    /// Pass rate in percent, `None` when no trial was attempted.
    pub fn pass_rate(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            None
        } else {
            Some(f64::from(self.pass_count) / f64::from(total) * 100.0)
        }
    }

    /// Mean of the recorded throughput samples, `None` when there are none.
    pub fn avg_throughput(&self) -> Option<f64> {
        if self.throughput.is_empty() {
            None
        } else {
            Some(self.throughput.iter().sum::<f64>() / self.throughput.len() as f64)
        }
    }
}

/// All accumulators for a run, in first-reference (configuration) order.
#[derive(Debug, Default)]
pub struct RunResults {
    entries: Vec<(String, ModelStats)>,
}

impl RunResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulator for `model`, created on first reference.
    pub fn stats_mut(&mut self, model: &str) -> &mut ModelStats {
        if let Some(idx) = self.entries.iter().position(|(name, _)| name == model) {
            &mut self.entries[idx].1
        } else {
            self.entries.push((model.to_string(), ModelStats::default()));
            let last = self.entries.len() - 1;
            &mut self.entries[last].1
        }
    }

    pub fn get(&self, model: &str) -> Option<&ModelStats> {
        self.entries
            .iter()
            .find(|(name, _)| name == model)
            .map(|(_, stats)| stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModelStats)> {
        self.entries
            .iter()
            .map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Render one model's summary block: the headline line plus one indented
/// line per failure classification.
pub fn model_summary(model: &str, stats: &ModelStats) -> String {
    let total = stats.total();
    if total == 0 {
        return format!("Summary for {}: No tests were completed.", model);
    }

    let rate = stats.pass_rate().unwrap_or(0.0);
    let throughput = match stats.avg_throughput() {
        Some(tps) => format!("{:.1} tok/s", tps),
        None => "N/A".to_string(),
    };
    let mut out = format!(
        "Summary for {}: {}/{} passed ({:.1}%), avg throughput {}",
        model, stats.pass_count, total, rate, throughput
    );

    for (kind, count) in &stats.errors {
        let noun = if *count == 1 { "Error" } else { "Errors" };
        out.push_str(&format!("\n  {} {} {}", count, kind, noun));
    }

    out
}

/// Print the consolidated end-of-run summary for all models.
pub fn print_final_summary(results: &RunResults) {
    println!("\n========================================");
    println!("           FINAL TEST SUMMARY");
    println!("========================================");

    if results.is_empty() {
        println!("No tests were run.");
        return;
    }

    for (model, stats) in results.iter() {
        println!("\n{}", model_summary(model, stats));
    }
}
