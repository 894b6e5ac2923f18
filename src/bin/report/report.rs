// Compliance Report Types
// Structured JSON output: deterministic scenario results plus allowance-price sensitivity

use maritime_compliance::fleet::AnnualSummary;
use serde::Serialize;

// ─── Statistics (per-metric Monte Carlo aggregation) ────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl Stats {
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self { mean: 0.0, std_dev: 0.0, ci_lower: 0.0, ci_upper: 0.0, min: 0.0, max: 0.0, n: 0 };
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();
        let stderr = std_dev / (n as f64).sqrt();
        let z = 1.96; // 95% CI
        Self {
            mean,
            std_dev,
            ci_lower: mean - z * stderr,
            ci_upper: mean + z * stderr,
            min: samples.iter().cloned().fold(f64::INFINITY, f64::min),
            max: samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            n,
        }
    }
}

// ─── Single Price Draw ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct PriceDraw {
    pub seed: u64,
    pub eu_allowance_eur: f64,
    pub uk_allowance_gbp: f64,
    pub eu_ets_cost_eur: f64,
    pub uk_ets_cost_gbp: f64,
}

// ─── Per-Scenario Report ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub scenario_name: String,
    pub label: String,
    pub category: String,
    pub year: u16,
    /// Obligations at the configured reference prices.
    pub reference: AnnualSummary,
    pub n_draws: usize,
    pub eu_ets_cost_eur: Stats,
    pub uk_ets_cost_gbp: Stats,
    pub draws: Vec<PriceDraw>,
}

// ─── Top-Level Report ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ComplianceReport {
    pub timestamp: String,
    pub version: &'static str,
    pub dataset_version: &'static str,
    pub prng: &'static str,
    pub n_draws_per_scenario: usize,
    pub base_seed: u64,
    pub scenarios: Vec<ScenarioReport>,
}
