// Compliance Report Runner: fleet scenarios across FuelEU, IMO, EU ETS and UK ETS
// Reference obligations plus seeded allowance-price sensitivity (ChaCha8Rng)
//
// Usage:
//   cargo run --release --bin compliance-report                         # All scenarios (30 draws each)
//   cargo run --release --bin compliance-report -- --runs 5             # Quick mode
//   cargo run --release --bin compliance-report -- TANKER               # Filter by name/label/category
//   cargo run --release --bin compliance-report -- --seed 42            # Custom base seed
//   cargo run --release --bin compliance-report -- --config prices.json # CalculatorConfig overrides
//
// Log verbosity follows RUST_LOG (default: info).

mod monte_carlo;
mod report;
mod scenarios;

use maritime_compliance::{CalculatorConfig, RegulatoryDataset};
use report::*;
use scenarios::*;
use std::error::Error;
use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    runs: usize,
    seed: u64,
    config: Option<PathBuf>,
    filter: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        runs: 30,
        seed: 0,
        config: None,
        filter: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                if i < args.len() {
                    cli.runs = args[i].parse().unwrap_or(30);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().unwrap_or(0);
                }
            }
            "--config" => {
                i += 1;
                if i < args.len() {
                    cli.config = Some(PathBuf::from(&args[i]));
                }
            }
            arg if !arg.starts_with('-') => {
                cli.filter = Some(arg.to_string());
            }
            other => {
                warn!(argument = other, "unknown argument ignored");
            }
        }
        i += 1;
    }

    cli
}

fn load_config(path: Option<&PathBuf>) -> Result<CalculatorConfig, Box<dyn Error>> {
    match path {
        Some(p) => {
            let json = std::fs::read_to_string(p)?;
            let config = CalculatorConfig::from_json(&json)?;
            info!(path = %p.display(), "loaded calculator config");
            Ok(config)
        }
        None => Ok(CalculatorConfig::default()),
    }
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = parse_args();
    let config = load_config(cli.config.as_ref())?;
    let dataset = RegulatoryDataset::current();
    dataset.verify_integrity()?;

    let all_scenarios = scenarios();
    let to_run: Vec<&Scenario> = match &cli.filter {
        Some(f) => {
            let f_lower = f.to_lowercase();
            all_scenarios.iter()
                .filter(|s| s.name.to_lowercase().contains(&f_lower)
                          || s.label.to_lowercase().contains(&f_lower)
                          || s.category.to_lowercase().contains(&f_lower))
                .collect()
        }
        None => all_scenarios.iter().collect(),
    };

    if to_run.is_empty() {
        return Err(format!("no scenarios match filter: {:?}", cli.filter).into());
    }

    println!("\n  Maritime Compliance Report (dataset v{})", dataset.version);
    println!("  PRNG: ChaCha8Rng | Draws/scenario: {} | Base seed: {}", cli.runs, cli.seed);
    println!("  Running {} scenario(s)...\n", to_run.len());
    println!("  {:<34} {:>5} {:>14} {:>14} {:>14} {:>14} {:>18}",
        "Scenario", "Year", "EU ETS EUR", "UK ETS GBP", "FuelEU EUR", "IMO USD", "EU ETS 95% CI");
    println!("  {}", "-".repeat(118));

    let suite_start = Instant::now();
    let mut reports = Vec::new();

    for scenario in &to_run {
        let report = monte_carlo::run_monte_carlo(scenario, &config, cli.runs, cli.seed)?;
        let reference = &report.reference;

        println!("  {:<34} {:>5} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>8.0}–{:<9.0}",
            report.label,
            report.year,
            reference.eu_ets.cost.amount,
            reference.uk_ets.cost.amount,
            reference.fueleu_penalty.amount,
            reference.imo_remedial_cost.amount,
            report.eu_ets_cost_eur.ci_lower,
            report.eu_ets_cost_eur.ci_upper,
        );

        reports.push(report);
    }

    println!("  {}", "-".repeat(118));
    println!("  Scenarios: {}  Suite time: {:.2}s\n", reports.len(), suite_start.elapsed().as_secs_f64());

    // ─── Write JSON Report ──────────────────────────────────────────────

    let ts = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis();
    let timestamp = format!("{}", ts);

    let report = ComplianceReport {
        timestamp: timestamp.clone(),
        version: env!("CARGO_PKG_VERSION"),
        dataset_version: dataset.version,
        prng: "ChaCha8Rng",
        n_draws_per_scenario: cli.runs,
        base_seed: cli.seed,
        scenarios: reports,
    };

    let dir = std::path::Path::new("compliance-results");
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("report-{}.json", timestamp));
    std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
    println!("  Results saved to: {}\n", path.display());
    info!(path = %path.display(), "report written");

    Ok(())
}
