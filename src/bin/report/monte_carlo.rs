// Allowance-Price Sensitivity: N price draws per scenario with statistical aggregation
// Each draw re-prices the scenario's fleet under sampled EUA/UKA prices, seeds base..base+N

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use maritime_compliance::adapter::{from_decimal, to_decimal};
use maritime_compliance::fleet::{annual_summary, VoyageRecord};
use maritime_compliance::{CalculatorConfig, ComplianceCalculator, RegulatoryDataset, Year};

use crate::report::*;
use crate::scenarios::Scenario;

/// EUA price band sampled for sensitivity, EUR.
pub const EUA_PRICE_BAND: (f64, f64) = (60.0, 110.0);

/// Price one seeded draw of the scenario's fleet.
pub fn run_single(
    base: &CalculatorConfig,
    year: Year,
    records: &[VoyageRecord],
    seed: u64,
) -> maritime_compliance::Result<PriceDraw> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let corridor = RegulatoryDataset::current().uk_ets_price_corridor();

    let eu_price = rng.gen_range(EUA_PRICE_BAND.0..=EUA_PRICE_BAND.1);
    let uk_price = rng.gen_range(from_decimal(corridor.min)..=from_decimal(corridor.max));

    let config = CalculatorConfig {
        eu_ets_allowance_price: Some(to_decimal(eu_price, "eu_ets_allowance_price")?.round_dp(2)),
        uk_ets_allowance_price: Some(to_decimal(uk_price, "uk_ets_allowance_price")?.round_dp(2)),
        ..base.clone()
    };
    let calculator = ComplianceCalculator::new(config)?;
    let summary = annual_summary(&calculator, year, records)?;

    Ok(PriceDraw {
        seed,
        eu_allowance_eur: eu_price,
        uk_allowance_gbp: uk_price,
        eu_ets_cost_eur: from_decimal(summary.eu_ets.cost.amount),
        uk_ets_cost_gbp: from_decimal(summary.uk_ets.cost.amount),
    })
}

/// Run the reference calculation plus `n_draws` price draws for a scenario.
pub fn run_monte_carlo(
    scenario: &Scenario,
    base: &CalculatorConfig,
    n_draws: usize,
    base_seed: u64,
) -> maritime_compliance::Result<ScenarioReport> {
    let records = (scenario.records)();
    let reference = annual_summary(&ComplianceCalculator::new(base.clone())?, scenario.year, &records)?;

    let mut draws = Vec::with_capacity(n_draws);
    for i in 0..n_draws {
        let seed = base_seed + i as u64;
        draws.push(run_single(base, scenario.year, &records, seed)?);
    }

    let eu: Vec<f64> = draws.iter().map(|d| d.eu_ets_cost_eur).collect();
    let uk: Vec<f64> = draws.iter().map(|d| d.uk_ets_cost_gbp).collect();

    Ok(ScenarioReport {
        scenario_name: scenario.name.to_string(),
        label: scenario.label.to_string(),
        category: scenario.category.to_string(),
        year: scenario.year,
        reference,
        n_draws,
        eu_ets_cost_eur: Stats::from_samples(&eu),
        uk_ets_cost_gbp: Stats::from_samples(&uk),
        draws,
    })
}
