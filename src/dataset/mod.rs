//! Regulatory dataset: immutable, versioned tables of published constants.
//!
//! Everything here is a `static` initialised at compile time. There is no
//! mutation API; [`RegulatoryDataset::current`] hands out a shared reference
//! that any number of threads may read concurrently.

pub mod fuels;
pub mod schemes;
pub mod targets;

pub use fuels::{FuelId, FuelProperty};
pub use schemes::{
    GwpValues, ImoFlexibility, ImoRemedialPricing, OpsRequirement, PhaseInSchedule,
    PoolingLimits, PriceCorridor, Rate, RfnboIncentive, VoyageCoverageTable,
};
pub use targets::{RegimeTargetSchedule, TargetEntry};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{ComplianceError, Result};
use crate::types::{Regime, TargetKey, VoyageClass, Year};

/// One published version of every regulatory table the calculators read.
#[derive(Debug, Serialize)]
pub struct RegulatoryDataset {
    pub version: &'static str,
    pub fueleu_targets: &'static RegimeTargetSchedule,
    pub imo_targets: &'static RegimeTargetSchedule,
    pub eu_ets_phase_in: &'static PhaseInSchedule,
    pub eu_ets_voyage_coverage: VoyageCoverageTable,
    pub uk_ets_voyage_coverage: VoyageCoverageTable,
    pub fueleu_penalty: Rate,
    pub eu_ets_allowance: Rate,
    pub uk_ets_allowance: Rate,
    pub imo_remedial: ImoRemedialPricing,
    pub uk_ets_price_corridor: PriceCorridor,
    pub gwp: GwpValues,
    pub eu_ets_multi_ghg_from: Year,
    pub uk_ets_launch_year: Year,
    pub fueleu_pooling: PoolingLimits,
    pub fueleu_rfnbo: RfnboIncentive,
    pub fueleu_ops: OpsRequirement,
    pub imo_flexibility: &'static ImoFlexibility,
    /// Fuel whose emission factor prices an ETS voyage when none is given.
    pub ets_reference_fuel: FuelId,
}

static DATASET_V1: RegulatoryDataset = RegulatoryDataset {
    version: "1.0.0",
    fueleu_targets: &targets::FUELEU_SCHEDULE,
    imo_targets: &targets::IMO_SCHEDULE,
    eu_ets_phase_in: &schemes::EU_ETS_PHASE_IN,
    eu_ets_voyage_coverage: schemes::EU_ETS_VOYAGE_COVERAGE,
    uk_ets_voyage_coverage: schemes::UK_ETS_VOYAGE_COVERAGE,
    fueleu_penalty: schemes::FUELEU_PENALTY,
    eu_ets_allowance: schemes::EU_ETS_ALLOWANCE,
    uk_ets_allowance: schemes::UK_ETS_ALLOWANCE,
    imo_remedial: schemes::IMO_REMEDIAL_PRICING,
    uk_ets_price_corridor: schemes::UK_ETS_PRICE_CORRIDOR,
    gwp: schemes::GWP100,
    eu_ets_multi_ghg_from: schemes::EU_ETS_MULTI_GHG_FROM,
    uk_ets_launch_year: schemes::UK_ETS_LAUNCH_YEAR,
    fueleu_pooling: schemes::FUELEU_POOLING_LIMITS,
    fueleu_rfnbo: schemes::FUELEU_RFNBO_INCENTIVE,
    fueleu_ops: schemes::FUELEU_OPS_REQUIREMENT,
    imo_flexibility: &schemes::IMO_FLEXIBILITY,
    ets_reference_fuel: FuelId::Hfo,
};

impl RegulatoryDataset {
    /// The dataset version the calculators are built against.
    pub fn current() -> &'static RegulatoryDataset {
        &DATASET_V1
    }

    /// Target schedule of an intensity regime.
    pub fn schedule(&self, regime: Regime) -> Result<&'static RegimeTargetSchedule> {
        match regime {
            Regime::FuelEuMaritime => Ok(self.fueleu_targets),
            Regime::ImoNetZero => Ok(self.imo_targets),
            Regime::EuEts | Regime::UkEts => Err(ComplianceError::NoTargetSchedule(regime)),
        }
    }

    /// Published `(reduction, intensity)` for an explicit schedule key.
    ///
    /// No interpolation and no nearest-year fallback: a key without a
    /// published entry is `UnknownYear`.
    pub fn target_for(&self, regime: Regime, key: TargetKey) -> Result<TargetEntry> {
        self.schedule(regime)?
            .entry(key)
            .copied()
            .ok_or(ComplianceError::UnknownYear { regime, year: key.year() })
    }

    /// The regular entry in force for `year` (latest published year `<= year`).
    pub fn target_in_force(&self, regime: Regime, year: Year) -> Result<TargetEntry> {
        self.schedule(regime)?
            .in_force(year)
            .copied()
            .ok_or(ComplianceError::UnknownYear { regime, year })
    }

    pub fn fuel_property(&self, fuel: FuelId) -> &'static FuelProperty {
        fuel.property()
    }

    /// Fuel properties by code, e.g. `"HFO"` or `"e_methanol"`.
    pub fn fuel_property_by_code(&self, code: &str) -> Result<&'static FuelProperty> {
        Ok(code.parse::<FuelId>()?.property())
    }

    /// EU ETS phase-in coverage for `year`.
    ///
    /// Full coverage at or beyond the last tabulated year. Years before the
    /// schedule starts are `UnknownYear`; the calculator applies its
    /// configured convention for those.
    pub fn phase_in_coverage(&self, year: Year) -> Result<Decimal> {
        self.eu_ets_phase_in
            .coverage(year)
            .ok_or(ComplianceError::UnknownYear { regime: Regime::EuEts, year })
    }

    /// Voyage coverage table of a trading scheme.
    pub fn voyage_coverage_table(&self, regime: Regime) -> Result<&VoyageCoverageTable> {
        match regime {
            Regime::EuEts => Ok(&self.eu_ets_voyage_coverage),
            Regime::UkEts => Ok(&self.uk_ets_voyage_coverage),
            Regime::FuelEuMaritime | Regime::ImoNetZero => Err(ComplianceError::invalid(
                "regime",
                "only trading schemes weight emissions by voyage class",
            )),
        }
    }

    pub fn voyage_coverage(&self, regime: Regime, class: VoyageClass) -> Result<Decimal> {
        Ok(self.voyage_coverage_table(regime)?.fraction(class))
    }

    /// Voyage coverage by classification string in the scheme's own
    /// vocabulary, e.g. `"intra-eu"` or `"uk-domestic"`.
    pub fn voyage_coverage_by_name(&self, regime: Regime, classification: &str) -> Result<Decimal> {
        self.voyage_coverage(regime, VoyageClass::parse_for(regime, classification)?)
    }

    /// Penalty rate of an intensity regime (FuelEU only).
    pub fn penalty_rate(&self, regime: Regime) -> Result<Rate> {
        match regime {
            Regime::FuelEuMaritime => Ok(self.fueleu_penalty),
            _ => Err(ComplianceError::invalid("regime", "no fixed penalty rate published")),
        }
    }

    /// Reference allowance or unit price of a regime.
    ///
    /// For IMO this is the tier 1 remedial unit price.
    pub fn allowance_price(&self, regime: Regime) -> Result<Rate> {
        match regime {
            Regime::EuEts => Ok(self.eu_ets_allowance),
            Regime::UkEts => Ok(self.uk_ets_allowance),
            Regime::ImoNetZero => Ok(self.imo_remedial.tier1),
            Regime::FuelEuMaritime => Err(ComplianceError::invalid(
                "regime",
                "FuelEU is settled by penalty, not allowances",
            )),
        }
    }

    pub fn pooling_limits(&self) -> PoolingLimits {
        self.fueleu_pooling
    }

    pub fn gwp(&self) -> GwpValues {
        self.gwp
    }

    pub fn uk_ets_price_corridor(&self) -> PriceCorridor {
        self.uk_ets_price_corridor
    }

    /// IMO remedial unit prices and the tier 1 ceiling.
    pub fn imo_tier_prices(&self) -> ImoRemedialPricing {
        self.imo_remedial
    }

    pub fn ops_requirement(&self) -> OpsRequirement {
        self.fueleu_ops
    }

    /// ZNZ thresholds, surplus validity and registry opening.
    pub fn imo_flexibility(&self) -> &'static ImoFlexibility {
        self.imo_flexibility
    }

    /// Check every published table against its invariants.
    pub fn verify_integrity(&self) -> Result<()> {
        self.fueleu_targets.verify()?;
        self.imo_targets.verify()?;

        let mut previous = Decimal::ZERO;
        for (year, fraction) in self.eu_ets_phase_in.entries {
            if *fraction < previous || *fraction > Decimal::ONE {
                return Err(ComplianceError::Integrity(format!(
                    "EU ETS phase-in {year}: {fraction} breaks the non-decreasing [0, 1] ramp"
                )));
            }
            previous = *fraction;
        }
        if previous != Decimal::ONE {
            return Err(ComplianceError::Integrity(
                "EU ETS phase-in does not reach full coverage".to_string(),
            ));
        }

        let ops_share = self.fueleu_ops.min_connection_share;
        if ops_share < Decimal::ZERO || ops_share > Decimal::ONE {
            return Err(ComplianceError::Integrity(format!(
                "OPS connection share {ops_share} outside [0, 1]"
            )));
        }

        for pair in self.imo_flexibility.znz_thresholds.windows(2) {
            let ((y0, t0), (y1, t1)) = (pair[0], pair[1]);
            if y1 <= y0 || t1 > t0 {
                return Err(ComplianceError::Integrity(format!(
                    "ZNZ threshold {y1} ({t1}) does not tighten {y0} ({t0})"
                )));
            }
        }

        for table in [&self.eu_ets_voyage_coverage, &self.uk_ets_voyage_coverage] {
            for fraction in [table.intra_regional, table.extra_regional] {
                if fraction < Decimal::ZERO || fraction > Decimal::ONE {
                    return Err(ComplianceError::Integrity(format!(
                        "voyage coverage {fraction} outside [0, 1]"
                    )));
                }
            }
        }
        Ok(())
    }
}
