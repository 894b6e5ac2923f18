//! Fleet roll-up: one reporting year's obligations across many voyages.
//!
//! Voyage-level schemes (EU ETS, UK ETS) are summed per voyage. Annual
//! intensity regimes (FuelEU, IMO) are assessed once per vessel over the
//! vessel's combined fuel mix. Records may arrive in any order; vessels are
//! keyed in a `BTreeMap` and Decimal sums are exact, so the summary does not
//! depend on record order.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculator::{add, ComplianceCalculator, EtsVoyageResult, FuelConsumption, FuelEuAssessment, ImoAssessment};
use crate::error::{ComplianceError, Result};
use crate::types::{Currency, Money, Regime, VoyageClass, Year};

/// One voyage's fuel use and its classification under each trading scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoyageRecord {
    pub vessel_id: String,
    pub consumptions: Vec<FuelConsumption>,
    /// `None` when the voyage touches no EU port.
    #[serde(default)]
    pub eu_ets: Option<VoyageClass>,
    /// `None` when the voyage touches no UK port.
    #[serde(default)]
    pub uk_ets: Option<VoyageClass>,
}

/// Summed obligation of one trading scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeTotals {
    pub voyages: usize,
    pub co2e_t: Decimal,
    pub allowances: Decimal,
    pub cost: Money,
}

impl SchemeTotals {
    fn new(currency: Currency) -> Self {
        Self {
            voyages: 0,
            co2e_t: Decimal::ZERO,
            allowances: Decimal::ZERO,
            cost: Money::zero(currency),
        }
    }

    fn absorb(&mut self, voyage: &EtsVoyageResult) -> Result<()> {
        self.voyages += 1;
        self.co2e_t = add(self.co2e_t, voyage.co2e_t, "scheme CO2e total")?;
        self.allowances = add(self.allowances, voyage.allowances, "scheme allowance total")?;
        self.cost = self
            .cost
            .checked_add(voyage.cost)
            .ok_or(ComplianceError::Overflow("scheme cost total"))?;
        Ok(())
    }
}

/// Per-vessel annual intensity results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselSummary {
    pub vessel_id: String,
    /// `None` before the first FuelEU period or when the vessel made no EU
    /// voyage.
    pub fueleu: Option<FuelEuAssessment>,
    pub imo: ImoAssessment,
}

/// Fleet obligations for one reporting year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualSummary {
    pub year: Year,
    pub voyages: usize,
    pub eu_ets: SchemeTotals,
    pub uk_ets: SchemeTotals,
    pub fueleu_penalty: Money,
    pub imo_remedial_cost: Money,
    pub vessels: Vec<VesselSummary>,
}

#[derive(Default)]
struct VesselMix {
    all: Vec<FuelConsumption>,
    eu: Vec<FuelConsumption>,
}

/// Roll up `records` for `year`.
pub fn annual_summary(
    calculator: &ComplianceCalculator,
    year: Year,
    records: &[VoyageRecord],
) -> Result<AnnualSummary> {
    let mut eu_ets = SchemeTotals::new(Regime::EuEts.currency());
    let mut uk_ets = SchemeTotals::new(Regime::UkEts.currency());
    let mut mixes: BTreeMap<&str, VesselMix> = BTreeMap::new();

    for record in records {
        if let Some(class) = record.eu_ets {
            eu_ets.absorb(&calculator.eu_ets_voyage(&record.consumptions, class, year)?)?;
        }
        if let Some(class) = record.uk_ets {
            uk_ets.absorb(&calculator.uk_ets_voyage(&record.consumptions, class, year)?)?;
        }
        let mix = mixes.entry(record.vessel_id.as_str()).or_default();
        mix.all.extend(record.consumptions.iter().cloned());
        if record.eu_ets.is_some() {
            mix.eu.extend(record.consumptions.iter().cloned());
        }
    }

    let fueleu_in_force = calculator
        .dataset()
        .target_in_force(Regime::FuelEuMaritime, year)
        .is_ok();
    let mut fueleu_penalty = Money::zero(Regime::FuelEuMaritime.currency());
    let mut imo_remedial_cost = Money::zero(Regime::ImoNetZero.currency());
    let mut vessels = Vec::with_capacity(mixes.len());

    for (vessel_id, mut mix) in mixes {
        // Canonical order keeps per-vessel results independent of record order.
        sort_mix(&mut mix.all);
        sort_mix(&mut mix.eu);

        let fueleu = if fueleu_in_force && !mix.eu.is_empty() {
            Some(calculator.fueleu_assessment(year, &mix.eu, Decimal::ONE)?)
        } else {
            debug!(vessel_id, year, "no FuelEU assessment");
            None
        };
        let imo = calculator.imo_assessment(&mix.all, year)?;

        if let Some(a) = &fueleu {
            fueleu_penalty = fueleu_penalty
                .checked_add(a.penalty)
                .ok_or(ComplianceError::Overflow("fleet FuelEU penalty"))?;
        }
        imo_remedial_cost = imo_remedial_cost
            .checked_add(imo.remedial_cost)
            .ok_or(ComplianceError::Overflow("fleet remedial cost"))?;
        vessels.push(VesselSummary {
            vessel_id: vessel_id.to_string(),
            fueleu,
            imo,
        });
    }

    info!(
        year,
        voyages = records.len(),
        vessels = vessels.len(),
        eu_ets_cost = %eu_ets.cost,
        uk_ets_cost = %uk_ets.cost,
        "fleet annual summary"
    );
    Ok(AnnualSummary {
        year,
        voyages: records.len(),
        eu_ets,
        uk_ets,
        fueleu_penalty,
        imo_remedial_cost,
        vessels,
    })
}

fn sort_mix(mix: &mut [FuelConsumption]) {
    mix.sort_by(|a, b| {
        a.fuel
            .code()
            .cmp(b.fuel.code())
            .then(a.mass_tonnes.cmp(&b.mass_tonnes))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::FuelId;
    use rust_decimal_macros::dec;

    fn record(vessel: &str, fuel: FuelId, t: Decimal, eu: Option<VoyageClass>, uk: Option<VoyageClass>) -> VoyageRecord {
        VoyageRecord {
            vessel_id: vessel.to_string(),
            consumptions: vec![FuelConsumption::new(fuel, t)],
            eu_ets: eu,
            uk_ets: uk,
        }
    }

    fn fleet() -> Vec<VoyageRecord> {
        vec![
            record("IMO9000001", FuelId::Hfo, dec!(1000), Some(VoyageClass::IntraRegional), None),
            record("IMO9000001", FuelId::Mgo, dec!(50), Some(VoyageClass::ExtraRegional), Some(VoyageClass::ExtraRegional)),
            record("IMO9000002", FuelId::Lng, dec!(400), None, Some(VoyageClass::IntraRegional)),
            record("IMO9000002", FuelId::BioMethanol, dec!(80), Some(VoyageClass::ExtraRegional), None),
        ]
    }

    #[test]
    fn sums_trading_schemes_per_voyage() {
        let calc = ComplianceCalculator::default();
        let s = annual_summary(&calc, 2026, &fleet()).expect("test: valid fleet");
        assert_eq!(s.voyages, 4);
        assert_eq!(s.eu_ets.voyages, 3);
        assert_eq!(s.uk_ets.voyages, 2);
        // 3114 + 160.3 × 0.5 + 110 × 0.5
        assert_eq!(s.eu_ets.allowances, dec!(3249.15));
        // 80.15 + 1100
        assert_eq!(s.uk_ets.allowances, dec!(1180.15));
        assert_eq!(s.uk_ets.cost.amount, dec!(1180.15) * dec!(75));
    }

    #[test]
    fn assesses_intensity_per_vessel() {
        let calc = ComplianceCalculator::default();
        let s = annual_summary(&calc, 2026, &fleet()).expect("test: valid fleet");
        assert_eq!(s.vessels.len(), 2);
        assert_eq!(s.vessels[0].vessel_id, "IMO9000001");
        let fueleu = s.vessels[0].fueleu.as_ref().expect("test: EU voyages present");
        assert!(!fueleu.is_compliant());
        let penalties: Decimal = s
            .vessels
            .iter()
            .filter_map(|v| v.fueleu.as_ref())
            .map(|a| a.penalty.amount)
            .sum();
        assert_eq!(s.fueleu_penalty.amount, penalties);
    }

    #[test]
    fn record_order_does_not_matter() {
        let calc = ComplianceCalculator::default();
        let forward = annual_summary(&calc, 2027, &fleet()).expect("test: valid fleet");
        let mut reversed = fleet();
        reversed.reverse();
        let backward = annual_summary(&calc, 2027, &reversed).expect("test: valid fleet");
        assert_eq!(forward, backward);
    }

    #[test]
    fn no_fueleu_before_first_period() {
        let calc = ComplianceCalculator::default();
        let s = annual_summary(&calc, 2024, &fleet()).expect("test: valid fleet");
        assert!(s.vessels.iter().all(|v| v.fueleu.is_none()));
        assert!(s.fueleu_penalty.is_zero());
        assert!(s.uk_ets.cost.is_zero());
    }

    #[test]
    fn empty_fleet_is_all_zero() {
        let calc = ComplianceCalculator::default();
        let s = annual_summary(&calc, 2030, &[]).expect("test: empty fleet");
        assert!(s.vessels.is_empty());
        assert!(s.eu_ets.cost.is_zero() && s.imo_remedial_cost.is_zero());
    }
}
