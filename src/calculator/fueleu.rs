//! FuelEU Maritime annual assessment.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{add, mul, sub, ComplianceCalculator, FuelConsumption, IntensityBreakdown};
use crate::dataset::TargetEntry;
use crate::error::Result;
use crate::types::{Money, Regime, Year};

/// FuelEU position of one vessel for one reporting year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelEuAssessment {
    pub year: Year,
    pub attained: IntensityBreakdown,
    /// Target period in force for `year`.
    pub target: TargetEntry,
    /// `(target − attained) × energy`, gCO2e. Positive is a surplus.
    pub compliance_balance_g: Decimal,
    pub penalty: Money,
    pub rfnbo_energy_mj: Decimal,
    /// RFNBO energy times the reward multiplier while the incentive window
    /// is open, zero otherwise.
    pub rfnbo_reward_mj: Decimal,
}

impl FuelEuAssessment {
    pub fn is_compliant(&self) -> bool {
        self.compliance_balance_g >= Decimal::ZERO
    }
}

impl ComplianceCalculator {
    /// Assess a vessel's annual fuel mix against the FuelEU target in force.
    ///
    /// Years before the first target period are `UnknownYear`.
    pub fn fueleu_assessment(
        &self,
        year: Year,
        consumptions: &[FuelConsumption],
        wind_factor: Decimal,
    ) -> Result<FuelEuAssessment> {
        let target = self.dataset.target_in_force(Regime::FuelEuMaritime, year)?;
        let attained = self.attained_intensity(consumptions, wind_factor)?;

        let headroom = sub(target.intensity, attained.intensity, "compliance balance")?;
        let compliance_balance_g = mul(headroom, attained.energy_mj, "compliance balance")?;
        let penalty =
            self.penalty_for_intensity_gap(attained.intensity, target.intensity, attained.energy_mj)?;

        let mut rfnbo_energy_mj = Decimal::ZERO;
        for c in consumptions.iter().filter(|c| c.property().rfnbo) {
            rfnbo_energy_mj = add(rfnbo_energy_mj, c.energy_mj()?, "RFNBO energy")?;
        }
        let incentive = self.dataset.fueleu_rfnbo;
        let rfnbo_reward_mj = if incentive.applies(year) {
            mul(rfnbo_energy_mj, incentive.multiplier, "RFNBO reward")?
        } else {
            Decimal::ZERO
        };

        debug!(
            year,
            attained = %attained.intensity,
            target = %target.intensity,
            balance = %compliance_balance_g,
            %penalty,
            "FuelEU assessment"
        );
        Ok(FuelEuAssessment {
            year,
            attained,
            target,
            compliance_balance_g,
            penalty,
            rfnbo_energy_mj,
            rfnbo_reward_mj,
        })
    }
}
