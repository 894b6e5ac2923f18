//! IMO Net-Zero Framework: attained GFI, deficit and remedial units.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{div, mul, ComplianceCalculator, FuelConsumption, NetZeroGap, GRAMS_PER_TONNE};
use crate::error::Result;
use crate::types::{Money, Year};

/// Remedial unit tier a deficit is settled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemedialTier {
    Compliant,
    Tier1,
    Tier2,
}

/// IMO position of one vessel for one reporting year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImoAssessment {
    pub year: Year,
    /// Energy-weighted well-to-wake GHG fuel intensity, gCO2e/MJ.
    pub attained_gfi: Decimal,
    pub energy_mj: Decimal,
    pub gap: NetZeroGap,
    /// `gap × energy / 1e6`, tCO2e.
    pub deficit_t: Decimal,
    pub tier: RemedialTier,
    pub remedial_cost: Money,
}

impl ComplianceCalculator {
    /// Assess a fuel mix against the net-zero trajectory and price the
    /// deficit in remedial units.
    ///
    /// The whole deficit is priced at a single tier: tier 1 up to the
    /// published ceiling, tier 2 above it.
    pub fn imo_assessment(&self, consumptions: &[FuelConsumption], year: Year) -> Result<ImoAssessment> {
        let attained = self.attained_intensity(consumptions, Decimal::ONE)?;
        let gap = self.net_zero_gap(attained.intensity, year)?;
        let deficit_t = div(mul(gap.gap, attained.energy_mj, "IMO deficit")?, GRAMS_PER_TONNE, "IMO deficit")?;

        let pricing = self.config.imo_pricing(self.dataset);
        let (tier, rate) = if deficit_t.is_zero() {
            (RemedialTier::Compliant, pricing.tier1)
        } else if deficit_t <= pricing.tier1_ceiling_t {
            (RemedialTier::Tier1, pricing.tier1)
        } else {
            (RemedialTier::Tier2, pricing.tier2)
        };
        let remedial_cost = Money::new(mul(deficit_t, rate.per_tonne, "remedial cost")?, rate.currency);

        debug!(year, gfi = %attained.intensity, %deficit_t, ?tier, %remedial_cost, "IMO assessment");
        Ok(ImoAssessment {
            year,
            attained_gfi: attained.intensity,
            energy_mj: attained.energy_mj,
            gap,
            deficit_t,
            tier,
            remedial_cost,
        })
    }
}
