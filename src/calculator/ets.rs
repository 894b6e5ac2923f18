//! Voyage-level emissions trading calculations (EU ETS, UK ETS).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{add, mul, ComplianceCalculator, FuelConsumption};
use crate::dataset::GwpValues;
use crate::error::Result;
use crate::types::{Money, Regime, VoyageClass, Year};

/// Tonnes of each greenhouse gas emitted over a voyage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GhgEmissions {
    pub co2_t: Decimal,
    pub ch4_t: Decimal,
    pub n2o_t: Decimal,
}

impl GhgEmissions {
    /// Sum emissions over a fuel mix using overrides where given.
    pub fn from_consumptions(consumptions: &[FuelConsumption]) -> Result<Self> {
        let mut total = Self::default();
        for c in consumptions {
            c.validate()?;
            total.co2_t = add(total.co2_t, mul(c.mass_tonnes, c.cf(), "CO2 emissions")?, "CO2 emissions")?;
            if let Some(f) = c.ch4_factor {
                total.ch4_t = add(total.ch4_t, mul(c.mass_tonnes, f, "CH4 emissions")?, "CH4 emissions")?;
            }
            if let Some(f) = c.n2o_factor {
                total.n2o_t = add(total.n2o_t, mul(c.mass_tonnes, f, "N2O emissions")?, "N2O emissions")?;
            }
        }
        Ok(total)
    }

    /// CO2-equivalent tonnes under the given warming potentials.
    pub fn co2e(&self, gwp: &GwpValues) -> Result<Decimal> {
        let co2 = mul(self.co2_t, gwp.co2, "CO2e")?;
        let ch4 = mul(self.ch4_t, gwp.ch4, "CO2e")?;
        let n2o = mul(self.n2o_t, gwp.n2o, "CO2e")?;
        add(add(co2, ch4, "CO2e")?, n2o, "CO2e")
    }

    /// CO2 only; non-CO2 gases dropped.
    fn co2_only(self) -> Self {
        Self { co2_t: self.co2_t, ..Self::default() }
    }
}

/// Allowance obligation and cost of one voyage under a trading scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtsVoyageResult {
    pub regime: Regime,
    pub year: Year,
    pub voyage: VoyageClass,
    /// Gases counted toward the obligation. CH4 and N2O are zero when the
    /// scheme is CO2-only for `year`.
    pub emissions: GhgEmissions,
    pub co2e_t: Decimal,
    pub phase_in: Decimal,
    pub voyage_coverage: Decimal,
    /// `co2e × phase_in × voyage_coverage`, one allowance per tonne.
    pub allowances: Decimal,
    pub cost: Money,
}

impl EtsVoyageResult {
    fn outside_scheme(regime: Regime, year: Year, voyage: VoyageClass) -> Self {
        Self {
            regime,
            year,
            voyage,
            emissions: GhgEmissions::default(),
            co2e_t: Decimal::ZERO,
            phase_in: Decimal::ZERO,
            voyage_coverage: Decimal::ZERO,
            allowances: Decimal::ZERO,
            cost: Money::zero(regime.currency()),
        }
    }
}

impl ComplianceCalculator {
    /// EU ETS obligation for a voyage. CH4 and N2O count from the multi-GHG
    /// start year onward.
    pub fn eu_ets_voyage(
        &self,
        consumptions: &[FuelConsumption],
        voyage: VoyageClass,
        year: Year,
    ) -> Result<EtsVoyageResult> {
        let mut emissions = GhgEmissions::from_consumptions(consumptions)?;
        if year < self.dataset.eu_ets_multi_ghg_from {
            emissions = emissions.co2_only();
        }
        let phase_in = self.eu_ets_phase_in(year)?;
        self.price_voyage(Regime::EuEts, emissions, phase_in, voyage, year)
    }

    /// UK ETS obligation for a voyage. Nothing is due before the scheme's
    /// maritime launch; from launch all three gases count at full phase-in.
    pub fn uk_ets_voyage(
        &self,
        consumptions: &[FuelConsumption],
        voyage: VoyageClass,
        year: Year,
    ) -> Result<EtsVoyageResult> {
        if year < self.dataset.uk_ets_launch_year {
            for c in consumptions {
                c.validate()?;
            }
            debug!(year, "UK ETS maritime scope not yet in force");
            return Ok(EtsVoyageResult::outside_scheme(Regime::UkEts, year, voyage));
        }
        let emissions = GhgEmissions::from_consumptions(consumptions)?;
        self.price_voyage(Regime::UkEts, emissions, Decimal::ONE, voyage, year)
    }

    fn price_voyage(
        &self,
        regime: Regime,
        emissions: GhgEmissions,
        phase_in: Decimal,
        voyage: VoyageClass,
        year: Year,
    ) -> Result<EtsVoyageResult> {
        let voyage_coverage = self.dataset.voyage_coverage(regime, voyage)?;
        let price = self.config.allowance_price(self.dataset, regime)?;

        let co2e_t = emissions.co2e(&self.dataset.gwp)?;
        let allowances = mul(mul(co2e_t, phase_in, "allowances")?, voyage_coverage, "allowances")?;
        let cost = Money::new(mul(allowances, price.per_tonne, "allowance cost")?, price.currency);

        debug!(%regime, year, %voyage, %co2e_t, %allowances, %cost, "ETS voyage obligation");
        Ok(EtsVoyageResult {
            regime,
            year,
            voyage,
            emissions,
            co2e_t,
            phase_in,
            voyage_coverage,
            allowances,
            cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::FuelId;
    use crate::types::Currency;
    use rust_decimal_macros::dec;

    fn lng_with_slip_gases(mass: Decimal) -> FuelConsumption {
        FuelConsumption {
            ch4_factor: Some(dec!(0.01)),
            n2o_factor: Some(dec!(0.0001)),
            ..FuelConsumption::new(FuelId::Lng, mass)
        }
    }

    #[test]
    fn eu_voyage_matches_simple_cost_for_reference_fuel() {
        let calc = ComplianceCalculator::default();
        let voyage = calc
            .eu_ets_voyage(&[FuelConsumption::new(FuelId::Hfo, dec!(1000))], VoyageClass::IntraRegional, 2026)
            .expect("test: valid voyage");
        let simple = calc
            .ets_cost(dec!(1000), VoyageClass::IntraRegional, 2026)
            .expect("test: valid inputs");
        assert_eq!(voyage.cost, simple);
        assert_eq!(voyage.allowances, dec!(3114));
    }

    #[test]
    fn eu_multi_ghg_only_from_2026() {
        let calc = ComplianceCalculator::default();
        let mix = [lng_with_slip_gases(dec!(100))];

        let before = calc.eu_ets_voyage(&mix, VoyageClass::IntraRegional, 2025).expect("test: 2025");
        assert_eq!(before.emissions.ch4_t, Decimal::ZERO);
        assert_eq!(before.co2e_t, dec!(275));
        assert_eq!(before.allowances, dec!(192.5));

        let after = calc.eu_ets_voyage(&mix, VoyageClass::IntraRegional, 2026).expect("test: 2026");
        assert_eq!(after.emissions.ch4_t, dec!(1));
        // 275 + 1 × 25 + 0.01 × 298
        assert_eq!(after.co2e_t, dec!(302.98));
        assert_eq!(after.allowances, dec!(302.98));
    }

    #[test]
    fn eu_extra_regional_half_covered() {
        let calc = ComplianceCalculator::default();
        let r = calc
            .eu_ets_voyage(&[FuelConsumption::new(FuelId::Mgo, dec!(10))], VoyageClass::ExtraRegional, 2027)
            .expect("test: valid voyage");
        assert_eq!(r.voyage_coverage, dec!(0.5));
        assert_eq!(r.allowances, dec!(16.03));
        assert_eq!(r.cost.currency, Currency::Eur);
    }

    #[test]
    fn uk_nothing_due_before_launch() {
        let calc = ComplianceCalculator::default();
        let r = calc
            .uk_ets_voyage(&[FuelConsumption::new(FuelId::Hfo, dec!(500))], VoyageClass::IntraRegional, 2025)
            .expect("test: valid voyage");
        assert!(r.cost.is_zero());
        assert_eq!(r.cost.currency, Currency::Gbp);
        assert!(r.allowances.is_zero());
    }

    #[test]
    fn uk_prices_in_gbp_with_multi_ghg() {
        let calc = ComplianceCalculator::default();
        let r = calc
            .uk_ets_voyage(&[lng_with_slip_gases(dec!(100))], VoyageClass::ExtraRegional, 2026)
            .expect("test: valid voyage");
        assert_eq!(r.allowances, dec!(151.49));
        assert_eq!(r.cost, Money::new(dec!(151.49) * dec!(75), Currency::Gbp));
    }

    #[test]
    fn invalid_consumption_is_rejected_even_outside_scheme() {
        let calc = ComplianceCalculator::default();
        let bad = [FuelConsumption::new(FuelId::Hfo, dec!(-5))];
        assert!(calc.uk_ets_voyage(&bad, VoyageClass::IntraRegional, 2024).is_err());
        assert!(calc.eu_ets_voyage(&bad, VoyageClass::IntraRegional, 2026).is_err());
    }
}
