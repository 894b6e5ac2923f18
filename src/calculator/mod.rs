//! Compliance calculator: pure functions over the regulatory dataset.
//!
//! [`ComplianceCalculator`] holds nothing but an immutable configuration and a
//! reference to the static dataset, so it is `Send + Sync` and may be shared
//! or cloned freely. The free functions at the bottom of this module use the
//! default configuration.

pub mod ets;
pub mod fueleu;
pub mod imo;
pub mod ops;

pub use ets::EtsVoyageResult;
pub use fueleu::FuelEuAssessment;
pub use imo::{ImoAssessment, RemedialTier};
pub use ops::OpsAssessment;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::dataset::{FuelId, FuelProperty, RegulatoryDataset};
use crate::error::{ComplianceError, Result};
use crate::types::{Money, Regime, TargetKey, VoyageClass, Year};

/// Grams per tonne; converts `gCO2e/MJ × MJ` products to tonnes.
pub const GRAMS_PER_TONNE: Decimal = dec!(1000000);

// ---------------------------------------------------------------------------
// Checked arithmetic
// ---------------------------------------------------------------------------

pub(crate) fn mul(a: Decimal, b: Decimal, what: &'static str) -> Result<Decimal> {
    a.checked_mul(b).ok_or(ComplianceError::Overflow(what))
}

pub(crate) fn add(a: Decimal, b: Decimal, what: &'static str) -> Result<Decimal> {
    a.checked_add(b).ok_or(ComplianceError::Overflow(what))
}

pub(crate) fn sub(a: Decimal, b: Decimal, what: &'static str) -> Result<Decimal> {
    a.checked_sub(b).ok_or(ComplianceError::Overflow(what))
}

pub(crate) fn div(a: Decimal, b: Decimal, what: &'static str) -> Result<Decimal> {
    a.checked_div(b).ok_or(ComplianceError::Overflow(what))
}

fn non_negative(value: Decimal, field: &'static str) -> Result<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ComplianceError::invalid(field, "must be >= 0"));
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// FuelConsumption
// ---------------------------------------------------------------------------

/// One fuel consumed over a voyage or reporting period.
///
/// Optional fields override the dataset defaults with bunker delivery note
/// or measured values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelConsumption {
    pub fuel: FuelId,
    pub mass_tonnes: Decimal,
    #[serde(default)]
    pub lcv_mj_per_kg: Option<Decimal>,
    #[serde(default)]
    pub wtt_intensity: Option<Decimal>,
    #[serde(default)]
    pub ttw_intensity: Option<Decimal>,
    #[serde(default)]
    pub co2_factor: Option<Decimal>,
    /// Share of TtW emissions lost as methane slip, percent.
    #[serde(default)]
    pub methane_slip_pct: Option<Decimal>,
    /// t CH4 per t fuel.
    #[serde(default)]
    pub ch4_factor: Option<Decimal>,
    /// t N2O per t fuel.
    #[serde(default)]
    pub n2o_factor: Option<Decimal>,
}

impl FuelConsumption {
    /// Consumption using the dataset defaults for every property.
    pub fn new(fuel: FuelId, mass_tonnes: Decimal) -> Self {
        Self {
            fuel,
            mass_tonnes,
            lcv_mj_per_kg: None,
            wtt_intensity: None,
            ttw_intensity: None,
            co2_factor: None,
            methane_slip_pct: None,
            ch4_factor: None,
            n2o_factor: None,
        }
    }

    pub fn property(&self) -> &'static FuelProperty {
        self.fuel.property()
    }

    /// Check the caller-supplied figures against their domains.
    pub fn validate(&self) -> Result<()> {
        non_negative(self.mass_tonnes, "mass_tonnes")?;
        if let Some(lcv) = self.lcv_mj_per_kg {
            if lcv <= Decimal::ZERO {
                return Err(ComplianceError::invalid("lcv_mj_per_kg", "must be > 0"));
            }
        }
        let overrides = [
            (self.wtt_intensity, "wtt_intensity"),
            (self.ttw_intensity, "ttw_intensity"),
            (self.co2_factor, "co2_factor"),
            (self.ch4_factor, "ch4_factor"),
            (self.n2o_factor, "n2o_factor"),
        ];
        for (value, field) in overrides {
            if let Some(v) = value {
                non_negative(v, field)?;
            }
        }
        if let Some(slip) = self.methane_slip_pct {
            if slip < Decimal::ZERO || slip > dec!(100) {
                return Err(ComplianceError::invalid("methane_slip_pct", "must be within 0..=100"));
            }
        }
        Ok(())
    }

    pub fn lcv(&self) -> Decimal {
        self.lcv_mj_per_kg.unwrap_or(self.property().lcv_mj_per_kg)
    }

    pub fn wtt(&self) -> Decimal {
        self.wtt_intensity.unwrap_or(self.property().wtt_intensity)
    }

    pub fn ttw(&self) -> Decimal {
        self.ttw_intensity.unwrap_or(self.property().ttw_intensity)
    }

    pub fn cf(&self) -> Decimal {
        self.co2_factor.unwrap_or(self.property().co2_factor)
    }

    /// Energy content in MJ: `t × MJ/kg × 1000 kg/t`.
    pub fn energy_mj(&self) -> Result<Decimal> {
        let per_tonne = mul(self.lcv(), dec!(1000), "fuel energy")?;
        mul(self.mass_tonnes, per_tonne, "fuel energy")
    }

    /// TtW intensity after the methane-slip adjustment.
    pub fn effective_ttw(&self) -> Result<Decimal> {
        let slip = self.methane_slip_pct.unwrap_or(Decimal::ZERO);
        let retained = Decimal::ONE - slip / dec!(100);
        mul(retained, self.ttw(), "methane slip adjustment")
    }
}

// ---------------------------------------------------------------------------
// Result records
// ---------------------------------------------------------------------------

/// Which branch of the IMO target policy resolved the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetTier {
    /// Linear ramp from the baseline toward the 2030 minimum.
    Interpolated,
    Minimum2030,
    Minimum2040,
    NetZero2050,
}

/// Gap between an attained intensity and the net-zero trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetZeroGap {
    /// `max(0, current − target)`, gCO2e/MJ.
    pub gap: Decimal,
    /// True exactly when `gap` is zero.
    pub is_compliant: bool,
    pub target_intensity: Decimal,
    pub tier: TargetTier,
}

/// Energy-weighted GHG intensity of a fuel mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntensityBreakdown {
    /// `wind_factor × (wtt + ttw)`, gCO2e/MJ.
    pub intensity: Decimal,
    pub wtt: Decimal,
    pub ttw: Decimal,
    pub energy_mj: Decimal,
    pub wind_factor: Decimal,
}

impl IntensityBreakdown {
    fn empty(wind_factor: Decimal) -> Self {
        Self {
            intensity: Decimal::ZERO,
            wtt: Decimal::ZERO,
            ttw: Decimal::ZERO,
            energy_mj: Decimal::ZERO,
            wind_factor,
        }
    }
}

// ---------------------------------------------------------------------------
// ComplianceCalculator
// ---------------------------------------------------------------------------

/// Stateless calculator bound to one dataset version and configuration.
#[derive(Debug, Clone)]
pub struct ComplianceCalculator {
    dataset: &'static RegulatoryDataset,
    config: CalculatorConfig,
}

impl Default for ComplianceCalculator {
    fn default() -> Self {
        Self {
            dataset: RegulatoryDataset::current(),
            config: CalculatorConfig::default(),
        }
    }
}

impl ComplianceCalculator {
    /// Calculator over the current dataset. The config is validated first.
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        Self::with_dataset(RegulatoryDataset::current(), config)
    }

    pub fn with_dataset(dataset: &'static RegulatoryDataset, config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { dataset, config })
    }

    pub fn dataset(&self) -> &'static RegulatoryDataset {
        self.dataset
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// FuelEU-style penalty for exceeding an intensity target.
    ///
    /// `excess_t = max(0, current − target) × energy_mj / 1e6`, priced at the
    /// FuelEU penalty rate. Exactly zero when `current <= target`.
    pub fn penalty_for_intensity_gap(
        &self,
        current_intensity: Decimal,
        target_intensity: Decimal,
        energy_mj: Decimal,
    ) -> Result<Money> {
        non_negative(energy_mj, "energy_mj")?;
        let rate = self.config.fueleu_penalty(self.dataset)?;

        let gap = sub(current_intensity, target_intensity, "intensity gap")?.max(Decimal::ZERO);
        let excess_t = div(mul(gap, energy_mj, "excess emissions")?, GRAMS_PER_TONNE, "excess emissions")?;
        let penalty = mul(excess_t, rate.per_tonne, "FuelEU penalty")?;

        debug!(%current_intensity, %target_intensity, %energy_mj, %excess_t, %penalty, "intensity gap penalty");
        Ok(Money::new(penalty, rate.currency))
    }

    /// EU ETS phase-in coverage with the configured pre-schedule convention.
    pub fn eu_ets_phase_in(&self, year: Year) -> Result<Decimal> {
        match self.dataset.phase_in_coverage(year) {
            Ok(fraction) => Ok(fraction),
            Err(ComplianceError::UnknownYear { .. }) => {
                let policy = self.config.pre_phase_in;
                let fraction = policy.fraction();
                warn!(year, ?policy, %fraction, "year precedes EU ETS phase-in schedule");
                Ok(fraction)
            }
            Err(e) => Err(e),
        }
    }

    /// EU ETS allowance cost of burning the reference fuel (HFO).
    pub fn ets_cost(&self, fuel_tonnes: Decimal, voyage: VoyageClass, year: Year) -> Result<Money> {
        self.ets_cost_for_fuel(self.dataset.ets_reference_fuel, fuel_tonnes, voyage, year)
    }

    /// EU ETS allowance cost for `fuel_tonnes` of a given fuel:
    /// `tonnes × Cf × phase-in × voyage coverage × allowance price`.
    pub fn ets_cost_for_fuel(
        &self,
        fuel: FuelId,
        fuel_tonnes: Decimal,
        voyage: VoyageClass,
        year: Year,
    ) -> Result<Money> {
        non_negative(fuel_tonnes, "fuel_tonnes")?;
        let phase = self.eu_ets_phase_in(year)?;
        let coverage = self.dataset.voyage_coverage(Regime::EuEts, voyage)?;
        let price = self.config.allowance_price(self.dataset, Regime::EuEts)?;

        let emissions_t = mul(fuel_tonnes, fuel.property().co2_factor, "ETS emissions")?;
        let covered_t = mul(mul(emissions_t, phase, "ETS covered emissions")?, coverage, "ETS covered emissions")?;
        let cost = mul(covered_t, price.per_tonne, "ETS cost")?;

        debug!(%fuel, %fuel_tonnes, %voyage, year, %phase, %coverage, %cost, "EU ETS cost");
        Ok(Money::new(cost, price.currency))
    }

    /// Gap between `current_intensity` and the IMO net-zero trajectory.
    ///
    /// Decade targets apply from 2030, 2040 and 2050 onward. Before 2030 the
    /// target ramps linearly from the baseline (2025) to the 2030 minimum;
    /// earlier years clamp to the baseline.
    pub fn net_zero_gap(&self, current_intensity: Decimal, year: Year) -> Result<NetZeroGap> {
        let schedule = self.dataset.schedule(Regime::ImoNetZero)?;
        let (target_intensity, tier) = match year {
            y if y >= 2050 => (self.imo_target(2050)?.intensity, TargetTier::NetZero2050),
            y if y >= 2040 => (self.imo_target(2040)?.intensity, TargetTier::Minimum2040),
            y if y >= 2030 => (self.imo_target(2030)?.intensity, TargetTier::Minimum2030),
            y => {
                let r2030 = self.imo_target(2030)?.reduction_percent;
                let start = crate::dataset::targets::IMO_TRAJECTORY_START;
                let elapsed = Decimal::from(i32::from(y) - i32::from(start));
                let span = Decimal::from(2030 - i32::from(start));
                let progress = (elapsed / span).clamp(Decimal::ZERO, Decimal::ONE);
                let reduction = mul(progress, r2030, "interpolated reduction")?;
                (schedule.derived_intensity(reduction), TargetTier::Interpolated)
            }
        };

        let gap = sub(current_intensity, target_intensity, "net-zero gap")?.max(Decimal::ZERO);
        let result = NetZeroGap {
            gap,
            is_compliant: gap.is_zero(),
            target_intensity,
            tier,
        };
        debug!(%current_intensity, year, ?tier, %target_intensity, %gap, "net-zero gap");
        Ok(result)
    }

    fn imo_target(&self, year: Year) -> Result<crate::dataset::TargetEntry> {
        self.dataset.target_for(Regime::ImoNetZero, TargetKey::Year(year))
    }

    /// Energy-weighted intensity of a fuel mix.
    ///
    /// WtT and methane-slip-adjusted TtW are weighted by each fuel's energy;
    /// `wind_factor` in `(0, 1]` scales the sum. An empty or zero-energy mix
    /// yields zero intensity.
    pub fn attained_intensity(
        &self,
        consumptions: &[FuelConsumption],
        wind_factor: Decimal,
    ) -> Result<IntensityBreakdown> {
        if wind_factor <= Decimal::ZERO || wind_factor > Decimal::ONE {
            return Err(ComplianceError::invalid("wind_factor", "must be within (0, 1]"));
        }

        let mut energy = Decimal::ZERO;
        let mut wtt_g = Decimal::ZERO;
        let mut ttw_g = Decimal::ZERO;
        for c in consumptions {
            c.validate()?;
            let e = c.energy_mj()?;
            energy = add(energy, e, "total energy")?;
            wtt_g = add(wtt_g, mul(e, c.wtt(), "WtT emissions")?, "WtT emissions")?;
            ttw_g = add(ttw_g, mul(e, c.effective_ttw()?, "TtW emissions")?, "TtW emissions")?;
        }

        if energy.is_zero() {
            return Ok(IntensityBreakdown::empty(wind_factor));
        }

        let wtt = div(wtt_g, energy, "WtT intensity")?;
        let ttw = div(ttw_g, energy, "TtW intensity")?;
        let intensity = mul(wind_factor, add(wtt, ttw, "GHG intensity")?, "GHG intensity")?;
        Ok(IntensityBreakdown { intensity, wtt, ttw, energy_mj: energy, wind_factor })
    }
}

// ---------------------------------------------------------------------------
// Default-configuration entry points
// ---------------------------------------------------------------------------

/// [`ComplianceCalculator::penalty_for_intensity_gap`] with the default configuration.
pub fn penalty_for_intensity_gap(
    current_intensity: Decimal,
    target_intensity: Decimal,
    energy_mj: Decimal,
) -> Result<Money> {
    ComplianceCalculator::default().penalty_for_intensity_gap(current_intensity, target_intensity, energy_mj)
}

/// [`ComplianceCalculator::ets_cost`] with the default configuration.
pub fn ets_cost(fuel_tonnes: Decimal, voyage: VoyageClass, year: Year) -> Result<Money> {
    ComplianceCalculator::default().ets_cost(fuel_tonnes, voyage, year)
}

/// [`ComplianceCalculator::net_zero_gap`] with the default configuration.
pub fn net_zero_gap(current_intensity: Decimal, year: Year) -> Result<NetZeroGap> {
    ComplianceCalculator::default().net_zero_gap(current_intensity, year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PrePhaseInCoverage;
    use crate::types::Currency;

    fn calc() -> ComplianceCalculator {
        ComplianceCalculator::default()
    }

    #[test]
    fn penalty_is_zero_when_compliant() {
        let p = calc()
            .penalty_for_intensity_gap(dec!(80), dec!(89.34), dec!(1000000))
            .expect("test: valid inputs");
        assert!(p.is_zero());
        assert_eq!(p.currency, Currency::Eur);

        let p = calc()
            .penalty_for_intensity_gap(dec!(89.34), dec!(89.34), dec!(5000000))
            .expect("test: at target");
        assert!(p.is_zero());
    }

    #[test]
    fn penalty_prices_excess_tonnes() {
        // 1.82 g/MJ over on 50 TJ = 91 t excess at 2400 EUR/t.
        let p = calc()
            .penalty_for_intensity_gap(dec!(91.16), dec!(89.34), dec!(50000000))
            .expect("test: valid inputs");
        assert_eq!(p.amount, dec!(218400));
    }

    #[test]
    fn penalty_zero_energy_is_zero() {
        let p = calc()
            .penalty_for_intensity_gap(dec!(120), dec!(89.34), Decimal::ZERO)
            .expect("test: zero energy is valid");
        assert!(p.is_zero());
    }

    #[test]
    fn penalty_rejects_negative_energy() {
        let err = calc()
            .penalty_for_intensity_gap(dec!(95), dec!(89.34), dec!(-1))
            .expect_err("test: negative energy");
        assert!(matches!(err, ComplianceError::InvalidInput { field: "energy_mj", .. }));
    }

    #[test]
    fn penalty_respects_rate_override() {
        let config = CalculatorConfig {
            fueleu_penalty_rate: Some(dec!(1000)),
            ..Default::default()
        };
        let c = ComplianceCalculator::new(config).expect("test: valid config");
        let p = c
            .penalty_for_intensity_gap(dec!(2), dec!(1), dec!(1000000))
            .expect("test: valid inputs");
        assert_eq!(p.amount, dec!(1000));
    }

    #[test]
    fn ets_cost_fully_phased_intra_regional() {
        let cost = calc()
            .ets_cost(dec!(1000), VoyageClass::IntraRegional, 2026)
            .expect("test: 2026 is tabulated");
        assert_eq!(cost, Money::new(dec!(1000) * dec!(3.114) * dec!(85), Currency::Eur));
    }

    #[test]
    fn ets_cost_applies_phase_in_and_coverage() {
        let cost = calc()
            .ets_cost(dec!(1000), VoyageClass::ExtraRegional, 2024)
            .expect("test: 2024 is tabulated");
        // 3114 t × 0.40 × 0.50 × 85
        assert_eq!(cost.amount, dec!(52938));
    }

    #[test]
    fn ets_cost_after_schedule_is_fully_covered() {
        let late = calc().ets_cost(dec!(10), VoyageClass::IntraRegional, 2035).expect("test: 2035");
        let full = calc().ets_cost(dec!(10), VoyageClass::IntraRegional, 2026).expect("test: 2026");
        assert_eq!(late, full);
    }

    #[test]
    fn ets_cost_before_schedule_follows_policy() {
        let zero = calc().ets_cost(dec!(1000), VoyageClass::IntraRegional, 2023).expect("test: 2023");
        assert!(zero.is_zero());

        let legacy = ComplianceCalculator::new(CalculatorConfig {
            pre_phase_in: PrePhaseInCoverage::FullCoverage,
            ..Default::default()
        })
        .expect("test: valid config");
        let full = legacy.ets_cost(dec!(1000), VoyageClass::IntraRegional, 2023).expect("test: 2023");
        assert_eq!(full.amount, dec!(264690));
    }

    #[test]
    fn ets_cost_for_carbon_free_fuel_is_zero() {
        let cost = calc()
            .ets_cost_for_fuel(FuelId::EAmmonia, dec!(500), VoyageClass::IntraRegional, 2030)
            .expect("test: valid inputs");
        assert!(cost.is_zero());
    }

    #[test]
    fn ets_cost_rejects_negative_consumption() {
        assert!(matches!(
            calc().ets_cost(dec!(-1), VoyageClass::IntraRegional, 2026),
            Err(ComplianceError::InvalidInput { field: "fuel_tonnes", .. })
        ));
    }

    #[test]
    fn net_zero_decade_tiers() {
        let g = calc().net_zero_gap(dec!(3.0), 2050).expect("test: 2050");
        assert!(g.is_compliant);
        assert_eq!(g.gap, Decimal::ZERO);
        assert_eq!(g.target_intensity, dec!(3.65));
        assert_eq!(g.tier, TargetTier::NetZero2050);

        let g = calc().net_zero_gap(dec!(30), 2045).expect("test: 2045");
        assert_eq!(g.target_intensity, dec!(27.35));
        assert_eq!(g.gap, dec!(2.65));
        assert!(!g.is_compliant);

        let g = calc().net_zero_gap(dec!(70), 2039).expect("test: 2039");
        assert_eq!(g.tier, TargetTier::Minimum2030);
        assert!(g.is_compliant);
    }

    #[test]
    fn net_zero_interpolates_before_2030() {
        let g = calc().net_zero_gap(dec!(91.16), 2027).expect("test: 2027");
        // progress 0.4 × 20 % = 8 % below baseline
        assert_eq!(g.target_intensity, dec!(83.8672));
        assert_eq!(g.tier, TargetTier::Interpolated);
        assert!(g.target_intensity < dec!(91.16) && g.target_intensity > dec!(72.93));
        assert!(!g.is_compliant);
    }

    #[test]
    fn net_zero_clamps_before_trajectory_start() {
        for year in [2020, 2024, 2025] {
            let g = calc().net_zero_gap(dec!(91.16), year).expect("test: early year");
            assert_eq!(g.target_intensity, dec!(91.16), "{year}");
            assert!(g.is_compliant);
        }
    }

    #[test]
    fn net_zero_ramp_meets_published_2030_within_tolerance() {
        let ramp_end = RegulatoryDataset::current()
            .imo_targets
            .derived_intensity(dec!(20));
        let published = calc().net_zero_gap(Decimal::ZERO, 2030).expect("test: 2030").target_intensity;
        assert!((ramp_end - published).abs() <= dec!(0.01));
    }

    #[test]
    fn attained_intensity_of_pure_hfo_is_reference() {
        let mix = [FuelConsumption::new(FuelId::Hfo, dec!(100))];
        let b = calc().attained_intensity(&mix, Decimal::ONE).expect("test: valid mix");
        assert_eq!(b.intensity, dec!(91.16));
        assert_eq!(b.energy_mj, dec!(4020000));
    }

    #[test]
    fn attained_intensity_weights_by_energy() {
        // Equal energy of HFO (91.16) and e-hydrogen (9.4).
        let mix = [
            FuelConsumption::new(FuelId::Hfo, dec!(120)),
            FuelConsumption::new(FuelId::EHydrogen, dec!(40.2)),
        ];
        let b = calc().attained_intensity(&mix, Decimal::ONE).expect("test: valid mix");
        assert_eq!(b.intensity, dec!(50.28));
    }

    #[test]
    fn attained_intensity_applies_slip_and_wind() {
        let mut lng = FuelConsumption::new(FuelId::Lng, dec!(10));
        lng.methane_slip_pct = Some(dec!(10));
        let b = calc().attained_intensity(&[lng], dec!(0.95)).expect("test: valid mix");
        assert_eq!(b.ttw, dec!(51.21));
        assert_eq!(b.intensity, dec!(0.95) * (dec!(11.5) + dec!(51.21)));
    }

    #[test]
    fn attained_intensity_empty_mix() {
        let b = calc().attained_intensity(&[], Decimal::ONE).expect("test: empty mix");
        assert!(b.intensity.is_zero() && b.energy_mj.is_zero());
    }

    #[test]
    fn attained_intensity_rejects_bad_inputs() {
        assert!(calc().attained_intensity(&[], Decimal::ZERO).is_err());
        assert!(calc().attained_intensity(&[], dec!(1.1)).is_err());
        let mut c = FuelConsumption::new(FuelId::Mgo, dec!(1));
        c.lcv_mj_per_kg = Some(Decimal::ZERO);
        assert!(calc().attained_intensity(&[c], Decimal::ONE).is_err());
    }

    #[test]
    fn free_functions_use_default_config() {
        assert_eq!(
            ets_cost(dec!(1), VoyageClass::IntraRegional, 2023).expect("test: 2023"),
            Money::zero(Currency::Eur)
        );
        assert!(net_zero_gap(dec!(100), 2050).expect("test: 2050").gap > Decimal::ZERO);
        assert!(penalty_for_intensity_gap(dec!(1), dec!(2), dec!(3)).expect("test: ok").is_zero());
    }
}
