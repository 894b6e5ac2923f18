//! Calculator configuration: documented policy conventions and reference-price
//! overrides.
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! yields the published dataset behaviour.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dataset::{ImoRemedialPricing, Rate, RegulatoryDataset};
use crate::error::{ComplianceError, Result};
use crate::types::Regime;

// ---------------------------------------------------------------------------
// PrePhaseInCoverage
// ---------------------------------------------------------------------------

/// EU ETS coverage applied to reporting years before the phase-in starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrePhaseInCoverage {
    /// Shipping was outside the scheme before 2024: nothing is covered.
    #[default]
    ZeroCoverage,
    /// Legacy lookup convention: unknown years count as fully covered.
    FullCoverage,
}

impl PrePhaseInCoverage {
    pub fn fraction(&self) -> Decimal {
        match self {
            Self::ZeroCoverage => Decimal::ZERO,
            Self::FullCoverage => Decimal::ONE,
        }
    }
}

// ---------------------------------------------------------------------------
// CalculatorConfig
// ---------------------------------------------------------------------------

/// Immutable configuration of a [`crate::calculator::ComplianceCalculator`].
///
/// Price overrides replace the dataset's reference value in the regime's
/// native currency; `None` keeps the published figure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub pre_phase_in: PrePhaseInCoverage,
    /// EUR per EUA.
    pub eu_ets_allowance_price: Option<Decimal>,
    /// GBP per UKA.
    pub uk_ets_allowance_price: Option<Decimal>,
    /// EUR per tonne CO2e of FuelEU excess emissions.
    pub fueleu_penalty_rate: Option<Decimal>,
    /// USD per tier 1 remedial unit.
    pub imo_tier1_price: Option<Decimal>,
    /// USD per tier 2 remedial unit.
    pub imo_tier2_price: Option<Decimal>,
}

impl CalculatorConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ComplianceError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject negative price overrides.
    pub fn validate(&self) -> Result<()> {
        let overrides = [
            ("eu_ets_allowance_price", self.eu_ets_allowance_price),
            ("uk_ets_allowance_price", self.uk_ets_allowance_price),
            ("fueleu_penalty_rate", self.fueleu_penalty_rate),
            ("imo_tier1_price", self.imo_tier1_price),
            ("imo_tier2_price", self.imo_tier2_price),
        ];
        for (name, value) in overrides {
            if let Some(v) = value {
                if v.is_sign_negative() && !v.is_zero() {
                    return Err(ComplianceError::Config(format!("{name} must be >= 0, got {v}")));
                }
            }
        }
        Ok(())
    }

    /// FuelEU penalty rate after overrides.
    pub fn fueleu_penalty(&self, dataset: &RegulatoryDataset) -> Result<Rate> {
        let published = dataset.penalty_rate(Regime::FuelEuMaritime)?;
        Ok(override_rate(published, self.fueleu_penalty_rate))
    }

    /// Allowance price of a trading scheme after overrides.
    pub fn allowance_price(&self, dataset: &RegulatoryDataset, regime: Regime) -> Result<Rate> {
        let published = dataset.allowance_price(regime)?;
        let override_value = match regime {
            Regime::EuEts => self.eu_ets_allowance_price,
            Regime::UkEts => self.uk_ets_allowance_price,
            Regime::ImoNetZero => self.imo_tier1_price,
            Regime::FuelEuMaritime => None,
        };
        Ok(override_rate(published, override_value))
    }

    /// IMO remedial pricing after overrides.
    pub fn imo_pricing(&self, dataset: &RegulatoryDataset) -> ImoRemedialPricing {
        let published = dataset.imo_tier_prices();
        ImoRemedialPricing {
            tier1: override_rate(published.tier1, self.imo_tier1_price),
            tier2: override_rate(published.tier2, self.imo_tier2_price),
            ..published
        }
    }
}

fn override_rate(published: Rate, value: Option<Decimal>) -> Rate {
    match value {
        Some(per_tonne) => Rate::new(per_tonne, published.currency),
        None => published,
    }
}
