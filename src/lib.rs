//! Maritime decarbonisation compliance engine.
//!
//! Computes GHG intensity gaps, penalties and allowance costs under FuelEU
//! Maritime, the IMO Net-Zero Framework, the EU ETS and the UK ETS from a
//! static, versioned regulatory dataset.

pub mod adapter;
pub mod calculator;
pub mod config;
pub mod dataset;
pub mod error;
pub mod fleet;
pub mod types;

pub use calculator::{
    ets_cost, net_zero_gap, penalty_for_intensity_gap, ComplianceCalculator, FuelConsumption,
    IntensityBreakdown, NetZeroGap, TargetTier,
};
pub use config::{CalculatorConfig, PrePhaseInCoverage};
pub use dataset::{FuelId, FuelProperty, RegulatoryDataset};
pub use error::{ComplianceError, Result};
pub use types::{Currency, Money, Regime, TargetKey, VoyageClass, Year};

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::adapter::{from_decimal, to_decimal, to_year};

// ─── WASM Interface ──────────────────────────────────────────────────────────

fn js_error(e: ComplianceError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> std::result::Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NetZeroGapView {
    gap: f64,
    is_compliant: bool,
    target_intensity: f64,
    tier: TargetTier,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FuelPropertyView {
    code: &'static str,
    name: &'static str,
    co2_factor: f64,
    lcv_mj_per_kg: f64,
    wtt_intensity: f64,
    ttw_intensity: f64,
    ghg_intensity: f64,
    rfnbo: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TargetView {
    key: String,
    reduction_percent: f64,
    intensity: f64,
}

/// Browser-facing handle over a configured [`ComplianceCalculator`].
///
/// Amounts cross the boundary as plain numbers in the regime's native
/// currency; see [`Regime::currency`].
#[wasm_bindgen]
pub struct ComplianceEngine {
    calculator: ComplianceCalculator,
}

#[wasm_bindgen]
impl ComplianceEngine {
    /// Build an engine, optionally from a JSON [`CalculatorConfig`].
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> std::result::Result<ComplianceEngine, JsValue> {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        let config = match config_json {
            Some(json) => CalculatorConfig::from_json(&json).map_err(js_error)?,
            None => CalculatorConfig::default(),
        };
        let calculator = ComplianceCalculator::new(config).map_err(js_error)?;
        Ok(Self { calculator })
    }

    #[wasm_bindgen(js_name = datasetVersion)]
    pub fn dataset_version(&self) -> String {
        self.calculator.dataset().version.to_string()
    }

    /// FuelEU penalty in EUR.
    #[wasm_bindgen(js_name = penaltyForIntensityGap)]
    pub fn penalty_for_intensity_gap(
        &self,
        current_intensity: f64,
        target_intensity: f64,
        energy_mj: f64,
    ) -> std::result::Result<f64, JsValue> {
        let penalty = self
            .calculator
            .penalty_for_intensity_gap(
                to_decimal(current_intensity, "current_intensity").map_err(js_error)?,
                to_decimal(target_intensity, "target_intensity").map_err(js_error)?,
                to_decimal(energy_mj, "energy_mj").map_err(js_error)?,
            )
            .map_err(js_error)?;
        Ok(from_decimal(penalty.amount))
    }

    /// EU ETS cost in EUR for the reference fuel.
    #[wasm_bindgen(js_name = etsCost)]
    pub fn ets_cost(&self, fuel_tonnes: f64, voyage: &str, year: u32) -> std::result::Result<f64, JsValue> {
        let voyage = VoyageClass::parse_for(Regime::EuEts, voyage).map_err(js_error)?;
        let cost = self
            .calculator
            .ets_cost(
                to_decimal(fuel_tonnes, "fuel_tonnes").map_err(js_error)?,
                voyage,
                to_year(year).map_err(js_error)?,
            )
            .map_err(js_error)?;
        Ok(from_decimal(cost.amount))
    }

    /// `{ gap, isCompliant, targetIntensity, tier }`.
    #[wasm_bindgen(js_name = netZeroGap)]
    pub fn net_zero_gap(&self, current_intensity: f64, year: u32) -> std::result::Result<JsValue, JsValue> {
        let gap = self
            .calculator
            .net_zero_gap(
                to_decimal(current_intensity, "current_intensity").map_err(js_error)?,
                to_year(year).map_err(js_error)?,
            )
            .map_err(js_error)?;
        to_js(&NetZeroGapView {
            gap: from_decimal(gap.gap),
            is_compliant: gap.is_compliant,
            target_intensity: from_decimal(gap.target_intensity),
            tier: gap.tier,
        })
    }

    #[wasm_bindgen(js_name = fuelProperty)]
    pub fn fuel_property(&self, code: &str) -> std::result::Result<JsValue, JsValue> {
        let p = self.calculator.dataset().fuel_property_by_code(code).map_err(js_error)?;
        to_js(&FuelPropertyView {
            code: p.id.code(),
            name: p.name,
            co2_factor: from_decimal(p.co2_factor),
            lcv_mj_per_kg: from_decimal(p.lcv_mj_per_kg),
            wtt_intensity: from_decimal(p.wtt_intensity),
            ttw_intensity: from_decimal(p.ttw_intensity),
            ghg_intensity: from_decimal(p.ghg_intensity()),
            rfnbo: p.rfnbo,
        })
    }

    /// Published target for `regime` (e.g. `"IMO"`) and `key`
    /// (e.g. `"2030_aspirational"`).
    #[wasm_bindgen(js_name = targetFor)]
    pub fn target_for(&self, regime: &str, key: &str) -> std::result::Result<JsValue, JsValue> {
        let regime: Regime = regime.parse().map_err(js_error)?;
        let key: TargetKey = key.parse().map_err(js_error)?;
        let entry = self.calculator.dataset().target_for(regime, key).map_err(js_error)?;
        to_js(&TargetView {
            key: entry.key.to_string(),
            reduction_percent: from_decimal(entry.reduction_percent),
            intensity: from_decimal(entry.intensity),
        })
    }

    /// Full fleet summary from a JSON array of voyage records.
    #[wasm_bindgen(js_name = annualSummary)]
    pub fn annual_summary(&self, year: u32, records_json: &str) -> std::result::Result<JsValue, JsValue> {
        let records: Vec<fleet::VoyageRecord> = serde_json::from_str(records_json)
            .map_err(|e| JsValue::from_str(&format!("invalid voyage records: {e}")))?;
        let summary = fleet::annual_summary(&self.calculator, to_year(year).map_err(js_error)?, &records)
            .map_err(js_error)?;
        to_js(&summary)
    }
}
