//! Intensity target schedules (FuelEU Maritime, IMO Net-Zero Framework).
//!
//! Published figures are stored verbatim: reduction percentages as published,
//! intensities to two decimal places. The intensity column is derivable from
//! the baseline and is cross-checked by [`RegimeTargetSchedule::verify`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{ComplianceError, Result};
use crate::types::{Regime, TargetKey, Year};

/// Reference GHG intensity both schedules reduce from (gCO2e/MJ).
pub const REFERENCE_INTENSITY: Decimal = dec!(91.16);

/// Maximum drift allowed between a published intensity and the value
/// derived from `baseline × (1 − reduction/100)`.
pub const INTENSITY_TOLERANCE: Decimal = dec!(0.01);

/// First year of the IMO interpolation ramp (no reduction yet).
pub const IMO_TRAJECTORY_START: Year = 2025;

/// One published `(reduction, intensity)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetEntry {
    pub key: TargetKey,
    /// Reduction relative to the baseline, in percent.
    pub reduction_percent: Decimal,
    /// Target intensity in gCO2e/MJ.
    pub intensity: Decimal,
}

const fn year(y: Year, reduction_percent: Decimal, intensity: Decimal) -> TargetEntry {
    TargetEntry { key: TargetKey::Year(y), reduction_percent, intensity }
}

const fn aspirational(y: Year, reduction_percent: Decimal, intensity: Decimal) -> TargetEntry {
    TargetEntry { key: TargetKey::Aspirational(y), reduction_percent, intensity }
}

/// Year-keyed target schedule for an intensity regime.
#[derive(Debug, Serialize)]
pub struct RegimeTargetSchedule {
    pub regime: Regime,
    pub baseline: Decimal,
    pub entries: &'static [TargetEntry],
    pub source: &'static str,
}

impl RegimeTargetSchedule {
    /// Exact lookup of a published entry.
    pub fn entry(&self, key: TargetKey) -> Option<&TargetEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Regular (non-aspirational) entries in ascending year order.
    pub fn regular_entries(&self) -> impl Iterator<Item = &TargetEntry> {
        self.entries.iter().filter(|e| !e.key.is_aspirational())
    }

    /// The latest regular entry whose year is `<= year`.
    ///
    /// FuelEU targets apply for five-year periods, so the 2025 entry governs
    /// 2025 through 2029.
    pub fn in_force(&self, year: Year) -> Option<&TargetEntry> {
        self.regular_entries()
            .take_while(|e| e.key.year() <= year)
            .last()
    }

    /// Terminal (last regular) entry of the schedule.
    pub fn terminal(&self) -> Option<&TargetEntry> {
        self.regular_entries().last()
    }

    /// `baseline × (1 − reduction/100)`, unrounded.
    pub fn derived_intensity(&self, reduction_percent: Decimal) -> Decimal {
        self.baseline * (Decimal::ONE - reduction_percent / dec!(100))
    }

    /// Check the schedule invariants:
    ///
    /// - keys strictly ascending by year, regular before aspirational;
    /// - regular intensities non-increasing as the schedule advances;
    /// - every aspirational entry at least as strict as the same year's minimum;
    /// - every intensity within [`INTENSITY_TOLERANCE`] of its derived value.
    pub fn verify(&self) -> Result<()> {
        let fail = |msg: String| Err(ComplianceError::Integrity(format!("{}: {msg}", self.regime)));

        let order = |e: &TargetEntry| (e.key.year(), e.key.is_aspirational());
        for pair in self.entries.windows(2) {
            if order(&pair[0]) >= order(&pair[1]) {
                return fail(format!("keys out of order at {}", pair[1].key));
            }
        }

        let mut previous: Option<&TargetEntry> = None;
        for entry in self.regular_entries() {
            if let Some(prev) = previous {
                if entry.intensity > prev.intensity {
                    return fail(format!(
                        "target loosens from {} ({}) to {} ({})",
                        prev.key, prev.intensity, entry.key, entry.intensity
                    ));
                }
            }
            previous = Some(entry);
        }

        for entry in self.entries {
            let derived = self.derived_intensity(entry.reduction_percent);
            if (derived - entry.intensity).abs() > INTENSITY_TOLERANCE {
                return fail(format!(
                    "{} intensity {} does not match derived {}",
                    entry.key, entry.intensity, derived
                ));
            }
            if let TargetKey::Aspirational(y) = entry.key {
                match self.entry(TargetKey::Year(y)) {
                    Some(minimum) if entry.intensity <= minimum.intensity => {}
                    Some(_) => return fail(format!("{} is looser than the {y} minimum", entry.key)),
                    None => return fail(format!("{} has no matching minimum entry", entry.key)),
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FuelEU Maritime, EU Regulation 2023/1805, Article 4(2)
// ---------------------------------------------------------------------------

static FUELEU_TARGETS: [TargetEntry; 6] = [
    year(2025, dec!(2), dec!(89.34)),
    year(2030, dec!(6), dec!(85.69)),
    year(2035, dec!(14.5), dec!(77.94)),
    year(2040, dec!(31), dec!(62.90)),
    year(2045, dec!(62), dec!(34.64)),
    year(2050, dec!(80), dec!(18.23)),
];

pub static FUELEU_SCHEDULE: RegimeTargetSchedule = RegimeTargetSchedule {
    regime: Regime::FuelEuMaritime,
    baseline: REFERENCE_INTENSITY,
    entries: &FUELEU_TARGETS,
    source: "EU Regulation 2023/1805 Art. 4(2)",
};

// ---------------------------------------------------------------------------
// IMO Net-Zero Framework, 2023 IMO GHG Strategy (MEPC 80)
// ---------------------------------------------------------------------------

static IMO_TARGETS: [TargetEntry; 5] = [
    year(2030, dec!(20), dec!(72.93)),
    aspirational(2030, dec!(30), dec!(63.81)),
    year(2040, dec!(70), dec!(27.35)),
    aspirational(2040, dec!(80), dec!(18.23)),
    year(2050, dec!(96), dec!(3.65)),
];

pub static IMO_SCHEDULE: RegimeTargetSchedule = RegimeTargetSchedule {
    regime: Regime::ImoNetZero,
    baseline: REFERENCE_INTENSITY,
    entries: &IMO_TARGETS,
    source: "IMO 2023 GHG Strategy (MEPC 80)",
};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
