//! Trading-scheme tables, rates and dataset-only metadata.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::types::{Currency, VoyageClass, Year};

// ---------------------------------------------------------------------------
// Rates
// ---------------------------------------------------------------------------

/// A price or penalty per tonne CO2-equivalent in a native currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rate {
    pub per_tonne: Decimal,
    pub currency: Currency,
}

impl Rate {
    pub const fn new(per_tonne: Decimal, currency: Currency) -> Self {
        Self { per_tonne, currency }
    }
}

/// FuelEU Maritime penalty, EUR per tonne CO2e of excess emissions (Art. 23).
pub const FUELEU_PENALTY: Rate = Rate::new(dec!(2400), Currency::Eur);

/// EU ETS reference allowance price, EUR per EUA.
pub const EU_ETS_ALLOWANCE: Rate = Rate::new(dec!(85), Currency::Eur);

/// UK ETS reference allowance price, GBP per UKA.
pub const UK_ETS_ALLOWANCE: Rate = Rate::new(dec!(75), Currency::Gbp);

/// IMO remedial unit prices and the deficit threshold separating the tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImoRemedialPricing {
    pub tier1: Rate,
    pub tier2: Rate,
    /// Deficits up to this many tCO2e are settled at the tier 1 price.
    pub tier1_ceiling_t: Decimal,
}

pub const IMO_REMEDIAL_PRICING: ImoRemedialPricing = ImoRemedialPricing {
    tier1: Rate::new(dec!(100), Currency::Usd),
    tier2: Rate::new(dec!(380), Currency::Usd),
    tier1_ceiling_t: dec!(1000),
};

/// UK ETS auction price corridor, GBP per allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceCorridor {
    pub min: Decimal,
    pub max: Decimal,
    pub reserve: Decimal,
    pub currency: Currency,
}

pub const UK_ETS_PRICE_CORRIDOR: PriceCorridor = PriceCorridor {
    min: dec!(31),
    max: dec!(100),
    reserve: dec!(22),
    currency: Currency::Gbp,
};

// ---------------------------------------------------------------------------
// EU ETS phase-in (Directive 2023/959, Art. 3gb)
// ---------------------------------------------------------------------------

/// Year → share of verified emissions that must be surrendered.
#[derive(Debug, Serialize)]
pub struct PhaseInSchedule {
    pub entries: &'static [(Year, Decimal)],
}

impl PhaseInSchedule {
    pub fn first_year(&self) -> Option<Year> {
        self.entries.first().map(|(y, _)| *y)
    }

    pub fn last_year(&self) -> Option<Year> {
        self.entries.last().map(|(y, _)| *y)
    }

    /// Tabulated coverage, `1.0` at or beyond the last tabulated year, and
    /// `None` before the first.
    pub fn coverage(&self, year: Year) -> Option<Decimal> {
        if let Some((_, fraction)) = self.entries.iter().find(|(y, _)| *y == year) {
            return Some(*fraction);
        }
        match self.last_year() {
            Some(last) if year >= last => Some(Decimal::ONE),
            _ => None,
        }
    }
}

static EU_ETS_PHASE_IN_ENTRIES: [(Year, Decimal); 4] = [
    (2024, dec!(0.40)),
    (2025, dec!(0.70)),
    (2026, dec!(1.00)),
    (2027, dec!(1.00)),
];

pub static EU_ETS_PHASE_IN: PhaseInSchedule = PhaseInSchedule {
    entries: &EU_ETS_PHASE_IN_ENTRIES,
};

// ---------------------------------------------------------------------------
// Voyage coverage
// ---------------------------------------------------------------------------

/// Share of a voyage's emissions counted toward a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoyageCoverageTable {
    pub intra_regional: Decimal,
    pub extra_regional: Decimal,
}

impl VoyageCoverageTable {
    pub fn fraction(&self, class: VoyageClass) -> Decimal {
        match class {
            VoyageClass::IntraRegional => self.intra_regional,
            VoyageClass::ExtraRegional => self.extra_regional,
        }
    }
}

pub const EU_ETS_VOYAGE_COVERAGE: VoyageCoverageTable = VoyageCoverageTable {
    intra_regional: dec!(1.00),
    extra_regional: dec!(0.50),
};

pub const UK_ETS_VOYAGE_COVERAGE: VoyageCoverageTable = VoyageCoverageTable {
    intra_regional: dec!(1.00),
    extra_regional: dec!(0.50),
};

// ---------------------------------------------------------------------------
// Greenhouse gases
// ---------------------------------------------------------------------------

/// 100-year global warming potentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GwpValues {
    pub co2: Decimal,
    pub ch4: Decimal,
    pub n2o: Decimal,
}

pub const GWP100: GwpValues = GwpValues {
    co2: dec!(1),
    ch4: dec!(25),
    n2o: dec!(298),
};

/// First year CH4 and N2O count toward EU ETS surrender obligations.
pub const EU_ETS_MULTI_GHG_FROM: Year = 2026;

/// First reporting year of the UK ETS maritime expansion (multi-GHG from launch).
pub const UK_ETS_LAUNCH_YEAR: Year = 2026;

// ---------------------------------------------------------------------------
// FuelEU flexibility and incentives
// ---------------------------------------------------------------------------

/// Banking and borrowing caps as a fraction of the reference compliance
/// balance (Art. 20). Stored for ledger consumers; no calculator uses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolingLimits {
    pub banking: Decimal,
    pub borrowing: Decimal,
}

pub const FUELEU_POOLING_LIMITS: PoolingLimits = PoolingLimits {
    banking: dec!(0.02),
    borrowing: dec!(0.02),
};

/// RFNBO reward factor applied to RFNBO energy over a fixed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RfnboIncentive {
    pub multiplier: Decimal,
    pub from: Year,
    pub to: Year,
}

impl RfnboIncentive {
    pub fn applies(&self, year: Year) -> bool {
        (self.from..=self.to).contains(&year)
    }
}

pub const FUELEU_RFNBO_INCENTIVE: RfnboIncentive = RfnboIncentive {
    multiplier: dec!(0.5),
    from: 2025,
    to: 2033,
};

/// Onshore power supply obligation at mandatory ports (Art. 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpsRequirement {
    /// First year connection at a mandatory port is enforced.
    pub mandatory_from: Year,
    /// Share of port calls at mandatory ports that must connect.
    pub min_connection_share: Decimal,
    /// Penalty per kWh of shore power not taken, in `currency`.
    pub shortfall_penalty_per_kwh: Decimal,
    pub currency: Currency,
}

impl OpsRequirement {
    pub fn in_force(&self, year: Year) -> bool {
        year >= self.mandatory_from
    }
}

pub const FUELEU_OPS_REQUIREMENT: OpsRequirement = OpsRequirement {
    mandatory_from: 2030,
    min_connection_share: dec!(0.9),
    shortfall_penalty_per_kwh: dec!(10),
    currency: Currency::Eur,
};

// ---------------------------------------------------------------------------
// IMO flexibility
// ---------------------------------------------------------------------------

/// IMO Net-Zero Framework metadata outside the GFI trajectory.
#[derive(Debug, Serialize)]
pub struct ImoFlexibility {
    /// Year → maximum GFI (gCO2e/MJ) for a zero/near-zero (ZNZ) fuel.
    pub znz_thresholds: &'static [(Year, Decimal)],
    /// Years a surplus unit stays valid after issue.
    pub surplus_validity_years: u8,
    /// First year the IMO registry accepts accounts.
    pub registry_opening: Year,
}

impl ImoFlexibility {
    /// ZNZ threshold in force for `year`; `None` before the first one.
    pub fn znz_threshold(&self, year: Year) -> Option<Decimal> {
        self.znz_thresholds
            .iter()
            .take_while(|(from, _)| *from <= year)
            .last()
            .map(|(_, threshold)| *threshold)
    }

    /// Whether a fuel of GFI `intensity` counts as ZNZ in `year`.
    pub fn is_znz(&self, intensity: Decimal, year: Year) -> Option<bool> {
        self.znz_threshold(year).map(|threshold| intensity <= threshold)
    }

    /// Last compliance year a surplus issued for `issued` can be used.
    pub fn surplus_valid_until(&self, issued: Year) -> Year {
        issued.saturating_add(Year::from(self.surplus_validity_years))
    }
}

static IMO_ZNZ_THRESHOLDS: [(Year, Decimal); 2] = [(2028, dec!(19.0)), (2035, dec!(14.0))];

pub static IMO_FLEXIBILITY: ImoFlexibility = ImoFlexibility {
    znz_thresholds: &IMO_ZNZ_THRESHOLDS,
    surplus_validity_years: 2,
    registry_opening: 2027,
};
