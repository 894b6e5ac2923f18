//! Per-fuel emission and energy properties.
//!
//! Default values as used for FuelEU Annex II / EU MRV reporting. Individual
//! consumption records may override LCV and intensities with bunker delivery
//! note values; see [`crate::calculator::FuelConsumption`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ComplianceError;
use crate::types::normalise_key;

/// Fixed set of fuels the dataset publishes properties for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FuelId {
    Hfo,
    Vlsfo,
    Mgo,
    Mdo,
    Lng,
    LpgPropane,
    LpgButane,
    Methanol,
    EMethanol,
    Ethanol,
    BioLng,
    BioMethanol,
    Ammonia,
    EAmmonia,
    Hydrogen,
    EHydrogen,
}

impl FuelId {
    pub const ALL: [FuelId; 16] = [
        FuelId::Hfo,
        FuelId::Vlsfo,
        FuelId::Mgo,
        FuelId::Mdo,
        FuelId::Lng,
        FuelId::LpgPropane,
        FuelId::LpgButane,
        FuelId::Methanol,
        FuelId::EMethanol,
        FuelId::Ethanol,
        FuelId::BioLng,
        FuelId::BioMethanol,
        FuelId::Ammonia,
        FuelId::EAmmonia,
        FuelId::Hydrogen,
        FuelId::EHydrogen,
    ];

    /// Fuel code as used on bunker delivery notes and in the reporting app.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Hfo => "HFO",
            Self::Vlsfo => "VLSFO",
            Self::Mgo => "MGO",
            Self::Mdo => "MDO",
            Self::Lng => "LNG",
            Self::LpgPropane => "LPG_PROP",
            Self::LpgButane => "LPG_BUT",
            Self::Methanol => "METHANOL",
            Self::EMethanol => "E_METHANOL",
            Self::Ethanol => "ETHANOL",
            Self::BioLng => "BIO_LNG",
            Self::BioMethanol => "BIO_METHANOL",
            Self::Ammonia => "AMMONIA",
            Self::EAmmonia => "E_AMMONIA",
            Self::Hydrogen => "HYDROGEN",
            Self::EHydrogen => "E_HYDROGEN",
        }
    }

    /// Published properties of this fuel.
    pub fn property(&self) -> &'static FuelProperty {
        &FUEL_PROPERTIES[*self as usize]
    }
}

impl fmt::Display for FuelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FuelId {
    type Err = ComplianceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalise_key(s);
        let alias = match key.as_str() {
            "lpg-propane" => Some(Self::LpgPropane),
            "lpg-butane" => Some(Self::LpgButane),
            "bio-lng" | "biolng" => Some(Self::BioLng),
            "e-methanol" => Some(Self::EMethanol),
            "e-ammonia" => Some(Self::EAmmonia),
            _ => None,
        };
        alias
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|f| normalise_key(f.code()) == key)
            })
            .ok_or_else(|| ComplianceError::UnknownFuel(s.to_string()))
    }
}

/// Emission and energy properties of one fuel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FuelProperty {
    pub id: FuelId,
    pub name: &'static str,
    /// Tank-to-wake CO2 emission factor, t CO2 per t fuel (Cf).
    pub co2_factor: Decimal,
    /// Lower calorific value, MJ/kg.
    pub lcv_mj_per_kg: Decimal,
    /// Well-to-tank GHG intensity, gCO2e/MJ.
    pub wtt_intensity: Decimal,
    /// Tank-to-wake GHG intensity, gCO2e/MJ.
    pub ttw_intensity: Decimal,
    /// Renewable fuel of non-biological origin.
    pub rfnbo: bool,
}

impl FuelProperty {
    /// Well-to-wake GHG intensity, gCO2e/MJ.
    pub fn ghg_intensity(&self) -> Decimal {
        self.wtt_intensity + self.ttw_intensity
    }

    /// Carbon-free fuels carry a zero CO2 factor.
    pub fn is_carbon_free(&self) -> bool {
        self.co2_factor.is_zero()
    }
}

const fn fuel(
    id: FuelId,
    name: &'static str,
    co2_factor: Decimal,
    lcv_mj_per_kg: Decimal,
    wtt_intensity: Decimal,
    ttw_intensity: Decimal,
    rfnbo: bool,
) -> FuelProperty {
    FuelProperty { id, name, co2_factor, lcv_mj_per_kg, wtt_intensity, ttw_intensity, rfnbo }
}

// Indexed by `FuelId as usize`; order must follow the enum.
static FUEL_PROPERTIES: [FuelProperty; 16] = [
    fuel(FuelId::Hfo, "Heavy Fuel Oil", dec!(3.114), dec!(40.2), dec!(13.76), dec!(77.4), false),
    fuel(FuelId::Vlsfo, "Very Low Sulphur Fuel Oil", dec!(3.151), dec!(40.5), dec!(13.76), dec!(77.4), false),
    fuel(FuelId::Mgo, "Marine Gas Oil", dec!(3.206), dec!(42.7), dec!(13.4), dec!(74.1), false),
    fuel(FuelId::Mdo, "Marine Diesel Oil", dec!(3.206), dec!(42.7), dec!(13.4), dec!(74.1), false),
    fuel(FuelId::Lng, "Liquefied Natural Gas", dec!(2.750), dec!(48.0), dec!(11.5), dec!(56.9), false),
    fuel(FuelId::LpgPropane, "LPG Propane", dec!(3.000), dec!(46.3), dec!(8.9), dec!(64.9), false),
    fuel(FuelId::LpgButane, "LPG Butane", dec!(3.030), dec!(45.7), dec!(10.0), dec!(66.7), false),
    fuel(FuelId::Methanol, "Methanol", dec!(1.375), dec!(19.9), dec!(14.5), dec!(68.9), false),
    fuel(FuelId::EMethanol, "e-Methanol (RFNBO)", dec!(1.375), dec!(19.9), dec!(3.9), dec!(31.5), true),
    fuel(FuelId::Ethanol, "Ethanol", dec!(1.913), dec!(26.8), dec!(15.9), dec!(68.9), false),
    fuel(FuelId::BioLng, "Bio-LNG", dec!(2.750), dec!(48.0), dec!(16.3), dec!(29.0), false),
    fuel(FuelId::BioMethanol, "Bio-Methanol", dec!(1.375), dec!(19.9), dec!(14.5), dec!(36.4), false),
    fuel(FuelId::Ammonia, "Ammonia", dec!(0), dec!(18.6), dec!(91.0), dec!(0), false),
    fuel(FuelId::EAmmonia, "e-Ammonia (RFNBO)", dec!(0), dec!(18.6), dec!(28.7), dec!(0), true),
    fuel(FuelId::Hydrogen, "Hydrogen", dec!(0), dec!(120.0), dec!(113.8), dec!(0), false),
    fuel(FuelId::EHydrogen, "e-Hydrogen (RFNBO)", dec!(0), dec!(120.0), dec!(9.4), dec!(0), true),
];
