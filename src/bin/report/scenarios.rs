// Fleet Scenarios: representative operating profiles for the compliance report
// Each scenario is a reporting year plus the voyage records of a small fleet

use maritime_compliance::fleet::VoyageRecord;
use maritime_compliance::{FuelConsumption, FuelId, VoyageClass, Year};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ─── Scenario Configuration ─────────────────────────────────────────────────

pub struct Scenario {
    pub name: &'static str,
    pub label: &'static str,
    pub category: &'static str,
    pub year: Year,
    pub records: fn() -> Vec<VoyageRecord>,
}

// ─── Record Builders ────────────────────────────────────────────────────────

fn voyage(
    vessel: &str,
    fuels: &[(FuelId, Decimal)],
    eu: Option<VoyageClass>,
    uk: Option<VoyageClass>,
) -> VoyageRecord {
    VoyageRecord {
        vessel_id: vessel.to_string(),
        consumptions: fuels.iter().map(|(f, t)| FuelConsumption::new(*f, *t)).collect(),
        eu_ets: eu,
        uk_ets: uk,
    }
}

fn lng_dual_fuel(mass: Decimal) -> FuelConsumption {
    FuelConsumption {
        methane_slip_pct: Some(dec!(3.1)),
        ch4_factor: Some(dec!(0.0155)),
        n2o_factor: Some(dec!(0.00011)),
        ..FuelConsumption::new(FuelId::Lng, mass)
    }
}

// ─── Fleets ─────────────────────────────────────────────────────────────────

fn hfo_tankers() -> Vec<VoyageRecord> {
    use VoyageClass::*;
    vec![
        voyage("IMO9321483", &[(FuelId::Hfo, dec!(4200)), (FuelId::Mgo, dec!(180))], Some(ExtraRegional), None),
        voyage("IMO9321483", &[(FuelId::Hfo, dec!(1900))], Some(IntraRegional), None),
        voyage("IMO9402122", &[(FuelId::Vlsfo, dec!(3600))], Some(ExtraRegional), Some(ExtraRegional)),
    ]
}

fn lng_container_fleet() -> Vec<VoyageRecord> {
    use VoyageClass::*;
    let mut records = vec![
        voyage("IMO9839131", &[(FuelId::Mgo, dec!(95))], Some(IntraRegional), None),
        voyage("IMO9839143", &[(FuelId::BioLng, dec!(1200))], Some(ExtraRegional), None),
    ];
    records.push(VoyageRecord {
        vessel_id: "IMO9839131".to_string(),
        consumptions: vec![lng_dual_fuel(dec!(5400)), FuelConsumption::new(FuelId::Mgo, dec!(60))],
        eu_ets: Some(ExtraRegional),
        uk_ets: None,
    });
    records
}

fn methanol_ferries() -> Vec<VoyageRecord> {
    use VoyageClass::*;
    vec![
        voyage("IMO9885104", &[(FuelId::EMethanol, dec!(640)), (FuelId::Mgo, dec!(120))], Some(IntraRegional), None),
        voyage("IMO9885116", &[(FuelId::BioMethanol, dec!(820))], Some(IntraRegional), None),
        voyage("IMO9885116", &[(FuelId::Methanol, dec!(300))], Some(IntraRegional), None),
    ]
}

fn uk_short_sea() -> Vec<VoyageRecord> {
    use VoyageClass::*;
    vec![
        voyage("IMO9700201", &[(FuelId::Mdo, dec!(410))], None, Some(IntraRegional)),
        voyage("IMO9700201", &[(FuelId::Mdo, dec!(260))], Some(ExtraRegional), Some(ExtraRegional)),
        voyage("IMO9700213", &[(FuelId::LpgPropane, dec!(350))], None, Some(IntraRegional)),
    ]
}

fn mixed_fleet_transition() -> Vec<VoyageRecord> {
    let mut records = hfo_tankers();
    records.extend(lng_container_fleet());
    records.extend(methanol_ferries());
    records.push(voyage(
        "IMO9950017",
        &[(FuelId::EAmmonia, dec!(2100)), (FuelId::Mgo, dec!(40))],
        Some(VoyageClass::ExtraRegional),
        None,
    ));
    records
}

// ─── Registry ───────────────────────────────────────────────────────────────

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "TANKER_PHASE_IN_2025",
            label: "HFO tankers, 70% phase-in",
            category: "phase-in",
            year: 2025,
            records: hfo_tankers,
        },
        Scenario {
            name: "TANKER_FULL_2026",
            label: "HFO tankers, full coverage",
            category: "baseline",
            year: 2026,
            records: hfo_tankers,
        },
        Scenario {
            name: "LNG_CONTAINER_2030",
            label: "LNG dual-fuel container fleet",
            category: "transition",
            year: 2030,
            records: lng_container_fleet,
        },
        Scenario {
            name: "METHANOL_FERRY_2030",
            label: "Methanol ferries (RFNBO window)",
            category: "transition",
            year: 2030,
            records: methanol_ferries,
        },
        Scenario {
            name: "UK_SHORT_SEA_2026",
            label: "UK short-sea, scheme launch",
            category: "uk-ets",
            year: 2026,
            records: uk_short_sea,
        },
        Scenario {
            name: "MIXED_FLEET_2040",
            label: "Mixed fleet, 2040 minimum",
            category: "long-horizon",
            year: 2040,
            records: mixed_fleet_transition,
        },
    ]
}
