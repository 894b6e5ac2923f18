//! Core value types: regimes, schedule keys, voyage classes and money.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ComplianceError;

/// Calendar year of a reporting period.
pub type Year = u16;

/// Normalise a user-supplied identifier: trim, lowercase, `_` → `-`.
pub(crate) fn normalise_key(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace('_', "-")
}

// ---------------------------------------------------------------------------
// Currency
// ---------------------------------------------------------------------------

/// Native currency of a regulatory rate or price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Usd,
    Gbp,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// Money
// ---------------------------------------------------------------------------

/// A monetary amount tagged with its native currency.
///
/// The engine never converts between currencies; callers that need a single
/// reporting currency do so outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Zero in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Whether the amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Add two amounts of the same currency.
    ///
    /// Returns `None` on currency mismatch or overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        if self.currency != rhs.currency {
            return None;
        }
        Some(Self::new(self.amount.checked_add(rhs.amount)?, self.currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

// ---------------------------------------------------------------------------
// Regime
// ---------------------------------------------------------------------------

/// A maritime decarbonisation regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Regime {
    /// EU Regulation 2023/1805: GHG intensity of energy used on board.
    FuelEuMaritime,
    /// IMO Net-Zero Framework: GHG fuel intensity (GFI) targets.
    ImoNetZero,
    /// EU Emissions Trading System, maritime scope (Directive 2023/959).
    EuEts,
    /// UK Emissions Trading Scheme, maritime expansion.
    UkEts,
}

impl Regime {
    pub const ALL: [Regime; 4] = [
        Regime::FuelEuMaritime,
        Regime::ImoNetZero,
        Regime::EuEts,
        Regime::UkEts,
    ];

    /// Currency in which the regime's rates and prices are published.
    pub fn currency(&self) -> Currency {
        match self {
            Self::FuelEuMaritime | Self::EuEts => Currency::Eur,
            Self::ImoNetZero => Currency::Usd,
            Self::UkEts => Currency::Gbp,
        }
    }

    /// Short framework code used by the reporting application.
    pub fn code(&self) -> &'static str {
        match self {
            Self::FuelEuMaritime => "FUELEU",
            Self::ImoNetZero => "IMO",
            Self::EuEts => "EU_ETS",
            Self::UkEts => "UK_ETS",
        }
    }

    /// Whether the regime prices allowances rather than an intensity target.
    pub fn is_trading_scheme(&self) -> bool {
        matches!(self, Self::EuEts | Self::UkEts)
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FuelEuMaritime => "FuelEU Maritime",
            Self::ImoNetZero => "IMO Net-Zero Framework",
            Self::EuEts => "EU ETS",
            Self::UkEts => "UK ETS",
        };
        f.write_str(name)
    }
}

impl FromStr for Regime {
    type Err = ComplianceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise_key(s).as_str() {
            "fueleu" | "fueleu-maritime" => Ok(Self::FuelEuMaritime),
            "imo" | "imo-net-zero" | "imo-nzf" => Ok(Self::ImoNetZero),
            "eu-ets" => Ok(Self::EuEts),
            "uk-ets" => Ok(Self::UkEts),
            _ => Err(ComplianceError::UnknownRegime(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// TargetKey
// ---------------------------------------------------------------------------

/// Key into a regime's target schedule.
///
/// The aspirational variant is its own case so that `"2030_aspirational"`
/// can never be confused with the regular 2030 entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKey {
    Year(Year),
    Aspirational(Year),
}

impl TargetKey {
    /// The calendar year the entry refers to.
    pub fn year(&self) -> Year {
        match self {
            Self::Year(y) | Self::Aspirational(y) => *y,
        }
    }

    pub fn is_aspirational(&self) -> bool {
        matches!(self, Self::Aspirational(_))
    }
}

impl fmt::Display for TargetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year(y) => write!(f, "{y}"),
            Self::Aspirational(y) => write!(f, "{y}_aspirational"),
        }
    }
}

/// Digits only: `u16::from_str` would also take a leading `+`.
fn parse_year(segment: &str) -> Option<Year> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

impl FromStr for TargetKey {
    type Err = ComplianceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ComplianceError::UnknownKey(s.to_string());
        let key = normalise_key(s);
        match key.split_once('-') {
            None => parse_year(&key).map(Self::Year).ok_or_else(unknown),
            Some((year, "aspirational")) => parse_year(year).map(Self::Aspirational).ok_or_else(unknown),
            Some(_) => Err(unknown()),
        }
    }
}

// ---------------------------------------------------------------------------
// VoyageClass
// ---------------------------------------------------------------------------

/// Voyage classification relative to the regulated region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VoyageClass {
    /// Both ports inside the region (intra-EU, UK domestic).
    IntraRegional,
    /// One port inside the region, one outside.
    ExtraRegional,
}

impl VoyageClass {
    /// Parse a classification in the vocabulary of one trading scheme.
    ///
    /// The scheme-neutral names are accepted everywhere; regional names only
    /// for their own scheme, so `"uk-domestic"` is never an EU ETS voyage.
    pub fn parse_for(regime: Regime, s: &str) -> Result<Self, ComplianceError> {
        let class = match (regime, normalise_key(s).as_str()) {
            (_, "intra-regional") => Some(Self::IntraRegional),
            (_, "extra-regional") => Some(Self::ExtraRegional),
            (Regime::EuEts, "intra-eu") => Some(Self::IntraRegional),
            (Regime::EuEts, "extra-eu") => Some(Self::ExtraRegional),
            (Regime::UkEts, "uk-domestic" | "domestic") => Some(Self::IntraRegional),
            (Regime::UkEts, "uk-international" | "international") => Some(Self::ExtraRegional),
            _ => None,
        };
        class.ok_or_else(|| ComplianceError::UnknownVoyageClass(s.to_string()))
    }
}

/// Scheme-neutral names only; see [`VoyageClass::parse_for`] for regional ones.
impl FromStr for VoyageClass {
    type Err = ComplianceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise_key(s).as_str() {
            "intra-regional" => Ok(Self::IntraRegional),
            "extra-regional" => Ok(Self::ExtraRegional),
            _ => Err(ComplianceError::UnknownVoyageClass(s.to_string())),
        }
    }
}

impl fmt::Display for VoyageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntraRegional => f.write_str("intra-regional"),
            Self::ExtraRegional => f.write_str("extra-regional"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn target_key_parses_regular_and_aspirational() {
        assert_eq!("2030".parse::<TargetKey>(), Ok(TargetKey::Year(2030)));
        assert_eq!(
            "2030_aspirational".parse::<TargetKey>(),
            Ok(TargetKey::Aspirational(2030))
        );
        assert_eq!(
            "2040-Aspirational".parse::<TargetKey>(),
            Ok(TargetKey::Aspirational(2040))
        );
    }

    #[test]
    fn target_key_rejects_typos() {
        for bad in [
            "2030_aspirationl",
            "twenty",
            "2030_minimum",
            "",
            "2030_",
            "+2030",
            "+2030_aspirational",
            "99999",
        ] {
            assert!(
                matches!(bad.parse::<TargetKey>(), Err(ComplianceError::UnknownKey(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn target_key_display_round_trips() {
        let key = TargetKey::Aspirational(2040);
        assert_eq!(key.to_string(), "2040_aspirational");
        assert_eq!(key.to_string().parse::<TargetKey>(), Ok(key));
    }

    #[test]
    fn voyage_class_accepts_scheme_aliases() {
        let eu = |s| VoyageClass::parse_for(Regime::EuEts, s);
        let uk = |s| VoyageClass::parse_for(Regime::UkEts, s);
        assert_eq!(eu("intra-eu"), Ok(VoyageClass::IntraRegional));
        assert_eq!(eu("INTRA_EU"), Ok(VoyageClass::IntraRegional));
        assert_eq!(eu("extra-eu"), Ok(VoyageClass::ExtraRegional));
        assert_eq!(uk("uk-domestic"), Ok(VoyageClass::IntraRegional));
        assert_eq!(uk("international"), Ok(VoyageClass::ExtraRegional));
        for regime in [Regime::EuEts, Regime::UkEts] {
            assert_eq!(
                VoyageClass::parse_for(regime, "extra-regional"),
                Ok(VoyageClass::ExtraRegional)
            );
        }
    }

    #[test]
    fn voyage_class_rejects_other_schemes_names() {
        for name in ["uk-domestic", "domestic", "uk-international", "international"] {
            assert_eq!(
                VoyageClass::parse_for(Regime::EuEts, name),
                Err(ComplianceError::UnknownVoyageClass(name.into())),
                "{name} is not an EU ETS class"
            );
        }
        for name in ["intra-eu", "extra-eu"] {
            assert_eq!(
                VoyageClass::parse_for(Regime::UkEts, name),
                Err(ComplianceError::UnknownVoyageClass(name.into())),
                "{name} is not a UK ETS class"
            );
        }
        assert!("intra-eu".parse::<VoyageClass>().is_err());
    }

    #[test]
    fn voyage_class_rejects_other() {
        let err = "other".parse::<VoyageClass>().expect_err("test: OTHER is not a class");
        assert_eq!(err, ComplianceError::UnknownVoyageClass("other".into()));
    }

    #[test]
    fn regime_currencies() {
        assert_eq!(Regime::FuelEuMaritime.currency(), Currency::Eur);
        assert_eq!(Regime::EuEts.currency(), Currency::Eur);
        assert_eq!(Regime::UkEts.currency(), Currency::Gbp);
        assert_eq!(Regime::ImoNetZero.currency(), Currency::Usd);
    }

    #[test]
    fn regime_parses_framework_codes() {
        for regime in Regime::ALL {
            assert_eq!(regime.code().parse::<Regime>(), Ok(regime));
        }
        assert!("CORSIA".parse::<Regime>().is_err());
    }

    #[test]
    fn money_add_requires_same_currency() {
        let a = Money::new(dec!(10), Currency::Eur);
        let b = Money::new(dec!(2.5), Currency::Eur);
        let c = Money::new(dec!(1), Currency::Gbp);
        assert_eq!(a.checked_add(b), Some(Money::new(dec!(12.5), Currency::Eur)));
        assert_eq!(a.checked_add(c), None);
    }
}
