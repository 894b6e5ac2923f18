//! Adapter layer: converts between the f64 boundary (WASM, JSON reports) and
//! the core's Decimal types.

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::{ComplianceError, Result};
use crate::types::Year;

/// Convert a caller-supplied f64 to Decimal.
///
/// NaN, infinities and magnitudes beyond Decimal's range are `InvalidInput`.
pub fn to_decimal(value: f64, field: &'static str) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(ComplianceError::invalid(field, "must be a finite number"));
    }
    Decimal::from_f64(value).ok_or(ComplianceError::invalid(field, "out of representable range"))
}

/// Convert Decimal to f64 for display or serialisation at the boundary.
///
/// Every Decimal lies within f64's range, so `to_f64` always yields a value
/// (possibly rounded); the fallback arm is unreachable.
pub fn from_decimal(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(f64::NAN)
}

/// Narrow a boundary year to the core's `Year`.
pub fn to_year(year: u32) -> Result<Year> {
    Year::try_from(year).map_err(|_| ComplianceError::invalid("year", "outside 0..=65535"))
}
