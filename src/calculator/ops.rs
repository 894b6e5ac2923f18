//! FuelEU onshore power supply (OPS) at mandatory ports.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{mul, non_negative, sub, ComplianceCalculator};
use crate::error::Result;
use crate::types::{Money, Year};

/// Shore-power position of one port call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpsAssessment {
    pub year: Year,
    /// Whether the call was subject to the OPS obligation at all.
    pub required: bool,
    pub required_kwh: Decimal,
    pub supplied_kwh: Decimal,
    /// `max(0, required − supplied)` when the obligation applies.
    pub shortfall_kwh: Decimal,
    pub penalty: Money,
}

impl OpsAssessment {
    pub fn is_compliant(&self) -> bool {
        self.shortfall_kwh.is_zero()
    }
}

impl ComplianceCalculator {
    /// Check a port call against the OPS obligation.
    ///
    /// Calls at non-mandatory ports, or before the obligation is in force,
    /// are compliant with no penalty. `supplied_kwh` is `None` when the
    /// vessel did not connect.
    pub fn ops_requirement(
        &self,
        year: Year,
        mandatory_port: bool,
        required_kwh: Decimal,
        supplied_kwh: Option<Decimal>,
    ) -> Result<OpsAssessment> {
        let required_kwh = non_negative(required_kwh, "required_kwh")?;
        let supplied_kwh = non_negative(supplied_kwh.unwrap_or(Decimal::ZERO), "supplied_kwh")?;
        let ops = self.dataset.fueleu_ops;

        let required = mandatory_port && ops.in_force(year);
        let shortfall_kwh = if required && supplied_kwh < required_kwh {
            sub(required_kwh, supplied_kwh, "OPS shortfall")?
        } else {
            Decimal::ZERO
        };
        let penalty = Money::new(
            mul(shortfall_kwh, ops.shortfall_penalty_per_kwh, "OPS penalty")?,
            ops.currency,
        );

        debug!(year, required, %shortfall_kwh, %penalty, "OPS requirement");
        Ok(OpsAssessment {
            year,
            required,
            required_kwh,
            supplied_kwh,
            shortfall_kwh,
            penalty,
        })
    }
}
