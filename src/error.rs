//! Error taxonomy shared by the regulatory dataset and the calculators.
//!
//! Every failure is local to a single lookup or calculation call. Nothing is
//! retried and nothing needs rolling back.

use crate::types::Regime;

/// Errors raised by dataset lookups and compliance calculations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComplianceError {
    #[error("{regime} has no published entry for year {year}")]
    UnknownYear { regime: Regime, year: u16 },

    #[error("unknown fuel identifier: {0:?}")]
    UnknownFuel(String),

    #[error("unknown voyage classification: {0:?}")]
    UnknownVoyageClass(String),

    #[error("unrecognised target schedule key: {0:?}")]
    UnknownKey(String),

    #[error("unknown regulatory regime: {0:?}")]
    UnknownRegime(String),

    #[error("{0} is a trading scheme and has no intensity target schedule")]
    NoTargetSchedule(Regime),

    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },

    #[error("arithmetic overflow while computing {0}")]
    Overflow(&'static str),

    #[error("invalid calculator configuration: {0}")]
    Config(String),

    #[error("regulatory dataset integrity violation: {0}")]
    Integrity(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ComplianceError>;

impl ComplianceError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidInput { field, reason }
    }
}
