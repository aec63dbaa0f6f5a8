//! Oracle availability errors.

use crate::error::{CombatError, ErrorSeverity};

/// Raised when the environment lacks an oracle a code path requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("ability oracle not available")]
    AbilitiesNotAvailable,

    #[error("item oracle not available")]
    ItemsNotAvailable,

    #[error("tables oracle not available")]
    TablesNotAvailable,

    #[error("rng oracle not available")]
    RngNotAvailable,
}

impl CombatError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AbilitiesNotAvailable => "ORACLE_ABILITIES_NOT_AVAILABLE",
            Self::ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            Self::TablesNotAvailable => "ORACLE_TABLES_NOT_AVAILABLE",
            Self::RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
        }
    }
}
