//! Common error infrastructure for skirmish-core.
//!
//! Domain-specific errors (e.g. `BattleError`, `MoveError`) live in their
//! respective modules; this module provides the shared classification layer.
//!
//! Two failure classes matter to the resolver:
//! - **Validation** failures are fatal to the triggering call and surface as
//!   `Err` without touching committed battle state.
//! - **Soft** failures never become `Err` at all: they are absorbed into the
//!   combat log as narration (e.g. a move fizzling on insufficient EP). The
//!   `Soft` severity exists for errors that are *reported* but must not abort
//!   a round.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// In-round failure absorbed as narration; the round continues.
    Soft,

    /// Invalid input or wrong-state call; reject without retry.
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    Internal,

    /// Unrecoverable: a required collaborator is missing or state is corrupt.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Soft => "soft",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the round may continue after this error.
    pub const fn is_soft(&self) -> bool {
        matches!(self, Self::Soft)
    }
}

/// Common trait for all skirmish-core errors.
///
/// Implemented by every domain error enum so the embedder can route failures
/// uniformly (log-and-continue vs. surface-to-caller).
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
