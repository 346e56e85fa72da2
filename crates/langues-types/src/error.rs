// ─────────────────────────────────────────────────────────────────────
// SCBE-AETHERMOORE — Langues Kernel Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all Langues Kernel failures.
///
/// Metric evaluation itself is total; these only surface at the
/// boundaries where external data enters the kernel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LanguesError {
    /// Invalid input (wrong vector length, malformed point data).
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Symbol outside the six-tongue alphabet.
    #[error("unknown tongue symbol: {0:?}")]
    UnknownTongue(String),
}

pub type LanguesResult<T> = Result<T, LanguesError>;
