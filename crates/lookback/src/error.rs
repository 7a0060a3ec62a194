//! Error types for period parsing.

use thiserror::Error;

/// Why a period expression was rejected.
///
/// Both kinds are terminal and deterministic for a given input; callers
/// distinguish them by variant or by the stable `Display` message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodError {
    /// No recognized amount+unit group at the start of the input.
    #[error("invalid format")]
    InvalidFormat,

    /// The input matched the grammar but every amount was zero.
    #[error("empty period")]
    EmptyPeriod,
}

pub type Result<T> = std::result::Result<T, PeriodError>;
