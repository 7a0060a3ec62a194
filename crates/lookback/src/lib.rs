//! # lookback
//!
//! Parse human-written relative periods ("1y2mo", "28 days") and shift a
//! reference timestamp that far into the past.
//!
//! The pipeline has three pure stages, composed by [`since`]:
//!
//! - [`parse`] — free text → raw [`PeriodComponents`]
//! - [`normalize`] — fold weeks into months and months into years
//! - [`shift()`] — apply the signed offset with calendar-aware arithmetic
//!
//! No stage touches the system clock; the caller provides the reference
//! instant, keeping every operation deterministic and testable.
//!
//! ## Modules
//!
//! - [`period`] — period expression parsing and unit normalization
//! - [`shift`](mod@shift) — calendar arithmetic and the [`since`] entry point
//! - [`error`] — error types

pub mod error;
pub mod period;
pub mod shift;

pub use error::{PeriodError, Result};
pub use period::{normalize, parse, PeriodComponents};
pub use shift::{shift, since};
