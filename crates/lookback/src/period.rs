//! Period expressions: parsing and unit normalization.
//!
//! A period expression is free text like `"1y2mo"` or `"28 days"`: up to
//! four amount+unit groups in fixed order (years, months, weeks, days), each
//! a decimal amount followed by optional whitespace and a unit token.
//! [`parse`] turns the text into raw [`PeriodComponents`]; [`normalize`]
//! folds excess weeks into months and excess months into years.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::error::{PeriodError, Result};

/// One optional amount+unit group per field, in the order the groups must
/// appear in the input. Anchored at the start only: text after the
/// recognized prefix does not participate in the match.
static PERIOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(\d+)\s*(?:y|yrs?|years?))?(?:(\d+)\s*(?:mo|months?))?(?:(\d+)\s*(?:w|weeks?))?(?:(\d+)\s*(?:d|days?))?",
    )
    .expect("valid period regex")
});

/// A relative period broken into calendar units.
///
/// All fields are magnitudes; direction is applied at the shift stage. The
/// all-zero value is the [`Default`] and stands for "no period" — [`parse`]
/// rejects it rather than returning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PeriodComponents {
    /// Literal days. Never folded into weeks or months.
    pub days: u32,
    /// Weeks; [`normalize`] folds every 4 into a month.
    pub weeks: u32,
    /// Months; [`normalize`] folds every 12 into a year.
    pub months: u32,
    /// Years.
    pub years: u32,
}

/// Parse a period expression into raw, un-normalized [`PeriodComponents`].
///
/// Unit tokens are case-sensitive: years `y`/`yr`/`yrs`/`year`/`years`,
/// months `mo`/`month`/`months`, weeks `w`/`week`/`weeks`, days
/// `d`/`day`/`days`. Whitespace between an amount and its unit is optional.
/// Groups absent from the input contribute zero.
///
/// Matching stops at the first text it cannot recognize, and whatever
/// follows is ignored rather than rejected — `"1d ok"` parses as one day.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidFormat`] if no group matches at the start
/// of a non-empty input, and [`PeriodError::EmptyPeriod`] if the input is
/// empty or every amount parses to zero.
///
/// # Examples
///
/// ```
/// use lookback::{parse, PeriodComponents};
///
/// let raw = parse("2w3d").unwrap();
/// assert_eq!(raw, PeriodComponents { weeks: 2, days: 3, ..Default::default() });
/// ```
pub fn parse(text: &str) -> Result<PeriodComponents> {
    let caps = PERIOD_RE
        .captures(text)
        .ok_or(PeriodError::InvalidFormat)?;

    // The groups are all optional, so garbage yields an empty match rather
    // than no match; only a genuinely empty input is an empty period.
    if caps[0].is_empty() && !text.is_empty() {
        return Err(PeriodError::InvalidFormat);
    }

    let raw = PeriodComponents {
        years: parse_amount(&caps, 1),
        months: parse_amount(&caps, 2),
        weeks: parse_amount(&caps, 3),
        days: parse_amount(&caps, 4),
    };

    if raw == PeriodComponents::default() {
        return Err(PeriodError::EmptyPeriod);
    }

    Ok(raw)
}

/// Amount of one capture group; absent groups are zero. Matched text is all
/// digits by construction, so only a value past `u32::MAX` can fail the
/// conversion — those saturate.
fn parse_amount(caps: &Captures<'_>, group: usize) -> u32 {
    caps.get(group)
        .map_or(0, |m| m.as_str().parse().unwrap_or(u32::MAX))
}

/// Fold a raw period into canonical units: every 4 weeks becomes a month,
/// then every 12 months becomes a year. Days are left untouched — they
/// never promote to weeks or months.
pub fn normalize(raw: PeriodComponents) -> PeriodComponents {
    let months = raw.months.saturating_add(raw.weeks / 4);

    PeriodComponents {
        days: raw.days,
        weeks: raw.weeks % 4,
        months: months % 12,
        years: raw.years.saturating_add(months / 12),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
