//! Calendar-aware timestamp shifting.
//!
//! [`shift`] applies a signed period to a reference instant; [`since`] is
//! the assembled pipeline: parse, normalize, then shift into the past.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate};

use crate::error::Result;
use crate::period::{normalize, parse, PeriodComponents};

/// Apply `components`, scaled by `sign`, to `reference`.
///
/// `sign` is `-1` to shift into the past or `+1` to shift into the future.
/// Years, months, and weeks go in one calendar step; days go in a second,
/// independent step. The result keeps the reference's wall-clock time of
/// day and UTC offset.
///
/// Month and year arithmetic normalizes instead of clamping: a day past the
/// end of the target month rolls forward, so Feb 29 minus one year lands on
/// Mar 1 of the non-leap year. Results outside chrono's representable date
/// range (about ±262,000 years) clamp to that boundary.
pub fn shift(
    reference: DateTime<FixedOffset>,
    sign: i32,
    components: PeriodComponents,
) -> DateTime<FixedOffset> {
    let sign = i64::from(sign);

    let date = add_calendar(
        reference.date_naive(),
        sign * i64::from(components.years),
        sign * i64::from(components.months),
        sign * i64::from(components.weeks) * 7,
    );
    let date = add_calendar(date, 0, 0, sign * i64::from(components.days));

    let target = date.and_time(reference.time());
    reference + (target - reference.naive_local())
}

/// Shift `now` into the past by the period written in `text`.
///
/// Composes [`parse`], [`normalize`], and [`shift`] with sign `-1`. A parse
/// error propagates unchanged; there is no partial result.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use lookback::since;
///
/// let now = DateTime::parse_from_rfc3339("2022-01-01T00:00:00+09:00").unwrap();
/// let then = since("1y2mo", now).unwrap();
/// assert_eq!(then.to_rfc3339(), "2020-11-01T00:00:00+09:00");
/// ```
pub fn since(text: &str, now: DateTime<FixedOffset>) -> Result<DateTime<FixedOffset>> {
    let raw = parse(text)?;
    Ok(shift(now, -1, normalize(raw)))
}

/// Field-wise calendar addition: recompute the month index, land on the
/// first of the resulting month, then add the day offset. Day overflow
/// rolls into the following month rather than clamping to its last day.
/// Out-of-range results clamp one day inside chrono's date boundary so any
/// fixed offset still reattaches.
fn add_calendar(date: NaiveDate, years: i64, months: i64, days: i64) -> NaiveDate {
    let month_index =
        i64::from(date.year()) * 12 + i64::from(date.month0()) + years * 12 + months;
    let day_offset = i64::from(date.day()) - 1 + days;

    i32::try_from(month_index.div_euclid(12))
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, month_index.rem_euclid(12) as u32 + 1, 1))
        .and_then(|first| first.checked_add_signed(Duration::days(day_offset)))
        .unwrap_or_else(|| {
            if years + months + days < 0 {
                NaiveDate::MIN + Duration::days(1)
            } else {
                NaiveDate::MAX - Duration::days(1)
            }
        })
}

// ── Tests ───────────────────────────────────────────────────────────────────
