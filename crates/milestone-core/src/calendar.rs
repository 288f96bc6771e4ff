//! Calendar-correct date arithmetic over naive local instants.
//!
//! Years and months are calendar-irregular: adding them moves through the
//! calendar and clamps the day-of-month to the last valid day of the target
//! month (Feb 29 + 1 year → Feb 28, Jan 31 + 1 month → Feb 28/29). The
//! remaining units are fixed millisecond durations.
//!
//! All functions take explicit inputs and never read the system clock. No
//! timezone conversion happens here: an instant is a naive local-calendar
//! value, and the caller decides what "local" means.

use chrono::{Datelike, Duration, Months, NaiveDateTime};

use crate::unit::Unit;

// ── Duration constants (milliseconds) ───────────────────────────────────────

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60_000;
pub const MILLIS_PER_HOUR: i64 = 3_600_000;
pub const MILLIS_PER_DAY: i64 = 86_400_000;
pub const MILLIS_PER_WEEK: i64 = 604_800_000;

/// Mean Gregorian year length in days, used only to bound candidate search.
pub const MEAN_GREGORIAN_YEAR_DAYS: f64 = 365.2425;

// ── add ─────────────────────────────────────────────────────────────────────

/// Add a signed count of `unit` to `instant`.
///
/// Year and month addition clamp the day-of-month: if the target month is
/// shorter than the original day allows, the result lands on the last valid
/// day of that month. Week/day/hour/minute/second addition is pure
/// fixed-duration math with no calendar irregularities.
///
/// Returns `None` when the result falls outside chrono's representable
/// range (roughly ±262,000 years), which cannot happen for counts bounded
/// by a calendar-year window.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use milestone_core::{calendar, Unit};
///
/// let leap = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let next = calendar::add(leap, Unit::Years, 1).unwrap();
/// assert_eq!(next.date(), NaiveDate::from_ymd_opt(2021, 2, 28).unwrap());
/// ```
pub fn add(instant: NaiveDateTime, unit: Unit, n: i64) -> Option<NaiveDateTime> {
    match unit {
        Unit::Years => add_months_clamped(instant, n.checked_mul(12)?),
        Unit::Months => add_months_clamped(instant, n),
        Unit::Weeks | Unit::Days | Unit::Hours | Unit::Minutes | Unit::Seconds => {
            let per = unit.millis()?;
            let delta = Duration::try_milliseconds(n.checked_mul(per)?)?;
            instant.checked_add_signed(delta)
        }
    }
}

/// Month arithmetic with day-of-month clamping, shared by years and months.
fn add_months_clamped(instant: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = u32::try_from(months.unsigned_abs()).ok()?;
    if months >= 0 {
        instant.checked_add_months(Months::new(magnitude))
    } else {
        instant.checked_sub_months(Months::new(magnitude))
    }
}

// ── Distances ───────────────────────────────────────────────────────────────

/// Signed month distance from `a` to `b`, ignoring day-of-month.
pub fn months_between(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    (i64::from(b.year()) - i64::from(a.year())) * 12
        + (i64::from(b.month0()) - i64::from(a.month0()))
}

/// Floor of elapsed days from `a` to `b` divided by the mean Gregorian year.
///
/// This is a search bound, not exact calendar arithmetic: it may be off by
/// one around anniversaries, which the engine absorbs with slack.
pub fn years_between(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    let millis = (b - a).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY as f64 / MEAN_GREGORIAN_YEAR_DAYS).floor() as i64
}
