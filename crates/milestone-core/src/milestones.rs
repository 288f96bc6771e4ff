//! The range-window engine: enumerate, filter, and sort milestones.
//!
//! [`compute_window`] turns (start instant, unit set, pattern selection,
//! window) into the ordered list of milestone records. It is a pure,
//! synchronous computation: no I/O, no clock access, no shared state, and
//! identical inputs always yield an identical, identically-ordered list.
//! Callers that need responsiveness offload it and discard superseded
//! results at their own boundary; there is no cancellation hook here.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::calendar;
use crate::locale::{self, Locale};
use crate::patterns::{self, PatternFlags, PatternSelection};
use crate::unit::Unit;

// ── Input and output types ──────────────────────────────────────────────────

/// Caller-supplied computation parameters beyond the three instants.
#[derive(Debug, Clone)]
pub struct ComputeOptions {
    /// What the start instant marks ("Wedding", "Launch", …). Empty means
    /// the generic "Start".
    pub label: String,
    /// Units to enumerate, in merge order.
    pub units: Vec<Unit>,
    /// Which candidate families to generate.
    pub patterns: PatternSelection,
    /// Label language. Affects text only, never numeric results.
    pub locale: Locale,
    /// Anchor for the relative-time phrase. Passed explicitly so the
    /// computation stays a pure function of its arguments.
    pub now: NaiveDateTime,
}

/// One milestone: `n` units after the start instant, landing inside the
/// requested window.
///
/// Immutable once constructed; a new computation produces an entirely new
/// list. The `id` is deterministic in (unit, n, instant), so the same
/// logical milestone keeps its identifier across recomputations and callers
/// can correlate selection state against it.
#[derive(Debug, Clone, Serialize)]
pub struct MilestoneRecord {
    pub id: String,
    pub unit: Unit,
    pub n: i64,
    pub instant: NaiveDateTime,
    /// Magnitude label, e.g. "10.000 Tage".
    pub title: String,
    /// Attribution line, e.g. "seit Hochzeit".
    pub since: String,
    /// Relative-time phrase against the `now` anchor, e.g. "in 3 Jahren".
    pub relative: String,
    /// Long description, e.g. "10.000 Tage seit Samstag, 1. Januar 2000 um 12:00 Uhr".
    pub description: String,
    /// Classification of `n`, independent of the requested selection.
    pub patterns: PatternFlags,
}

// ── Engine ──────────────────────────────────────────────────────────────────

/// Compute all milestones of `start` that fall inside the inclusive window
/// `[from, to]`, sorted by instant ascending, ties broken by `n` ascending.
///
/// Per unit, an upper candidate bound is derived from the window (with
/// slack absorbing calendar clamping), candidates are generated for the
/// requested pattern families, mapped through calendar addition, and kept
/// when they land inside the window at or above the unit's reporting
/// threshold.
///
/// An inverted window (`from > to`) yields an empty list. Inputs are not
/// validated here; upstream callers reject malformed arguments before
/// invocation.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use milestone_core::{compute_window, ComputeOptions, Locale, PatternSelection, Unit};
///
/// let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let options = ComputeOptions {
///     label: "Launch".to_string(),
///     units: vec![Unit::Years],
///     patterns: PatternSelection { rounded: true, repdigit: false },
///     locale: Locale::En,
///     now: start,
/// };
/// let from = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let to = NaiveDate::from_ymd_opt(2030, 12, 31).unwrap().and_hms_opt(23, 59, 59).unwrap();
///
/// let records = compute_window(start, &options, from, to);
/// assert_eq!(records.iter().map(|r| r.n).collect::<Vec<_>>(), vec![10, 20, 30]);
/// ```
pub fn compute_window(
    start: NaiveDateTime,
    options: &ComputeOptions,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> Vec<MilestoneRecord> {
    let mut records = Vec::new();

    for &unit in &options.units {
        // The +2/+1 slack covers candidates whose clamped calendar result
        // lands earlier than the mean-length estimate suggests.
        let max_n = match unit.millis() {
            None if unit == Unit::Years => calendar::years_between(start, to) + 2,
            None => calendar::months_between(start, to) + 2,
            Some(per) => (to - start).num_milliseconds().div_euclid(per) + 1,
        };

        for n in patterns::generate(max_n, options.patterns) {
            let Some(instant) = calendar::add(start, unit, n) else {
                continue;
            };
            if instant < from || instant > to {
                continue;
            }
            if n < unit.min_count() {
                continue;
            }
            records.push(build_record(start, instant, unit, n, options));
        }
    }

    records.sort_by(|a, b| a.instant.cmp(&b.instant).then(a.n.cmp(&b.n)));
    records
}

fn build_record(
    start: NaiveDateTime,
    instant: NaiveDateTime,
    unit: Unit,
    n: i64,
    options: &ComputeOptions,
) -> MilestoneRecord {
    let count = locale::format_count(n, options.locale);
    let label = locale::unit_label(unit, n, options.locale);
    let since_word = match options.locale {
        Locale::De => "seit",
        Locale::En => "since",
    };
    let subject = if options.label.is_empty() {
        "Start"
    } else {
        options.label.as_str()
    };

    MilestoneRecord {
        id: format!("{unit}-{n}-{}", instant.and_utc().timestamp_millis()),
        unit,
        n,
        instant,
        title: format!("{count} {label}"),
        since: format!("{since_word} {subject}"),
        relative: locale::relative_phrase(options.now, instant, options.locale),
        description: format!(
            "{count} {label} {since_word} {}",
            locale::format_long(start, options.locale)
        ),
        patterns: patterns::classify(n),
    }
}
