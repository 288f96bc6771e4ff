//! Locale-dependent label text for milestone records.
//!
//! A [`Locale`] picks the unit-label table, the relative-phrase shape, the
//! thousands separator of formatted counts, and the long date format used in
//! record descriptions. It affects label text only — never any numeric
//! computation. Everything here is a pure function of its arguments; there
//! is no process-wide formatter state.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

use crate::calendar::MEAN_GREGORIAN_YEAR_DAYS;
use crate::error::MilestoneError;
use crate::unit::Unit;

/// Mean Gregorian month length in days, used only for relative phrasing.
const MEAN_MONTH_DAYS: f64 = 30.44;

/// Supported label languages. German is the default, matching the
/// application this engine serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    De,
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::De => "de",
            Locale::En => "en",
        })
    }
}

impl FromStr for Locale {
    type Err = MilestoneError;

    /// Parses a locale tag by its primary subtag: `"en"`, `"en-US"` and
    /// `"en_GB"` all select English.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "de" => Ok(Locale::De),
            "en" => Ok(Locale::En),
            _ => Err(MilestoneError::InvalidLocale(s.to_string())),
        }
    }
}

// ── Unit labels ─────────────────────────────────────────────────────────────

/// German labels: nominative singular, nominative plural, dative plural.
fn labels_de(unit: Unit) -> (&'static str, &'static str, &'static str) {
    match unit {
        Unit::Years => ("Jahr", "Jahre", "Jahren"),
        Unit::Months => ("Monat", "Monate", "Monaten"),
        Unit::Weeks => ("Woche", "Wochen", "Wochen"),
        Unit::Days => ("Tag", "Tage", "Tagen"),
        Unit::Hours => ("Stunde", "Stunden", "Stunden"),
        Unit::Minutes => ("Minute", "Minuten", "Minuten"),
        Unit::Seconds => ("Sekunde", "Sekunden", "Sekunden"),
    }
}

/// English labels: singular, plural.
fn labels_en(unit: Unit) -> (&'static str, &'static str) {
    match unit {
        Unit::Years => ("year", "years"),
        Unit::Months => ("month", "months"),
        Unit::Weeks => ("week", "weeks"),
        Unit::Days => ("day", "days"),
        Unit::Hours => ("hour", "hours"),
        Unit::Minutes => ("minute", "minutes"),
        Unit::Seconds => ("second", "seconds"),
    }
}

/// The display label for `n` of `unit`, correctly pluralized.
pub fn unit_label(unit: Unit, n: i64, locale: Locale) -> &'static str {
    match locale {
        Locale::De => {
            let (singular, plural, _) = labels_de(unit);
            if n == 1 { singular } else { plural }
        }
        Locale::En => {
            let (singular, plural) = labels_en(unit);
            if n == 1 { singular } else { plural }
        }
    }
}

/// German dative form, used after the prepositions "in" and "vor".
fn unit_label_dative(unit: Unit, n: i64) -> &'static str {
    let (singular, _, dative) = labels_de(unit);
    if n == 1 { singular } else { dative }
}

// ── Count formatting ────────────────────────────────────────────────────────

/// Format a count with locale digit grouping: `10.000` (de), `10,000` (en).
pub fn format_count(n: i64, locale: Locale) -> String {
    let separator = match locale {
        Locale::De => '.',
        Locale::En => ',',
    };
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

// ── Relative phrase ─────────────────────────────────────────────────────────

/// A "time until/since" phrase for `then` as seen from `now`, in the
/// largest nonzero unit: "in 3 years" / "3 years ago", German with dative
/// ("in 3 Jahren" / "vor 3 Jahren").
///
/// Month and year magnitudes use mean lengths (30.44 and 365.2425 days);
/// this is display text, not calendar arithmetic.
pub fn relative_phrase(now: NaiveDateTime, then: NaiveDateTime, locale: Locale) -> String {
    let future = then >= now;
    let millis = (then - now).num_milliseconds().unsigned_abs();

    let seconds = (millis / 1_000) as i64;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let weeks = days / 7;
    let months = (days as f64 / MEAN_MONTH_DAYS).floor() as i64;
    let years = (days as f64 / MEAN_GREGORIAN_YEAR_DAYS).floor() as i64;

    let (n, unit) = if years > 0 {
        (years, Unit::Years)
    } else if months > 0 {
        (months, Unit::Months)
    } else if weeks > 0 {
        (weeks, Unit::Weeks)
    } else if days > 0 {
        (days, Unit::Days)
    } else if hours > 0 {
        (hours, Unit::Hours)
    } else if minutes > 0 {
        (minutes, Unit::Minutes)
    } else {
        (seconds, Unit::Seconds)
    };

    match locale {
        Locale::En => {
            let label = unit_label(unit, n, Locale::En);
            if future {
                format!("in {n} {label}")
            } else {
                format!("{n} {label} ago")
            }
        }
        Locale::De => {
            let label = unit_label_dative(unit, n);
            if future {
                format!("in {n} {label}")
            } else {
                format!("vor {n} {label}")
            }
        }
    }
}

// ── Long date format ────────────────────────────────────────────────────────

fn weekday_de(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Montag",
        Weekday::Tue => "Dienstag",
        Weekday::Wed => "Mittwoch",
        Weekday::Thu => "Donnerstag",
        Weekday::Fri => "Freitag",
        Weekday::Sat => "Samstag",
        Weekday::Sun => "Sonntag",
    }
}

fn month_de(month: u32) -> &'static str {
    match month {
        1 => "Januar",
        2 => "Februar",
        3 => "März",
        4 => "April",
        5 => "Mai",
        6 => "Juni",
        7 => "Juli",
        8 => "August",
        9 => "September",
        10 => "Oktober",
        11 => "November",
        _ => "Dezember",
    }
}

/// A long, human-facing rendering of an instant, e.g.
/// "Saturday, January 1, 2000 at 12:00 PM" or
/// "Samstag, 1. Januar 2000 um 12:00 Uhr".
pub fn format_long(instant: NaiveDateTime, locale: Locale) -> String {
    match locale {
        Locale::En => instant.format("%A, %B %-d, %Y at %-I:%M %p").to_string(),
        Locale::De => format!(
            "{}, {}. {} {} um {:02}:{:02} Uhr",
            weekday_de(instant.weekday()),
            instant.day(),
            month_de(instant.month()),
            instant.year(),
            instant.hour(),
            instant.minute()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_locale_from_tag() {
        assert_eq!("de".parse::<Locale>().unwrap(), Locale::De);
        assert_eq!("de-DE".parse::<Locale>().unwrap(), Locale::De);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("en_GB".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
    }

    #[test]
    fn test_locale_from_tag_rejects_unknown() {
        let err = "fr-FR".parse::<Locale>().unwrap_err();
        assert!(err.to_string().contains("Invalid locale"), "got: {err}");
    }

    #[test]
    fn test_unit_label_pluralization() {
        assert_eq!(unit_label(Unit::Years, 1, Locale::En), "year");
        assert_eq!(unit_label(Unit::Years, 10, Locale::En), "years");
        assert_eq!(unit_label(Unit::Years, 1, Locale::De), "Jahr");
        assert_eq!(unit_label(Unit::Years, 10, Locale::De), "Jahre");
        assert_eq!(unit_label(Unit::Days, 100, Locale::De), "Tage");
    }

    #[test]
    fn test_format_count_grouping() {
        assert_eq!(format_count(0, Locale::En), "0");
        assert_eq!(format_count(999, Locale::En), "999");
        assert_eq!(format_count(1_000, Locale::En), "1,000");
        assert_eq!(format_count(10_000, Locale::De), "10.000");
        assert_eq!(format_count(1_234_567, Locale::En), "1,234,567");
        assert_eq!(format_count(999_999_999_999, Locale::De), "999.999.999.999");
    }

    #[test]
    fn test_format_count_negative() {
        assert_eq!(format_count(-1_000, Locale::En), "-1,000");
    }

    #[test]
    fn test_relative_phrase_future_years() {
        let now = at(2000, 1, 1, 12, 0, 0);
        let then = at(2010, 1, 1, 12, 0, 0);
        assert_eq!(relative_phrase(now, then, Locale::En), "in 10 years");
        assert_eq!(relative_phrase(now, then, Locale::De), "in 10 Jahren");
    }

    #[test]
    fn test_relative_phrase_past_years() {
        let now = at(2010, 1, 1, 12, 0, 0);
        let then = at(2007, 1, 1, 12, 0, 0);
        assert_eq!(relative_phrase(now, then, Locale::En), "3 years ago");
        assert_eq!(relative_phrase(now, then, Locale::De), "vor 3 Jahren");
    }

    #[test]
    fn test_relative_phrase_picks_largest_unit() {
        let now = at(2020, 1, 1, 0, 0, 0);
        // 40 days is past one mean month but under a year
        assert_eq!(
            relative_phrase(now, at(2020, 2, 10, 0, 0, 0), Locale::En),
            "in 1 month"
        );
        // 10 days → weeks win over days
        assert_eq!(
            relative_phrase(now, at(2020, 1, 11, 0, 0, 0), Locale::En),
            "in 1 week"
        );
        assert_eq!(
            relative_phrase(now, at(2020, 1, 3, 0, 0, 0), Locale::En),
            "in 2 days"
        );
        assert_eq!(
            relative_phrase(now, at(2020, 1, 1, 5, 0, 0), Locale::En),
            "in 5 hours"
        );
        assert_eq!(
            relative_phrase(now, at(2020, 1, 1, 0, 30, 0), Locale::En),
            "in 30 minutes"
        );
        assert_eq!(
            relative_phrase(now, at(2020, 1, 1, 0, 0, 45), Locale::En),
            "in 45 seconds"
        );
    }

    #[test]
    fn test_relative_phrase_singular_german_dative() {
        let now = at(2020, 1, 1, 0, 0, 0);
        assert_eq!(
            relative_phrase(now, at(2020, 1, 2, 0, 0, 0), Locale::De),
            "in 1 Tag"
        );
        assert_eq!(
            relative_phrase(now, at(2020, 1, 3, 0, 0, 0), Locale::De),
            "in 2 Tagen"
        );
    }

    #[test]
    fn test_relative_phrase_zero_distance() {
        let now = at(2020, 1, 1, 0, 0, 0);
        assert_eq!(relative_phrase(now, now, Locale::En), "in 0 seconds");
    }

    #[test]
    fn test_format_long_english() {
        let formatted = format_long(at(2000, 1, 1, 12, 0, 0), Locale::En);
        assert_eq!(formatted, "Saturday, January 1, 2000 at 12:00 PM");
    }

    #[test]
    fn test_format_long_german() {
        let formatted = format_long(at(2000, 1, 1, 12, 0, 0), Locale::De);
        assert_eq!(formatted, "Samstag, 1. Januar 2000 um 12:00 Uhr");
    }

    #[test]
    fn test_format_long_morning_hour() {
        let formatted = format_long(at(2024, 2, 29, 9, 5, 0), Locale::En);
        assert_eq!(formatted, "Thursday, February 29, 2024 at 9:05 AM");
        let formatted = format_long(at(2024, 2, 29, 9, 5, 0), Locale::De);
        assert_eq!(formatted, "Donnerstag, 29. Februar 2024 um 09:05 Uhr");
    }
}
