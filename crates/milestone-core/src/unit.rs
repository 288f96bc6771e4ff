//! The closed set of time units milestones are counted in.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::calendar::{
    MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND, MILLIS_PER_WEEK,
};
use crate::error::MilestoneError;

/// A time unit an elapsed count can be expressed in.
///
/// The set is fixed. Iteration order of [`Unit::ALL`] determines the merge
/// order of per-unit results before the final sort, but carries no meaning
/// beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Unit {
    /// All units, from coarsest to finest.
    pub const ALL: [Unit; 7] = [
        Unit::Years,
        Unit::Months,
        Unit::Weeks,
        Unit::Days,
        Unit::Hours,
        Unit::Minutes,
        Unit::Seconds,
    ];

    /// Fixed millisecond length of one unit, or `None` for the
    /// calendar-irregular units (years, months).
    pub fn millis(self) -> Option<i64> {
        match self {
            Unit::Years | Unit::Months => None,
            Unit::Weeks => Some(MILLIS_PER_WEEK),
            Unit::Days => Some(MILLIS_PER_DAY),
            Unit::Hours => Some(MILLIS_PER_HOUR),
            Unit::Minutes => Some(MILLIS_PER_MINUTE),
            Unit::Seconds => Some(MILLIS_PER_SECOND),
        }
    }

    /// Minimum candidate count below which a milestone is not reported.
    ///
    /// Tuned to suppress trivially small intervals for fine-grained units:
    /// "1 year" is worth reporting, "100 seconds" is not.
    pub fn min_count(self) -> i64 {
        match self {
            Unit::Years => 1,
            Unit::Months => 10,
            Unit::Weeks => 10,
            Unit::Days => 100,
            Unit::Hours => 1_000,
            Unit::Minutes => 100_000,
            Unit::Seconds => 10_000_000,
        }
    }

    /// Lower-case name, as used in record identifiers and on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Unit::Years => "years",
            Unit::Months => "months",
            Unit::Weeks => "weeks",
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = MilestoneError;

    /// Parses a lower-case unit name; the singular form is accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "years" | "year" => Ok(Unit::Years),
            "months" | "month" => Ok(Unit::Months),
            "weeks" | "week" => Ok(Unit::Weeks),
            "days" | "day" => Ok(Unit::Days),
            "hours" | "hour" => Ok(Unit::Hours),
            "minutes" | "minute" => Ok(Unit::Minutes),
            "seconds" | "second" => Ok(Unit::Seconds),
            _ => Err(MilestoneError::InvalidUnit(s.to_string())),
        }
    }
}
