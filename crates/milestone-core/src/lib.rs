//! # milestone-core
//!
//! Deterministic milestone computation over naive local-calendar instants.
//!
//! Given a starting instant, the engine finds the moments where the elapsed
//! count of a time unit (years, months, weeks, days, hours, minutes,
//! seconds) matches an aesthetically interesting numeric pattern — round
//! multiples of a power of ten, or repeated-digit numbers — inside a
//! bounded window. Everything is a pure function of explicit arguments: no
//! clock access, no timezone database, no global formatter state.
//!
//! ## Modules
//!
//! - [`calendar`] — calendar-correct date arithmetic (day clamping for
//!   years/months, fixed durations for the rest)
//! - [`patterns`] — candidate generation and pattern classification
//! - [`milestones`] — the range-window engine producing sorted records
//! - [`locale`] — unit-label tables and label formatting (German/English)
//! - [`unit`] — the closed unit set with per-unit thresholds
//! - [`error`] — error types for the parsing surfaces

pub mod calendar;
pub mod error;
pub mod locale;
pub mod milestones;
pub mod patterns;
pub mod unit;

pub use error::MilestoneError;
pub use locale::Locale;
pub use milestones::{compute_window, ComputeOptions, MilestoneRecord};
pub use patterns::{classify, generate, is_repdigit, is_rounded, PatternFlags, PatternSelection};
pub use unit::Unit;
