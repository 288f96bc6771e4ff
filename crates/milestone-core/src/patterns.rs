//! Candidate generation and classification of "noteworthy" counts.
//!
//! Two pattern families exist: **rounded** numbers (powers of ten and
//! single-digit multiples of powers of ten: 10, 20, …, 90, 100, 200, …) and
//! **repdigits** (a nonzero digit repeated at least twice: 11, 22, …, 999).
//!
//! Generation ([`generate`]) and classification ([`classify`]) are
//! independent operations that must agree: every count the generator emits
//! for a family classifies as a member of that family. The generator is
//! asymptotically cheap — O(log₁₀ max) rounded candidates and a constant
//! number of repdigits — so it never dominates a window computation.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::Serialize;

use crate::error::MilestoneError;

/// Longest repdigit generated, in decimal digits (999 999 999 999).
pub const REPDIGIT_MAX_LEN: u32 = 12;

// ── Selection and classification types ──────────────────────────────────────

/// Which pattern families a caller wants candidates from.
///
/// Both flags false is allowed and yields no candidates; rejecting that is
/// an upstream validation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PatternSelection {
    pub rounded: bool,
    pub repdigit: bool,
}

impl FromStr for PatternSelection {
    type Err = MilestoneError;

    /// Parses a comma-separated family list, e.g. `"rounded,repdigit"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut selection = PatternSelection::default();
        for part in s.split(',') {
            match part.trim() {
                "rounded" => selection.rounded = true,
                "repdigit" | "repdigits" => selection.repdigit = true,
                other => return Err(MilestoneError::InvalidPattern(other.to_string())),
            }
        }
        Ok(selection)
    }
}

/// The pattern families a single count belongs to.
///
/// Distinct from [`PatternSelection`]: a selection states what was asked
/// for, flags state what a number *is*. A record can carry `rounded: true`
/// even if the run only requested repdigits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternFlags {
    pub rounded: bool,
    pub repdigit: bool,
}

// ── Classification ──────────────────────────────────────────────────────────

/// True iff `n` is a power of ten or a single-digit multiple of one.
///
/// One unified test: strip all trailing factors of ten, then the remainder
/// must be a single nonzero digit — and the original value must be at least
/// 10, so bare single digits never count.
pub fn is_rounded(n: i64) -> bool {
    if n < 10 {
        return false;
    }
    let mut m = n;
    while m % 10 == 0 {
        m /= 10;
    }
    (1..=9).contains(&m)
}

/// True iff the decimal representation of `n` is a single nonzero digit
/// repeated at least twice.
pub fn is_repdigit(n: i64) -> bool {
    let s = n.to_string();
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0] != b'0' && bytes.iter().all(|&b| b == bytes[0])
}

/// Classify a single count. Independent of what was requested at
/// generation time.
pub fn classify(n: i64) -> PatternFlags {
    PatternFlags {
        rounded: is_rounded(n),
        repdigit: is_repdigit(n),
    }
}

// ── Generation ──────────────────────────────────────────────────────────────

/// All rounded candidates ≤ `max_n`: k·10^m for k in 1..=9, m ≥ 1.
fn push_rounded(max_n: i64, out: &mut BTreeSet<i64>) {
    let mut base = 10i64;
    while base <= max_n {
        for k in 1..=9 {
            let v = k * base;
            if v <= max_n {
                out.insert(v);
            }
        }
        base = match base.checked_mul(10) {
            Some(next) => next,
            None => break,
        };
    }
}

/// All repdigits ≤ `max_n` up to [`REPDIGIT_MAX_LEN`] digits.
fn push_repdigits(max_n: i64, out: &mut BTreeSet<i64>) {
    for digit in 1..=9i64 {
        let mut v = digit;
        for _ in 2..=REPDIGIT_MAX_LEN {
            v = v * 10 + digit;
            if v <= max_n {
                out.insert(v);
            }
        }
    }
}

/// The sorted, duplicate-free set of candidate counts ≤ `max_n` for the
/// requested pattern families.
///
/// The families are unioned through set semantics; nothing here assumes
/// they are disjoint, even though under the current definitions they are.
/// A `max_n` below the smallest candidate (or negative) yields an empty
/// vector.
pub fn generate(max_n: i64, selection: PatternSelection) -> Vec<i64> {
    let mut set = BTreeSet::new();
    if selection.rounded {
        push_rounded(max_n, &mut set);
    }
    if selection.repdigit {
        push_repdigits(max_n, &mut set);
    }
    set.into_iter().collect()
}
