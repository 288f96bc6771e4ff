//! Property tests for the range-window engine.
//!
//! The per-unit candidate bounds carry empirical slack (+2 for calendar
//! units, +1 for fixed-duration units) to absorb clamping effects. These
//! tests check the bounds are sufficient — no in-window milestone is ever
//! missed — rather than trusting the constants.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use milestone_core::{
    calendar, classify, compute_window, generate, ComputeOptions, Locale, PatternSelection, Unit,
};

fn arb_instant() -> impl Strategy<Value = NaiveDateTime> {
    (
        1950i32..2080,
        1u32..=12,
        1u32..=28,
        0u32..24,
        0u32..60,
        0u32..60,
    )
        .prop_map(|(y, mo, d, h, mi, s)| {
            NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_opt(h, mi, s)
                .unwrap()
        })
}

fn arb_selection() -> impl Strategy<Value = PatternSelection> {
    (any::<bool>(), any::<bool>()).prop_map(|(rounded, repdigit)| PatternSelection {
        rounded,
        repdigit,
    })
}

fn options(selection: PatternSelection, now: NaiveDateTime) -> ComputeOptions {
    ComputeOptions {
        label: String::new(),
        units: Unit::ALL.to_vec(),
        patterns: selection,
        locale: Locale::De,
        now,
    }
}

/// A deliberately oversized candidate bound for `unit`, used to brute-force
/// everything the engine could conceivably have reported.
fn oversized_bound(unit: Unit, start: NaiveDateTime, to: NaiveDateTime) -> i64 {
    match unit.millis() {
        None if unit == Unit::Years => calendar::years_between(start, to) + 50,
        None => calendar::months_between(start, to) + 600,
        Some(per) => (to - start).num_milliseconds().div_euclid(per) + 10_000,
    }
}

proptest! {
    #[test]
    fn no_in_window_candidate_is_missed(
        start in arb_instant(),
        window_start_offset_days in 0i64..6_000,
        window_len_days in 0i64..6_000,
        selection in arb_selection(),
    ) {
        let from = calendar::add(start, Unit::Days, window_start_offset_days).unwrap();
        let to = calendar::add(from, Unit::Days, window_len_days).unwrap();

        let records = compute_window(start, &options(selection, start), from, to);
        let reported: std::collections::HashSet<(Unit, i64)> =
            records.iter().map(|r| (r.unit, r.n)).collect();

        for unit in Unit::ALL {
            for n in generate(oversized_bound(unit, start, to), selection) {
                let Some(instant) = calendar::add(start, unit, n) else { continue };
                if instant >= from && instant <= to && n >= unit.min_count() {
                    prop_assert!(
                        reported.contains(&(unit, n)),
                        "missed {n} {unit} at {instant}"
                    );
                }
            }
        }
    }

    #[test]
    fn records_are_contained_sorted_and_classified(
        start in arb_instant(),
        window_len_days in 0i64..10_000,
        selection in arb_selection(),
    ) {
        let from = start;
        let to = calendar::add(start, Unit::Days, window_len_days).unwrap();

        let records = compute_window(start, &options(selection, start), from, to);

        for record in &records {
            prop_assert!(record.instant >= from && record.instant <= to);
            prop_assert!(record.n >= record.unit.min_count());
            prop_assert_eq!(record.patterns, classify(record.n));
        }
        for pair in records.windows(2) {
            prop_assert!(
                (pair[0].instant, pair[0].n) <= (pair[1].instant, pair[1].n),
                "out of order: {} then {}", pair[0].id, pair[1].id
            );
        }
    }

    #[test]
    fn identical_inputs_yield_identical_output(
        start in arb_instant(),
        window_len_days in 0i64..4_000,
    ) {
        let selection = PatternSelection { rounded: true, repdigit: true };
        let to = calendar::add(start, Unit::Days, window_len_days).unwrap();

        let first = compute_window(start, &options(selection, start), start, to);
        let second = compute_window(start, &options(selection, start), start, to);

        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            prop_assert_eq!(&a.id, &b.id);
            prop_assert_eq!(a.instant, b.instant);
            prop_assert_eq!(&a.description, &b.description);
        }
    }

    #[test]
    fn inverted_window_is_always_empty(
        start in arb_instant(),
        gap_days in 1i64..5_000,
        selection in arb_selection(),
    ) {
        let from = calendar::add(start, Unit::Days, gap_days).unwrap();
        // to strictly precedes from
        let records = compute_window(start, &options(selection, start), from, start);
        prop_assert!(records.is_empty());
    }
}
