//! Property-based tests for bucketing, histograms and ranking using proptest.
//!
//! These check invariants that should hold for *any* mentorship list, not just
//! the hand-picked cases in `histogram_tests.rs` and `ranker_tests.rs`.

use proptest::prelude::*;

use contention_core::{
    compute_histogram, rank, AnalyzerConfig, Bucketizer, Mentorship, Participant, Schedule,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Schedules within a 4-week cycle. Minutes are drawn from a small set so that
/// exact collisions actually happen.
fn arb_schedule() -> impl Strategy<Value = Schedule> {
    (
        0i32..4,
        0i32..7,
        8i32..11,
        prop_oneof![Just(0i32), Just(15), Just(30), Just(45), 0i32..60],
    )
        .prop_map(|(w, d, h, m)| Schedule::new(w, d, h, m))
}

fn arb_mentorships() -> impl Strategy<Value = Vec<Mentorship>> {
    prop::collection::vec(prop::option::weighted(0.8, arb_schedule()), 0..40).prop_map(
        |slots| {
            slots
                .into_iter()
                .enumerate()
                .map(|(i, schedule)| Mentorship {
                    id: format!("m{i}"),
                    mentee: Participant::new(format!("mentee{i}"), None),
                    mentor: Participant::new(format!("mentor{i}"), None),
                    schedule,
                })
                .collect()
        },
    )
}

/// Valid `(meeting, bucket)` pairs: bucket size times a whole bucket count.
fn arb_bucketizer() -> impl Strategy<Value = Bucketizer> {
    (prop_oneof![Just(5u32), Just(10), Just(15), Just(30)], 1u32..=8).prop_map(
        |(bucket, count)| {
            let config = AnalyzerConfig::default()
                .with_bucket_size(bucket)
                .with_meeting_duration(bucket * count);
            Bucketizer::new(&config).unwrap()
        },
    )
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: Bucket sets are arithmetic sequences of the right length
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn buckets_are_evenly_spaced(schedule in arb_schedule(), b in arb_bucketizer()) {
        let buckets = b.buckets(&schedule);

        prop_assert_eq!(buckets.len(), b.buckets_per_meeting() as usize);
        prop_assert_eq!(buckets[0], schedule.start_minute());
        for pair in buckets.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], i64::from(b.bucket_size_minutes()));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Histogram mass equals buckets per meeting times scheduled calls
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn histogram_total_matches_scheduled_calls(ms in arb_mentorships(), b in arb_bucketizer()) {
        let h = compute_histogram(&ms, &b);
        let scheduled = ms.iter().filter(|m| m.is_scheduled()).count() as u64;

        prop_assert_eq!(h.total(), u64::from(b.buckets_per_meeting()) * scheduled);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Histogram is idempotent and independent of input order
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn histogram_is_deterministic(ms in arb_mentorships()) {
        let b = Bucketizer::new(&AnalyzerConfig::default()).unwrap();

        let first = compute_histogram(&ms, &b);
        let second = compute_histogram(&ms, &b);
        prop_assert_eq!(&first, &second);

        let mut reversed = ms.clone();
        reversed.reverse();
        prop_assert_eq!(&first, &compute_histogram(&reversed, &b));
    }
}

// ---------------------------------------------------------------------------
// Property 4: Ranking is a permutation with scheduled entries first
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn ranking_puts_scheduled_first(ms in arb_mentorships()) {
        let b = Bucketizer::new(&AnalyzerConfig::default()).unwrap();
        let h = compute_histogram(&ms, &b);

        let ranked = rank(&ms, &h, &b);

        prop_assert_eq!(ranked.len(), ms.len());
        let first_unscheduled = ranked.iter().position(|m| !m.is_scheduled()).unwrap_or(ranked.len());
        prop_assert!(ranked[first_unscheduled..].iter().all(|m| !m.is_scheduled()));

        // Unscheduled entries keep their input order.
        let input_order: Vec<&str> = ms.iter().filter(|m| !m.is_scheduled()).map(|m| m.id.as_str()).collect();
        let ranked_order: Vec<&str> = ranked[first_unscheduled..].iter().map(|m| m.id.as_str()).collect();
        prop_assert_eq!(input_order, ranked_order);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Scheduled entries are ordered by (max concurrency desc, start asc)
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn ranking_is_sorted_by_contention(ms in arb_mentorships()) {
        let b = Bucketizer::new(&AnalyzerConfig::default()).unwrap();
        let h = compute_histogram(&ms, &b);

        let ranked = rank(&ms, &h, &b);
        let keys: Vec<(u32, i64)> = ranked
            .iter()
            .filter_map(|m| m.schedule.as_ref())
            .map(|s| {
                let buckets = b.buckets(s);
                (h.max_concurrency(&buckets), buckets[0])
            })
            .collect();

        for pair in keys.windows(2) {
            let (max_a, start_a) = pair[0];
            let (max_b, start_b) = pair[1];
            prop_assert!(max_a > max_b || (max_a == max_b && start_a <= start_b),
                "out of order: {:?} then {:?}", pair[0], pair[1]);
        }
        if let Some(&(top, _)) = keys.first() {
            prop_assert_eq!(top, h.global_max());
        }
    }
}
