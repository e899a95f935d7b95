//! Orders mentorships so the most contended calls come first.
//!
//! Ordering, from most to least significant:
//!
//! 1. Scheduled mentorships before unscheduled ones.
//! 2. Higher max concurrency (the busiest bucket the call sits in) first.
//! 3. Earlier call start first.
//!
//! Anything still tied keeps its input order.

use std::cmp::{Ordering, Reverse};

use tracing::debug;

use crate::bucket::{Bucketizer, Offset};
use crate::histogram::Histogram;
use crate::schedule::Mentorship;

/// Sort key for one mentorship against a finished histogram.
///
/// The derived `Ord` is the ranking order: variants compare before fields, so
/// every `Scheduled` key sorts ahead of `Unscheduled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContentionKey {
    Scheduled {
        max_concurrency: Reverse<u32>,
        first_offset: Offset,
    },
    Unscheduled,
}

impl ContentionKey {
    pub fn max_concurrency(&self) -> Option<u32> {
        match self {
            ContentionKey::Scheduled {
                max_concurrency: Reverse(max),
                ..
            } => Some(*max),
            ContentionKey::Unscheduled => None,
        }
    }
}

/// Compute the ranking key for `mentorship`.
pub fn contention_key(
    mentorship: &Mentorship,
    histogram: &Histogram,
    bucketizer: &Bucketizer,
) -> ContentionKey {
    match &mentorship.schedule {
        Some(schedule) => {
            let buckets = bucketizer.buckets(schedule);
            ContentionKey::Scheduled {
                max_concurrency: Reverse(histogram.max_concurrency(&buckets)),
                first_offset: buckets
                    .first()
                    .copied()
                    .unwrap_or_else(|| schedule.start_minute()),
            }
        }
        None => ContentionKey::Unscheduled,
    }
}

/// Compare two mentorships by contention. `Less` means `a` ranks first.
pub fn compare_contention(
    a: &Mentorship,
    b: &Mentorship,
    histogram: &Histogram,
    bucketizer: &Bucketizer,
) -> Ordering {
    contention_key(a, histogram, bucketizer).cmp(&contention_key(b, histogram, bucketizer))
}

/// Return `mentorships` in contention order without touching the input.
///
/// Each mentorship's bucket set is derived once and cached for the sort. The sort
/// is stable, so ties (including all unscheduled mentorships) keep input order.
pub fn rank<'a>(
    mentorships: &'a [Mentorship],
    histogram: &Histogram,
    bucketizer: &Bucketizer,
) -> Vec<&'a Mentorship> {
    let mut ranked: Vec<&Mentorship> = mentorships.iter().collect();
    ranked.sort_by_cached_key(|m| contention_key(m, histogram, bucketizer));

    debug!(
        mentorships = ranked.len(),
        top = ranked.first().map(|m| m.id.as_str()),
        "ranked mentorships by contention"
    );

    ranked
}

/// Highest bucket count in `histogram`, 0 when empty.
pub fn global_max(histogram: &Histogram) -> u32 {
    histogram.global_max()
}
