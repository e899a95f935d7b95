//! Per-bucket call counts across all scheduled mentorships.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bucket::{Bucketizer, Offset};
use crate::schedule::Mentorship;

/// Map from bucket-start offset to the number of calls occupying that exact
/// offset. Offsets that are not present count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Histogram {
    counts: BTreeMap<Offset, u32>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls in the bucket starting at `offset`.
    pub fn get(&self, offset: Offset) -> u32 {
        self.counts.get(&offset).copied().unwrap_or(0)
    }

    fn increment(&mut self, offset: Offset) {
        *self.counts.entry(offset).or_insert(0) += 1;
    }

    /// Highest count in any bucket, or 0 for an empty histogram.
    pub fn global_max(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Highest count among `buckets`, or 0 if none of them are present.
    pub fn max_concurrency(&self, buckets: &[Offset]) -> u32 {
        buckets.iter().map(|&b| self.get(b)).max().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Number of distinct occupied buckets.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Occupied buckets in ascending offset order.
    pub fn iter(&self) -> impl Iterator<Item = (Offset, u32)> + '_ {
        self.counts.iter().map(|(&o, &c)| (o, c))
    }

    /// Offsets whose count equals [`global_max`](Self::global_max).
    pub fn peaks(&self) -> Vec<Offset> {
        let max = self.global_max();
        if max == 0 {
            return Vec::new();
        }
        self.iter()
            .filter(|&(_, c)| c == max)
            .map(|(o, _)| o)
            .collect()
    }
}

impl FromIterator<(Offset, u32)> for Histogram {
    fn from_iter<I: IntoIterator<Item = (Offset, u32)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (offset, count) in iter {
            if count > 0 {
                *counts.entry(offset).or_insert(0) += count;
            }
        }
        Self { counts }
    }
}

/// Count how many calls occupy each bucket.
///
/// Every mentorship with a schedule adds 1 to each offset in its bucket set.
/// Unscheduled mentorships are skipped. Schedules that start outside the
/// cycle (past its end, or before it) are still counted, but logged at `warn`
/// so bad upstream data is visible.
pub fn compute_histogram(mentorships: &[Mentorship], bucketizer: &Bucketizer) -> Histogram {
    let mut histogram = Histogram::new();
    let mut scheduled = 0usize;

    for mentorship in mentorships {
        let Some(schedule) = &mentorship.schedule else {
            continue;
        };
        if !bucketizer.fits_cycle(schedule) {
            warn!(
                mentorship = %mentorship.id,
                schedule = %schedule,
                cycle_weeks = bucketizer.cycle_weeks(),
                "schedule starts outside the recurrence cycle"
            );
        }
        for offset in bucketizer.buckets(schedule) {
            histogram.increment(offset);
        }
        scheduled += 1;
    }

    debug!(
        mentorships = mentorships.len(),
        scheduled,
        buckets = histogram.len(),
        global_max = histogram.global_max(),
        "computed contention histogram"
    );

    histogram
}
