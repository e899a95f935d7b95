//! Table-shaped view of a contention analysis, ready for a renderer.
//!
//! One row per mentorship in ranked order. Scheduled rows carry one cell per
//! bucket with the concurrency at that bucket; cells at the global maximum are
//! flagged as peaks so the renderer can emphasize them.

use serde::{Deserialize, Serialize};

use crate::bucket::{Bucketizer, Offset};
use crate::histogram::Histogram;
use crate::ranker;
use crate::schedule::{Mentorship, Participant, Schedule};

/// Concurrency at one bucket of one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCell {
    pub offset: Offset,
    pub count: u32,
    /// `count` equals the global maximum.
    pub is_peak: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub id: String,
    pub mentee: Participant,
    pub mentor: Participant,
    pub schedule: Option<Schedule>,
    pub schedule_label: Option<String>,
    pub max_concurrency: Option<u32>,
    /// Empty for unscheduled mentorships.
    pub cells: Vec<BucketCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentionReport {
    pub bucket_size_minutes: u32,
    pub buckets_per_meeting: u32,
    pub global_max: u32,
    /// Bucket offsets whose count equals `global_max`, ascending.
    pub peak_offsets: Vec<Offset>,
    /// Number of mentorships listed.
    pub total: usize,
    /// Number of mentorships with a schedule.
    pub scheduled: usize,
    /// Per-bucket column headings, minutes into the call.
    pub columns: Vec<String>,
    pub rows: Vec<ReportRow>,
}

impl ContentionReport {
    /// Rows that contain at least one peak cell.
    pub fn peak_rows(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows
            .iter()
            .filter(|row| row.cells.iter().any(|c| c.is_peak))
    }
}

/// Build the report for `mentorships` against an already computed `histogram`.
pub fn build_report(
    mentorships: &[Mentorship],
    histogram: &Histogram,
    bucketizer: &Bucketizer,
) -> ContentionReport {
    let global_max = ranker::global_max(histogram);

    let rows: Vec<ReportRow> = ranker::rank(mentorships, histogram, bucketizer)
        .into_iter()
        .map(|m| {
            let cells: Vec<BucketCell> = match &m.schedule {
                Some(schedule) => bucketizer
                    .buckets(schedule)
                    .into_iter()
                    .map(|offset| {
                        let count = histogram.get(offset);
                        BucketCell {
                            offset,
                            count,
                            is_peak: count == global_max,
                        }
                    })
                    .collect(),
                None => Vec::new(),
            };
            ReportRow {
                id: m.id.clone(),
                mentee: m.mentee.clone(),
                mentor: m.mentor.clone(),
                schedule: m.schedule,
                schedule_label: m.schedule.as_ref().map(Schedule::label),
                max_concurrency: cells.iter().map(|c| c.count).max(),
                cells,
            }
        })
        .collect();

    ContentionReport {
        bucket_size_minutes: bucketizer.bucket_size_minutes(),
        buckets_per_meeting: bucketizer.buckets_per_meeting(),
        global_max,
        peak_offsets: histogram.peaks(),
        total: rows.len(),
        scheduled: rows.iter().filter(|r| r.schedule.is_some()).count(),
        columns: bucketizer.column_labels(),
        rows,
    }
}
