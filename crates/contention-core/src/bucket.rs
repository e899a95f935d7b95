//! Splits a call into fixed-size time buckets.
//!
//! Two calls are concurrent in a bucket only when they produce the *same* bucket
//! offset. Offsets are not aligned to a grid, so calls starting 5 minutes apart
//! with 15-minute buckets never share a bucket even though the calls overlap.

use crate::config::AnalyzerConfig;
use crate::error::{ContentionError, Result};
use crate::schedule::{Schedule, MINUTES_PER_WEEK};

/// Minutes since the start of the cycle.
pub type Offset = i64;

/// Bucket-start offsets occupied by one call, in ascending order.
pub type BucketSet = Vec<Offset>;

/// Longest accepted recurrence cycle, in weeks.
pub const MAX_CYCLE_WEEKS: u32 = 53;

/// Longest accepted meeting: one week.
pub const MAX_MEETING_MINUTES: u32 = MINUTES_PER_WEEK as u32;

/// Validated bucketing parameters.
///
/// The only way to get one is [`Bucketizer::new`], so holding a `Bucketizer`
/// means the configuration has already passed every start-up check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucketizer {
    bucket_size_minutes: u32,
    buckets_per_meeting: u32,
    cycle_weeks: u32,
}

impl Bucketizer {
    /// Validate `config` and build a bucketizer from it.
    ///
    /// # Errors
    /// - [`ContentionError::ZeroBucketSize`] / [`ContentionError::ZeroMeetingDuration`]
    ///   when either duration is zero.
    /// - [`ContentionError::MeetingTooLong`] when the meeting is longer than
    ///   `MAX_MEETING_MINUTES`.
    /// - [`ContentionError::IndivisibleMeeting`] when the meeting duration is not a
    ///   whole multiple of the bucket size.
    /// - [`ContentionError::CycleOutOfRange`] when `cycle_weeks` is not in
    ///   `1..=MAX_CYCLE_WEEKS`.
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        if config.bucket_size_minutes == 0 {
            return Err(ContentionError::ZeroBucketSize);
        }
        if config.meeting_duration_minutes == 0 {
            return Err(ContentionError::ZeroMeetingDuration);
        }
        if config.meeting_duration_minutes > MAX_MEETING_MINUTES {
            return Err(ContentionError::MeetingTooLong {
                minutes: config.meeting_duration_minutes,
                max: MAX_MEETING_MINUTES,
            });
        }
        if config.meeting_duration_minutes % config.bucket_size_minutes != 0 {
            return Err(ContentionError::IndivisibleMeeting {
                meeting_minutes: config.meeting_duration_minutes,
                bucket_minutes: config.bucket_size_minutes,
            });
        }
        if !(1..=MAX_CYCLE_WEEKS).contains(&config.cycle_weeks) {
            return Err(ContentionError::CycleOutOfRange {
                weeks: config.cycle_weeks,
                max: MAX_CYCLE_WEEKS,
            });
        }

        Ok(Self {
            bucket_size_minutes: config.bucket_size_minutes,
            buckets_per_meeting: config.meeting_duration_minutes / config.bucket_size_minutes,
            cycle_weeks: config.cycle_weeks,
        })
    }

    /// The buckets a call on `schedule` occupies: `buckets_per_meeting` offsets
    /// starting at the call start, `bucket_size_minutes` apart.
    pub fn buckets(&self, schedule: &Schedule) -> BucketSet {
        let start = schedule.start_minute();
        let step = Offset::from(self.bucket_size_minutes);
        (0..Offset::from(self.buckets_per_meeting))
            .map(|i| start + i * step)
            .collect()
    }

    pub fn bucket_size_minutes(&self) -> u32 {
        self.bucket_size_minutes
    }

    pub fn buckets_per_meeting(&self) -> u32 {
        self.buckets_per_meeting
    }

    pub fn meeting_duration_minutes(&self) -> u32 {
        self.bucket_size_minutes * self.buckets_per_meeting
    }

    pub fn cycle_weeks(&self) -> u32 {
        self.cycle_weeks
    }

    /// Total length of the recurrence cycle in minutes.
    pub fn cycle_minutes(&self) -> i64 {
        i64::from(self.cycle_weeks) * MINUTES_PER_WEEK
    }

    /// Whether the call on `schedule` starts inside the cycle.
    pub fn fits_cycle(&self, schedule: &Schedule) -> bool {
        (0..self.cycle_minutes()).contains(&schedule.start_minute())
    }

    /// Column headings for per-bucket output, as minutes into the call
    /// (`"0-15"`, `"15-30"`, ...).
    pub fn column_labels(&self) -> Vec<String> {
        (0..self.buckets_per_meeting)
            .map(|i| {
                format!(
                    "{}-{}",
                    i * self.bucket_size_minutes,
                    (i + 1) * self.bucket_size_minutes
                )
            })
            .collect()
    }
}

impl TryFrom<AnalyzerConfig> for Bucketizer {
    type Error = ContentionError;

    fn try_from(config: AnalyzerConfig) -> Result<Self> {
        Bucketizer::new(&config)
    }
}
