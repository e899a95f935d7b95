//! Error types for contention analysis.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentionError {
    #[error("Invalid configuration: bucket size must be at least 1 minute")]
    ZeroBucketSize,

    #[error("Invalid configuration: meeting duration must be at least 1 minute")]
    ZeroMeetingDuration,

    #[error("Invalid configuration: meeting duration ({minutes} min) exceeds the {max}-minute limit")]
    MeetingTooLong { minutes: u32, max: u32 },

    /// The meeting would not split into a whole number of buckets.
    #[error(
        "Invalid configuration: meeting duration ({meeting_minutes} min) is not a multiple of the bucket size ({bucket_minutes} min)"
    )]
    IndivisibleMeeting {
        meeting_minutes: u32,
        bucket_minutes: u32,
    },

    #[error("Invalid configuration: cycle length must be between 1 and {max} weeks, got {weeks}")]
    CycleOutOfRange { weeks: u32, max: u32 },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid mentorships JSON: {0}")]
    InvalidInput(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ContentionError>;
