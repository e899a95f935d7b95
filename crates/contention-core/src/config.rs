//! Analyzer configuration.
//!
//! Values are fixed for the lifetime of a [`Bucketizer`](crate::Bucketizer) and
//! validated once when it is built. Every field has a default, so an empty TOML
//! document yields the product defaults:
//!
//! ```toml
//! meeting_duration_minutes = 60
//! bucket_size_minutes = 15
//! cycle_weeks = 4
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Raw, unvalidated analyzer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Length of every mentorship call.
    #[serde(default = "default_meeting_duration_minutes")]
    pub meeting_duration_minutes: u32,

    /// Width of one concurrency bucket. Must divide `meeting_duration_minutes`.
    #[serde(default = "default_bucket_size_minutes")]
    pub bucket_size_minutes: u32,

    /// Number of weeks before the call schedule repeats.
    #[serde(default = "default_cycle_weeks")]
    pub cycle_weeks: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            meeting_duration_minutes: default_meeting_duration_minutes(),
            bucket_size_minutes: default_bucket_size_minutes(),
            cycle_weeks: default_cycle_weeks(),
        }
    }
}

fn default_meeting_duration_minutes() -> u32 {
    60
}

fn default_bucket_size_minutes() -> u32 {
    15
}

fn default_cycle_weeks() -> u32 {
    4
}

impl AnalyzerConfig {
    /// Parse a TOML document. Missing keys fall back to their defaults.
    ///
    /// Parsing does not validate the values; building a
    /// [`Bucketizer`](crate::Bucketizer) does.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn with_meeting_duration(mut self, minutes: u32) -> Self {
        self.meeting_duration_minutes = minutes;
        self
    }

    pub fn with_bucket_size(mut self, minutes: u32) -> Self {
        self.bucket_size_minutes = minutes;
        self
    }

    pub fn with_cycle_weeks(mut self, weeks: u32) -> Self {
        self.cycle_weeks = weeks;
        self
    }
}
