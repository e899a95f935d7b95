//! Entry point bundling a validated configuration with the analysis steps.

use crate::bucket::Bucketizer;
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::histogram::{self, Histogram};
use crate::ranker;
use crate::report::{self, ContentionReport};
use crate::schedule::Mentorship;

/// A contention analyzer for one configuration.
///
/// Construction is the only fallible step. The analyzer holds no state between
/// calls, so one instance can be shared freely across requests and threads.
#[derive(Debug, Clone, Copy)]
pub struct ContentionAnalyzer {
    bucketizer: Bucketizer,
}

impl ContentionAnalyzer {
    /// Validate `config` and build an analyzer. See [`Bucketizer::new`] for the
    /// rejected configurations.
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        Ok(Self {
            bucketizer: Bucketizer::new(config)?,
        })
    }

    pub fn bucketizer(&self) -> &Bucketizer {
        &self.bucketizer
    }

    pub fn histogram(&self, mentorships: &[Mentorship]) -> Histogram {
        histogram::compute_histogram(mentorships, &self.bucketizer)
    }

    pub fn rank<'a>(
        &self,
        mentorships: &'a [Mentorship],
        histogram: &Histogram,
    ) -> Vec<&'a Mentorship> {
        ranker::rank(mentorships, histogram, &self.bucketizer)
    }

    /// Compute the histogram and build the full report in one pass.
    pub fn report(&self, mentorships: &[Mentorship]) -> ContentionReport {
        let histogram = self.histogram(mentorships);
        report::build_report(mentorships, &histogram, &self.bucketizer)
    }
}
