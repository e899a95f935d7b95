//! # contention-core
//!
//! Finds over-subscribed time windows across recurring weekly mentorship calls.
//!
//! Every call's weekly slot is split into fixed-size buckets. Counting how many
//! calls land in each bucket gives a histogram over the recurrence cycle, and
//! mentorships are then ranked by the busiest bucket they occupy so the worst
//! contention surfaces first.
//!
//! ## Quick start
//!
//! ```rust
//! use contention_core::{AnalyzerConfig, ContentionAnalyzer, Mentorship, Participant, Schedule};
//!
//! let analyzer = ContentionAnalyzer::new(&AnalyzerConfig::default()).unwrap();
//! let slot = Schedule::new(0, 1, 9, 0);
//! let mentorships = vec![
//!     Mentorship {
//!         id: "m1".into(),
//!         mentee: Participant::new("a", None),
//!         mentor: Participant::new("b", None),
//!         schedule: Some(slot),
//!     },
//!     Mentorship {
//!         id: "m2".into(),
//!         mentee: Participant::new("c", None),
//!         mentor: Participant::new("d", None),
//!         schedule: Some(slot),
//!     },
//! ];
//!
//! let histogram = analyzer.histogram(&mentorships);
//! assert_eq!(histogram.global_max(), 2);
//! assert_eq!(analyzer.rank(&mentorships, &histogram).len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`config`] — analyzer settings, TOML loading
//! - [`schedule`] — mentorship and schedule records
//! - [`bucket`] — schedule → bucket offsets, start-up validation
//! - [`histogram`] — per-bucket call counts
//! - [`ranker`] — contention ordering
//! - [`report`] — table model for renderers
//! - [`analyzer`] — validated entry point tying the steps together
//! - [`error`] — error types

pub mod analyzer;
pub mod bucket;
pub mod config;
pub mod error;
pub mod histogram;
pub mod ranker;
pub mod report;
pub mod schedule;

pub use analyzer::ContentionAnalyzer;
pub use bucket::{BucketSet, Bucketizer, Offset, MAX_CYCLE_WEEKS, MAX_MEETING_MINUTES};
pub use config::AnalyzerConfig;
pub use error::ContentionError;
pub use histogram::{compute_histogram, Histogram};
pub use ranker::{compare_contention, contention_key, global_max, rank, ContentionKey};
pub use report::{build_report, BucketCell, ContentionReport, ReportRow};
pub use schedule::{parse_mentorships, Mentorship, Participant, Schedule};
