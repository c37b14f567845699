//! # prism-stats
//!
//! Rolling statistics for timed puzzle solves: the best single time and the
//! trimmed "average of N" over the most recent 5, 12 and 100 attempts.
//!
//! The engine is a set of pure functions over a borrowed, chronologically
//! ordered slice of [`SolveAttempt`]s. It keeps no state between calls, so a
//! summary is always recomputed from the full history it is handed.
//!
#![doc = simple_mermaid::mermaid!("../diagrams/stats_pipeline.mmd")]
//!
//! ```rust
//! use prism_stats::{EffectiveTime, Penalty, SolveAttempt, StatsSummary};
//! use web_time::{Duration, SystemTime};
//!
//! let attempts: Vec<SolveAttempt> = [10_000, 11_000, 9_000, 12_000, 10_500]
//!     .into_iter()
//!     .enumerate()
//!     .map(|(i, millis)| SolveAttempt {
//!         id: format!("solve-{i}").into(),
//!         discipline: "3x3".into(),
//!         raw_time: millis,
//!         penalty: Penalty::None,
//!         recorded_at: SystemTime::UNIX_EPOCH + Duration::from_secs(i as u64),
//!         scramble: None,
//!     })
//!     .collect();
//!
//! let summary = StatsSummary::calculate(&attempts);
//! assert_eq!(summary.count, 5);
//! assert_eq!(summary.best, Some(9_000));
//! assert_eq!(summary.average5, Some(EffectiveTime::Time(10_500)));
//! assert_eq!(summary.average12, None);
//! ```

mod error;
pub use error::{Error, Result};

pub mod average;
pub mod best;
pub mod effective;
pub mod solve;
pub mod statistics;
pub mod window;

pub use average::{average_of, trim_count, trimmed_mean};
pub use best::best;
pub use effective::EffectiveTime;
pub use solve::{Discipline, Penalty, SolveAttempt, SolveId};
pub use statistics::StatsSummary;
pub use window::Window;

/// A duration in whole milliseconds
pub type Millis = u64;

/// Time added to an attempt by a [`Penalty::PlusTwo`]
pub const PLUS_TWO_MILLIS: Millis = 2_000;
