//! # Statistics
//!
//! [`StatsSummary`] is the aggregate view of one user's history in one
//! discipline. It is recomputed from the full history on every call;
//! histories can be edited after the fact (a penalty changed, a solve
//! deleted), so nothing is carried over between calculations.
//!
//! ```rust
//! use prism_stats::StatsSummary;
//!
//! let summary = StatsSummary::calculate(&[]);
//! assert_eq!(summary, StatsSummary::default());
//! assert_eq!(summary.best, None);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{EffectiveTime, Error, Millis, Result, SolveAttempt, Window, best};

/// The window sizes a summary reports averages for
pub const AVERAGE_WINDOWS: [usize; 3] = [5, 12, 100];

/// Summary of a solve history
///
/// Averages are `None` while the history is shorter than their window, and
/// [`EffectiveTime::Dnf`] when their window holds too many DNFs to trim away.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Every attempt, DNFs included
    pub count: usize,
    /// Fastest non-DNF effective time
    pub best: Option<Millis>,
    pub average5: Option<EffectiveTime>,
    pub average12: Option<EffectiveTime>,
    pub average100: Option<EffectiveTime>,
}

impl StatsSummary {
    /// Summarize a history ordered oldest first
    ///
    /// The history is assumed to be well-formed: one discipline, ascending
    /// by `recorded_at`, unique ids. Use [`StatsSummary::try_calculate`] for
    /// input that has not been checked.
    #[tracing::instrument(level = "debug", skip_all, fields(count = attempts.len()))]
    pub fn calculate(attempts: &[SolveAttempt]) -> Self {
        let [average5, average12, average100] =
            AVERAGE_WINDOWS.map(|size| Window::select(attempts, size).average());

        let summary = Self {
            count: attempts.len(),
            best: best(attempts),
            average5,
            average12,
            average100,
        };

        tracing::debug!(?summary, "calculated statistics");

        summary
    }

    /// Validate a history, then summarize it
    pub fn try_calculate(attempts: &[SolveAttempt]) -> Result<Self> {
        validate(attempts)?;
        Ok(Self::calculate(attempts))
    }

    /// The average reported for `size`, if `size` is one of [`AVERAGE_WINDOWS`]
    pub const fn average(&self, size: usize) -> Option<EffectiveTime> {
        match size {
            5 => self.average5,
            12 => self.average12,
            100 => self.average100,
            _ => None,
        }
    }
}

/// Check that a history can be summarized as a single ordered discipline
pub fn validate(attempts: &[SolveAttempt]) -> Result<()> {
    let Some(first) = attempts.first() else {
        return Ok(());
    };

    let mut seen = HashSet::with_capacity(attempts.len());

    for (index, attempt) in attempts.iter().enumerate() {
        if attempt.discipline != first.discipline {
            return Err(Error::MixedDisciplines {
                id: attempt.id.clone(),
                expected: first.discipline.clone(),
                found: attempt.discipline.clone(),
            });
        }

        if index > 0 && attempt.recorded_at < attempts[index - 1].recorded_at {
            return Err(Error::OutOfOrder {
                id: attempt.id.clone(),
            });
        }

        if !seen.insert(&attempt.id) {
            return Err(Error::DuplicateId {
                id: attempt.id.clone(),
            });
        }
    }

    Ok(())
}
