use std::cmp::Ordering;
use std::str::FromStr;

use clap::ValueEnum;
use prism_stats::{Discipline, Penalty, SolveAttempt};
use strum::{Display, IntoStaticStr, VariantNames};

/// Matches every discipline in [`PuzzleFilter`], or every penalty in [`PenaltyFilter`]
pub const ALL: &str = "all";

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    ValueEnum,
    Display,
    IntoStaticStr,
    VariantNames,
)]
#[strum(serialize_all = "lowercase")]
pub enum SortBy {
    /// When the solve was recorded
    #[default]
    Date,
    /// Raw solve time
    Time,
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    ValueEnum,
    Display,
    IntoStaticStr,
    VariantNames,
)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleFilter {
    All,
    Only(Discipline),
}

impl From<&str> for PuzzleFilter {
    fn from(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value.into())
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PenaltyFilter {
    #[default]
    All,
    Only(Penalty),
}

impl FromStr for PenaltyFilter {
    type Err = prism_stats::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input == ALL {
            Ok(Self::All)
        } else {
            input.parse().map(Self::Only)
        }
    }
}

/// Filters and ordering for listing solves
#[derive(Debug, Clone)]
pub struct SolveQuery {
    pub puzzle: PuzzleFilter,
    pub penalty: PenaltyFilter,
    pub sort_by: SortBy,
    pub order: SortOrder,
}

impl Default for SolveQuery {
    fn default() -> Self {
        Self {
            puzzle: PuzzleFilter::All,
            penalty: PenaltyFilter::All,
            sort_by: SortBy::default(),
            order: SortOrder::default(),
        }
    }
}

impl SolveQuery {
    fn matches(&self, solve: &SolveAttempt) -> bool {
        let puzzle = match &self.puzzle {
            PuzzleFilter::All => true,
            PuzzleFilter::Only(discipline) => solve.discipline == *discipline,
        };

        let penalty = match self.penalty {
            PenaltyFilter::All => true,
            PenaltyFilter::Only(penalty) => solve.penalty == penalty,
        };

        puzzle && penalty
    }

    fn compare(&self, a: &SolveAttempt, b: &SolveAttempt) -> Ordering {
        let ordering = match self.sort_by {
            SortBy::Date => a.recorded_at.cmp(&b.recorded_at),
            SortBy::Time => a.raw_time.cmp(&b.raw_time),
        };

        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    /// Apply the query to a history
    ///
    /// Sorting is stable, so ties keep their order from `solves`.
    pub fn apply(&self, solves: Vec<SolveAttempt>) -> Vec<SolveAttempt> {
        let mut selected: Vec<SolveAttempt> = solves
            .into_iter()
            .filter(|solve| self.matches(solve))
            .collect();

        selected.sort_by(|a, b| self.compare(a, b));
        selected
    }
}

/// Solves of a single discipline, oldest first, ready for summarizing
pub fn chronological(solves: Vec<SolveAttempt>, discipline: &Discipline) -> Vec<SolveAttempt> {
    SolveQuery {
        puzzle: PuzzleFilter::Only(discipline.clone()),
        order: SortOrder::Asc,
        ..SolveQuery::default()
    }
    .apply(solves)
}
