use crate::{Discipline, SolveId};

pub type Result<T> = std::result::Result<T, Error>;

/// Input rejected before any statistics are computed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("`{input}` is not a valid penalty (expected one of: none, +2, DNF)")]
    InvalidPenalty { input: String },

    #[error("solve `{id}` belongs to `{found}`, but this history is for `{expected}`")]
    MixedDisciplines {
        id: SolveId,
        expected: Discipline,
        found: Discipline,
    },

    #[error("solve `{id}` was recorded before the solve preceding it")]
    OutOfOrder { id: SolveId },

    #[error("solve `{id}` appears more than once")]
    DuplicateId { id: SolveId },
}
