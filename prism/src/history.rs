use std::fs;
use std::path::{Path, PathBuf};

use prism_stats::{Discipline, Millis, Penalty, SolveAttempt, SolveId};
use thiserror::Error;
use ulid::Ulid;
use web_time::SystemTime;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Failed to read solve history '{path}': {error}")]
    ReadFile { path: PathBuf, error: std::io::Error },

    #[error("Failed to write solve history '{path}': {error}")]
    WriteFile { path: PathBuf, error: std::io::Error },

    #[error("Failed to create history directory '{path}': {error}")]
    CreateDirectory { path: PathBuf, error: std::io::Error },

    #[error("Failed to parse solve history '{path}': {error}")]
    Parse {
        path: PathBuf,
        error: serde_json::Error,
    },

    #[error("Failed to serialize solve history: {0}")]
    Serialize(serde_json::Error),

    #[error("Solve `{id}` not found")]
    NotFound { id: SolveId },
}

/// A solve to be recorded
#[derive(Debug, Clone)]
pub struct NewSolve {
    pub discipline: Discipline,
    pub raw_time: Millis,
    pub penalty: Penalty,
    pub scramble: String,
}

/// A solve history snapshot stored as a JSON array of solves
#[derive(Debug)]
pub struct History {
    path: PathBuf,
}

impl History {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every solve, oldest first
    ///
    /// A missing file is an empty history. Solves recorded at the same instant
    /// keep the order they have in the file.
    pub fn load(&self) -> Result<Vec<SolveAttempt>, HistoryError> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no solve history yet");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|error| HistoryError::ReadFile {
            path: self.path.clone(),
            error,
        })?;

        let mut solves: Vec<SolveAttempt> =
            serde_json::from_str(&content).map_err(|error| HistoryError::Parse {
                path: self.path.clone(),
                error,
            })?;

        // Stable, so equal timestamps keep insertion order
        solves.sort_by_key(|solve| solve.recorded_at);

        tracing::debug!(
            path = %self.path.display(),
            solves = solves.len(),
            "loaded solve history"
        );

        Ok(solves)
    }

    /// Overwrite the snapshot with `solves`
    pub fn save(&self, solves: &[SolveAttempt]) -> Result<(), HistoryError> {
        if let Some(directory) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(directory).map_err(|error| HistoryError::CreateDirectory {
                path: directory.to_path_buf(),
                error,
            })?;
        }

        let json = serde_json::to_string_pretty(solves).map_err(HistoryError::Serialize)?;
        fs::write(&self.path, json).map_err(|error| HistoryError::WriteFile {
            path: self.path.clone(),
            error,
        })?;

        tracing::debug!(
            path = %self.path.display(),
            solves = solves.len(),
            "saved solve history"
        );

        Ok(())
    }

    /// Record a new solve, timestamped now
    pub fn add(&self, solve: NewSolve) -> Result<SolveAttempt, HistoryError> {
        let mut solves = self.load()?;

        let attempt = SolveAttempt {
            id: Ulid::new().to_string().into(),
            discipline: solve.discipline,
            raw_time: solve.raw_time,
            penalty: solve.penalty,
            recorded_at: SystemTime::now(),
            scramble: Some(solve.scramble),
        };

        solves.push(attempt.clone());
        self.save(&solves)?;

        tracing::info!(id = %attempt.id, "recorded solve");

        Ok(attempt)
    }

    /// Change the penalty of an existing solve
    pub fn set_penalty(
        &self,
        id: &SolveId,
        penalty: Penalty,
    ) -> Result<SolveAttempt, HistoryError> {
        let mut solves = self.load()?;

        let solve = solves
            .iter_mut()
            .find(|solve| solve.id == *id)
            .ok_or_else(|| HistoryError::NotFound { id: id.clone() })?;
        solve.penalty = penalty;
        let updated = solve.clone();

        self.save(&solves)?;

        tracing::info!(%id, %penalty, "changed penalty");

        Ok(updated)
    }

    /// Remove a solve
    pub fn delete(&self, id: &SolveId) -> Result<SolveAttempt, HistoryError> {
        let mut solves = self.load()?;

        let index = solves
            .iter()
            .position(|solve| solve.id == *id)
            .ok_or_else(|| HistoryError::NotFound { id: id.clone() })?;
        let removed = solves.remove(index);

        self.save(&solves)?;

        tracing::info!(%id, "deleted solve");

        Ok(removed)
    }
}
