use derive_more::From;
use thiserror::Error;

use crate::config::ConfigError;
use crate::history::HistoryError;
use crate::logging::LoggingError;

#[derive(Debug, From, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(ConfigError),

    #[error(transparent)]
    Logging(LoggingError),

    #[error(transparent)]
    History(HistoryError),

    #[error("Invalid solve history: {0}")]
    Stats(prism_stats::Error),

    #[error("Failed to write output: {0}")]
    Output(serde_json::Error),
}
