use std::path::PathBuf;

use clap::{Parser, Subcommand};
use prism_stats::{Millis, Penalty};

use crate::query::{PenaltyFilter, SortBy, SortOrder};

/// Solve history statistics for your terminal
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Directory holding `settings.toml`
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Solve history file, overriding the configured one
    #[arg(long, global = true)]
    pub history: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print best time and rolling averages for one discipline as JSON
    Stats {
        /// Discipline to summarize, defaults to the configured one
        #[arg(short, long)]
        puzzle: Option<String>,
    },

    /// List solves as JSON
    List {
        /// Discipline to list, or `all`
        #[arg(short, long, default_value = "all")]
        puzzle: String,

        /// Only list solves with this penalty (`none`, `+2`, `DNF`), or `all`
        #[arg(long, default_value = "all")]
        penalty: PenaltyFilter,

        #[arg(long, value_enum, default_value_t)]
        sort_by: SortBy,

        #[arg(long, value_enum, default_value_t)]
        order: SortOrder,
    },

    /// Record a solve and print it as JSON
    Add {
        /// Raw solve time in milliseconds
        #[arg(long)]
        time: Millis,

        /// Scramble the solve was performed on
        #[arg(long)]
        scramble: String,

        /// Discipline, defaults to the configured one
        #[arg(short, long)]
        puzzle: Option<String>,

        #[arg(long, default_value = "none")]
        penalty: Penalty,
    },

    /// Change the penalty of a recorded solve
    Penalty {
        id: String,

        /// `none`, `+2` or `DNF`
        penalty: Penalty,
    },

    /// Delete a recorded solve
    Delete { id: String },

    /// Print the effective settings
    Config,
}
