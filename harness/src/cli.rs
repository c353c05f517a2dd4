//! Argument parsing for the `slider` binary.
//!
//! ```text
//! slider <start> <method> [--max-expansions N] [--json] [--out PATH]
//! ```

use std::path::PathBuf;

use clap::Parser;

use slider_search::policy::{SearchPolicyV1, DEFAULT_MAX_EXPANSIONS};

/// Solve an 8-puzzle board toward `012345678`.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "slider")]
#[command(about = "Solve an 8-puzzle board with bfs, ucost, greedy-h* or astar-h*")]
pub struct CliArgs {
    /// Start board as nine digits, row-major, `0` for the blank.
    pub start: String,

    /// Strategy: bfs, ucost, greedy-h1..h3 or astar-h1..h3.
    pub method: String,

    /// Ceiling on node expansions. Zero is rejected by the search.
    #[arg(long, default_value_t = DEFAULT_MAX_EXPANSIONS)]
    pub max_expansions: u64,

    /// Print the JSON report instead of the summary.
    #[arg(long)]
    pub json: bool,

    /// Also write the canonical report to this file.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl CliArgs {
    /// Search policy selected on the command line.
    #[must_use]
    pub fn policy(&self) -> SearchPolicyV1 {
        SearchPolicyV1 {
            max_expansions: self.max_expansions,
        }
    }
}
