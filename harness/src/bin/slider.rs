//! Solve one 8-puzzle instance from the command line.
//!
//! Usage: `slider <start> <method> [--max-expansions N] [--json] [--out PATH]`
//!
//! Exit status: 0 on a completed run (solved or not), 1 on a run error,
//! 2 on a usage error. Logs go to stderr and honor `RUST_LOG`.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use slider_harness::cli::CliArgs;
use slider_harness::runner::{parse_start, render_summary, solve_board, write_report, RunError};
use slider_kernel::board::EightPuzzleBoard;
use slider_search::report::ReportError;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = CliArgs::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &CliArgs) -> Result<(), RunError> {
    let start = parse_start(&cli.start)?;
    println!("solving puzzle {start} -> {}", EightPuzzleBoard::goal());

    let outcome = solve_board(start, &cli.method, &cli.policy())?;
    if cli.json {
        let pretty = serde_json::to_string_pretty(&outcome.result.to_json_value())
            .map_err(|e| ReportError::Serialize {
                detail: e.to_string(),
            })?;
        println!("{pretty}");
    } else {
        println!("{}", render_summary(&outcome.result));
    }

    if let Some(path) = &cli.out {
        write_report(path, &outcome.result)?;
    }
    Ok(())
}
