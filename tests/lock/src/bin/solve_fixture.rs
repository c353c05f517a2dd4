//! Binary that solves every fixture instance under every strategy and
//! prints deterministic output lines for cross-process verification.
//!
//! Usage: `solve_fixture`
//!
//! Output: one `key=value` line per (instance, strategy) field on stdout.
//! Logs go to stderr under `RUST_LOG`, the same way `slider` installs them,
//! so log level must never change stdout.

use lock_tests::puzzle_test_helpers::{run, SOLVABLE_STARTS};
use slider_search::strategy::StrategyV1;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    for start in SOLVABLE_STARTS {
        for strategy in StrategyV1::ALL {
            let result = run(start, strategy);
            let prefix = format!("{start}.{strategy}");
            println!("{prefix}.digest={}", result.digest().expect("digest"));
            println!("{prefix}.termination={:?}", result.termination);
            println!("{prefix}.frontier_count={}", result.frontier_count);
            println!("{prefix}.expanded_count={}", result.expanded_count);
            println!(
                "{prefix}.path_len={}",
                result.path().map_or(0, <[_]>::len)
            );
            println!("{prefix}.path_cost={}", result.path_cost().unwrap_or(0));
        }
    }
}
