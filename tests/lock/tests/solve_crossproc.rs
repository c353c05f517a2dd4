//! Cross-process determinism: spawns `solve_fixture` under several
//! environment variants and asserts identical output. Hash-map seeds,
//! cwd and locale must not leak into results.

use std::path::Path;
use std::process::Command;

/// Resolve the path to the compiled `solve_fixture` binary, which cargo
/// places one directory above the test binary.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("solve_fixture");
    path.to_string_lossy().to_string()
}

fn run_variant(work_dir: &Path, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={}, overrides={env_overrides:?}): {e}", work_dir.display())
    });
    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_three_env_variants() {
    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("workspace root exists");
    let temp = std::env::temp_dir();

    let baseline = run_variant(workspace_root, &[]);
    let other_cwd = run_variant(&temp, &[]);
    let locale = run_variant(workspace_root, &[("LC_ALL", "C"), ("LANG", "en_US.UTF-8")]);
    let logging = run_variant(workspace_root, &[("RUST_LOG", "trace")]);

    assert!(!baseline.is_empty());
    assert_eq!(baseline, other_cwd, "cwd changed output");
    assert_eq!(baseline, locale, "locale changed output");
    assert_eq!(baseline, logging, "log level changed output");
}

#[test]
fn fixture_output_covers_every_instance_and_strategy() {
    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let output = run_variant(workspace_root, &[]);
    let digests = output.lines().filter(|l| l.contains(".digest=sha256:")).count();
    assert_eq!(digests, 4 * 8);
    assert!(output
        .lines()
        .filter(|l| l.contains(".termination="))
        .all(|l| l.ends_with("=GoalReached")));
}

#[test]
fn trace_logging_reaches_stderr_only() {
    let output = Command::new(binary_path())
        .env("RUST_LOG", "slider_search=debug")
        .output()
        .expect("spawn solve_fixture");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("search finished"), "{stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("search finished"), "log line leaked to stdout");
}
