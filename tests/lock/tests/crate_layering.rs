//! Build-graph layering: `slider_kernel` depends on nothing in the
//! workspace, and `slider_search` never reaches up into the harness.

use std::fmt::Write;
use std::fs;
use std::path::Path;

fn workspace_root() -> &'static Path {
    // lock-tests lives at tests/lock/, so the workspace root is ../..
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

/// Non-comment lines of every `.rs` file under `dir` containing `pattern`.
fn scan(dir: &Path, pattern: &str, hits: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan(&path, pattern, hits);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            for (line_no, line) in content.lines().enumerate() {
                let trimmed = line.trim();
                if trimmed.starts_with("//") {
                    continue;
                }
                if trimmed.contains(pattern) {
                    hits.push((path.display().to_string(), line_no + 1, line.to_string()));
                }
            }
        }
    }
}

fn assert_no_refs(crate_dir: &str, patterns: &[&str]) {
    let src = workspace_root().join(crate_dir).join("src");
    let mut hits = Vec::new();
    for pattern in patterns {
        scan(&src, pattern, &mut hits);
    }
    if !hits.is_empty() {
        let mut msg = format!("forbidden references in {crate_dir}/src:\n");
        for (file, line, content) in &hits {
            let _ = writeln!(msg, "  {file}:{line}: {content}");
        }
        panic!("{msg}");
    }
}

fn dependency_lines(crate_dir: &str) -> Vec<String> {
    let manifest = workspace_root().join(crate_dir).join("Cargo.toml");
    let content = fs::read_to_string(&manifest)
        .unwrap_or_else(|e| panic!("{}: {e}", manifest.display()));
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.starts_with('#'))
        .map(ToString::to_string)
        .collect()
}

#[test]
fn kernel_source_has_no_upward_references() {
    assert_no_refs("kernel", &["slider_search", "slider_harness"]);
}

#[test]
fn search_source_has_no_harness_references() {
    assert_no_refs("search", &["slider_harness"]);
}

#[test]
fn kernel_manifest_declares_no_workspace_dependencies() {
    for line in dependency_lines("kernel") {
        assert!(
            !line.starts_with("slider-search") && !line.starts_with("slider-harness"),
            "kernel/Cargo.toml: {line}"
        );
    }
}

#[test]
fn search_manifest_does_not_depend_on_harness() {
    for line in dependency_lines("search") {
        assert!(!line.starts_with("slider-harness"), "search/Cargo.toml: {line}");
    }
}
