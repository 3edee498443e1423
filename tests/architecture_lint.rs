//! Architecture enforcement tests.
//!
//! herofig is layered: `core` is pure, `remote` owns every process spawn,
//! and command handlers reach Heroku only through the `ConfigStore` trait.
//! These tests read the source tree so violations are caught in CI.

use std::fs;
use std::path::{Path, PathBuf};

/// Collect every `.rs` file below `dir`.
fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).expect("Failed to read source directory") {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
            files.push(path);
        }
    }
    files.sort();
    files
}

/// Lines that import from the crate, ignoring comments.
fn crate_imports(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with("use crate::") || l.starts_with("pub use crate::"))
        .collect()
}

// =============================================================================
// Layering
// =============================================================================

/// `core` must not depend on the CLI, the remote store, or the UI.
#[test]
fn core_is_self_contained() {
    let mut violations = Vec::new();

    for path in rust_files(Path::new("src/core")) {
        let content = fs::read_to_string(&path).unwrap();
        for import in crate_imports(&content) {
            if ["crate::cli", "crate::remote", "crate::ui"]
                .iter()
                .any(|layer| import.contains(layer))
            {
                violations.push(format!("{}: {}", path.display(), import));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "core must only import from core:\n{}",
        violations.join("\n")
    );
}

/// Only the Heroku client spawns processes.
#[test]
fn only_remote_spawns_processes() {
    let allowed = Path::new("src/remote/heroku.rs");
    let mut violations = Vec::new();

    for path in rust_files(Path::new("src")) {
        if path == allowed {
            continue;
        }
        let content = fs::read_to_string(&path).unwrap();
        if content.contains("process::Command") || content.contains("Command::new(") {
            violations.push(path.display().to_string());
        }
    }

    assert!(
        violations.is_empty(),
        "process spawning outside {}:\n{}",
        allowed.display(),
        violations.join("\n")
    );
}

/// Command handlers take `&dyn ConfigStore` instead of naming `HerokuCli`.
#[test]
fn commands_use_store_trait() {
    let mut violations = Vec::new();

    for path in rust_files(Path::new("src/cli/commands")) {
        let content = fs::read_to_string(&path).unwrap();
        if content.contains("HerokuCli") {
            violations.push(path.display().to_string());
        }
    }

    assert!(
        violations.is_empty(),
        "commands must go through ConfigStore:\n{}",
        violations.join("\n")
    );
}

/// Every command module is wired into dispatch.
#[test]
fn every_command_is_declared() {
    let mod_rs = fs::read_to_string("src/cli/commands/mod.rs").unwrap();

    for path in rust_files(Path::new("src/cli/commands")) {
        let stem = path.file_stem().unwrap().to_str().unwrap();
        if stem == "mod" {
            continue;
        }
        assert!(
            mod_rs.contains(&format!("mod {};", stem)),
            "{} is not declared in commands/mod.rs",
            stem
        );
    }
}
