//! Source hygiene budgets for the browser host, checked at test time.
//!
//! Scans `src/` (sibling `*_test.rs` files excluded). Event handlers run on
//! the browser's UI loop, where a panic kills every later interaction on the
//! page, so panicking calls are budgeted at zero. Listener plumbing must go
//! through `gloo_events`.

use std::fs;
use std::path::{Path, PathBuf};

/// `(pattern, budget, reason)`
const RULES: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics inside an event handler"),
    (".expect(", 0, "panics inside an event handler"),
    ("panic!(", 0, "panics inside an event handler"),
    ("unreachable!(", 0, "panics inside an event handler"),
    ("todo!(", 0, "unfinished code"),
    ("let _ =", 0, "silently discards a value"),
    (".ok()", 0, "silently discards an error"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
    ("Closure::", 0, "listeners are gloo_events::EventListener"),
    ("add_event_listener", 0, "listeners are gloo_events::EventListener"),
    (".forget()", 1, "leaks a listener; only the DOM-ready hook may"),
];

fn sources(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            sources(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs")
            && !path.to_string_lossy().ends_with("_test.rs")
        {
            if let Ok(text) = fs::read_to_string(&path) {
                out.push((path, text));
            }
        }
    }
}

fn host_sources() -> Vec<(PathBuf, String)> {
    let mut out = Vec::new();
    sources(Path::new("src"), &mut out);
    out
}

#[test]
fn host_sources_are_scanned() {
    let files = host_sources();
    for name in ["lib.rs", "windows.rs", "listener.rs"] {
        assert!(files.iter().any(|(p, _)| p.ends_with(name)), "{name} missing from hygiene scan");
    }
}

#[test]
fn host_budgets_hold() {
    let files = host_sources();
    let mut over = Vec::new();
    for &(pattern, budget, reason) in RULES {
        let per_file: Vec<(String, usize)> = files
            .iter()
            .map(|(path, text)| (path.display().to_string(), text.lines().filter(|l| l.contains(pattern)).count()))
            .filter(|&(_, n)| n > 0)
            .collect();
        let total: usize = per_file.iter().map(|(_, n)| n).sum();
        if total > budget {
            let where_ = per_file.iter().map(|(p, n)| format!("    {p}: {n}")).collect::<Vec<_>>().join("\n");
            over.push(format!("`{pattern}` ({reason}): {total} > {budget}\n{where_}"));
        }
    }
    assert!(over.is_empty(), "host hygiene budgets exceeded:\n{}", over.join("\n"));
}
