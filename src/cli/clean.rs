use glob::Pattern;
use walkdir::WalkDir;

use crate::layout::ProjectLayout;
use crate::Result;

/// Filename patterns removed by clean-pyc: compiled bytecode, optimized
/// bytecode, and editor backups.
const PYC_PATTERNS: &[&str] = &["*.pyc", "*.pyo", "*~"];

/// Remove the build directory. Missing directory is not an error.
pub fn clean_build(layout: &ProjectLayout) -> Result<()> {
    match std::fs::remove_dir_all(layout.build_dir()) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(error = %e, "could not remove build directory");
        }
    }

    println!("Done.");
    Ok(())
}

/// Delete bytecode and editor-backup files under the project tree.
pub fn clean_pyc(layout: &ProjectLayout) -> Result<()> {
    let removed = remove_matching(layout, PYC_PATTERNS);
    tracing::debug!(removed, "clean-pyc finished");

    println!("Done.");
    Ok(())
}

/// Walk the base directory and delete files whose name matches any pattern.
/// Unreadable entries and failed deletions are skipped, not errors.
fn remove_matching(layout: &ProjectLayout, patterns: &[&str]) -> usize {
    let patterns: Vec<Pattern> = patterns
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();

    let mut removed = 0;
    for entry in WalkDir::new(layout.base_path())
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let name = entry.file_name().to_string_lossy();
        if patterns.iter().any(|p| p.matches(&name)) {
            match std::fs::remove_file(entry.path()) {
                Ok(()) => removed += 1,
                Err(e) => {
                    tracing::warn!(path = %entry.path().display(), error = %e, "could not remove");
                }
            }
        }
    }
    removed
}
