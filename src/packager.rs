//! Zip assembly for the plugin archive.
//!
//! Packaging shells out to the external `zip` tool twice: once to capture the
//! project tree (minus the ignore globs), once to append the adjusted
//! entry point as a flattened top-level member.

use std::path::PathBuf;

use crate::config::PluginConfig;
use crate::layout::ProjectLayout;
use crate::process::{run_tool, ExitPolicy};
use crate::{Error, Result};

/// Prepended to the entry point inside the archive so the vendored lib/
/// directory is on the module search path at runtime.
pub const ENTRY_SHIM: &str = "\
import os
import sys

basedir = os.path.dirname(os.path.abspath(__file__))
sys.path.append(os.path.join(basedir, \"lib\"))
";

/// Glob patterns excluded from the archive: version control, editor state,
/// history, bytecode caches, and prior build output.
pub const IGNORE_GLOBS: &[&str] = &[
    // folders
    ".git/*",
    ".vscode/*",
    ".history/*",
    "*/__pycache__/*",
    "build/*",
    // files
    ".gitignore",
    ".gitattributes",
];

/// Archive filename for a given plugin identity: `<Name>-<version>.zip`.
pub fn archive_name(config: &PluginConfig) -> String {
    format!("{}-{}.zip", config.display_name(), config.version)
}

/// The shim followed by the original entry-point source.
pub fn compose_entry(entry_source: &str) -> String {
    format!("{}{}", ENTRY_SHIM, entry_source)
}

/// Pack the plugin into `build/<Name>-<version>.zip`.
///
/// A previous archive with the same name is removed first, so re-running
/// replaces it rather than appending duplicate members. An archive left over
/// from an older version keeps its old name and is not cleaned up here.
pub fn build(layout: &ProjectLayout, config: &PluginConfig) -> Result<PathBuf> {
    std::fs::create_dir_all(layout.build_dir()).map_err(|e| Error::DirCreate {
        path: layout.build_dir().to_path_buf(),
        source: e,
    })?;

    let archive_path = layout.build_dir().join(archive_name(config));
    remove_if_exists(&archive_path)?;

    // Capture the project tree, excluding the ignore globs. Exit code is
    // ignored, matching the original tool's behavior.
    let archive_str = archive_path.to_string_lossy().into_owned();
    let mut args = vec!["-r", archive_str.as_str(), ".", "-x"];
    args.extend_from_slice(IGNORE_GLOBS);
    run_tool("zip", &args, layout.base_path(), ExitPolicy::Ignore)?;

    // Adjusted entry point: shim + original source, staged in build/ and
    // appended flattened (-j drops the directory prefix).
    let entry_source =
        std::fs::read_to_string(layout.entry_point()).map_err(|e| Error::FileRead {
            path: layout.entry_point().to_path_buf(),
            source: e,
        })?;
    let staged_entry = layout.build_dir().join("main.py");
    std::fs::write(&staged_entry, compose_entry(&entry_source)).map_err(|e| {
        Error::FileWrite {
            path: staged_entry.clone(),
            source: e,
        }
    })?;

    let staged_str = staged_entry.to_string_lossy().into_owned();
    run_tool(
        "zip",
        &["-j", archive_str.as_str(), staged_str.as_str()],
        layout.base_path(),
        ExitPolicy::Ignore,
    )?;

    std::fs::remove_file(&staged_entry).map_err(|e| Error::FileRemove {
        path: staged_entry,
        source: e,
    })?;

    Ok(archive_path)
}

fn remove_if_exists(path: &std::path::Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::FileRemove {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
