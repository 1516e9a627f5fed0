pub mod cli;
pub mod config;
pub mod layout;
pub mod manifest;
pub mod packager;
pub mod process;

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // Config errors
    #[error("failed to parse plugin.toml: {0}")]
    ConfigParse(String),

    // External tool errors
    #[error("failed to launch '{tool}': {source}")]
    ToolSpawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{tool}' failed with exit code {code}")]
    ToolFailed { tool: String, code: i32 },

    // Filesystem errors
    #[error("failed to create directory {path}: {source}")]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove {path}: {source}")]
    FileRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Manifest errors
    #[error("failed to serialize plugin manifest: {0}")]
    ManifestSerialize(#[from] serde_json::Error),
}
