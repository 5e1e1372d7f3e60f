//! Error types for loading and reading configuration values.
//!
//! Responsibilities:
//! - Define error variants for env file reads and store operations.
//!
//! Does NOT handle:
//! - Malformed `.env` lines. The parser skips them instead of failing.
//!
//! Invariants:
//! - Variants carry keys, paths and loader names for context.
//! - Variants NEVER carry values or raw file contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or reading configuration values.
#[derive(Error, Debug)]
pub enum EnvError {
    /// Failed to read the `.env` file (missing, unreadable, or not UTF-8).
    ///
    /// SAFETY: Only the error kind is kept, never the file contents.
    #[error("Failed to read env file at {path}: {kind}")]
    EnvFileRead { path: PathBuf, kind: ErrorKind },

    #[error("Key '{key}' already exists.")]
    KeyExists { key: String },

    #[error("Key '{key}' already exists. Offending loader: '{loader}'")]
    LoaderConflict { key: String, loader: String },

    #[error("Requested key '{0}' does not exist and no default was provided.")]
    MissingKey(String),
}

impl EnvError {
    /// Wrap an I/O error raised while reading the env file at `path`.
    pub(crate) fn env_file_read(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        EnvError::EnvFileRead {
            path: path.into(),
            kind: err.kind(),
        }
    }
}
