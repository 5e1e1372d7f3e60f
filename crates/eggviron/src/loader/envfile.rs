//! `.env` file loader.
//!
//! Responsibilities:
//! - Read a `.env` file from disk and parse it.
//! - Resolve the file location from `EGGVIRON_ENV_FILE` when asked to.
//! - Honor the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - The line format itself (see `parser.rs`).
//!
//! Invariants:
//! - A missing file is an error unless the loader was made `optional()`.
//! - Read errors never include file contents.

use std::path::{Path, PathBuf};

use super::env::{dotenv_disabled, env_var_or_none};
use super::{Loader, log_loaded};
use crate::constants::{DEFAULT_ENV_FILE, ENV_FILE_LOADER_NAME, ENV_FILE_VAR};
use crate::error::EnvError;
use crate::parser::{EnvMap, parse_env_str};

/// Loads key/value pairs from a `.env` file.
#[derive(Debug, Clone)]
pub struct EnvFileLoader {
    path: PathBuf,
    optional: bool,
}

impl Default for EnvFileLoader {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_FILE)
    }
}

impl EnvFileLoader {
    /// Create a loader for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            optional: false,
        }
    }

    /// Create a loader for the file named by `EGGVIRON_ENV_FILE`, falling back
    /// to `./.env` when the variable is unset or blank.
    pub fn from_env() -> Self {
        match env_var_or_none(ENV_FILE_VAR) {
            Some(path) => Self::new(path),
            None => Self::default(),
        }
    }

    /// Treat a missing file as empty instead of failing.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Path of the file this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_values(&self) -> Result<EnvMap, EnvError> {
        tracing::debug!(path = %self.path.display(), "Reading env file");

        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(parse_env_str(&text)),
            Err(e) if self.optional && e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Optional env file not found");
                Ok(EnvMap::new())
            }
            Err(e) => Err(EnvError::env_file_read(&self.path, &e)),
        }
    }
}

impl Loader for EnvFileLoader {
    fn name(&self) -> &str {
        ENV_FILE_LOADER_NAME
    }

    /// Load key/value pairs from the file.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::EnvFileRead` if the file is missing (and not
    /// optional), unreadable, or not valid UTF-8.
    fn run(&self) -> Result<EnvMap, EnvError> {
        if dotenv_disabled() {
            tracing::debug!(path = %self.path.display(), "Env file loading disabled");
            return Ok(EnvMap::new());
        }

        let values = self.read_values()?;
        log_loaded(self.name(), &values);
        Ok(values)
    }
}
