//! Process environment loader.

use super::{Loader, log_loaded};
use crate::constants::ENVIRON_LOADER_NAME;
use crate::error::EnvError;
use crate::parser::EnvMap;

/// Snapshots the process environment.
///
/// Entries whose key or value is not valid Unicode are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironLoader;

impl EnvironLoader {
    /// Create a process environment loader.
    pub fn new() -> Self {
        Self
    }
}

impl Loader for EnvironLoader {
    fn name(&self) -> &str {
        ENVIRON_LOADER_NAME
    }

    fn run(&self) -> Result<EnvMap, EnvError> {
        let mut values = EnvMap::new();
        for (key, value) in std::env::vars_os() {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => {
                    values.insert(key, value);
                }
                (Ok(key), Err(_)) => {
                    tracing::debug!(key = %key, "Skipping environment value that is not valid Unicode");
                }
                (Err(_), _) => {
                    tracing::debug!("Skipping environment key that is not valid Unicode");
                }
            }
        }

        log_loaded(self.name(), &values);
        Ok(values)
    }
}
