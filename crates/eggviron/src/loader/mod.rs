//! Sources of key/value pairs.
//!
//! Responsibilities:
//! - Define the [`Loader`] seam consumed by [`crate::Eggviron::load`].
//! - Provide loaders for `.env` files and the process environment.
//! - Mask values before they reach the logs.
//!
//! Does NOT handle:
//! - Merging results from several loaders (see `store.rs`).
//! - Parsing `.env` text (see `parser.rs`).
//!
//! Invariants:
//! - Loaders never mutate the process environment.
//! - Loaded values are only ever logged through [`masked`].

mod env;
mod envfile;
mod environ;

pub use env::env_var_or_none;
pub use envfile::EnvFileLoader;
pub use environ::EnvironLoader;

use crate::constants::MASK_PREFIX;
use crate::error::EnvError;
use crate::parser::EnvMap;

/// A named source of key/value pairs.
pub trait Loader {
    /// Name reported in logs and in [`EnvError::LoaderConflict`].
    fn name(&self) -> &str;

    /// Produce the key/value pairs of this source.
    fn run(&self) -> Result<EnvMap, EnvError>;
}

/// Render a value as `***` followed by its last quarter of characters.
///
/// Values shorter than four characters show nothing but the prefix.
pub(crate) fn masked(value: &str) -> String {
    let total = value.chars().count();
    let tail: String = value.chars().skip(total - total / 4).collect();
    format!("{MASK_PREFIX}{tail}")
}

/// Log every loaded key with its masked value.
pub(crate) fn log_loaded(loader: &str, values: &EnvMap) {
    for (key, value) in values {
        tracing::debug!(
            loader,
            key = %key,
            value = %masked(value),
            "Found key"
        );
    }
}
