//! Explicit key/value store populated from loaders.
//!
//! Responsibilities:
//! - Merge the results of several loaders in caller-defined order.
//! - Guard against silent overwrites in strict mode.
//! - Hand out values as strings.
//!
//! Does NOT handle:
//! - Type conversion of values.
//! - Writing values back to the process environment.
//!
//! Invariants:
//! - Each loader is run exactly once per `load` call.
//! - In strict mode a conflicting loader contributes nothing.
//! - Values are held as `SecretString` and never appear in `Debug` output.

use std::collections::BTreeMap;

use secrecy::{ExposeSecret, SecretString};

use crate::error::EnvError;
use crate::loader::Loader;
use crate::parser::EnvMap;

/// Behavior switches for [`Eggviron`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Fail instead of overwriting a key that is already loaded.
    pub raise_on_overwrite: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            raise_on_overwrite: true,
        }
    }
}

/// A key/value store optionally loaded from the local environment and other sources.
#[derive(Debug, Default)]
pub struct Eggviron {
    options: StoreOptions,
    values: BTreeMap<String, SecretString>,
}

impl Eggviron {
    /// Create an empty, strict store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given options.
    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            options,
            values: BTreeMap::new(),
        }
    }

    /// Options this store was created with.
    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// Run each loader in order and merge its values into the store.
    ///
    /// # Errors
    ///
    /// - `EnvError::LoaderConflict` in strict mode when a loader returns a key
    ///   that is already loaded. Nothing from that loader is applied.
    /// - Any error returned by a loader, unchanged.
    ///
    /// Loaders that ran before the failing one stay applied.
    pub fn load(&mut self, loaders: &[&dyn Loader]) -> Result<(), EnvError> {
        for loader in loaders {
            let results = loader.run()?;

            if self.options.raise_on_overwrite
                && let Some(key) = results.keys().find(|key| self.values.contains_key(*key))
            {
                tracing::warn!(
                    key = %key,
                    loader = loader.name(),
                    "Loader returned a key that is already loaded"
                );
                return Err(EnvError::LoaderConflict {
                    key: key.clone(),
                    loader: loader.name().to_string(),
                });
            }

            tracing::debug!(
                loader = loader.name(),
                count = results.len(),
                "Merging loaded values"
            );
            self.values.extend(
                results
                    .into_iter()
                    .map(|(key, value)| (key, SecretString::new(value.into()))),
            );
        }

        Ok(())
    }

    /// Set the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::KeyExists` in strict mode when `key` is already set.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), EnvError> {
        let key = key.into();
        if self.options.raise_on_overwrite && self.values.contains_key(&key) {
            return Err(EnvError::KeyExists { key });
        }

        let value: String = value.into();
        self.values.insert(key, SecretString::new(value.into()));
        Ok(())
    }

    /// Get the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::MissingKey` when `key` is not loaded.
    pub fn get(&self, key: &str) -> Result<&str, EnvError> {
        self.values
            .get(key)
            .map(|value| value.expose_secret())
            .ok_or_else(|| EnvError::MissingKey(key.to_string()))
    }

    /// Get the value for `key`, or `default` when it is not loaded.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.values
            .get(key)
            .map_or(default, |value| value.expose_secret())
    }

    /// Whether `key` is loaded.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of loaded keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no keys are loaded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Owned copy of every loaded key/value pair.
    pub fn loaded_values(&self) -> EnvMap {
        self.values
            .iter()
            .map(|(key, value)| (key.clone(), value.expose_secret().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Loader returning fixed values and counting how often it ran.
    struct StaticLoader {
        name: &'static str,
        values: EnvMap,
        runs: Cell<usize>,
    }

    impl StaticLoader {
        fn new(name: &'static str, pairs: &[(&str, &str)]) -> Self {
            Self {
                name,
                values: pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                runs: Cell::new(0),
            }
        }
    }

    impl Loader for StaticLoader {
        fn name(&self) -> &str {
            self.name
        }

        fn run(&self) -> Result<EnvMap, EnvError> {
            self.runs.set(self.runs.get() + 1);
            Ok(self.values.clone())
        }
    }

    struct FailingLoader;

    impl Loader for FailingLoader {
        fn name(&self) -> &str {
            "FailingLoader"
        }

        fn run(&self) -> Result<EnvMap, EnvError> {
            Err(EnvError::EnvFileRead {
                path: ".env".into(),
                kind: std::io::ErrorKind::PermissionDenied,
            })
        }
    }

    fn lenient() -> Eggviron {
        Eggviron::with_options(StoreOptions {
            raise_on_overwrite: false,
        })
    }

    #[test]
    fn test_new_store_is_empty_and_strict() {
        let store = Eggviron::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.options().raise_on_overwrite);
        assert!(store.loaded_values().is_empty());
    }

    #[test]
    fn test_load_merges_loaders_in_order() {
        let first = StaticLoader::new("first", &[("A", "1")]);
        let second = StaticLoader::new("second", &[("B", "2")]);
        let mut store = Eggviron::new();

        store.load(&[&first, &second]).unwrap();

        assert_eq!(store.get("A").unwrap(), "1");
        assert_eq!(store.get("B").unwrap(), "2");
        assert_eq!(first.runs.get(), 1);
        assert_eq!(second.runs.get(), 1);
    }

    #[test]
    fn test_strict_load_rejects_conflict_and_names_loader() {
        let first = StaticLoader::new("first", &[("A", "1")]);
        let second = StaticLoader::new("second", &[("A", "2"), ("B", "2")]);
        let mut store = Eggviron::new();

        let err = store.load(&[&first, &second]).unwrap_err();

        match err {
            EnvError::LoaderConflict { key, loader } => {
                assert_eq!(key, "A");
                assert_eq!(loader, "second");
            }
            other => panic!("Expected LoaderConflict, got {other}"),
        }
        assert_eq!(store.get("A").unwrap(), "1");
        assert!(
            !store.contains_key("B"),
            "conflicting loader must not be partially applied"
        );
        assert_eq!(second.runs.get(), 1, "loader should run exactly once");
    }

    #[test]
    fn test_strict_load_rejects_conflict_with_inserted_key() {
        let loader = StaticLoader::new("late", &[("A", "2")]);
        let mut store = Eggviron::new();
        store.insert("A", "1").unwrap();

        assert!(matches!(
            store.load(&[&loader]),
            Err(EnvError::LoaderConflict { .. })
        ));
    }

    #[test]
    fn test_lenient_load_last_loader_wins() {
        let first = StaticLoader::new("first", &[("A", "1"), ("B", "1")]);
        let second = StaticLoader::new("second", &[("A", "2")]);
        let mut store = lenient();

        store.load(&[&first, &second]).unwrap();

        assert_eq!(store.get("A").unwrap(), "2");
        assert_eq!(store.get("B").unwrap(), "1");
    }

    #[test]
    fn test_load_propagates_loader_error_and_keeps_earlier_values() {
        let first = StaticLoader::new("first", &[("A", "1")]);
        let third = StaticLoader::new("third", &[("C", "3")]);
        let mut store = Eggviron::new();

        let result = store.load(&[&first, &FailingLoader, &third]);

        assert!(matches!(result, Err(EnvError::EnvFileRead { .. })));
        assert!(store.contains_key("A"));
        assert!(!store.contains_key("C"));
        assert_eq!(third.runs.get(), 0);
    }

    #[test]
    fn test_strict_insert_rejects_existing_key() {
        let mut store = Eggviron::new();
        store.insert("A", "1").unwrap();

        let err = store.insert("A", "2").unwrap_err();

        assert!(matches!(err, EnvError::KeyExists { ref key } if key == "A"));
        assert_eq!(store.get("A").unwrap(), "1");
    }

    #[test]
    fn test_lenient_insert_overwrites() {
        let mut store = lenient();
        store.insert("A", "1").unwrap();
        store.insert("A", "2").unwrap();
        assert_eq!(store.get("A").unwrap(), "2");
    }

    #[test]
    fn test_get_missing_key() {
        let store = Eggviron::new();
        let err = store.get("NOPE").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Requested key 'NOPE' does not exist and no default was provided."
        );
    }

    #[test]
    fn test_get_or_default() {
        let mut store = Eggviron::new();
        store.insert("SET", "value").unwrap();

        assert_eq!(store.get_or("SET", "fallback"), "value");
        assert_eq!(store.get_or("UNSET", "fallback"), "fallback");
    }

    #[test]
    fn test_loaded_values_is_a_copy() {
        let mut store = Eggviron::new();
        store.insert("A", "1").unwrap();

        let mut copy = store.loaded_values();
        copy.insert("B".to_string(), "2".to_string());

        assert!(!store.contains_key("B"));
        assert_eq!(store.loaded_values().len(), 1);
    }

    #[test]
    fn test_debug_does_not_leak_values() {
        let mut store = Eggviron::new();
        store.insert("PASSWORD", "hunter2-correct-horse").unwrap();

        let debug = format!("{store:?}");

        assert!(debug.contains("PASSWORD"), "got: {debug}");
        assert!(!debug.contains("hunter2"), "got: {debug}");
    }
}
