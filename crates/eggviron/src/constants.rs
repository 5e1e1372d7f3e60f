//! Centralized constants for eggviron.
//!
//! Default file locations and the names of the environment variables the
//! crate itself reads live here so loaders and tests agree on them.

// =============================================================================
// Env File Defaults
// =============================================================================

/// Default `.env` file location, relative to the current working directory.
pub const DEFAULT_ENV_FILE: &str = "./.env";

// =============================================================================
// Environment Knobs
// =============================================================================

/// Overrides the path used by `EnvFileLoader::from_env()`.
pub const ENV_FILE_VAR: &str = "EGGVIRON_ENV_FILE";

/// When set to `1` or `true`, `.env` file loading is skipped entirely.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Loader Names
// =============================================================================

/// Name reported by `EnvFileLoader` in logs and conflict errors.
pub const ENV_FILE_LOADER_NAME: &str = "EnvFileLoader";

/// Name reported by `EnvironLoader` in logs and conflict errors.
pub const ENVIRON_LOADER_NAME: &str = "EnvironLoader";

/// Prefix written in front of the visible tail of a masked value.
pub const MASK_PREFIX: &str = "***";
