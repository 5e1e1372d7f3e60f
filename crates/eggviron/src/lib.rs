//! Load `.env` files and the process environment into an explicit key/value store.
//!
//! The `.env` parser is a pure function of its input text. Loaders wrap it (and
//! the process environment) behind the [`Loader`] trait, and [`Eggviron`]
//! merges loader results in the order the caller chooses.
//!
//! ```no_run
//! use eggviron::{Eggviron, EnvFileLoader, EnvironLoader};
//!
//! # fn main() -> Result<(), eggviron::EnvError> {
//! let mut env = Eggviron::new();
//! env.load(&[&EnvironLoader::new(), &EnvFileLoader::from_env().optional()])?;
//!
//! let user = env.get_or("USER_NAME", "guest");
//! # let _ = user;
//! # Ok(())
//! # }
//! ```

pub mod constants;
mod error;
pub mod loader;
mod parser;
mod store;

pub use error::EnvError;
pub use loader::{EnvFileLoader, EnvironLoader, Loader, env_var_or_none};
pub use parser::{EnvMap, parse_env_str, render};
pub use store::{Eggviron, StoreOptions};
