//! Core building blocks shared by every recipe: the injectable RNG and the
//! library error types.

pub mod error;
pub mod rng;

pub use error::{CatalogError, ComposeError, ConfigError, FetchFailed};
pub use rng::PoolRng;
