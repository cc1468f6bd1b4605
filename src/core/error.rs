//! Library error types.
//!
//! Only a few conditions are errors at all. Catalog misses, failed fetches,
//! short pools and unclassifiable identities are converted to safe defaults
//! where they occur; the types below exist so callers can see *why* a default
//! was used, and so the few fatal conditions carry a clear diagnostic.

use std::path::PathBuf;

use thiserror::Error;

/// Failure loading or querying the card catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("card not found: {0}")]
    NotFound(String),
}

/// Failure reading a recipe config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A synergy lookup that produced no usable data.
///
/// Callers treat this as "no candidates for this seed" and keep going.
#[derive(Debug, Error)]
pub enum FetchFailed {
    #[error("request for {seed} failed: {message}")]
    Http { seed: String, message: String },
    #[error("request for {seed} returned status {status}")]
    Status { seed: String, status: u16 },
    #[error("response for {seed} was malformed: {message}")]
    Decode { seed: String, message: String },
    #[error("no synergy data for {0}")]
    Missing(String),
}

impl FetchFailed {
    /// The seed whose lookup failed.
    #[must_use]
    pub fn seed(&self) -> &str {
        match self {
            FetchFailed::Http { seed, .. }
            | FetchFailed::Status { seed, .. }
            | FetchFailed::Decode { seed, .. } => seed,
            FetchFailed::Missing(seed) => seed,
        }
    }
}

/// Fatal recipe failures.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// A recipe was given no seeds to build from.
    #[error("no {0} available: cannot assemble anything from nothing")]
    MissingSeeds(&'static str),
    /// A recipe needs a minimum number of seeds and got fewer.
    #[error("need at least {needed} {what}, found {found}")]
    NotEnoughSeeds {
        what: &'static str,
        needed: usize,
        found: usize,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failed_seed() {
        let err = FetchFailed::Status {
            seed: "Atraxa".into(),
            status: 404,
        };
        assert_eq!(err.seed(), "Atraxa");
        assert_eq!(err.to_string(), "request for Atraxa returned status 404");
    }

    #[test]
    fn test_compose_error_messages() {
        let err = ComposeError::NotEnoughSeeds {
            what: "commanders",
            needed: 20,
            found: 3,
        };
        assert_eq!(err.to_string(), "need at least 20 commanders, found 3");

        let err = ComposeError::MissingSeeds("commanders");
        assert!(err.to_string().contains("no commanders available"));
    }
}
