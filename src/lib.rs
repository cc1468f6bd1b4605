//! # rust-cube
//!
//! Assembles fixed-size, duplicate-free card collections (cubes, rotating
//! pools, jumpstart decks) from a card catalog and per-commander synergy data.
//!
//! ## Design Principles
//!
//! 1. **Uniqueness by construction**: Every recipe draws through one
//!    `QuotaSampler`, which claims a name in the same step it emits it.
//!
//! 2. **Degrade, don't abort**: Catalog misses, failed synergy fetches and
//!    short pools become defaults plus a log line. Only missing seed input is
//!    fatal.
//!
//! 3. **Injected randomness**: Recipes take a seedable `PoolRng`, so a run is
//!    reproducible from its seed.
//!
//! ## Modules
//!
//! - `core`: RNG and error types
//! - `cards`: Card records, colors, filters and the catalog index
//! - `identity`: Color identity → label, basic-land split
//! - `synergy`: Synergy provider seam, pages, tag filtering, fetch cache
//! - `sampler`: Claimed set and quota-driven unique sampling
//! - `compose`: The recipes
//! - `text`: Plain-text list parsing and rendering

pub mod cards;
pub mod compose;
pub mod core;
pub mod identity;
pub mod sampler;
pub mod synergy;
pub mod text;

// Re-export commonly used types
pub use crate::core::{CatalogError, ComposeError, ConfigError, FetchFailed, PoolRng};

pub use crate::cards::{load_catalog, Card, CardFilter, CatalogIndex, Color, ColorIdentity};

pub use crate::identity::{resolve, split_basics, ColorLabel};

pub use crate::synergy::{
    collect, EdhrecProvider, FetchCache, StaticProvider, SynergyPage, SynergyProvider, TagRules,
};

pub use crate::sampler::{CandidatePool, ClaimedSet, DrainMode, FillReport, Quota, QuotaSampler};

pub use crate::compose::RecipeConfigs;

pub use crate::text::Section;
