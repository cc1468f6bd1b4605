//! Synergy data: provider seam, page model, and tag-filtered flattening.
//!
//! ## Flow
//!
//! 1. `SynergyProvider::fetch` returns a `SynergyPage` or `FetchFailed`
//! 2. `FetchCache` keeps each outcome for the rest of the run
//! 3. `collect` flattens the admitted sections, skipping claimed names
//!
//! A failed fetch always degrades to "no candidates"; it never stops a run.

pub mod cache;
pub mod collect;
pub mod page;
pub mod provider;

pub use cache::FetchCache;
pub use collect::{collect, TagRule, TagRules};
pub use page::{SynergyPage, SynergySection};
pub use provider::{commander_slug, EdhrecProvider, StaticProvider, SynergyProvider};
