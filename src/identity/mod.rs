//! Color-identity resolution.
//!
//! - `resolve`: identity → `ColorLabel` (mono, guild, shard/wedge, four-,
//!   five-color, colorless, or the `Unknown` sentinel)
//! - `split_basics`: the 15-card basic-land split for a deck's colors

pub mod basics;
pub mod resolver;

pub use basics::{basic_land_name, expand_basics, split_basics, BASIC_LAND_COUNT};
pub use resolver::{lookup_key, resolve, resolve_symbols, ColorLabel};
