//! Assembly recipes.
//!
//! Each recipe owns one `QuotaSampler` per run and wires the catalog, the
//! identity resolver and the synergy provider into it in a fixed order.
//!
//! ## Recipes
//!
//! - `adjust_pool`: rotating 100-card pool
//! - `random_cube`: sectioned random cube with per-category quotas
//! - `commander_cube`: commander-seeded 500-card cube (classic or hipster)
//! - `select_commanders`, `build_half_decks`, `add_lands`: jumpstart decks
//! - `all_commanders`, `jumpstart_commanders`: commander lists
//!
//! ## Configuration
//!
//! Every recipe takes a serde config whose `Default` holds the standard
//! constants. `RecipeConfigs` bundles them so one JSON file can override any
//! subset.

pub mod commander_cube;
pub mod jumpstart;
pub mod legends;
pub mod pool;
pub mod random_cube;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::ConfigError;

pub use commander_cube::{commander_cube, CommanderCubeConfig, CubeOutcome};
pub use jumpstart::{
    add_lands, build_half_decks, finish_decks, parse_half_decks, render_half_decks,
    render_jumpstart_decks, select_commanders, HalfDeckConfig, HalfDeckPair, JumpstartDeck,
    LandConfig, Selection, SelectionConfig, SEPARATOR_WIDTH,
};
pub use legends::{all_commanders, jumpstart_commanders, ALL_COMMANDERS_HEADER};
pub use pool::{adjust_pool, PoolConfig, PoolOutcome};
pub use random_cube::{random_cube, RandomCubeConfig};

/// Every recipe's settings in one document.
///
/// Overrides are merged key by key onto the defaults, so a partial
/// `hipster_cube` entry keeps the hipster values it does not mention.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeConfigs {
    pub pool: PoolConfig,
    pub random_cube: RandomCubeConfig,
    pub classic_cube: CommanderCubeConfig,
    pub hipster_cube: CommanderCubeConfig,
    pub selection: SelectionConfig,
    pub half_decks: HalfDeckConfig,
    pub lands: LandConfig,
}

impl Default for RecipeConfigs {
    fn default() -> Self {
        Self {
            pool: PoolConfig::default(),
            random_cube: RandomCubeConfig::default(),
            classic_cube: CommanderCubeConfig::classic(),
            hipster_cube: CommanderCubeConfig::hipster(),
            selection: SelectionConfig::default(),
            half_decks: HalfDeckConfig::default(),
            lands: LandConfig::default(),
        }
    }
}

impl RecipeConfigs {
    /// Apply a JSON override document to the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let overrides: Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(Self::default())?;
        merge(&mut merged, overrides);
        Ok(serde_json::from_value(merged)?)
    }

    /// Load overrides from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

fn merge(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
