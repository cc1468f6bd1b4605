//! Rotating card pool.
//!
//! After each round of play the pool keeps the cards somebody played,
//! drops the winner's cards, and is topped back up with random catalog
//! cards. Kept cards count toward the target.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{CardFilter, CatalogIndex};
use crate::core::PoolRng;
use crate::sampler::{CandidatePool, DrainMode, FillReport, QuotaSampler};

/// Pool adjuster settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Final pool size.
    pub target: usize,
    /// Header written above the pool.
    pub header: String,
    /// File-name prefix of decklists in the input directory.
    pub decklist_prefix: String,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            target: 100,
            header: "Adjusted Card Pool".to_string(),
            decklist_prefix: "1decklist_".to_string(),
        }
    }
}

impl PoolConfig {
    /// Create a new config with a custom pool size.
    pub fn with_target(mut self, target: usize) -> Self {
        self.target = target;
        self
    }
}

/// Result of one adjustment.
#[derive(Clone, Debug)]
pub struct PoolOutcome {
    /// Kept cards first, then replenished ones.
    pub cards: Vec<String>,
    /// How many cards survived from the played decks.
    pub kept: usize,
    pub report: FillReport,
}

/// Rebuild the pool from the decklists of the last round.
///
/// The first decklist is the winner's. A card is kept when it is in the
/// catalog, was played in any deck, and is not in the winner's deck; kept
/// cards stay in first-seen order. Winner cards are also barred from the
/// random top-up. With no decklists the pool is built fresh.
#[must_use]
pub fn adjust_pool(
    catalog: &CatalogIndex,
    decklists: &[Vec<String>],
    config: &PoolConfig,
    rng: PoolRng,
) -> PoolOutcome {
    let mut sampler = QuotaSampler::new(rng);

    if let Some((winner, _)) = decklists.split_first() {
        let winning: FxHashSet<&str> = winner.iter().map(String::as_str).collect();
        let played: Vec<String> = decklists
            .iter()
            .flatten()
            .filter(|name| !winning.contains(name.as_str()))
            .filter(|name| catalog.get(name).is_some_and(|card| !card.is_basic()))
            .cloned()
            .collect();
        sampler.drain(&played, config.target, DrainMode::Ordered);
        sampler.exclude(winning);
        log::info!(
            "kept {} played cards from {} decklists ({} winner cards removed)",
            sampler.len(),
            decklists.len(),
            winner.len()
        );
    } else {
        log::info!("no decklists found; building a fresh pool");
    }

    let kept = sampler.len();
    let replenish = CandidatePool::random("catalog", catalog.filter_names(&CardFilter::any_card()));
    let report = sampler.fill_to(config.target, &[replenish]);

    PoolOutcome {
        cards: sampler.into_output(),
        kept,
        report,
    }
}
