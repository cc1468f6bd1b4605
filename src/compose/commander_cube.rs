//! Commander-seeded cube.
//!
//! A handful of commanders are drawn at random, each commander's synergy page
//! supplies its best cards, and random cards from commander and masters
//! products fill whatever is left.
//!
//! ## Presets
//!
//! - `classic`: staples list first, 20 commanders, up to 20 top/high-synergy
//!   cards each topped up from the per-type sections.
//! - `hipster`: no staples, 10 commanders of two or more colors, up to 47
//!   cards each from every section except game changers, then a second pass
//!   over the same pages up to 480.
//!
//! Staples and commanders occupy cube slots; they count toward the target.

use serde::{Deserialize, Serialize};

use crate::cards::{CardFilter, CatalogIndex};
use crate::core::{ComposeError, PoolRng};
use crate::sampler::{CandidatePool, DrainMode, FillReport, QuotaSampler};
use crate::synergy::{collect, FetchCache, SynergyProvider, TagRules};

const FILLER_SETS: &[&str] = &[
    "C16", "C17", "C18", "C19", "C20", "C21", "C22", "C23", "CMA", "CMR", "CLB", "ONC", "VOC",
    "PIP", "2XM", "A25", "EMA", "IMA", "MM3", "MM2", "MMA", "UMA", "40K", "JMP", "BBD", "CMM",
];

/// Settings for one commander cube run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommanderCubeConfig {
    /// Final cube size.
    pub target: usize,
    /// Commanders drawn from the input list.
    pub commander_count: usize,
    /// Commanders with fewer colors are skipped.
    pub min_commander_colors: usize,
    /// Synergy cards taken per commander on the first pass.
    pub per_commander: usize,
    /// Sections drained first, in page order.
    pub primary: TagRules,
    /// Sections used to top a commander up when `primary` runs dry.
    pub fallback: Option<TagRules>,
    /// Revisit every commander's `primary` sections until this size.
    pub second_pass_target: Option<usize>,
    /// Put the staples list in the cube before anything else.
    pub include_staples: bool,
    /// Sets the random filler is drawn from.
    pub filler_sets: Vec<String>,
}

impl Default for CommanderCubeConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl CommanderCubeConfig {
    #[must_use]
    pub fn classic() -> Self {
        Self {
            target: 500,
            commander_count: 20,
            min_commander_colors: 0,
            per_commander: 20,
            primary: TagRules::only(["topcards", "highsynergycards"]),
            fallback: Some(TagRules::only([
                "creatures",
                "instants",
                "sorceries",
                "enchantments",
                "utilityartifacts",
                "utilitylands",
            ])),
            second_pass_target: None,
            include_staples: true,
            filler_sets: FILLER_SETS.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[must_use]
    pub fn hipster() -> Self {
        Self {
            commander_count: 10,
            min_commander_colors: 2,
            per_commander: 47,
            primary: TagRules::excluding(["gamechanger"]),
            fallback: None,
            second_pass_target: Some(480),
            include_staples: false,
            ..Self::classic()
        }
    }

    pub fn with_target(mut self, target: usize) -> Self {
        self.target = target;
        self
    }

    pub fn with_commanders(mut self, count: usize, min_colors: usize) -> Self {
        self.commander_count = count;
        self.min_commander_colors = min_colors;
        self
    }

    pub fn with_per_commander(mut self, per_commander: usize) -> Self {
        self.per_commander = per_commander;
        self
    }

    pub fn with_second_pass(mut self, target: Option<usize>) -> Self {
        self.second_pass_target = target;
        self
    }

    pub fn with_filler_sets<S: Into<String>>(mut self, sets: impl IntoIterator<Item = S>) -> Self {
        self.filler_sets = sets.into_iter().map(Into::into).collect();
        self
    }
}

/// A finished cube and how it was put together.
#[derive(Clone, Debug)]
pub struct CubeOutcome {
    pub cards: Vec<String>,
    /// Commanders that seeded the cube, in draw order.
    pub commanders: Vec<String>,
    /// Commanders whose synergy fetch failed.
    pub fetch_failures: usize,
    pub report: FillReport,
}

/// Shuffle the candidates and keep the first `count` with enough colors.
fn draw_commanders(
    catalog: &CatalogIndex,
    candidates: &[String],
    config: &CommanderCubeConfig,
    rng: &mut PoolRng,
) -> Vec<String> {
    let mut shuffled = candidates.to_vec();
    rng.shuffle(&mut shuffled);

    let mut drawn: Vec<String> = Vec::with_capacity(config.commander_count);
    for name in shuffled {
        if drawn.len() == config.commander_count {
            break;
        }
        if drawn.contains(&name) {
            continue;
        }
        if config.min_commander_colors > 0
            && catalog.identity_of(&name).len() < config.min_commander_colors
        {
            continue;
        }
        drawn.push(name);
    }
    drawn
}

/// Assemble a commander cube.
///
/// `commanders` is the list to draw from; `staples` is only used when the
/// config asks for it. Fails only when there is no commander to build on.
pub fn commander_cube(
    catalog: &CatalogIndex,
    provider: &dyn SynergyProvider,
    commanders: &[String],
    staples: &[String],
    config: &CommanderCubeConfig,
    rng: PoolRng,
) -> Result<CubeOutcome, ComposeError> {
    if commanders.is_empty() {
        return Err(ComposeError::MissingSeeds("commanders"));
    }
    let chosen = draw_commanders(catalog, commanders, config, &mut rng.for_context("commanders"));
    if chosen.is_empty() {
        return Err(ComposeError::MissingSeeds("commanders with enough colors"));
    }
    log::info!("selected {} commanders: {}", chosen.len(), chosen.join(", "));

    let mut sampler = QuotaSampler::new(rng.for_context("filler"));
    if config.include_staples {
        let seeded = sampler.seed(staples);
        log::info!("seeded {seeded} staples");
    }
    sampler.seed(&chosen);

    let mut cache = FetchCache::new(provider);
    for commander in &chosen {
        let room = config.target.saturating_sub(sampler.len());
        if room == 0 {
            break;
        }
        let limit = config.per_commander.min(room);
        let Some(page) = cache.page(commander) else {
            continue;
        };
        let primary = collect(page, &config.primary, sampler.claimed());
        let mut added = sampler.drain(&primary, limit, DrainMode::Ordered);
        if added < limit {
            if let Some(fallback) = &config.fallback {
                let secondary = collect(page, fallback, sampler.claimed());
                added += sampler.drain(&secondary, limit - added, DrainMode::Ordered);
            }
        }
        log::debug!("{commander}: {added} synergy cards");
    }

    if let Some(second) = config.second_pass_target {
        let second = second.min(config.target);
        for commander in &chosen {
            if sampler.len() >= second {
                break;
            }
            let Some(page) = cache.page(commander) else {
                continue;
            };
            let more = collect(page, &config.primary, sampler.claimed());
            let added = sampler.drain(&more, second - sampler.len(), DrainMode::Ordered);
            log::debug!("{commander}: {added} more on second pass");
        }
        log::info!("second pass reached {} cards", sampler.len());
    }

    let filler = CandidatePool::random(
        "filler",
        catalog.filter_names(&CardFilter::printed_in(config.filler_sets.iter().cloned())),
    );
    let report = sampler.fill_to(config.target, &[filler]);
    log::info!("cube complete with {} cards", report.filled);

    Ok(CubeOutcome {
        cards: sampler.into_output(),
        commanders: chosen,
        fetch_failures: cache.failures(),
        report,
    })
}
