//! Sectioned random cube.
//!
//! Five categories, each filled by a random drain against one shared claimed
//! set, in priority order: legendary creatures, lands, commander-product
//! cards, draft/masters cards, then anything at all. A card picked by an
//! earlier category is never offered to a later one.

use serde::{Deserialize, Serialize};

use crate::cards::{CardFilter, CatalogIndex};
use crate::core::PoolRng;
use crate::sampler::{DrainMode, Quota, QuotaSampler};
use crate::text::Section;

const COMMANDER_SETS: &[&str] = &[
    "CMD", "C13", "C14", "C15", "C16", "C17", "C18", "C19", "C20", "C21", "CMA", "CM2", "VOC",
    "WHO", "DMC", "PIP", "AFC", "KHC", "MOC", "MIC", "MKC", "NEC", "NCC", "OTC", "ONC", "SCD",
    "LTC", "BRC", "LCC", "40K", "WOC", "ZNC",
];

const MASTERS_SETS: &[&str] = &[
    "ACR", "BBD", "CMR", "CLB", "CNS", "CN2", "DBL", "JMP", "J22", "MH1", "H1R", "MH2", "MH3",
    "AKR", "CMM", "DMR", "2XM", "2X2", "EMA", "IMA", "KLR", "A25", "MMA", "MM2", "MM3", "RVR",
    "TSR", "PLST", "UMA", "SLX", "VMA",
];

fn owned(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}

/// Quotas and set lists for the random cube.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomCubeConfig {
    pub legendary_creatures: usize,
    pub lands: usize,
    pub commander_set_cards: usize,
    pub masters_set_cards: usize,
    pub random_cards: usize,
    pub commander_sets: Vec<String>,
    pub masters_sets: Vec<String>,
}

impl Default for RandomCubeConfig {
    fn default() -> Self {
        Self {
            legendary_creatures: 48,
            lands: 32,
            commander_set_cards: 75,
            masters_set_cards: 75,
            random_cards: 250,
            commander_sets: owned(COMMANDER_SETS),
            masters_sets: owned(MASTERS_SETS),
        }
    }
}

impl RandomCubeConfig {
    /// Override every quota at once.
    pub fn with_quotas(
        mut self,
        legendary_creatures: usize,
        lands: usize,
        commander_set_cards: usize,
        masters_set_cards: usize,
        random_cards: usize,
    ) -> Self {
        self.legendary_creatures = legendary_creatures;
        self.lands = lands;
        self.commander_set_cards = commander_set_cards;
        self.masters_set_cards = masters_set_cards;
        self.random_cards = random_cards;
        self
    }

    pub fn with_sets(mut self, commander_sets: Vec<String>, masters_sets: Vec<String>) -> Self {
        self.commander_sets = commander_sets;
        self.masters_sets = masters_sets;
        self
    }

    /// Sum of all quotas.
    #[must_use]
    pub fn total(&self) -> usize {
        self.quotas().iter().map(|(q, _)| q.target).sum()
    }

    fn quotas(&self) -> Vec<(Quota, CardFilter)> {
        vec![
            (
                Quota::new("Legendary creatures", self.legendary_creatures),
                CardFilter::legendary_creature(),
            ),
            (Quota::new("Lands", self.lands), CardFilter::HasType("Land".into())),
            (
                Quota::new("Commander Set Cards", self.commander_set_cards),
                CardFilter::printed_in(self.commander_sets.iter().cloned()),
            ),
            (
                Quota::new("Draft or Masters Set Cards", self.masters_set_cards),
                CardFilter::printed_in(self.masters_sets.iter().cloned()),
            ),
            (Quota::new("Random Cards", self.random_cards), CardFilter::any_card()),
        ]
    }
}

/// Build the sectioned cube. Sections come back in priority order, each
/// possibly short when the catalog cannot supply its quota.
#[must_use]
pub fn random_cube(
    catalog: &CatalogIndex,
    config: &RandomCubeConfig,
    rng: PoolRng,
) -> Vec<Section> {
    let mut sampler = QuotaSampler::new(rng);
    let mut sections = Vec::new();

    for (quota, filter) in config.quotas() {
        let candidates = catalog.filter_names(&filter);
        let start = sampler.len();
        let added = sampler.drain(&candidates, quota.target, DrainMode::Random);
        if quota.remaining(added) > 0 {
            log::warn!(
                "{}: only {added} of {} cards available",
                quota.label,
                quota.target
            );
        }
        log::info!("{}: {added} cards", quota.label);
        sections.push(Section::new(quota.label, sampler.output_since(start).to_vec()));
    }

    sections
}
