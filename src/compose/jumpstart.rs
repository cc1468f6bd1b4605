//! Jumpstart decks.
//!
//! Three stages, each reading the previous stage's text output:
//!
//! 1. `select_commanders`: deal commanders to players and draft rounds
//! 2. `build_half_decks`: pair commanders and build 34 cards for each
//! 3. `add_lands`: add a landbase and basics for the pair's combined colors
//!
//! ## Half-deck file
//!
//! ```text
//! Commanders:
//! <first>
//! <second>
//!
//! Deck:
//! <card>
//! ...
//!
//! ========================================
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{CardFilter, CatalogIndex};
use crate::core::{ComposeError, PoolRng};
use crate::identity::{expand_basics, resolve, ColorLabel};
use crate::sampler::{ClaimedSet, DrainMode, QuotaSampler};
use crate::synergy::{collect, FetchCache, SynergyProvider, TagRules};
use crate::text::{find_section, Section};

/// Width of the `=` line between decks.
pub const SEPARATOR_WIDTH: usize = 40;

const COMMANDERS_HEADER: &str = "Commanders:";
const DECK_HEADER: &str = "Deck:";

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

fn is_separator(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c == '=')
}

// ---------------------------------------------------------------------------
// Commander selection
// ---------------------------------------------------------------------------

/// How commanders are dealt out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub players: usize,
    pub picks_per_player: usize,
    pub draft_rounds: usize,
    pub draft_size: usize,
    /// Fewer distinct commanders than this is an error.
    pub minimum: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            players: 4,
            picks_per_player: 2,
            draft_rounds: 2,
            draft_size: 5,
            minimum: 20,
        }
    }
}

impl SelectionConfig {
    pub fn with_players(mut self, players: usize, picks_per_player: usize) -> Self {
        self.players = players;
        self.picks_per_player = picks_per_player;
        self
    }

    pub fn with_draft(mut self, rounds: usize, size: usize) -> Self {
        self.draft_rounds = rounds;
        self.draft_size = size;
        self
    }

    pub fn with_minimum(mut self, minimum: usize) -> Self {
        self.minimum = minimum;
        self
    }
}

/// Commanders dealt to players plus the draft rounds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub players: Vec<Vec<String>>,
    pub rounds: Vec<Vec<String>>,
}

impl Selection {
    /// `PlayerN:` sections, then `DraftVariant:` and `Round N:` for the rounds.
    #[must_use]
    pub fn to_sections(&self) -> Vec<Section> {
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(i, picks)| Section::new(format!("Player{}", i + 1), picks.clone()));
        let rounds = self.rounds.iter().enumerate().map(|(i, picks)| {
            let header = if i == 0 {
                "DraftVariant".to_string()
            } else {
                format!("Round {}", i + 1)
            };
            Section::new(header, picks.clone())
        });
        players.chain(rounds).collect()
    }

    /// Every selected commander in section order.
    pub fn commanders(&self) -> impl Iterator<Item = &String> {
        self.players.iter().chain(&self.rounds).flatten()
    }
}

/// Shuffle the commanders, deal picks round-robin, then draw each draft
/// round from whoever is left. No commander appears twice.
pub fn select_commanders(
    commanders: &[String],
    config: &SelectionConfig,
    rng: PoolRng,
) -> Result<Selection, ComposeError> {
    let distinct: ClaimedSet = commanders.iter().collect();
    if distinct.len() < config.minimum {
        return Err(ComposeError::NotEnoughSeeds {
            what: "commanders",
            needed: config.minimum,
            found: distinct.len(),
        });
    }

    let mut sampler = QuotaSampler::new(rng);
    let mut shuffled = commanders.to_vec();
    sampler.rng_mut().shuffle(&mut shuffled);

    let mut players = vec![Vec::new(); config.players];
    let picks = config.players * config.picks_per_player;
    let mut dealt = 0;
    for name in &shuffled {
        if dealt == picks {
            break;
        }
        if sampler.claim(name) {
            players[dealt % config.players].push(name.clone());
            dealt += 1;
        }
    }

    let mut rounds = Vec::with_capacity(config.draft_rounds);
    for round in 0..config.draft_rounds {
        let start = sampler.len();
        let drawn = sampler.drain(&shuffled, config.draft_size, DrainMode::Random);
        if drawn < config.draft_size {
            log::warn!("draft round {} has only {drawn} commanders", round + 1);
        }
        rounds.push(sampler.output_since(start).to_vec());
    }

    log::info!(
        "dealt {dealt} commanders to {} players, {} draft rounds",
        config.players,
        rounds.len()
    );
    Ok(Selection { players, rounds })
}

// ---------------------------------------------------------------------------
// Half decks
// ---------------------------------------------------------------------------

/// Shape of one commander's half deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HalfDeckConfig {
    pub utility_lands: usize,
    pub nonlands: usize,
    /// Sections the utility lands come from.
    pub land_rules: TagRules,
    /// Best cards, drained in page order before anything else.
    pub core_rules: TagRules,
    /// Sections sampled at random for the remaining nonland slots.
    pub nonland_rules: TagRules,
}

impl Default for HalfDeckConfig {
    fn default() -> Self {
        Self {
            utility_lands: 4,
            nonlands: 30,
            land_rules: TagRules::only(["utilitylands"]),
            core_rules: TagRules::only(["topcards", "highsynergycards"]),
            nonland_rules: TagRules::only([
                "creatures",
                "instants",
                "sorceries",
                "enchantments",
                "utilityartifacts",
            ]),
        }
    }
}

impl HalfDeckConfig {
    pub fn with_sizes(mut self, utility_lands: usize, nonlands: usize) -> Self {
        self.utility_lands = utility_lands;
        self.nonlands = nonlands;
        self
    }

    /// Cards in one half deck.
    #[must_use]
    pub fn half_size(&self) -> usize {
        self.utility_lands + self.nonlands
    }
}

/// Two commanders and the cards built for them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HalfDeckPair {
    pub commanders: [String; 2],
    /// First commander's half, then the second's.
    pub cards: Vec<String>,
}

fn build_half_deck(
    sampler: &mut QuotaSampler,
    cache: &mut FetchCache<'_>,
    catalog: &CatalogIndex,
    commander: &str,
    config: &HalfDeckConfig,
) {
    let identity = catalog.identity_of(commander);
    let (utility, core, nonland) = match cache.page(commander) {
        Some(page) => (
            collect(page, &config.land_rules, sampler.claimed()),
            collect(page, &config.core_rules, sampler.claimed()),
            collect(page, &config.nonland_rules, sampler.claimed()),
        ),
        None => Default::default(),
    };

    let mut lands = sampler.drain(&utility, config.utility_lands, DrainMode::Random);
    if lands < config.utility_lands {
        let backup = catalog.filter_names(&CardFilter::lands_of(identity));
        lands += sampler.drain(&backup, config.utility_lands - lands, DrainMode::Random);
        log::debug!("{commander}: topped up utility lands from the catalog");
    }

    let mut nonlands = sampler.drain(&core, config.nonlands, DrainMode::Ordered);
    nonlands += sampler.drain(&nonland, config.nonlands - nonlands, DrainMode::Random);
    if nonlands < config.nonlands {
        let backup = catalog.filter_names(&CardFilter::nonlands_of(identity));
        nonlands += sampler.drain(&backup, config.nonlands - nonlands, DrainMode::Random);
        log::debug!("{commander}: topped up nonlands from the catalog");
    }

    if lands + nonlands < config.half_size() {
        log::warn!(
            "{commander}: half deck has {} of {} cards",
            lands + nonlands,
            config.half_size()
        );
    }
}

/// Pair commanders in order and build both halves of each deck.
///
/// The two halves share one claimed set, seeded with both commanders, so a
/// deck never holds a card twice. A commander left without a partner is
/// skipped. A failed fetch only means that half comes from the catalog.
pub fn build_half_decks(
    catalog: &CatalogIndex,
    provider: &dyn SynergyProvider,
    commanders: &[String],
    config: &HalfDeckConfig,
    mut rng: PoolRng,
) -> Result<Vec<HalfDeckPair>, ComposeError> {
    if commanders.is_empty() {
        return Err(ComposeError::MissingSeeds("commanders"));
    }

    let mut cache = FetchCache::new(provider);
    let mut pairs = Vec::new();
    for chunk in commanders.chunks(2) {
        let [first, second] = chunk else {
            log::warn!("{} has no partner; skipping", chunk[0]);
            continue;
        };
        let claimed: ClaimedSet = [first, second].into_iter().collect();
        let mut sampler = QuotaSampler::with_claimed(claimed, rng.fork());
        build_half_deck(&mut sampler, &mut cache, catalog, first, config);
        build_half_deck(&mut sampler, &mut cache, catalog, second, config);
        log::info!("{first} + {second}: {} cards", sampler.len());

        pairs.push(HalfDeckPair {
            commanders: [first.clone(), second.clone()],
            cards: sampler.into_output(),
        });
    }
    Ok(pairs)
}

/// Write pairs in the half-deck file format.
#[must_use]
pub fn render_half_decks(pairs: &[HalfDeckPair]) -> String {
    let mut out = String::new();
    for pair in pairs {
        out.push_str(COMMANDERS_HEADER);
        out.push('\n');
        for commander in &pair.commanders {
            out.push_str(commander);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(DECK_HEADER);
        out.push('\n');
        for card in &pair.cards {
            out.push_str(card);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&separator());
        out.push_str("\n\n");
    }
    out
}

/// Read a half-deck file back. Blocks without two commanders are skipped.
#[must_use]
pub fn parse_half_decks(text: &str) -> Vec<HalfDeckPair> {
    let mut pairs = Vec::new();
    let mut block: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim).chain(std::iter::once("=")) {
        if is_separator(line) {
            if let Some(pair) = parse_block(&block) {
                pairs.push(pair);
            }
            block.clear();
        } else if !line.is_empty() {
            block.push(line);
        }
    }
    pairs
}

fn parse_block(lines: &[&str]) -> Option<HalfDeckPair> {
    if lines.is_empty() {
        return None;
    }
    let mut commanders = Vec::new();
    let mut cards = Vec::new();
    let mut in_deck = false;
    for &line in lines {
        match line {
            COMMANDERS_HEADER => in_deck = false,
            DECK_HEADER => in_deck = true,
            _ if in_deck => cards.push(line.to_string()),
            _ => commanders.push(line.to_string()),
        }
    }
    match <[String; 2]>::try_from(commanders) {
        Ok(commanders) => Some(HalfDeckPair { commanders, cards }),
        Err(found) => {
            log::warn!("skipping deck block with {} commanders", found.len());
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Lands
// ---------------------------------------------------------------------------

/// How many landbase lands each finished deck gets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandConfig {
    pub landbase_lands: usize,
}

impl Default for LandConfig {
    fn default() -> Self {
        Self { landbase_lands: 15 }
    }
}

/// A half-deck pair with its lands added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JumpstartDeck {
    pub commanders: [String; 2],
    pub cards: Vec<String>,
    /// Label of the pair's combined identity; also the landbase category.
    pub label: ColorLabel,
    pub lands: Vec<String>,
    pub basics: Vec<String>,
}

/// Add landbase lands and basics to one pair.
///
/// `landbases` are the sections of the landbase file, keyed by label name.
/// A missing category adds no landbase lands. An unknown identity adds no
/// lands at all; a five-color or colorless deck gets no basics.
#[must_use]
pub fn add_lands(
    catalog: &CatalogIndex,
    landbases: &[Section],
    pair: &HalfDeckPair,
    config: &LandConfig,
    rng: PoolRng,
) -> JumpstartDeck {
    let [first, second] = &pair.commanders;
    let identity = catalog.identity_of(first).union(catalog.identity_of(second));
    let label = resolve(identity);

    let claimed: ClaimedSet = pair.commanders.iter().chain(&pair.cards).collect();
    let mut sampler = QuotaSampler::with_claimed(claimed, rng);
    if label.is_unknown() {
        log::warn!("{first} + {second}: identity {identity} has no land category");
    } else {
        match find_section(landbases, label.name()) {
            Some(section) => {
                let added = sampler.drain(&section.names, config.landbase_lands, DrainMode::Random);
                if added < config.landbase_lands {
                    log::warn!(
                        "{label} landbase supplied {added} of {} lands",
                        config.landbase_lands
                    );
                }
            }
            None => log::warn!("no {label} category in the landbase file"),
        }
    }

    let basics = expand_basics(identity);
    if basics.is_empty() && !label.is_unknown() {
        log::warn!("{first} + {second}: no basic split for {label}");
    }
    log::info!("{first} + {second}: {label}");

    JumpstartDeck {
        commanders: pair.commanders.clone(),
        cards: pair.cards.clone(),
        label,
        lands: sampler.into_output(),
        basics,
    }
}

/// Add lands to every pair, each with its own random stream.
#[must_use]
pub fn finish_decks(
    catalog: &CatalogIndex,
    landbases: &[Section],
    pairs: &[HalfDeckPair],
    config: &LandConfig,
    mut rng: PoolRng,
) -> Vec<JumpstartDeck> {
    pairs
        .iter()
        .map(|pair| add_lands(catalog, landbases, pair, config, rng.fork()))
        .collect()
}

/// Write finished decks: the half-deck block with lands and basics appended.
#[must_use]
pub fn render_jumpstart_decks(decks: &[JumpstartDeck]) -> String {
    let mut out = String::new();
    for deck in decks {
        out.push_str(COMMANDERS_HEADER);
        out.push('\n');
        for commander in &deck.commanders {
            out.push_str(commander);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(DECK_HEADER);
        out.push('\n');
        for card in deck.cards.iter().chain(&deck.lands).chain(&deck.basics) {
            out.push_str(card);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&separator());
        out.push('\n');
    }
    out
}
