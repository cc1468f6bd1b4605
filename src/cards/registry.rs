//! Catalog index for card lookup.
//!
//! The `CatalogIndex` stores every card known to a run. It provides lookup
//! by name and predicate filtering, both in a stable load order so that
//! seeded runs reproduce exactly. It is never mutated once built and can be
//! shared by reference across any number of recipe runs.

use rustc_hash::FxHashMap;

use super::color::ColorIdentity;
use super::definition::Card;
use super::filter::CardFilter;
use crate::core::CatalogError;

/// Read-only index over the card catalog.
///
/// ## Example
///
/// ```
/// use rust_cube::cards::{Card, CardFilter, CatalogIndex};
///
/// let mut catalog = CatalogIndex::new();
/// catalog.insert(Card::new("Lightning Bolt").with_types(["Instant"]));
/// catalog.insert(Card::new("Mountain").with_types(["Land"]).with_supertypes(["Basic"]));
///
/// assert_eq!(catalog.lookup("Lightning Bolt").unwrap().name, "Lightning Bolt");
///
/// // Basic lands never appear in a pool unless asked for.
/// assert_eq!(catalog.filter_names(&CardFilter::any_card()), vec!["Lightning Bolt"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CatalogIndex {
    cards: Vec<Card>,
    by_name: FxHashMap<String, usize>,
}

impl CatalogIndex {
    /// Create a new empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card, or merge a reprint into an existing entry.
    ///
    /// The first printing seen supplies the attributes; later printings only
    /// contribute their set codes.
    pub fn insert(&mut self, card: Card) {
        if let Some(&idx) = self.by_name.get(&card.name) {
            let existing = &mut self.cards[idx];
            for set in card.sets {
                existing.add_set(set);
            }
            return;
        }
        self.by_name.insert(card.name.clone(), self.cards.len());
        self.cards.push(card);
    }

    /// Look up a card by name.
    pub fn lookup(&self, name: &str) -> Result<&Card, CatalogError> {
        self.get(name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// Look up a card by name, `None` on a miss.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Card> {
        self.by_name.get(name).map(|&idx| &self.cards[idx])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Color identity of a named card. A miss yields colorless and a warning,
    /// matching how every recipe treats unknown seeds.
    #[must_use]
    pub fn identity_of(&self, name: &str) -> ColorIdentity {
        match self.lookup(name) {
            Ok(card) => card.color_identity,
            Err(err) => {
                log::warn!("{err}; assuming colorless identity");
                ColorIdentity::colorless()
            }
        }
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in load order, basics included.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Cards matching `filter`, in load order.
    ///
    /// Basic lands are rejected unless the filter admits them
    /// (`CardFilter::IncludeBasics`).
    #[must_use]
    pub fn filter(&self, filter: &CardFilter) -> Vec<&Card> {
        let admit_basics = filter.admits_basics();
        self.cards
            .iter()
            .filter(|c| (admit_basics || !c.is_basic()) && filter.matches(c))
            .collect()
    }

    /// Names of cards matching `filter`, in load order.
    #[must_use]
    pub fn filter_names(&self, filter: &CardFilter) -> Vec<String> {
        self.filter(filter).into_iter().map(|c| c.name.clone()).collect()
    }
}

impl FromIterator<Card> for CatalogIndex {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut catalog = CatalogIndex::new();
        for card in iter {
            catalog.insert(card);
        }
        catalog
    }
}
