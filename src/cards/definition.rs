//! Card records - static catalog data.
//!
//! A `Card` holds the attributes the assembly recipes actually read: types,
//! supertypes, color identity, legalities and commander eligibility. The
//! name is the primary key; every other field is optional in the source
//! data and defaults to empty.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::color::ColorIdentity;

/// Supertype carried by basic lands.
pub const BASIC_SUPERTYPE: &str = "Basic";

/// Supertype carried by legendary permanents.
pub const LEGENDARY_SUPERTYPE: &str = "Legendary";

/// Legality status meaning "allowed".
pub const LEGAL: &str = "Legal";

/// A catalog card.
///
/// ## Example
///
/// ```
/// use rust_cube::cards::{Card, ColorIdentity};
///
/// let card = Card::new("Llanowar Elves")
///     .with_types(["Creature"])
///     .with_identity(ColorIdentity::from_symbols(["G"]))
///     .with_legality("commander", "Legal");
///
/// assert!(card.has_type("Creature"));
/// assert!(card.is_legal_in("commander"));
/// assert!(!card.is_basic());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Card {
    /// Unique card name.
    pub name: String,

    /// Card types (Creature, Land, Planeswalker, ...).
    pub types: SmallVec<[String; 2]>,

    /// Supertypes (Legendary, Basic, ...).
    pub supertypes: SmallVec<[String; 2]>,

    pub color_identity: ColorIdentity,

    /// Format → status, e.g. `commander → Legal`.
    pub legalities: FxHashMap<String, String>,

    /// Whether the card may lead a commander deck.
    pub commander_eligible: bool,

    /// Print layout (`normal`, `token`, `transform`, ...).
    pub layout: String,

    /// Rules text.
    pub text: String,

    /// Codes of every set this card was printed in.
    pub sets: SmallVec<[String; 4]>,
}

impl Card {
    /// Create a card with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_types<S: Into<String>>(mut self, types: impl IntoIterator<Item = S>) -> Self {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_supertypes<S: Into<String>>(
        mut self,
        supertypes: impl IntoIterator<Item = S>,
    ) -> Self {
        self.supertypes = supertypes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_identity(mut self, identity: ColorIdentity) -> Self {
        self.color_identity = identity;
        self
    }

    #[must_use]
    pub fn with_legality(mut self, format: impl Into<String>, status: impl Into<String>) -> Self {
        self.legalities.insert(format.into(), status.into());
        self
    }

    #[must_use]
    pub fn with_commander_eligible(mut self, eligible: bool) -> Self {
        self.commander_eligible = eligible;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Record a printing in `set_code`.
    #[must_use]
    pub fn in_set(mut self, set_code: impl Into<String>) -> Self {
        self.add_set(set_code);
        self
    }

    pub(crate) fn add_set(&mut self, set_code: impl Into<String>) {
        let code = set_code.into();
        if !self.sets.contains(&code) {
            self.sets.push(code);
        }
    }

    #[must_use]
    pub fn has_type(&self, card_type: &str) -> bool {
        self.types.iter().any(|t| t == card_type)
    }

    #[must_use]
    pub fn has_supertype(&self, supertype: &str) -> bool {
        self.supertypes.iter().any(|t| t == supertype)
    }

    /// Basic lands are excluded from every pool by default.
    #[must_use]
    pub fn is_basic(&self) -> bool {
        self.has_supertype(BASIC_SUPERTYPE)
    }

    #[must_use]
    pub fn is_legendary(&self) -> bool {
        self.has_supertype(LEGENDARY_SUPERTYPE)
    }

    #[must_use]
    pub fn is_token(&self) -> bool {
        self.layout == "token"
    }

    /// Check whether the card is legal in `format`. Missing entries are not legal.
    #[must_use]
    pub fn is_legal_in(&self, format: &str) -> bool {
        self.legalities.get(format).is_some_and(|s| s == LEGAL)
    }

    #[must_use]
    pub fn printed_in(&self, set_code: &str) -> bool {
        self.sets.iter().any(|s| s == set_code)
    }
}
