//! Card predicates.
//!
//! `CardFilter` is a small combinator language over card attributes. Recipes
//! describe their pools with it ("legendary creatures", "non-token cards in
//! these sets", "lands of exactly this identity") and the catalog evaluates
//! it.

use rustc_hash::FxHashSet;

use super::color::ColorIdentity;
use super::definition::Card;

/// Predicate over a card's static attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardFilter {
    /// Card has the given type (`Creature`, `Land`, ...).
    HasType(String),
    /// Card does not have the given type.
    LacksType(String),
    /// Card has the given supertype.
    HasSupertype(String),
    /// Color identity equals exactly this set.
    IdentityEquals(ColorIdentity),
    /// Color identity size within `min..=max`.
    IdentitySize { min: usize, max: usize },
    /// Card is `Legal` in the named format.
    LegalIn(String),
    /// Card was printed in at least one of these sets.
    InSets(Vec<String>),
    /// Card was printed in none of these sets.
    NotInSets(Vec<String>),
    /// Card may lead a commander deck and is commander-legal.
    CommanderEligible,
    /// Rules text contains the substring, case-insensitively.
    TextContains(String),
    /// Card is not a token.
    NotToken,
    /// Card name is in the set.
    Named(FxHashSet<String>),
    /// Card name is not in the set.
    NotNamed(FxHashSet<String>),
    /// Every filter matches.
    All(Vec<CardFilter>),
    /// At least one filter matches.
    Any(Vec<CardFilter>),
    /// The inner filter does not match.
    Not(Box<CardFilter>),
    /// Admit basic lands, which the catalog otherwise rejects. Matches all.
    IncludeBasics,
}

impl CardFilter {
    /// Every card (basics still excluded by the catalog).
    #[must_use]
    pub fn any_card() -> Self {
        CardFilter::All(Vec::new())
    }

    /// Legendary creatures.
    #[must_use]
    pub fn legendary_creature() -> Self {
        CardFilter::All(vec![
            CardFilter::HasSupertype("Legendary".into()),
            CardFilter::HasType("Creature".into()),
        ])
    }

    /// Cards printed in `sets`, tokens excluded.
    #[must_use]
    pub fn printed_in<S: Into<String>>(sets: impl IntoIterator<Item = S>) -> Self {
        CardFilter::All(vec![
            CardFilter::InSets(sets.into_iter().map(Into::into).collect()),
            CardFilter::NotToken,
        ])
    }

    /// Lands with exactly `identity`.
    #[must_use]
    pub fn lands_of(identity: ColorIdentity) -> Self {
        CardFilter::All(vec![
            CardFilter::HasType("Land".into()),
            CardFilter::IdentityEquals(identity),
        ])
    }

    /// Nonland cards with exactly `identity`.
    #[must_use]
    pub fn nonlands_of(identity: ColorIdentity) -> Self {
        CardFilter::All(vec![
            CardFilter::LacksType("Land".into()),
            CardFilter::IdentityEquals(identity),
        ])
    }

    /// Combine with another filter.
    #[must_use]
    pub fn and(self, other: CardFilter) -> Self {
        match self {
            CardFilter::All(mut filters) => {
                filters.push(other);
                CardFilter::All(filters)
            }
            first => CardFilter::All(vec![first, other]),
        }
    }

    /// Evaluate against one card.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            CardFilter::HasType(t) => card.has_type(t),
            CardFilter::LacksType(t) => !card.has_type(t),
            CardFilter::HasSupertype(t) => card.has_supertype(t),
            CardFilter::IdentityEquals(identity) => card.color_identity == *identity,
            CardFilter::IdentitySize { min, max } => {
                let size = card.color_identity.len();
                size >= *min && size <= *max
            }
            CardFilter::LegalIn(format) => card.is_legal_in(format),
            CardFilter::InSets(sets) => sets.iter().any(|s| card.printed_in(s)),
            CardFilter::NotInSets(sets) => !sets.iter().any(|s| card.printed_in(s)),
            CardFilter::CommanderEligible => {
                card.commander_eligible && card.is_legal_in("commander")
            }
            CardFilter::TextContains(needle) => card
                .text
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            CardFilter::NotToken => !card.is_token(),
            CardFilter::Named(names) => names.contains(&card.name),
            CardFilter::NotNamed(names) => !names.contains(&card.name),
            CardFilter::All(filters) => filters.iter().all(|f| f.matches(card)),
            CardFilter::Any(filters) => filters.iter().any(|f| f.matches(card)),
            CardFilter::Not(inner) => !inner.matches(card),
            CardFilter::IncludeBasics => true,
        }
    }

    /// Whether this filter opts in to basic lands.
    ///
    /// Only a top-level `IncludeBasics` (directly or inside a top-level `All`)
    /// counts; nesting it under `Any`/`Not` does not.
    #[must_use]
    pub fn admits_basics(&self) -> bool {
        match self {
            CardFilter::IncludeBasics => true,
            CardFilter::All(filters) => filters.iter().any(CardFilter::admits_basics),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legend() -> Card {
        Card::new("Krenko, Mob Boss")
            .with_types(["Creature"])
            .with_supertypes(["Legendary"])
            .with_identity(ColorIdentity::from_symbols(["R"]))
            .with_legality("commander", "Legal")
            .with_commander_eligible(true)
            .in_set("DDN")
    }

    #[test]
    fn test_type_filters() {
        let card = legend();
        assert!(CardFilter::legendary_creature().matches(&card));
        assert!(CardFilter::LacksType("Land".into()).matches(&card));
        assert!(!CardFilter::HasType("Land".into()).matches(&card));
    }

    #[test]
    fn test_identity_filters() {
        let card = legend();
        let red = ColorIdentity::from_symbols(["R"]);
        assert!(CardFilter::nonlands_of(red).matches(&card));
        assert!(!CardFilter::lands_of(red).matches(&card));
        assert!(CardFilter::IdentitySize { min: 1, max: 1 }.matches(&card));
        assert!(!CardFilter::IdentitySize { min: 2, max: 5 }.matches(&card));
    }

    #[test]
    fn test_set_filters() {
        let card = legend();
        assert!(CardFilter::printed_in(["C16", "DDN"]).matches(&card));
        assert!(!CardFilter::printed_in(["C16"]).matches(&card));
        assert!(CardFilter::NotInSets(vec!["C16".into()]).matches(&card));
    }

    #[test]
    fn test_commander_and_text() {
        let card = legend();
        assert!(CardFilter::CommanderEligible.matches(&card));

        let walker = Card::new("Daretti")
            .with_types(["Planeswalker"])
            .with_text("Daretti can be your commander.");
        assert!(CardFilter::TextContains("CAN BE YOUR COMMANDER".into()).matches(&walker));
        assert!(!CardFilter::CommanderEligible.matches(&walker));
    }

    #[test]
    fn test_combinators() {
        let card = legend();
        let not_land = CardFilter::Not(Box::new(CardFilter::HasType("Land".into())));
        assert!(not_land.matches(&card));
        assert!(CardFilter::Any(vec![
            CardFilter::HasType("Land".into()),
            CardFilter::HasType("Creature".into()),
        ])
        .matches(&card));
        assert!(CardFilter::any_card().matches(&card));

        let mut names = FxHashSet::default();
        names.insert("Krenko, Mob Boss".to_string());
        assert!(CardFilter::Named(names.clone()).matches(&card));
        assert!(!CardFilter::NotNamed(names).matches(&card));
    }

    #[test]
    fn test_admits_basics() {
        assert!(!CardFilter::any_card().admits_basics());
        assert!(CardFilter::HasType("Land".into())
            .and(CardFilter::IncludeBasics)
            .admits_basics());
        assert!(!CardFilter::Not(Box::new(CardFilter::IncludeBasics)).admits_basics());
    }
}
