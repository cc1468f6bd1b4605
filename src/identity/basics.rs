//! Basic-land split for jumpstart decks.
//!
//! A deck of one to four colors gets 15 basic lands, split as evenly as
//! possible; leftover lands go to the earliest colors in W, U, B, R, G order.
//! Colorless, five-color and unclassifiable decks are not split.

use crate::cards::{Color, ColorIdentity};

/// Basic lands added to every jumpstart deck.
pub const BASIC_LAND_COUNT: usize = 15;

/// The basic land that produces `color`.
#[must_use]
pub const fn basic_land_name(color: Color) -> &'static str {
    match color {
        Color::White => "Plains",
        Color::Blue => "Island",
        Color::Black => "Swamp",
        Color::Red => "Mountain",
        Color::Green => "Forest",
    }
}

/// Per-color basic counts summing to exactly 15.
///
/// Returns an empty split for colorless, five-color and invalid identities.
///
/// ```
/// use rust_cube::cards::{Color, ColorIdentity};
/// use rust_cube::identity::split_basics;
///
/// let split = split_basics(ColorIdentity::from_symbols(["G", "W"]));
/// assert_eq!(split, vec![(Color::White, 8), (Color::Green, 7)]);
/// ```
#[must_use]
pub fn split_basics(identity: ColorIdentity) -> Vec<(Color, usize)> {
    let colors = identity.colors();
    if !identity.is_valid() || colors.is_empty() || colors.len() >= Color::ALL.len() {
        return Vec::new();
    }
    let share = BASIC_LAND_COUNT / colors.len();
    let remainder = BASIC_LAND_COUNT % colors.len();
    colors
        .into_iter()
        .enumerate()
        .map(|(i, color)| (color, share + usize::from(i < remainder)))
        .collect()
}

/// The split expanded to one land name per card.
#[must_use]
pub fn expand_basics(identity: ColorIdentity) -> Vec<String> {
    split_basics(identity)
        .into_iter()
        .flat_map(|(color, count)| {
            std::iter::repeat(basic_land_name(color).to_string()).take(count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(symbols: &[&str]) -> Vec<usize> {
        split_basics(ColorIdentity::from_symbols(symbols))
            .into_iter()
            .map(|(_, n)| n)
            .collect()
    }

    #[test]
    fn test_exact_splits() {
        assert_eq!(counts(&["R"]), vec![15]);
        assert_eq!(counts(&["R", "U"]), vec![8, 7]);
        assert_eq!(counts(&["G", "B", "W"]), vec![5, 5, 5]);
        assert_eq!(counts(&["G", "R", "B", "U"]), vec![4, 4, 4, 3]);
    }

    #[test]
    fn test_remainder_goes_to_earliest_color() {
        let split = split_basics(ColorIdentity::from_symbols(["G", "U"]));
        assert_eq!(split, vec![(Color::Blue, 8), (Color::Green, 7)]);

        let split = split_basics(ColorIdentity::from_symbols(["G", "R", "B", "W"]));
        assert_eq!(split.last(), Some(&(Color::Green, 3)));
    }

    #[test]
    fn test_unsplit_identities() {
        assert!(split_basics(ColorIdentity::colorless()).is_empty());
        assert!(split_basics(ColorIdentity::from_symbols(["W", "U", "B", "R", "G"])).is_empty());
        assert!(split_basics(ColorIdentity::from_symbols(["W", "X"])).is_empty());
    }

    #[test]
    fn test_expand() {
        let lands = expand_basics(ColorIdentity::from_symbols(["B", "W"]));
        assert_eq!(lands.len(), BASIC_LAND_COUNT);
        assert_eq!(lands.iter().filter(|l| *l == "Plains").count(), 8);
        assert_eq!(lands.iter().filter(|l| *l == "Swamp").count(), 7);
        assert_eq!(lands[0], "Plains");
    }
}
