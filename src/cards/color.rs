//! Colors and color identities.
//!
//! A color identity is an unordered subset of the five colors. It is stored
//! as a bit set, so two identities with the same members are always equal no
//! matter what order the symbols arrived in. Rendering walks the colors in
//! the fixed W, U, B, R, G order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    /// All colors in canonical W, U, B, R, G order.
    pub const ALL: [Color; 5] = [Color::White, Color::Blue, Color::Black, Color::Red, Color::Green];

    /// The single-letter symbol for this color.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }

    /// Parse a symbol such as `"W"` or `"g"`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Color> {
        match symbol.trim() {
            "W" | "w" => Some(Color::White),
            "U" | "u" => Some(Color::Blue),
            "B" | "b" => Some(Color::Black),
            "R" | "r" => Some(Color::Red),
            "G" | "g" => Some(Color::Green),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of colors, plus a marker for symbols outside the alphabet.
///
/// ```
/// use rust_cube::cards::{Color, ColorIdentity};
///
/// let a = ColorIdentity::from_symbols(["R", "W"]);
/// let b = ColorIdentity::from_symbols(["W", "R"]);
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "WR");
/// assert_eq!(a.colors(), vec![Color::White, Color::Red]);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColorIdentity(u8);

impl ColorIdentity {
    const COLOR_MASK: u8 = 0b1_1111;
    const INVALID: u8 = 1 << 7;

    /// The empty (colorless) identity.
    #[must_use]
    pub const fn colorless() -> Self {
        Self(0)
    }

    /// Build from colors; duplicates collapse.
    pub fn from_colors(colors: impl IntoIterator<Item = Color>) -> Self {
        let mut identity = Self::colorless();
        for color in colors {
            identity.insert(color);
        }
        identity
    }

    /// Build from raw symbols. Any symbol outside W/U/B/R/G marks the
    /// identity as invalid rather than being dropped, so it resolves to the
    /// unknown label downstream.
    pub fn from_symbols<S: AsRef<str>>(symbols: impl IntoIterator<Item = S>) -> Self {
        let mut identity = Self::colorless();
        for symbol in symbols {
            match Color::from_symbol(symbol.as_ref()) {
                Some(color) => identity.insert(color),
                None => identity.0 |= Self::INVALID,
            }
        }
        identity
    }

    pub fn insert(&mut self, color: Color) {
        self.0 |= color.bit();
    }

    #[must_use]
    pub fn contains(self, color: Color) -> bool {
        self.0 & color.bit() != 0
    }

    /// Combine two identities (a commander pair's shared identity).
    #[must_use]
    pub fn union(self, other: ColorIdentity) -> Self {
        Self(self.0 | other.0)
    }

    /// Number of distinct colors.
    #[must_use]
    pub fn len(self) -> usize {
        (self.0 & Self::COLOR_MASK).count_ones() as usize
    }

    #[must_use]
    pub fn is_colorless(self) -> bool {
        self.0 & Self::COLOR_MASK == 0
    }

    /// False if any source symbol was outside the five-color alphabet.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.0 & Self::INVALID == 0
    }

    /// Member colors in W, U, B, R, G order.
    #[must_use]
    pub fn colors(self) -> Vec<Color> {
        Color::ALL.into_iter().filter(|c| self.contains(*c)).collect()
    }

    /// Canonical key, e.g. `"WUG"`. Empty for colorless.
    #[must_use]
    pub fn canonical_key(self) -> String {
        Color::ALL
            .into_iter()
            .filter(|c| self.contains(*c))
            .map(Color::symbol)
            .collect()
    }
}

impl fmt::Display for ColorIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_colorless() {
            write!(f, "Colorless")?;
        } else {
            write!(f, "{}", self.canonical_key())?;
        }
        if !self.is_valid() {
            write!(f, "?")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ColorIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorIdentity({self})")
    }
}

impl FromIterator<Color> for ColorIdentity {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        Self::from_colors(iter)
    }
}
