//! Color identity → archetype label.
//!
//! Input symbols are projected onto the fixed W, U, B, R, G order to build a
//! canonical key, and the key is looked up in a static table. Two inputs with
//! the same members always produce the same key and therefore the same label.

use std::fmt;

use crate::cards::ColorIdentity;

/// Canonical archetype label for a color identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorLabel {
    Colorless,
    // Mono
    White,
    Blue,
    Black,
    Red,
    Green,
    // Guilds
    Azorius,
    Dimir,
    Rakdos,
    Gruul,
    Selesnya,
    Orzhov,
    Izzet,
    Golgari,
    Boros,
    Simic,
    // Shards
    Esper,
    Grixis,
    Jund,
    Naya,
    Bant,
    // Wedges
    Abzan,
    Jeskai,
    Sultai,
    Mardu,
    Temur,
    // Four color, named for the missing color
    NoGreen,
    NoBlue,
    NoWhite,
    NoRed,
    NoBlack,
    FiveColor,
    /// The identity could not be classified.
    Unknown,
}

/// Canonical key → label. Keys are always in W, U, B, R, G order.
const LABELS: &[(&str, ColorLabel)] = &[
    ("", ColorLabel::Colorless),
    ("W", ColorLabel::White),
    ("U", ColorLabel::Blue),
    ("B", ColorLabel::Black),
    ("R", ColorLabel::Red),
    ("G", ColorLabel::Green),
    ("WU", ColorLabel::Azorius),
    ("UB", ColorLabel::Dimir),
    ("BR", ColorLabel::Rakdos),
    ("RG", ColorLabel::Gruul),
    ("WG", ColorLabel::Selesnya),
    ("WB", ColorLabel::Orzhov),
    ("UR", ColorLabel::Izzet),
    ("BG", ColorLabel::Golgari),
    ("WR", ColorLabel::Boros),
    ("UG", ColorLabel::Simic),
    ("WUB", ColorLabel::Esper),
    ("UBR", ColorLabel::Grixis),
    ("BRG", ColorLabel::Jund),
    ("WRG", ColorLabel::Naya),
    ("WUG", ColorLabel::Bant),
    ("WBG", ColorLabel::Abzan),
    ("WUR", ColorLabel::Jeskai),
    ("UBG", ColorLabel::Sultai),
    ("WBR", ColorLabel::Mardu),
    ("URG", ColorLabel::Temur),
    ("WUBR", ColorLabel::NoGreen),
    ("WBRG", ColorLabel::NoBlue),
    ("UBRG", ColorLabel::NoWhite),
    ("WUBG", ColorLabel::NoRed),
    ("WURG", ColorLabel::NoBlack),
    ("WUBRG", ColorLabel::FiveColor),
];

impl ColorLabel {
    /// Mono-color and guild labels, in the order jumpstart commander lists use.
    pub const JUMPSTART: [ColorLabel; 15] = [
        ColorLabel::White,
        ColorLabel::Blue,
        ColorLabel::Black,
        ColorLabel::Red,
        ColorLabel::Green,
        ColorLabel::Azorius,
        ColorLabel::Dimir,
        ColorLabel::Rakdos,
        ColorLabel::Gruul,
        ColorLabel::Selesnya,
        ColorLabel::Orzhov,
        ColorLabel::Izzet,
        ColorLabel::Golgari,
        ColorLabel::Boros,
        ColorLabel::Simic,
    ];

    /// Display name, also used as the landbase category header.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ColorLabel::Colorless => "Colorless",
            ColorLabel::White => "White",
            ColorLabel::Blue => "Blue",
            ColorLabel::Black => "Black",
            ColorLabel::Red => "Red",
            ColorLabel::Green => "Green",
            ColorLabel::Azorius => "Azorius",
            ColorLabel::Dimir => "Dimir",
            ColorLabel::Rakdos => "Rakdos",
            ColorLabel::Gruul => "Gruul",
            ColorLabel::Selesnya => "Selesnya",
            ColorLabel::Orzhov => "Orzhov",
            ColorLabel::Izzet => "Izzet",
            ColorLabel::Golgari => "Golgari",
            ColorLabel::Boros => "Boros",
            ColorLabel::Simic => "Simic",
            ColorLabel::Esper => "Esper",
            ColorLabel::Grixis => "Grixis",
            ColorLabel::Jund => "Jund",
            ColorLabel::Naya => "Naya",
            ColorLabel::Bant => "Bant",
            ColorLabel::Abzan => "Abzan",
            ColorLabel::Jeskai => "Jeskai",
            ColorLabel::Sultai => "Sultai",
            ColorLabel::Mardu => "Mardu",
            ColorLabel::Temur => "Temur",
            ColorLabel::NoGreen => "NoGreen",
            ColorLabel::NoBlue => "NoBlue",
            ColorLabel::NoWhite => "NoWhite",
            ColorLabel::NoRed => "NoRed",
            ColorLabel::NoBlack => "NoBlack",
            ColorLabel::FiveColor => "FiveColor",
            ColorLabel::Unknown => "Unknown",
        }
    }

    #[must_use]
    pub fn is_unknown(self) -> bool {
        self == ColorLabel::Unknown
    }
}

impl fmt::Display for ColorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve an identity to its label.
///
/// Identities built from unrecognized symbols resolve to `Unknown`.
///
/// ```
/// use rust_cube::cards::ColorIdentity;
/// use rust_cube::identity::{resolve, ColorLabel};
///
/// assert_eq!(resolve(ColorIdentity::from_symbols(["R", "W"])), ColorLabel::Boros);
/// assert_eq!(resolve(ColorIdentity::from_symbols(["W", "R"])), ColorLabel::Boros);
/// assert_eq!(resolve(ColorIdentity::colorless()), ColorLabel::Colorless);
/// ```
#[must_use]
pub fn resolve(identity: ColorIdentity) -> ColorLabel {
    if !identity.is_valid() {
        log::warn!("cannot classify color identity {identity}");
        return ColorLabel::Unknown;
    }
    lookup_key(&identity.canonical_key())
}

/// Resolve raw color symbols, in any order.
#[must_use]
pub fn resolve_symbols<S: AsRef<str>>(symbols: impl IntoIterator<Item = S>) -> ColorLabel {
    resolve(ColorIdentity::from_symbols(symbols))
}

/// Look up a canonical key. Keys not in W, U, B, R, G order are unknown.
#[must_use]
pub fn lookup_key(key: &str) -> ColorLabel {
    LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(ColorLabel::Unknown, |(_, label)| *label)
}
