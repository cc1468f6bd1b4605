//! Commander lists derived straight from the catalog.

use crate::cards::{CardFilter, CatalogIndex, LEGENDARY_SUPERTYPE};
use crate::identity::{resolve, ColorLabel};
use crate::text::Section;

/// Header of the all-commanders list.
pub const ALL_COMMANDERS_HEADER: &str = "All Commanders";

/// Every card that may lead a commander deck, sorted by name.
#[must_use]
pub fn all_commanders(catalog: &CatalogIndex) -> Vec<String> {
    let mut names = catalog.filter_names(&CardFilter::CommanderEligible);
    names.sort();
    names.dedup();
    log::info!("found {} commanders", names.len());
    names
}

/// Legendary creatures, and planeswalkers that say they can be a commander,
/// excluding lands and artifacts.
fn jumpstart_filter() -> CardFilter {
    CardFilter::All(vec![
        CardFilter::HasSupertype(LEGENDARY_SUPERTYPE.into()),
        CardFilter::LacksType("Land".into()),
        CardFilter::LacksType("Artifact".into()),
        CardFilter::LegalIn("commander".into()),
        CardFilter::Any(vec![
            CardFilter::HasType("Creature".into()),
            CardFilter::All(vec![
                CardFilter::HasType("Planeswalker".into()),
                CardFilter::TextContains("can be your commander".into()),
            ]),
        ]),
    ])
}

/// Jumpstart commanders grouped by mono-color and guild label.
///
/// One section per label in `ColorLabel::JUMPSTART` order, present even when
/// empty. Commanders of three or more colors, or colorless, are left out.
#[must_use]
pub fn jumpstart_commanders(catalog: &CatalogIndex) -> Vec<Section> {
    let mut sections: Vec<Section> = ColorLabel::JUMPSTART
        .iter()
        .map(|label| Section::new(label.name(), Vec::new()))
        .collect();

    for card in catalog.filter(&jumpstart_filter()) {
        let label = resolve(card.color_identity);
        if let Some(idx) = ColorLabel::JUMPSTART.iter().position(|l| *l == label) {
            sections[idx].names.push(card.name.clone());
        }
    }

    for section in &mut sections {
        section.names.sort();
        section.names.dedup();
    }
    log::info!(
        "found {} jumpstart commanders",
        sections.iter().map(|s| s.names.len()).sum::<usize>()
    );
    sections
}
