//! MTGJSON catalog loading.
//!
//! Reads the `AllPrintings` layout: `{"data": {SET: {"code", "cards": [...]}}}`.
//! Only the fields the recipes use are decoded; everything else is ignored
//! and absent optional fields default to empty.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::color::ColorIdentity;
use super::definition::Card;
use super::registry::CatalogIndex;
use crate::core::CatalogError;

#[derive(Debug, Deserialize)]
struct AllPrintings {
    // BTreeMap keeps set iteration (and therefore load order) stable.
    data: BTreeMap<String, RawSet>,
}

#[derive(Debug, Deserialize)]
struct RawSet {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    cards: Vec<RawCard>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCard {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    supertypes: Vec<String>,
    #[serde(default)]
    color_identity: Vec<String>,
    #[serde(default)]
    legalities: FxHashMap<String, String>,
    #[serde(default)]
    leadership_skills: Option<RawLeadership>,
    #[serde(default)]
    layout: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawLeadership {
    #[serde(default)]
    commander: bool,
}

impl RawCard {
    fn into_card(self, set_code: &str) -> Option<Card> {
        let name = self.name.filter(|n| !n.is_empty())?;
        let identity = ColorIdentity::from_symbols(&self.color_identity);
        if !identity.is_valid() {
            log::warn!("{name}: unrecognized color identity {:?}", self.color_identity);
        }
        let mut card = Card::new(name)
            .with_types(self.types)
            .with_supertypes(self.supertypes)
            .with_identity(identity)
            .with_commander_eligible(self.leadership_skills.is_some_and(|l| l.commander))
            .with_layout(self.layout.unwrap_or_default())
            .with_text(self.text.unwrap_or_default())
            .in_set(set_code);
        card.legalities = self.legalities;
        Some(card)
    }
}

impl CatalogIndex {
    /// Parse a catalog from an MTGJSON document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let printings: AllPrintings = serde_json::from_str(json)?;
        Ok(Self::from_printings(printings))
    }

    /// Parse a catalog from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let printings: AllPrintings = serde_json::from_reader(reader)?;
        Ok(Self::from_printings(printings))
    }

    fn from_printings(printings: AllPrintings) -> Self {
        let mut catalog = CatalogIndex::new();
        for (key, set) in printings.data {
            let code = set.code.unwrap_or(key);
            for raw in set.cards {
                if let Some(card) = raw.into_card(&code) {
                    catalog.insert(card);
                }
            }
        }
        catalog
    }
}

/// Load the catalog from an `AllPrintings.json` file.
pub fn load_catalog(path: &Path) -> Result<CatalogIndex, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = CatalogIndex::from_reader(BufReader::new(file))?;
    log::info!("loaded {} cards from {}", catalog.len(), path.display());
    Ok(catalog)
}
