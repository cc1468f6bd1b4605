//! Synergy page model.
//!
//! A page is the provider's answer for one seed: named sections ("topcards",
//! "highsynergycards", "creatures", ...) each holding a ranked list of card
//! names, plus the seed's most popular theme tags.

use serde::Deserialize;

/// One tagged, ordered section of a page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SynergySection {
    pub tag: String,
    pub cards: Vec<String>,
}

impl SynergySection {
    #[must_use]
    pub fn new<S: Into<String>>(
        tag: impl Into<String>,
        cards: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            tag: tag.into(),
            cards: cards.into_iter().map(Into::into).collect(),
        }
    }
}

/// A successful fetch for one seed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SynergyPage {
    pub sections: Vec<SynergySection>,
    /// Theme tags, most popular first.
    pub themes: Vec<String>,
}

impl SynergyPage {
    #[must_use]
    pub fn new(sections: Vec<SynergySection>) -> Self {
        Self {
            sections,
            themes: Vec::new(),
        }
    }

    /// Every `(card, tag)` pair in page order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sections
            .iter()
            .flat_map(|s| s.cards.iter().map(move |c| (c.as_str(), s.tag.as_str())))
    }

    /// The section with exactly this tag (case-insensitive).
    #[must_use]
    pub fn section(&self, tag: &str) -> Option<&SynergySection> {
        self.sections.iter().find(|s| s.tag.eq_ignore_ascii_case(tag))
    }

    /// Most popular theme, if the provider reported any.
    #[must_use]
    pub fn top_theme(&self) -> Option<&str> {
        self.themes.first().map(String::as_str)
    }

    /// Decode an EDHREC commander page.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawPage = serde_json::from_str(json)?;
        Ok(raw.into())
    }
}

// EDHREC layout: container.json_dict.cardlists[].{tag, cardviews[].name}
// and panels.taglinks[].value.

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawPage {
    #[serde(default)]
    container: RawContainer,
    #[serde(default)]
    panels: RawPanels,
}

#[derive(Debug, Default, Deserialize)]
struct RawContainer {
    #[serde(default)]
    json_dict: RawJsonDict,
}

#[derive(Debug, Default, Deserialize)]
struct RawJsonDict {
    #[serde(default)]
    cardlists: Vec<RawCardList>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCardList {
    #[serde(default)]
    tag: String,
    #[serde(default)]
    cardviews: Vec<RawCardView>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCardView {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPanels {
    #[serde(default)]
    taglinks: Vec<RawTagLink>,
}

#[derive(Debug, Default, Deserialize)]
struct RawTagLink {
    #[serde(default)]
    value: Option<String>,
}

impl From<RawPage> for SynergyPage {
    fn from(raw: RawPage) -> Self {
        let sections = raw
            .container
            .json_dict
            .cardlists
            .into_iter()
            .map(|list| SynergySection {
                tag: list.tag,
                cards: list
                    .cardviews
                    .into_iter()
                    .filter_map(|view| view.name)
                    .filter(|name| !name.is_empty())
                    .collect(),
            })
            .collect();
        let themes = raw
            .panels
            .taglinks
            .into_iter()
            .filter_map(|link| link.value)
            .collect();
        SynergyPage { sections, themes }
    }
}
