//! Flattening pages into candidate lists.
//!
//! Fetching and filtering are separate steps, so one fetched page can be
//! collected several times under different tag rules.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::page::SynergyPage;
use crate::sampler::ClaimedSet;

/// Matches a section tag, case-insensitively.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagRule {
    /// Tag equals the value.
    Exact(String),
    /// Tag contains the value.
    Contains(String),
}

impl TagRule {
    #[must_use]
    pub fn matches(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        match self {
            TagRule::Exact(value) => tag == value.to_lowercase(),
            TagRule::Contains(value) => tag.contains(&value.to_lowercase()),
        }
    }
}

/// Which sections of a page to use.
///
/// An empty include list admits every section. Exclusion always wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRules {
    #[serde(default)]
    pub include: Vec<TagRule>,
    #[serde(default)]
    pub exclude: Vec<TagRule>,
}

impl TagRules {
    /// Every section.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Only sections whose tag is exactly one of `tags`.
    #[must_use]
    pub fn only<S: Into<String>>(tags: impl IntoIterator<Item = S>) -> Self {
        Self {
            include: tags.into_iter().map(|t| TagRule::Exact(t.into())).collect(),
            exclude: Vec::new(),
        }
    }

    /// Every section except those whose tag contains one of `substrings`.
    #[must_use]
    pub fn excluding<S: Into<String>>(substrings: impl IntoIterator<Item = S>) -> Self {
        Self {
            include: Vec::new(),
            exclude: substrings
                .into_iter()
                .map(|t| TagRule::Contains(t.into()))
                .collect(),
        }
    }

    /// Whether a section with `tag` is used.
    #[must_use]
    pub fn admits(&self, tag: &str) -> bool {
        if self.exclude.iter().any(|rule| rule.matches(tag)) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|rule| rule.matches(tag))
    }
}

/// Flatten the admitted sections of `page` into one ordered list.
///
/// Section order and in-section order are preserved. Names already in
/// `claimed`, and repeats across sections, are skipped.
///
/// ```
/// use rust_cube::sampler::ClaimedSet;
/// use rust_cube::synergy::{collect, SynergyPage, SynergySection, TagRules};
///
/// let page = SynergyPage::new(vec![
///     SynergySection::new("topcards", ["Sol Ring", "Arcane Signet"]),
///     SynergySection::new("gamechangers", ["Rhystic Study"]),
///     SynergySection::new("creatures", ["Arcane Signet", "Llanowar Elves"]),
/// ]);
/// let claimed: ClaimedSet = ["Sol Ring"].into_iter().collect();
///
/// let names = collect(&page, &TagRules::excluding(["gamechanger"]), &claimed);
/// assert_eq!(names, ["Arcane Signet", "Llanowar Elves"]);
/// ```
#[must_use]
pub fn collect(page: &SynergyPage, rules: &TagRules, claimed: &ClaimedSet) -> Vec<String> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut out = Vec::new();
    for section in page.sections.iter().filter(|s| rules.admits(&s.tag)) {
        for name in &section.cards {
            if name.is_empty() || claimed.contains(name) || !seen.insert(name.as_str()) {
                continue;
            }
            out.push(name.clone());
        }
    }
    out
}
