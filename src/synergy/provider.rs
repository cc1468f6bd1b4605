//! Synergy providers.
//!
//! `SynergyProvider` is the seam between the recipes and the remote data
//! source. A fetch either yields a whole page or fails as a unit; retries and
//! rate limiting are out of scope.

use std::time::Duration;

use rustc_hash::FxHashMap;
use unicode_normalization::UnicodeNormalization;

use super::page::{RawPage, SynergyPage};
use crate::core::FetchFailed;

/// Source of ranked synergy data for a seed card.
pub trait SynergyProvider {
    /// Fetch the page for `seed`.
    fn fetch(&self, seed: &str) -> Result<SynergyPage, FetchFailed>;
}

/// EDHREC's URL slug for a commander name.
///
/// Accents are stripped, only the front face of a split/modal card is used,
/// commas and apostrophes are dropped and spaces become dashes.
///
/// ```
/// use rust_cube::synergy::commander_slug;
///
/// assert_eq!(commander_slug("Atraxa, Praetors' Voice"), "atraxa-praetors-voice");
/// assert_eq!(
///     commander_slug("Dennick, Pious Apprentice // Dennick, Pious Apparition"),
///     "dennick-pious-apprentice"
/// );
/// assert_eq!(commander_slug("Jötun Grunt"), "jotun-grunt");
/// ```
#[must_use]
pub fn commander_slug(name: &str) -> String {
    let ascii: String = name.nfkd().filter(char::is_ascii).collect();
    let front = ascii.split(" // ").next().unwrap_or_default();
    front
        .to_lowercase()
        .replace([',', '\''], "")
        .replace(' ', "-")
}

/// Blocking HTTP client for EDHREC commander pages.
#[derive(Clone, Debug)]
pub struct EdhrecProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl EdhrecProvider {
    /// Public EDHREC JSON endpoint for commander pages.
    pub const DEFAULT_BASE_URL: &'static str = "https://json.edhrec.com/pages/commanders";

    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a provider for the public endpoint.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_base_url(Self::DEFAULT_BASE_URL, Self::DEFAULT_TIMEOUT)
    }

    /// Create a provider for a custom endpoint (mirrors, local test servers).
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("rust-cube/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// The page URL for `seed`.
    #[must_use]
    pub fn url_for(&self, seed: &str) -> String {
        format!("{}/{}.json", self.base_url, commander_slug(seed))
    }
}

impl SynergyProvider for EdhrecProvider {
    fn fetch(&self, seed: &str) -> Result<SynergyPage, FetchFailed> {
        let url = self.url_for(seed);
        log::info!("fetching synergy for {seed} from {url}");

        let response = self.client.get(&url).send().map_err(|err| FetchFailed::Http {
            seed: seed.to_string(),
            message: err.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailed::Status {
                seed: seed.to_string(),
                status: status.as_u16(),
            });
        }

        let raw: RawPage = response.json().map_err(|err| FetchFailed::Decode {
            seed: seed.to_string(),
            message: err.to_string(),
        })?;
        Ok(raw.into())
    }
}

/// In-memory provider, keyed by seed name.
///
/// Seeds without a page fail with `FetchFailed::Missing`, which makes it a
/// convenient stand-in for an unreachable provider in offline runs and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticProvider {
    pages: FxHashMap<String, SynergyPage>,
}

impl StaticProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the page returned for `seed`.
    #[must_use]
    pub fn with_page(mut self, seed: impl Into<String>, page: SynergyPage) -> Self {
        self.pages.insert(seed.into(), page);
        self
    }
}

impl SynergyProvider for StaticProvider {
    fn fetch(&self, seed: &str) -> Result<SynergyPage, FetchFailed> {
        self.pages
            .get(seed)
            .cloned()
            .ok_or_else(|| FetchFailed::Missing(seed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synergy::SynergySection;

    #[test]
    fn test_slug_basic() {
        assert_eq!(commander_slug("Krenko, Mob Boss"), "krenko-mob-boss");
        assert_eq!(commander_slug("Sliver Overlord"), "sliver-overlord");
    }

    #[test]
    fn test_slug_strips_accents_and_back_face() {
        assert_eq!(commander_slug("Lim-Dûl the Necromancer"), "lim-dul-the-necromancer");
        assert_eq!(
            commander_slug("Esika, God of the Tree // The Prismatic Bridge"),
            "esika-god-of-the-tree"
        );
    }

    #[test]
    fn test_url_for() {
        let provider =
            EdhrecProvider::with_base_url("http://localhost:9/pages/", Duration::from_secs(1))
                .unwrap();
        assert_eq!(
            provider.url_for("Krenko, Mob Boss"),
            "http://localhost:9/pages/krenko-mob-boss.json"
        );
    }

    #[test]
    fn test_static_provider() {
        let page = SynergyPage::new(vec![SynergySection::new("topcards", ["Goblin Bombardment"])]);
        let provider = StaticProvider::new().with_page("Krenko, Mob Boss", page.clone());

        assert_eq!(provider.fetch("Krenko, Mob Boss").unwrap(), page);
        let err = provider.fetch("Nobody").unwrap_err();
        assert_eq!(err.seed(), "Nobody");
    }
}
