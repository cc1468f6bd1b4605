//! Per-run memo of fetch outcomes.

use rustc_hash::FxHashMap;

use super::page::SynergyPage;
use super::provider::SynergyProvider;

/// Remembers each seed's fetch for the length of one run.
///
/// A failed fetch is remembered too, so a second pass does not hammer an
/// unreachable provider. Failures are logged once and read back as `None`.
pub struct FetchCache<'p> {
    provider: &'p dyn SynergyProvider,
    pages: FxHashMap<String, Option<SynergyPage>>,
    failures: usize,
}

impl<'p> FetchCache<'p> {
    #[must_use]
    pub fn new(provider: &'p dyn SynergyProvider) -> Self {
        Self {
            provider,
            pages: FxHashMap::default(),
            failures: 0,
        }
    }

    /// The page for `seed`, fetching it on first use.
    pub fn page(&mut self, seed: &str) -> Option<&SynergyPage> {
        if !self.pages.contains_key(seed) {
            let outcome = match self.provider.fetch(seed) {
                Ok(page) => {
                    if let Some(theme) = page.top_theme() {
                        log::info!("{seed}: top theme {theme}");
                    }
                    Some(page)
                }
                Err(err) => {
                    log::warn!("{err}; continuing without synergy data for {seed}");
                    self.failures += 1;
                    None
                }
            };
            self.pages.insert(seed.to_string(), outcome);
        }
        self.pages.get(seed).and_then(Option::as_ref)
    }

    /// Number of seeds whose fetch failed.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.failures
    }
}
