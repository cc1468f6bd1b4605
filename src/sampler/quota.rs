//! The uniqueness-and-quota engine.
//!
//! A `QuotaSampler` owns one run's `ClaimedSet`, its output sequence and its
//! RNG. Pools are drained one at a time, in priority order, and every name a
//! drain takes is appended to the output and claimed in the same step. No
//! name can therefore be seen as available twice, however many overlapping
//! pools are drained.
//!
//! ## Modes
//!
//! - `DrainMode::Ordered`: walk the pool front to back. Used when the source
//!   ranking matters (top synergy cards first).
//! - `DrainMode::Random`: uniform sample without replacement from the pool
//!   minus claimed names. Used for filler with no meaningful order.
//!
//! ## Shortfalls
//!
//! Running out of candidates is not an error. `fill_to` reports how far it
//! got and the output is simply shorter than requested.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::claimed::ClaimedSet;
use crate::core::PoolRng;

/// How a pool is drained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrainMode {
    /// Preserve source order.
    Ordered,
    /// Uniform sample without replacement.
    Random,
}

/// A named source of candidate names plus its drain mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidatePool {
    /// Label used in logs and reports ("synergy", "filler", ...).
    pub label: String,
    pub names: Vec<String>,
    pub mode: DrainMode,
}

impl CandidatePool {
    #[must_use]
    pub fn new(label: impl Into<String>, names: Vec<String>, mode: DrainMode) -> Self {
        Self {
            label: label.into(),
            names,
            mode,
        }
    }

    #[must_use]
    pub fn ordered(label: impl Into<String>, names: Vec<String>) -> Self {
        Self::new(label, names, DrainMode::Ordered)
    }

    #[must_use]
    pub fn random(label: impl Into<String>, names: Vec<String>) -> Self {
        Self::new(label, names, DrainMode::Random)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Target count for one category of output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quota {
    pub label: String,
    pub target: usize,
}

impl Quota {
    #[must_use]
    pub fn new(label: impl Into<String>, target: usize) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }

    /// Slots left after `filled` names. Never negative.
    #[must_use]
    pub fn remaining(&self, filled: usize) -> usize {
        self.target.saturating_sub(filled)
    }
}

/// Outcome of a `fill_to` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FillReport {
    pub target: usize,
    /// Output length after filling.
    pub filled: usize,
    /// Names taken from each pool, by label, in drain order.
    pub taken: Vec<(String, usize)>,
}

impl FillReport {
    /// How many names short of the target the output ended up.
    #[must_use]
    pub fn shortfall(&self) -> usize {
        self.target.saturating_sub(self.filled)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.shortfall() == 0
    }
}

/// Unique-sampling engine for one assembly run.
///
/// ## Example
///
/// ```
/// use rust_cube::core::PoolRng;
/// use rust_cube::sampler::{CandidatePool, QuotaSampler};
///
/// let mut sampler = QuotaSampler::new(PoolRng::new(42));
/// sampler.seed(["A", "B"]);
///
/// let filler = CandidatePool::ordered("filler", vec!["B".into(), "C".into(), "D".into()]);
/// let report = sampler.fill_to(3, &[filler]);
///
/// assert_eq!(sampler.output(), ["A", "B", "C"]);
/// assert!(report.is_complete());
/// ```
#[derive(Clone, Debug)]
pub struct QuotaSampler {
    claimed: ClaimedSet,
    output: Vec<String>,
    rng: PoolRng,
}

impl QuotaSampler {
    /// Create an empty sampler drawing randomness from `rng`.
    #[must_use]
    pub fn new(rng: PoolRng) -> Self {
        Self::with_claimed(ClaimedSet::new(), rng)
    }

    /// Create a sampler whose claimed set starts with names that must stay
    /// untouched. They are unavailable to every pool but are not part of the
    /// output.
    #[must_use]
    pub fn with_claimed(claimed: ClaimedSet, rng: PoolRng) -> Self {
        Self {
            claimed,
            output: Vec::new(),
            rng,
        }
    }

    /// Mark names unavailable without adding them to the output.
    pub fn exclude<S: AsRef<str>>(&mut self, names: impl IntoIterator<Item = S>) {
        for name in names {
            self.claimed.claim(name.as_ref());
        }
    }

    /// Add one name to the output if it is not yet claimed.
    pub fn claim(&mut self, name: &str) -> bool {
        if name.is_empty() || !self.claimed.claim(name) {
            return false;
        }
        self.output.push(name.to_string());
        true
    }

    /// Add seed names in order, skipping duplicates. Returns how many were added.
    pub fn seed<S: AsRef<str>>(&mut self, names: impl IntoIterator<Item = S>) -> usize {
        names
            .into_iter()
            .filter(|name| self.claim(name.as_ref()))
            .count()
    }

    /// Take up to `limit` unclaimed names from `pool`.
    ///
    /// Returns the number of names added. `limit == 0` and empty pools are
    /// no-ops; asking for more than the pool holds takes everything available.
    pub fn drain(&mut self, pool: &[String], limit: usize, mode: DrainMode) -> usize {
        if limit == 0 || pool.is_empty() {
            return 0;
        }
        match mode {
            DrainMode::Ordered => self.drain_ordered(pool, limit),
            DrainMode::Random => self.drain_random(pool, limit),
        }
    }

    /// Drain a `CandidatePool` using its own mode.
    pub fn drain_pool(&mut self, pool: &CandidatePool, limit: usize) -> usize {
        let added = self.drain(&pool.names, limit, pool.mode);
        log::debug!(
            "drained {added}/{limit} from {} ({} candidates, {:?})",
            pool.label,
            pool.names.len(),
            pool.mode
        );
        added
    }

    fn drain_ordered(&mut self, pool: &[String], limit: usize) -> usize {
        let mut added = 0;
        for name in pool {
            if added == limit {
                break;
            }
            if self.claim(name) {
                added += 1;
            }
        }
        added
    }

    fn drain_random(&mut self, pool: &[String], limit: usize) -> usize {
        let mut seen: FxHashSet<&String> = FxHashSet::default();
        let candidates: Vec<&String> = pool
            .iter()
            .filter(|name| !name.is_empty() && !self.claimed.contains(name))
            .filter(|name| seen.insert(*name))
            .collect();

        let picks = self.rng.sample_indices(candidates.len(), limit);
        for &idx in &picks {
            let name = candidates[idx];
            self.claimed.claim(name);
            self.output.push(name.clone());
        }
        picks.len()
    }

    /// Drain `pools` in priority order until the output holds `target` names.
    ///
    /// Names already in the output (seeds) count toward `target`. Stops early
    /// once the target is met; a shortfall after the last pool is reported,
    /// not raised.
    pub fn fill_to(&mut self, target: usize, pools: &[CandidatePool]) -> FillReport {
        let mut taken = Vec::new();
        for pool in pools {
            let remaining = target.saturating_sub(self.output.len());
            if remaining == 0 {
                break;
            }
            let added = self.drain_pool(pool, remaining);
            taken.push((pool.label.clone(), added));
        }

        let report = FillReport {
            target,
            filled: self.output.len(),
            taken,
        };
        if !report.is_complete() {
            log::warn!(
                "pools exhausted {} short of target {} ({} filled)",
                report.shortfall(),
                target,
                report.filled
            );
        }
        report
    }

    /// The output so far, in draw order.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Output entries added since position `start`.
    #[must_use]
    pub fn output_since(&self, start: usize) -> &[String] {
        self.output.get(start..).unwrap_or(&[])
    }

    #[must_use]
    pub fn claimed(&self) -> &ClaimedSet {
        &self.claimed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.output.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Randomness for recipe steps that are not drains (shuffling seeds).
    pub fn rng_mut(&mut self) -> &mut PoolRng {
        &mut self.rng
    }

    /// Finish the run, yielding the output.
    #[must_use]
    pub fn into_output(self) -> Vec<String> {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sampler() -> QuotaSampler {
        QuotaSampler::new(PoolRng::new(42))
    }

    #[test]
    fn test_ordered_drain_preserves_order_and_skips_claimed() {
        let mut s = sampler();
        s.seed(["C"]);
        let added = s.drain(&names(&["A", "C", "B", "D"]), 2, DrainMode::Ordered);
        assert_eq!(added, 2);
        assert_eq!(s.output(), ["C", "A", "B"]);
    }

    #[test]
    fn test_random_drain_takes_unclaimed_only() {
        let mut s = sampler();
        s.seed(["A", "B"]);
        let added = s.drain(&names(&["A", "B", "C", "D", "E"]), 10, DrainMode::Random);
        assert_eq!(added, 3);
        let mut tail = s.output_since(2).to_vec();
        tail.sort();
        assert_eq!(tail, ["C", "D", "E"]);
    }

    #[test]
    fn test_random_drain_dedups_pool() {
        let mut s = sampler();
        let added = s.drain(&names(&["X", "X", "X", "Y"]), 5, DrainMode::Random);
        assert_eq!(added, 2);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_zero_limit_and_empty_pool_are_noops() {
        let mut s = sampler();
        assert_eq!(s.drain(&names(&["A"]), 0, DrainMode::Ordered), 0);
        assert_eq!(s.drain(&[], 5, DrainMode::Random), 0);
        assert!(s.is_empty());
    }

    #[test]
    fn test_repeated_drains_over_overlapping_pools() {
        let mut s = sampler();
        let pool = names(&["A", "B", "C"]);
        s.drain(&pool, 2, DrainMode::Random);
        s.drain(&pool, 2, DrainMode::Random);
        s.drain(&pool, 2, DrainMode::Ordered);
        let mut out = s.output().to_vec();
        out.sort();
        assert_eq!(out, ["A", "B", "C"]);
    }

    #[test]
    fn test_excluded_names_never_drawn() {
        let mut s = sampler();
        s.exclude(["B"]);
        s.drain(&names(&["A", "B", "C"]), 3, DrainMode::Random);
        assert!(!s.output().contains(&"B".to_string()));
        assert_eq!(s.len(), 2);
        assert!(s.claimed().contains("B"));
    }

    #[test]
    fn test_fill_to_seeds_count_toward_target() {
        let mut s = sampler();
        s.seed(["A", "B"]);
        let filler = CandidatePool::ordered("filler", names(&["C", "D", "E", "F"]));
        let report = s.fill_to(4, &[filler]);
        assert_eq!(s.output(), ["A", "B", "C", "D"]);
        assert_eq!(report.taken, vec![("filler".to_string(), 2)]);
        assert!(report.is_complete());
    }

    #[test]
    fn test_fill_to_stops_after_target() {
        let mut s = sampler();
        let pools = [
            CandidatePool::ordered("first", names(&["A", "B"])),
            CandidatePool::random("second", names(&["C", "D"])),
            CandidatePool::ordered("third", names(&["E"])),
        ];
        let report = s.fill_to(3, &pools);
        assert_eq!(s.len(), 3);
        assert_eq!(&s.output()[..2], ["A", "B"]);
        assert_eq!(report.taken.len(), 2);
    }

    #[test]
    fn test_fill_to_accepts_shortfall() {
        let mut s = sampler();
        let report = s.fill_to(10, &[CandidatePool::random("tiny", names(&["A", "B"]))]);
        assert_eq!(report.filled, 2);
        assert_eq!(report.shortfall(), 8);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_fill_to_with_full_output_is_noop() {
        let mut s = sampler();
        s.seed(["A", "B", "C"]);
        let report = s.fill_to(2, &[CandidatePool::ordered("more", names(&["D"]))]);
        assert!(report.taken.is_empty());
        assert_eq!(s.len(), 3);
        assert_eq!(report.shortfall(), 0);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let pool = names(&["A", "B", "C", "D", "E", "F", "G", "H"]);
        let mut a = QuotaSampler::new(PoolRng::new(9));
        let mut b = QuotaSampler::new(PoolRng::new(9));
        a.drain(&pool, 4, DrainMode::Random);
        b.drain(&pool, 4, DrainMode::Random);
        assert_eq!(a.output(), b.output());
    }

    #[test]
    fn test_quota_remaining_clamps() {
        let quota = Quota::new("lands", 32);
        assert_eq!(quota.remaining(30), 2);
        assert_eq!(quota.remaining(40), 0);
    }

    #[test]
    fn test_claim_rejects_empty_names() {
        let mut s = sampler();
        assert!(!s.claim(""));
        assert_eq!(s.seed(["", "A", "A"]), 1);
    }
}
