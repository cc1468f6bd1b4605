//! Names already committed to an output.

use rustc_hash::FxHashSet;

/// Set of claimed names.
///
/// Grows monotonically for the lifetime of one assembly run; nothing is ever
/// released. A name enters at most once.
#[derive(Clone, Debug, Default)]
pub struct ClaimedSet {
    names: FxHashSet<String>,
}

impl ClaimedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `name`. Returns false if it was already claimed.
    pub fn claim(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string());
        true
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClaimedSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut claimed = ClaimedSet::new();
        for name in iter {
            claimed.claim(name.as_ref());
        }
        claimed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_once() {
        let mut claimed = ClaimedSet::new();
        assert!(claimed.claim("Sol Ring"));
        assert!(!claimed.claim("Sol Ring"));
        assert!(claimed.contains("Sol Ring"));
        assert_eq!(claimed.len(), 1);
    }

    #[test]
    fn test_from_iter_dedups() {
        let claimed: ClaimedSet = ["A", "B", "A"].into_iter().collect();
        assert_eq!(claimed.len(), 2);
        assert!(!claimed.is_empty());
    }
}
