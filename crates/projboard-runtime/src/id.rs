//! Process-unique item identifiers.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a list item.
///
/// Ids come from a process-wide monotonic counter, so two calls to
/// [`ItemId::next`] never return the same value within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    /// Allocate a fresh id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap a raw value, e.g. one typed by the user.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_increasing() {
        let ids: Vec<ItemId> = (0..1_000).map(|_| ItemId::next()).collect();
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn parse_accepts_hash_prefix() {
        assert_eq!("#42".parse::<ItemId>(), Ok(ItemId::from_raw(42)));
        assert_eq!(" 7 ".parse::<ItemId>(), Ok(ItemId::from_raw(7)));
        assert!("abc".parse::<ItemId>().is_err());
    }

    #[test]
    fn display_is_raw_number() {
        assert_eq!(ItemId::from_raw(9).to_string(), "9");
    }
}
