//! Method -> count tally with ranking.
//!
//! The first occurrence of a method is recorded as 0 and every later
//! occurrence adds 1, so a final count is `occurrences - 1`. Stat file
//! consumers read counts with exactly this meaning.

use indexmap::IndexMap;
use log::debug;

/// Tally ranked by descending count, ready for serialization
pub type RankedTally = IndexMap<String, u64>;

/// Occurrence counts keyed by method identifier
///
/// Insertion order is remembered and used as the tiebreak when ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TallyMap {
    counts: IndexMap<String, u64>,
}

impl TallyMap {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `method`
    ///
    /// **Public** - called by the scanner for every attributed event
    pub fn record(&mut self, method: &str) {
        match self.counts.get_mut(method) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(method.to_string(), 0);
            }
        }
    }

    /// Current count for `method`, if it was ever recorded
    pub fn get(&self, method: &str) -> Option<u64> {
        self.counts.get(method).copied()
    }

    /// Number of distinct methods
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Rank entries by descending count
    ///
    /// **Public** - used by the reporter before writing
    ///
    /// # Returns
    /// Ordered map; methods with equal counts keep their first-seen order
    pub fn ranked(&self) -> RankedTally {
        let mut entries: Vec<(&String, &u64)> = self.counts.iter().collect();

        // sort_by is stable, which is what gives the insertion-order tiebreak
        entries.sort_by(|a, b| b.1.cmp(a.1));

        debug!("Ranked {} methods", entries.len());

        entries
            .into_iter()
            .map(|(method, count)| (method.clone(), *count))
            .collect()
    }
}
