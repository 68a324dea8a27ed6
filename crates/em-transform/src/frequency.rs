//! Occurrence counting and multimodal mode sets.

use std::collections::{BTreeMap, BTreeSet};

/// Occurrence counts per distinct value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<T: Ord> {
    counts: BTreeMap<T, usize>,
}

impl<T: Ord> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }
}

impl<T: Ord> FrequencyTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, value: T) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    pub fn count(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Highest count in the table; `0` when empty.
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Every value whose count equals the maximum, in ascending order.
    pub fn modes(&self) -> BTreeSet<&T> {
        let max = self.max_count();
        self.counts
            .iter()
            .filter(|(_, count)| **count == max)
            .map(|(value, _)| value)
            .collect()
    }
}

impl<T: Ord> Extend<T> for FrequencyTable<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.record(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for FrequencyTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

/// The set of most frequent values; ties are all kept and empty input gives an empty set.
pub fn mode<T, I>(values: I) -> BTreeSet<T>
where
    T: Ord + Clone,
    I: IntoIterator<Item = T>,
{
    let table: FrequencyTable<T> = values.into_iter().collect();
    table.modes().into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_ties() {
        assert_eq!(mode([1, 2, 2, 3, 3]), BTreeSet::from([2, 3]));
    }

    #[test]
    fn single_winner() {
        assert_eq!(mode([13, 13, 10]), BTreeSet::from([13]));
    }

    #[test]
    fn empty_input_has_no_mode() {
        assert!(mode(Vec::<u32>::new()).is_empty());
        assert_eq!(FrequencyTable::<u32>::new().max_count(), 0);
    }

    #[test]
    fn all_distinct_values_tie() {
        assert_eq!(mode(["b", "a", "c"]), BTreeSet::from(["a", "b", "c"]));
    }

    #[test]
    fn table_counts_incrementally() {
        let mut table = FrequencyTable::new();
        table.record(4u32);
        table.extend([4, 5]);
        assert_eq!(table.count(&4), 2);
        assert_eq!(table.count(&9), 0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.modes(), BTreeSet::from([&4]));
    }
}
