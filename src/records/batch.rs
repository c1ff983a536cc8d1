//! Ordered collections of string records

use super::{ClassificationLabel, StringRecord};

#[cfg(feature = "statistics")]
use crate::statistics::NumericAccumulator;

#[cfg(feature = "std")]
use std::{collections::BTreeSet, vec::Vec};

#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeSet, vec::Vec};

/// Per-label record counts for a batch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabelCounts {
    pub accepting: usize,
    pub rejecting: usize,
    pub unknown: usize,
}

impl LabelCounts {
    /// Total number of records counted
    pub fn total(&self) -> usize {
        self.accepting + self.rejecting + self.unknown
    }

    /// Number of records with a known label
    pub fn labeled(&self) -> usize {
        self.accepting + self.rejecting
    }
}

/// Ordered batch of records, initially in corpus order
///
/// # Example
///
/// ```
/// use dfa_corpus::records::{RecordBatch, StringRecord};
///
/// let mut batch: RecordBatch = ["1 3 a b a", "0 1 b", "1 2 a a"]
///     .iter()
///     .map(|line| StringRecord::parse(line, " ").unwrap())
///     .collect();
///
/// batch.sort_by_length();
///
/// let lengths: Vec<usize> = batch.iter().map(|r| r.declared_length()).collect();
/// assert_eq!(lengths, vec![1, 2, 3]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordBatch {
    records: Vec<StringRecord>,
}

impl RecordBatch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create an empty batch with room for `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Append a record at the end
    pub fn push(&mut self, record: StringRecord) {
        self.records.push(record);
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the batch holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`, if any
    pub fn get(&self, index: usize) -> Option<&StringRecord> {
        self.records.get(index)
    }

    /// Iterate records in current order
    pub fn iter(&self) -> core::slice::Iter<'_, StringRecord> {
        self.records.iter()
    }

    /// Records as a slice
    pub fn as_slice(&self) -> &[StringRecord] {
        &self.records
    }

    /// Take the records out of the batch
    pub fn into_vec(self) -> Vec<StringRecord> {
        self.records
    }

    /// Reorder in place by ascending declared length
    ///
    /// Uses an unstable sort: records with equal lengths may end up in any
    /// relative order.
    pub fn sort_by_length(&mut self) {
        self.records.sort_unstable_by_key(StringRecord::declared_length);
    }

    /// By-value form of [`sort_by_length`](Self::sort_by_length)
    pub fn sorted_by_length(mut self) -> Self {
        self.sort_by_length();
        self
    }

    /// Count records per label
    pub fn label_counts(&self) -> LabelCounts {
        let mut counts = LabelCounts::default();
        for record in &self.records {
            match record.label() {
                ClassificationLabel::Accepting => counts.accepting += 1,
                ClassificationLabel::Rejecting => counts.rejecting += 1,
                ClassificationLabel::Unknown => counts.unknown += 1,
            }
        }
        counts
    }

    /// Distinct payload symbols, sorted
    pub fn alphabet(&self) -> Vec<char> {
        self.records
            .iter()
            .flat_map(|record| record.payload().chars())
            .collect::<BTreeSet<char>>()
            .into_iter()
            .collect()
    }

    /// Summary statistics over the declared lengths
    #[cfg(feature = "statistics")]
    pub fn length_stats(&self) -> NumericAccumulator {
        let mut stats = NumericAccumulator::new();
        for record in &self.records {
            stats.observe(record.declared_length() as f64);
        }
        stats
    }
}

impl From<Vec<StringRecord>> for RecordBatch {
    fn from(records: Vec<StringRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<StringRecord> for RecordBatch {
    fn from_iter<I: IntoIterator<Item = StringRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<StringRecord> for RecordBatch {
    fn extend<I: IntoIterator<Item = StringRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl IntoIterator for RecordBatch {
    type Item = StringRecord;
    type IntoIter = <Vec<StringRecord> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordBatch {
    type Item = &'a StringRecord;
    type IntoIter = core::slice::Iter<'a, StringRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
