//! Output types for classification queries.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How many of the selected neighbours carry a given label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// One of the k nearest neighbours picked for a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbour<'a> {
    /// Insertion index of the neighbour in the classifier.
    pub index: usize,
    pub label: &'a str,
    pub distance: f64,
}

/// Result of classifying a single query.
///
/// Holds the winning label and the per-label tally over the selected
/// neighbours. When the classifier has no neighbours the label is `None` and
/// the tally is empty; callers must treat that as "no classification possible".
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Classification {
    label: Option<String>,
    /// In the order labels were first seen, nearest first.
    tally: Vec<LabelCount>,
}

impl Classification {
    /// Majority vote over `labels`, which must be given nearest first.
    ///
    /// The winner only changes on a strictly greater count, so on equal counts
    /// the label that reached the maximum first is kept.
    pub(crate) fn from_votes<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tally: Vec<LabelCount> = Vec::new();
        let mut slots: HashMap<&'a str, usize> = HashMap::new();
        let mut best: Option<usize> = None;
        let mut best_count = 0;

        for label in labels {
            let slot = *slots.entry(label).or_insert_with(|| {
                tally.push(LabelCount { label: label.to_owned(), count: 0 });
                tally.len() - 1
            });
            tally[slot].count += 1;
            if tally[slot].count > best_count {
                best_count = tally[slot].count;
                best = Some(slot);
            }
        }

        Classification {
            label: best.map(|slot| tally[slot].label.clone()),
            tally,
        }
    }

    /// The winning label, or `None` if there was nothing to vote on.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Per-label counts in first-seen order.
    pub fn tally(&self) -> &[LabelCount] {
        &self.tally
    }

    /// Number of selected neighbours carrying `label` (0 if none).
    pub fn count(&self, label: &str) -> usize {
        self.tally
            .iter()
            .find(|entry| entry.label == label)
            .map_or(0, |entry| entry.count)
    }

    /// Total number of neighbours that voted, i.e. `min(k, neighbour count)`.
    pub fn total(&self) -> usize {
        self.tally.iter().map(|entry| entry.count).sum()
    }

    /// Share of the vote won by the winning label, in `[0, 1]`.
    /// Returns `None` for an empty result.
    pub fn confidence(&self) -> Option<f64> {
        let label = self.label.as_deref()?;
        Some(self.count(label) as f64 / self.total() as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.tally.is_empty()
    }

    /// The tally as a label → count map.
    pub fn into_map(self) -> HashMap<String, usize> {
        self.tally
            .into_iter()
            .map(|entry| (entry.label, entry.count))
            .collect()
    }
}
