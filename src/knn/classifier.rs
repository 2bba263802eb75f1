//! The K-nearest-neighbour classifier.
//!
//! Classification scans every stored neighbour once, keeps the k closest in a
//! bounded max-heap, then takes a majority vote over their labels.

use num_traits::{AsPrimitive, Float};
use tracing::{debug, warn};

use super::config::KnnConfig;
use super::heap_utils::KBestNeighbors;
use super::result::{Classification, LabelCount, Neighbour};
use super::KnnDistance;
use crate::common_types::LabelledTuple;
use crate::error::KnnError;

/// The K-Nearest Neighbours Classifier.
///
/// Neighbours keep their insertion order and may repeat. There is no removal;
/// use [`add`](Self::add) or [`extend`](Self::extend) to grow the set between
/// queries.
#[derive(Debug, Clone)]
pub struct KnnClassifier<F = f64> {
    config: KnnConfig,
    neighbours: Vec<LabelledTuple<F>>,
}

impl<F> KnnClassifier<F>
where
    F: Float + AsPrimitive<f64>,
{
    /// Creates an empty Euclidean classifier voting over `k` neighbours.
    pub fn new(k: usize) -> Result<Self, KnnError> {
        Self::from_config(KnnConfig::new(k), Vec::new())
    }

    /// Creates a Euclidean classifier seeded with `neighbours`.
    pub fn with_neighbours(k: usize, neighbours: Vec<LabelledTuple<F>>) -> Result<Self, KnnError> {
        Self::from_config(KnnConfig::new(k), neighbours)
    }

    pub fn from_config(config: KnnConfig, neighbours: Vec<LabelledTuple<F>>) -> Result<Self, KnnError> {
        config.validate()?;
        Ok(Self { config, neighbours })
    }

    pub fn k(&self) -> usize {
        self.config.k()
    }

    pub fn metric(&self) -> KnnDistance {
        self.config.metric()
    }

    pub fn config(&self) -> &KnnConfig {
        &self.config
    }

    /// Number of stored neighbours.
    pub fn len(&self) -> usize {
        self.neighbours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }

    pub fn neighbours(&self) -> &[LabelledTuple<F>] {
        &self.neighbours
    }

    /// Adds another neighbour to be used in later classifications.
    /// No dimensionality check is made here; see [`classify`](Self::classify).
    pub fn add(&mut self, labelled_tuple: LabelledTuple<F>) {
        self.neighbours.push(labelled_tuple);
    }

    pub fn extend<I>(&mut self, neighbours: I)
    where
        I: IntoIterator<Item = LabelledTuple<F>>,
    {
        self.neighbours.extend(neighbours);
    }

    /// Returns the (at most) k neighbours closest to `query`, nearest first.
    ///
    /// A neighbour only displaces the current k-th closest when it is strictly
    /// closer, and equal distances are ordered by insertion, so on ties the
    /// earlier neighbour is kept.
    ///
    /// Neighbours whose dimensionality differs from the query are compared on
    /// the overlapping dimensions only, with a warning.
    pub fn nearest(&self, query: &[F]) -> Vec<Neighbour<'_>> {
        let metric = self.config.metric();
        let mut best = KBestNeighbors::new(self.config.k());

        for (index, neighbour) in self.neighbours.iter().enumerate() {
            let values = neighbour.values();
            if values.len() != query.len() {
                warn!(
                    neighbour = index,
                    query_dims = query.len(),
                    neighbour_dims = values.len(),
                    "neighbours and queries should have the same dimensionality; comparing overlapping dimensions only"
                );
            }
            best.add(metric.distance(query, values), index);
        }

        best.into_sorted()
            .into_iter()
            .map(|(distance, index)| Neighbour {
                index,
                label: self.neighbours[index].label(),
                distance,
            })
            .collect()
    }

    /// Classifies `query` by majority vote among its k nearest neighbours.
    ///
    /// With no stored neighbours the result is empty (`label() == None`).
    /// When k exceeds the neighbour count every neighbour votes.
    #[tracing::instrument(level = "debug", skip_all, fields(k = self.config.k(), neighbours = self.neighbours.len()))]
    pub fn classify(&self, query: &[F]) -> Classification {
        let nearest = self.nearest(query);
        let result = Classification::from_votes(nearest.iter().map(|n| n.label));
        debug!(label = ?result.label(), voters = nearest.len(), "classified");
        result
    }

    /// Classifies each query in turn.
    pub fn classify_batch(&self, queries: &[Vec<F>]) -> Vec<Classification> {
        queries.iter().map(|query| self.classify(query)).collect()
    }

    /// Counts every label across the whole neighbour set, in first-seen order.
    /// Does not depend on any previous query.
    pub fn label_frequencies(&self) -> Vec<LabelCount> {
        Classification::from_votes(self.neighbours.iter().map(|n| n.label()))
            .tally()
            .to_vec()
    }
}
