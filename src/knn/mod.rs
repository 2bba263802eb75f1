//! K-nearest-neighbour classification: distance metrics, top-k selection and
//! the majority-vote classifier.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use num_traits::AsPrimitive;

pub mod classifier;
pub mod config;
pub mod heap_utils;
pub mod result;

/// Distance metric used to rank neighbours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KnnDistance {
    #[default]
    Euclidean,
    Manhattan,
    Minkowski { p: u32 }, // p is the order for Minkowski distance
}

impl KnnDistance {
    /// Distance between `a` and `b` under this metric.
    ///
    /// Only the first `min(a.len(), b.len())` dimensions take part; the excess
    /// dimensions of the longer slice are ignored.
    pub fn distance<F>(&self, a: &[F], b: &[F]) -> f64
    where
        F: AsPrimitive<f64>,
    {
        match *self {
            KnnDistance::Euclidean => euclidean_distance(a, b),
            KnnDistance::Manhattan => manhattan_distance(a, b),
            KnnDistance::Minkowski { p } => minkowski_distance(a, b, p),
        }
    }
}

/// Euclidean (L2) distance over the overlapping prefix of `a` and `b`.
pub fn euclidean_distance<F: AsPrimitive<f64>>(a: &[F], b: &[F]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = x.as_() - y.as_();
            diff * diff
        })
        .sum::<f64>()
        .sqrt()
}

/// Manhattan (L1) distance over the overlapping prefix of `a` and `b`.
pub fn manhattan_distance<F: AsPrimitive<f64>>(a: &[F], b: &[F]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x.as_() - y.as_()).abs()).sum()
}

/// Minkowski distance of order `p` over the overlapping prefix of `a` and `b`.
///
/// `p` must be at least 1; [`config::KnnConfig::validate`] rejects zero.
pub fn minkowski_distance<F: AsPrimitive<f64>>(a: &[F], b: &[F], p: u32) -> f64 {
    let sum_of_powers: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x.as_() - y.as_()).abs().powi(p as i32))
        .sum();
    sum_of_powers.powf(1.0 / (p as f64))
}
