//! Error types for the ctt_knn crate.

/// Error type for all fallible operations in the ctt_knn crate.
///
/// Only construction can fail. Classification itself never errors: an empty
/// neighbour set yields an empty result and mismatched dimensions are logged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnnError {
    /// Returned when k is zero.
    #[error("k must be >= 1, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
    },

    /// Returned when a Minkowski metric is configured with order zero.
    #[error("Minkowski order p must be >= 1, got {p}")]
    InvalidMinkowskiOrder {
        /// The invalid order.
        p: u32,
    },
}
