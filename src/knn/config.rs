//! Configuration for a KNN classifier.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::KnnDistance;
use crate::error::KnnError;

/// Configuration for a [`KnnClassifier`](super::classifier::KnnClassifier).
///
/// # Example
///
/// ```
/// use ctt_knn::{KnnConfig, KnnDistance};
///
/// let config = KnnConfig::new(5).with_metric(KnnDistance::Manhattan);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KnnConfig {
    /// Number of nearest neighbours that vote.
    k: usize,
    /// Metric used to rank neighbours.
    metric: KnnDistance,
}

impl KnnConfig {
    /// Creates a new configuration with the given k and the Euclidean metric.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            metric: KnnDistance::Euclidean,
        }
    }

    /// Sets the distance metric.
    pub fn with_metric(mut self, metric: KnnDistance) -> Self {
        self.metric = metric;
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn metric(&self) -> KnnDistance {
        self.metric
    }

    /// Validates this configuration.
    ///
    /// Returns an error if k < 1 or a Minkowski metric has order 0.
    pub fn validate(&self) -> Result<(), KnnError> {
        if self.k < 1 {
            return Err(KnnError::InvalidK { k: self.k });
        }
        if let KnnDistance::Minkowski { p } = self.metric {
            if p < 1 {
                return Err(KnnError::InvalidMinkowskiOrder { p });
            }
        }
        Ok(())
    }
}

impl Default for KnnConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = KnnConfig::default();
        assert_eq!(cfg.k(), 1);
        assert_eq!(cfg.metric(), KnnDistance::Euclidean);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let cfg = KnnConfig::new(7).with_metric(KnnDistance::Minkowski { p: 3 });
        assert_eq!(cfg.k(), 7);
        assert_eq!(cfg.metric(), KnnDistance::Minkowski { p: 3 });
    }

    #[test]
    fn test_validate_k_zero() {
        let err = KnnConfig::new(0).validate().unwrap_err();
        assert_eq!(err, KnnError::InvalidK { k: 0 });
    }

    #[test]
    fn test_validate_minkowski_zero() {
        let err = KnnConfig::new(3)
            .with_metric(KnnDistance::Minkowski { p: 0 })
            .validate()
            .unwrap_err();
        assert_eq!(err, KnnError::InvalidMinkowskiOrder { p: 0 });
    }
}
