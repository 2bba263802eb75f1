//! K-nearest-neighbour classification over labelled numeric tuples.
//!
//! ```
//! use ctt_knn::{KnnClassifier, LabelledTuple};
//!
//! let mut knn = KnnClassifier::new(3).unwrap();
//! knn.add(LabelledTuple::new("low", vec![1.0, 1.0]));
//! knn.add(LabelledTuple::new("low", vec![2.0, 1.0]));
//! knn.add(LabelledTuple::new("high", vec![9.0, 9.0]));
//!
//! let result = knn.classify(&[1.5, 1.0]);
//! assert_eq!(result.label(), Some("low"));
//! assert_eq!(result.count("low"), 2);
//! ```

pub mod common_types;
pub mod error;
pub mod knn;

#[cfg(feature = "python")]
mod python;

pub use common_types::{LabelledTuple, Tuple};
pub use error::KnnError;
pub use knn::classifier::KnnClassifier;
pub use knn::config::KnnConfig;
pub use knn::result::{Classification, LabelCount, Neighbour};
pub use knn::{euclidean_distance, KnnDistance};
