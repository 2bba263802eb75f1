//! This module contains the value types the classifier operates on.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered vector of numeric values.
///
/// - `F`: The type of the values (e.g., `f64`, `f32`).
///
/// The dimensionality is fixed when the tuple is built. Nothing enforces a
/// minimum of one dimension, but an empty tuple is at distance zero from
/// everything and so carries no information for classification.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tuple<F = f64> {
    values: Vec<F>,
}

impl<F> Tuple<F> {
    pub fn new(values: Vec<F>) -> Self {
        Tuple { values }
    }

    /// Returns how many dimensions the tuple has.
    pub fn dimension_count(&self) -> usize {
        self.values.len()
    }

    /// Borrowed view of the values. No copy is made.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    pub fn into_values(self) -> Vec<F> {
        self.values
    }
}

impl<F> From<Vec<F>> for Tuple<F> {
    fn from(values: Vec<F>) -> Self {
        Tuple::new(values)
    }
}

/// A [`Tuple`] tagged with a classification label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelledTuple<F = f64> {
    label: String,
    tuple: Tuple<F>,
}

impl<F> LabelledTuple<F> {
    pub fn new(label: impl Into<String>, values: Vec<F>) -> Self {
        LabelledTuple {
            label: label.into(),
            tuple: Tuple::new(values),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn values(&self) -> &[F] {
        self.tuple.values()
    }

    pub fn dimension_count(&self) -> usize {
        self.tuple.dimension_count()
    }

    pub fn tuple(&self) -> &Tuple<F> {
        &self.tuple
    }

    /// Replaces the stored values with a freshly wrapped tuple. The label is kept.
    pub fn replace_values(&mut self, values: Vec<F>) {
        self.tuple = Tuple::new(values);
    }
}
