//! Python bindings, built with the `python` feature.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::{KnnClassifier, KnnConfig, KnnDistance, KnnError, LabelledTuple};

impl From<KnnError> for PyErr {
    fn from(err: KnnError) -> Self {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
    }
}

/// Calculates the Euclidean distance between two vectors of f64.
/// Only the overlapping dimensions are compared.
#[pyfunction]
fn euclidean_distance(a: Vec<f64>, b: Vec<f64>) -> f64 {
    crate::euclidean_distance(&a, &b)
}

/// Python-friendly representation of KnnDistance
#[pyclass(name = "KnnDistance")]
#[derive(Clone)]
enum PyKnnDistance {
    Euclidean,
    Manhattan,
}

impl From<PyKnnDistance> for KnnDistance {
    fn from(val: PyKnnDistance) -> Self {
        match val {
            PyKnnDistance::Euclidean => KnnDistance::Euclidean,
            PyKnnDistance::Manhattan => KnnDistance::Manhattan,
        }
    }
}

#[pyclass(name = "KnnClassifier")]
struct PyKnnClassifier {
    classifier: KnnClassifier<f64>,
}

#[pymethods]
impl PyKnnClassifier {
    #[new]
    #[pyo3(signature = (k, distance_metric = None, minkowski_p = None))]
    fn new(k: usize, distance_metric: Option<PyKnnDistance>, minkowski_p: Option<u32>) -> PyResult<Self> {
        let metric = match (minkowski_p, distance_metric) {
            (Some(p), _) => KnnDistance::Minkowski { p },
            (None, Some(m)) => m.into(),
            (None, None) => KnnDistance::Euclidean,
        };
        let classifier = KnnClassifier::from_config(KnnConfig::new(k).with_metric(metric), Vec::new())?;
        Ok(PyKnnClassifier { classifier })
    }

    fn add(&mut self, label: String, values: Vec<f64>) {
        self.classifier.add(LabelledTuple::new(label, values));
    }

    fn __len__(&self) -> usize {
        self.classifier.len()
    }

    #[getter]
    fn k(&self) -> usize {
        self.classifier.k()
    }

    /// Returns `(result, data)`: the winning label (None if there are no
    /// neighbours) and a dict of label -> count over the k nearest.
    fn classify<'py>(&self, py: Python<'py>, values: Vec<f64>) -> PyResult<(Option<String>, Bound<'py, PyDict>)> {
        let result = self.classifier.classify(&values);
        let data = PyDict::new_bound(py);
        for entry in result.tally() {
            data.set_item(&entry.label, entry.count)?;
        }
        Ok((result.label().map(str::to_owned), data))
    }

    fn classify_batch(&self, queries: Vec<Vec<f64>>) -> Vec<Option<String>> {
        self.classifier
            .classify_batch(&queries)
            .into_iter()
            .map(|r| r.label().map(str::to_owned))
            .collect()
    }
}

/// The Python module. Its name must match `lib.name` in `Cargo.toml`.
#[pymodule]
fn ctt_knn(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(euclidean_distance, m)?)?;
    m.add_class::<PyKnnDistance>()?;
    m.add_class::<PyKnnClassifier>()?;
    Ok(())
}
