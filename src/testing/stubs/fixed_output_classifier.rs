use crate::classifiers::{Classifier, ClassifierError};

/// Returns the same output sequence for any batch, however many rows it has.
pub struct FixedOutputClassifier {
    features: usize,
    outputs: Vec<f64>,
}

impl FixedOutputClassifier {
    pub fn new(features: usize, outputs: Vec<f64>) -> Self {
        Self { features, outputs }
    }
}

impl Classifier for FixedOutputClassifier {
    fn number_of_features(&self) -> usize {
        self.features
    }

    fn predict_row(&self, _row: &[f64]) -> f64 {
        self.outputs.first().copied().unwrap_or(f64::NAN)
    }

    fn predict(&self, _samples: &[Vec<f64>]) -> Result<Vec<f64>, ClassifierError> {
        Ok(self.outputs.clone())
    }
}
