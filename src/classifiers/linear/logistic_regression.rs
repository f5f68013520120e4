use crate::classifiers::{Classifier, InvalidModel};
use crate::utils::math::sigmoid;

/// Binary logistic regression over a fixed number of features.
///
/// Predicts `labels[1]` when the positive-class probability is strictly
/// above `threshold`, `labels[0]` otherwise.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    coefficients: Vec<f64>,
    intercept: f64,
    threshold: f64,
    labels: [f64; 2],
}

impl LogisticRegression {
    pub fn new(
        coefficients: Vec<f64>,
        intercept: f64,
        threshold: f64,
        labels: [f64; 2],
    ) -> Result<Self, InvalidModel> {
        if coefficients.is_empty() {
            return Err(InvalidModel("logistic regression has no coefficients".into()));
        }
        if let Some(i) = coefficients.iter().position(|c| !c.is_finite()) {
            return Err(InvalidModel(format!("coefficient {i} is not finite")));
        }
        if !intercept.is_finite() {
            return Err(InvalidModel("intercept is not finite".into()));
        }
        if !(0.0..=1.0).contains(&threshold) {
            return Err(InvalidModel(format!(
                "threshold must be within [0, 1], got {threshold}"
            )));
        }

        Ok(Self {
            coefficients,
            intercept,
            threshold,
            labels,
        })
    }

    pub fn probability(&self, row: &[f64]) -> f64 {
        let z: f64 = self
            .coefficients
            .iter()
            .zip(row)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        sigmoid(z)
    }
}

impl Classifier for LogisticRegression {
    fn number_of_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict_row(&self, row: &[f64]) -> f64 {
        if self.probability(row) > self.threshold {
            self.labels[1]
        } else {
            self.labels[0]
        }
    }
}
