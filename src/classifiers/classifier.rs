use crate::classifiers::ClassifierError;

/// Inference capability of a pre-trained model.
///
/// Implementations only supply [`Classifier::predict_row`]; batch shape and
/// finiteness checks live in the provided [`Classifier::predict`].
pub trait Classifier: Send + Sync {
    /// Number of columns every input row must have.
    fn number_of_features(&self) -> usize;

    /// Raw label for one row already known to be well formed.
    fn predict_row(&self, row: &[f64]) -> f64;

    /// One raw label per input row.
    fn predict(&self, samples: &[Vec<f64>]) -> Result<Vec<f64>, ClassifierError> {
        let expected = self.number_of_features();

        samples
            .iter()
            .enumerate()
            .map(|(row_index, row)| {
                if row.len() != expected {
                    return Err(ClassifierError::ShapeMismatch {
                        expected,
                        found: row.len(),
                    });
                }
                if let Some(column) = row.iter().position(|v| !v.is_finite()) {
                    return Err(ClassifierError::NonFiniteInput {
                        row: row_index,
                        column,
                    });
                }
                Ok(self.predict_row(row))
            })
            .collect()
    }
}
