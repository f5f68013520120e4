use crate::classifiers::ClassifierError;
use crate::model::ModelLoadError;
use thiserror::Error;

/// The only failure text end users see, whatever went wrong.
pub const PREDICTION_FAILED_MESSAGE: &str =
    "An error occurred during prediction. Please check the input data.";

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("model unavailable")]
    ModelUnavailable(#[from] ModelLoadError),

    #[error("classifier rejected the sample")]
    Rejected(#[from] ClassifierError),

    #[error("classifier returned {count} outputs for a single sample")]
    MalformedOutput { count: usize },
}
