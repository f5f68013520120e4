mod adapter;
mod error;
mod verdict;

pub use adapter::Predictor;
pub use error::{PREDICTION_FAILED_MESSAGE, PredictionError};
pub use verdict::Verdict;
