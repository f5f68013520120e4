use crate::core::features::FeatureVector;
use crate::model::ModelLoader;
use crate::prediction::{PredictionError, Verdict};
use std::sync::Arc;
use tracing::debug;

/// Runs single-sample inference against the lazily loaded model.
#[derive(Clone)]
pub struct Predictor {
    loader: Arc<ModelLoader>,
}

impl Predictor {
    pub fn new(loader: Arc<ModelLoader>) -> Self {
        Self { loader }
    }

    /// Raw classifier output for one sample, returned unmodified.
    ///
    /// The vector is not validated here; a wrong width surfaces as the
    /// classifier's shape error.
    pub fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let classifier = self.loader.load()?;
        let raw = single_output(classifier.predict(&features.to_batch())?)?;
        debug!(features = %features, raw, "prediction");
        Ok(raw)
    }

    pub fn classify(&self, features: &FeatureVector) -> Result<Verdict, PredictionError> {
        self.predict(features).map(Verdict::from_raw)
    }
}

fn single_output(outputs: Vec<f64>) -> Result<f64, PredictionError> {
    match outputs.as_slice() {
        [raw] => Ok(*raw),
        other => Err(PredictionError::MalformedOutput { count: other.len() }),
    }
}
