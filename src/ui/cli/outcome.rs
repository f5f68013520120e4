use crate::core::features::FeatureVector;
use std::process::ExitCode;
use crate::prediction::{PREDICTION_FAILED_MESSAGE, Predictor, Verdict};
use tracing::{error, info};

/// What the user gets to see after pressing "Predict".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rated(Verdict),
    Failed,
}

impl Outcome {
    /// Runs the prediction and folds any failure into [`Outcome::Failed`].
    /// The cause is logged, never shown.
    pub fn evaluate(predictor: &Predictor, features: &FeatureVector) -> Self {
        match predictor.classify(features) {
            Ok(verdict) => {
                info!(verdict = %verdict, "wine rated");
                Outcome::Rated(verdict)
            }
            Err(err) => {
                let err = anyhow::Error::new(err);
                error!("prediction failed: {err:#}");
                Outcome::Failed
            }
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Rated(verdict) => verdict.label(),
            Outcome::Failed => PREDICTION_FAILED_MESSAGE,
        }
    }

    pub fn is_good(&self) -> bool {
        matches!(self, Outcome::Rated(Verdict::Good))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed)
    }

    /// Process status for the one-shot command: a bad wine is still a
    /// successful rating.
    pub fn exit_code(&self) -> ExitCode {
        if self.is_failure() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::WineSample;
    use crate::model::ModelLoader;
    use crate::testing::{CountingSource, logistic_wine_model_json};
    use std::sync::Arc;

    fn predictor(bytes: Option<String>) -> Predictor {
        let source = CountingSource::new(bytes.map(String::into_bytes));
        Predictor::new(Arc::new(ModelLoader::new(Box::new(source))))
    }

    #[test]
    fn missing_and_corrupt_models_look_the_same() {
        let features = WineSample::default().to_feature_vector();
        let missing = Outcome::evaluate(&predictor(None), &features);
        let corrupt = Outcome::evaluate(&predictor(Some("{".into())), &features);

        assert_eq!(missing, Outcome::Failed);
        assert_eq!(missing.message(), corrupt.message());
        assert_eq!(
            missing.message(),
            "An error occurred during prediction. Please check the input data."
        );
    }

    #[test]
    fn shape_errors_are_failures_too() {
        let p = predictor(Some(logistic_wine_model_json()));
        let outcome = Outcome::evaluate(&p, &FeatureVector::new(vec![1.0; 5]));
        assert!(outcome.is_failure());
    }

    #[test]
    fn rated_outcomes_show_the_label() {
        assert_eq!(Outcome::Rated(Verdict::Good).message(), "Good Quality Wine");
        assert!(Outcome::Rated(Verdict::Good).is_good());
        assert_eq!(Outcome::Rated(Verdict::Bad).message(), "Bad Quality Wine");
        assert!(!Outcome::Rated(Verdict::Bad).is_failure());
    }

    #[test]
    fn only_failures_exit_non_zero() {
        assert_eq!(Outcome::Rated(Verdict::Good).exit_code(), ExitCode::SUCCESS);
        assert_eq!(Outcome::Rated(Verdict::Bad).exit_code(), ExitCode::SUCCESS);
        assert_eq!(Outcome::Failed.exit_code(), ExitCode::FAILURE);
    }
}
