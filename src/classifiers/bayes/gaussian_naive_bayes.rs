use crate::classifiers::{Classifier, InvalidModel};
use crate::utils::math::gaussian_log_density;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fitted per-class statistics of a Gaussian Naive Bayes model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClassDistribution {
    #[schemars(title = "Label", description = "Raw label predicted for this class")]
    pub label: f64,

    #[schemars(
        title = "Prior",
        description = "Class prior probability",
        range(min = 0.0, max = 1.0)
    )]
    pub prior: f64,

    #[schemars(title = "Means", description = "Per-feature mean")]
    pub means: Vec<f64>,

    #[schemars(title = "Variances", description = "Per-feature variance, already smoothed")]
    pub variances: Vec<f64>,
}

pub struct GaussianNaiveBayes {
    classes: Vec<ClassDistribution>,
    log_priors: Vec<f64>,
    number_of_features: usize,
}

impl GaussianNaiveBayes {
    pub fn new(classes: Vec<ClassDistribution>) -> Result<Self, InvalidModel> {
        let Some(first) = classes.first() else {
            return Err(InvalidModel("naive bayes has no classes".into()));
        };
        let number_of_features = first.means.len();
        if number_of_features == 0 {
            return Err(InvalidModel("naive bayes has no features".into()));
        }

        for (i, class) in classes.iter().enumerate() {
            if class.means.len() != number_of_features
                || class.variances.len() != number_of_features
            {
                return Err(InvalidModel(format!(
                    "class {i} has {} means and {} variances, expected {number_of_features}",
                    class.means.len(),
                    class.variances.len()
                )));
            }
            if !(class.prior > 0.0 && class.prior <= 1.0) {
                return Err(InvalidModel(format!(
                    "class {i} prior must be within (0, 1], got {}",
                    class.prior
                )));
            }
            if class.means.iter().any(|m| !m.is_finite()) {
                return Err(InvalidModel(format!("class {i} has a non-finite mean")));
            }
            if class.variances.iter().any(|v| !(v.is_finite() && *v > 0.0)) {
                return Err(InvalidModel(format!(
                    "class {i} variances must be finite and positive"
                )));
            }
        }

        let log_priors = classes.iter().map(|c| libm::log(c.prior)).collect();
        Ok(Self {
            classes,
            log_priors,
            number_of_features,
        })
    }

    fn joint_log_likelihood(&self, class_index: usize, row: &[f64]) -> f64 {
        let class = &self.classes[class_index];
        let evidence: f64 = row
            .iter()
            .zip(class.means.iter().zip(&class.variances))
            .map(|(x, (mean, var))| gaussian_log_density(*x, *mean, *var))
            .sum();
        self.log_priors[class_index] + evidence
    }
}

impl Classifier for GaussianNaiveBayes {
    fn number_of_features(&self) -> usize {
        self.number_of_features
    }

    fn predict_row(&self, row: &[f64]) -> f64 {
        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for i in 0..self.classes.len() {
            let score = self.joint_log_likelihood(i, row);
            if score > best_score {
                best = i;
                best_score = score;
            }
        }
        self.classes[best].label
    }
}
