use crate::classifiers::{ClassDistribution, TreeNode};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_threshold() -> f64 {
    0.5
}
fn default_labels() -> [f64; 2] {
    [0.0, 1.0]
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LogisticRegressionParams {
    #[schemars(title = "Coefficients", description = "One weight per feature, in feature order.")]
    pub coefficients: Vec<f64>,

    #[schemars(title = "Intercept", description = "Bias added to the weighted sum.")]
    pub intercept: f64,

    #[serde(default = "default_threshold")]
    #[schemars(
        title = "Threshold",
        description = "Positive label when the probability is above this value.",
        range(min = 0.0, max = 1.0)
    )]
    pub threshold: f64,

    #[serde(default = "default_labels")]
    #[schemars(title = "Labels", description = "Raw labels for [negative, positive].")]
    pub labels: [f64; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GaussianNaiveBayesParams {
    #[schemars(title = "Classes", description = "Fitted statistics for each class.")]
    pub classes: Vec<ClassDistribution>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DecisionTreeParams {
    #[schemars(title = "Number of features", range(min = 1))]
    pub number_of_features: usize,

    #[schemars(title = "Nodes", description = "Flattened tree; node 0 is the root.")]
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RandomForestParams {
    #[schemars(title = "Number of features", range(min = 1))]
    pub number_of_features: usize,

    #[schemars(title = "Trees", description = "Node lists of every tree in the ensemble.")]
    pub trees: Vec<Vec<TreeNode>>,
}

/// On-disk form of a pre-trained classifier.
///
/// Stored as JSON: `{"type": "logistic-regression", "params": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(ModelKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum ModelArtifact {
    #[strum_discriminants(strum(message = "Logistic Regression"))]
    LogisticRegression(LogisticRegressionParams),
    #[strum_discriminants(strum(message = "Gaussian Naive Bayes"))]
    GaussianNaiveBayes(GaussianNaiveBayesParams),
    #[strum_discriminants(strum(message = "Decision Tree"))]
    DecisionTree(DecisionTreeParams),
    #[strum_discriminants(strum(message = "Random Forest"))]
    RandomForest(RandomForestParams),
}

impl ModelArtifact {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn kind(&self) -> ModelKind {
        ModelKind::from(self)
    }

    /// JSON Schema for the whole tagged enum.
    pub fn schema() -> Schema {
        schema_for!(ModelArtifact)
    }
}
