mod artifact;
mod build;
mod error;
pub mod loader;
pub mod source;

pub use artifact::{
    DecisionTreeParams, GaussianNaiveBayesParams, LogisticRegressionParams, ModelArtifact,
    ModelKind, RandomForestParams,
};
pub use build::build_classifier;
pub use error::ModelLoadError;
pub use loader::{ClassifierHandle, ModelLoader};
pub use source::{FileSource, ModelSource};
