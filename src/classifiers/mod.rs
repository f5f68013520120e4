pub mod bayes;
pub mod classifier;
mod error;
pub mod linear;
pub mod trees;

pub use bayes::{ClassDistribution, GaussianNaiveBayes};
pub use classifier::Classifier;
pub use error::{ClassifierError, InvalidModel};
pub use linear::LogisticRegression;
pub use trees::{DecisionTree, RandomForest, TreeNode};
