mod decision_tree;
mod random_forest;

pub use decision_tree::{DecisionTree, TreeNode};
pub use random_forest::RandomForest;
