use crate::classifiers::{
    Classifier, DecisionTree, GaussianNaiveBayes, InvalidModel, LogisticRegression, RandomForest,
};
use crate::model::{
    DecisionTreeParams, GaussianNaiveBayesParams, LogisticRegressionParams, ModelArtifact,
    RandomForestParams,
};
use std::sync::Arc;
use tracing::debug;

impl TryFrom<LogisticRegressionParams> for LogisticRegression {
    type Error = InvalidModel;

    fn try_from(params: LogisticRegressionParams) -> Result<Self, Self::Error> {
        LogisticRegression::new(
            params.coefficients,
            params.intercept,
            params.threshold,
            params.labels,
        )
    }
}

impl TryFrom<GaussianNaiveBayesParams> for GaussianNaiveBayes {
    type Error = InvalidModel;

    fn try_from(params: GaussianNaiveBayesParams) -> Result<Self, Self::Error> {
        GaussianNaiveBayes::new(params.classes)
    }
}

impl TryFrom<DecisionTreeParams> for DecisionTree {
    type Error = InvalidModel;

    fn try_from(params: DecisionTreeParams) -> Result<Self, Self::Error> {
        DecisionTree::new(params.nodes, params.number_of_features)
    }
}

impl TryFrom<RandomForestParams> for RandomForest {
    type Error = InvalidModel;

    fn try_from(params: RandomForestParams) -> Result<Self, Self::Error> {
        let trees = params
            .trees
            .into_iter()
            .enumerate()
            .map(|(i, nodes)| {
                DecisionTree::new(nodes, params.number_of_features)
                    .map_err(|e| InvalidModel(format!("tree {i}: {}", e.0)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        RandomForest::new(trees)
    }
}

pub fn build_classifier(artifact: ModelArtifact) -> Result<Arc<dyn Classifier>, InvalidModel> {
    match artifact {
        ModelArtifact::LogisticRegression(p) => Ok(Arc::new(LogisticRegression::try_from(p)?)),
        ModelArtifact::GaussianNaiveBayes(p) => Ok(Arc::new(GaussianNaiveBayes::try_from(p)?)),
        ModelArtifact::DecisionTree(p) => {
            let tree = DecisionTree::try_from(p)?;
            debug!(nodes = tree.number_of_nodes(), "decision tree built");
            Ok(Arc::new(tree))
        }
        ModelArtifact::RandomForest(p) => {
            let forest = RandomForest::try_from(p)?;
            debug!(trees = forest.number_of_trees(), "random forest built");
            Ok(Arc::new(forest))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::TreeNode;

    #[test]
    fn builds_each_family() {
        let lr = ModelArtifact::from_slice(
            br#"{"type": "logistic-regression", "params": {"coefficients": [1.0], "intercept": 0.0}}"#,
        )
        .unwrap();
        assert_eq!(build_classifier(lr).unwrap().number_of_features(), 1);

        let nb = ModelArtifact::from_slice(
            br#"{"type": "gaussian-naive-bayes", "params": {"classes": [
                {"label": 0, "prior": 0.5, "means": [0, 0], "variances": [1, 1]},
                {"label": 1, "prior": 0.5, "means": [3, 3], "variances": [1, 1]}
            ]}}"#,
        )
        .unwrap();
        assert_eq!(build_classifier(nb).unwrap().number_of_features(), 2);

        let forest = ModelArtifact::RandomForest(RandomForestParams {
            number_of_features: 3,
            trees: vec![
                vec![TreeNode::Leaf { value: 1.0 }],
                vec![TreeNode::Leaf { value: 1.0 }],
            ],
        });
        let forest = build_classifier(forest).unwrap();
        assert_eq!(forest.predict(&[vec![0.0; 3]]).unwrap(), vec![1.0]);
    }

    #[test]
    fn forest_errors_name_the_broken_tree() {
        let forest = ModelArtifact::RandomForest(RandomForestParams {
            number_of_features: 1,
            trees: vec![vec![TreeNode::Leaf { value: 1.0 }], vec![]],
        });
        let err = build_classifier(forest).err().expect("empty tree must fail");
        assert!(err.0.starts_with("tree 1:"), "{}", err.0);
    }

    #[test]
    fn invalid_tree_is_rejected() {
        let tree = ModelArtifact::DecisionTree(DecisionTreeParams {
            number_of_features: 0,
            nodes: vec![TreeNode::Leaf { value: 1.0 }],
        });
        assert!(build_classifier(tree).is_err());
    }
}
