use crate::classifiers::{Classifier, InvalidModel};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One node of a flattened binary decision tree. Node `0` is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TreeNode {
    /// Rows with `x[feature] <= threshold` continue at `left`, others at `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
    number_of_features: usize,
}

impl DecisionTree {
    /// Children must come after their parent in `nodes`, which rules out
    /// cycles and bounds every walk by the node count.
    pub fn new(nodes: Vec<TreeNode>, number_of_features: usize) -> Result<Self, InvalidModel> {
        if nodes.is_empty() {
            return Err(InvalidModel("decision tree has no nodes".into()));
        }
        if number_of_features == 0 {
            return Err(InvalidModel("decision tree has no features".into()));
        }

        for (i, node) in nodes.iter().enumerate() {
            let TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } = node
            else {
                continue;
            };

            if *feature >= number_of_features {
                return Err(InvalidModel(format!(
                    "node {i} splits on feature {feature}, model has {number_of_features}"
                )));
            }
            if !threshold.is_finite() {
                return Err(InvalidModel(format!("node {i} has a non-finite threshold")));
            }
            for child in [*left, *right] {
                if child <= i || child >= nodes.len() {
                    return Err(InvalidModel(format!(
                        "node {i} points to invalid child {child}"
                    )));
                }
            }
        }

        Ok(Self {
            nodes,
            number_of_features,
        })
    }

    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }
}

impl Classifier for DecisionTree {
    fn number_of_features(&self) -> usize {
        self.number_of_features
    }

    fn predict_row(&self, row: &[f64]) -> f64 {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                TreeNode::Leaf { value } => return *value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: f64) -> TreeNode {
        TreeNode::Leaf { value }
    }

    fn split(feature: usize, threshold: f64, left: usize, right: usize) -> TreeNode {
        TreeNode::Split {
            feature,
            threshold,
            left,
            right,
        }
    }

    // alcohol (10) <= 10.5 ? (volatile acidity (1) <= 0.4 ? good : bad) : good
    fn small_tree() -> DecisionTree {
        DecisionTree::new(
            vec![
                split(10, 10.5, 1, 4),
                split(1, 0.4, 2, 3),
                leaf(1.0),
                leaf(0.0),
                leaf(1.0),
            ],
            11,
        )
        .unwrap()
    }

    fn row(volatile_acidity: f64, alcohol: f64) -> Vec<f64> {
        let mut r = vec![0.0; 11];
        r[1] = volatile_acidity;
        r[10] = alcohol;
        r
    }

    #[test]
    fn routes_rows_to_leaves() {
        let t = small_tree();
        assert_eq!(t.predict_row(&row(0.3, 9.0)), 1.0);
        assert_eq!(t.predict_row(&row(0.7, 9.0)), 0.0);
        assert_eq!(t.predict_row(&row(0.7, 12.0)), 1.0);
        assert_eq!(t.number_of_nodes(), 5);
    }

    #[test]
    fn threshold_is_inclusive_on_the_left() {
        let t = small_tree();
        assert_eq!(t.predict_row(&row(0.4, 10.5)), 1.0);
    }

    #[test]
    fn single_leaf_tree_is_constant() {
        let t = DecisionTree::new(vec![leaf(0.0)], 3).unwrap();
        assert_eq!(t.predict(&[vec![1.0, 2.0, 3.0]]).unwrap(), vec![0.0]);
    }

    #[test]
    fn rejects_backward_and_dangling_children() {
        let cyclic = DecisionTree::new(vec![split(0, 1.0, 0, 1), leaf(0.0)], 1);
        assert!(cyclic.is_err());

        let dangling = DecisionTree::new(vec![split(0, 1.0, 1, 7), leaf(0.0)], 1);
        assert!(dangling.unwrap_err().0.contains("child 7"));
    }

    #[test]
    fn rejects_unknown_feature() {
        let err = DecisionTree::new(vec![split(3, 1.0, 1, 2), leaf(0.0), leaf(1.0)], 2)
            .unwrap_err();
        assert!(err.0.contains("feature 3"));
    }

    #[test]
    fn node_json_layout() {
        let nodes: Vec<TreeNode> = serde_json::from_str(
            r#"[
                {"kind": "split", "feature": 0, "threshold": 1.5, "left": 1, "right": 2},
                {"kind": "leaf", "value": 0},
                {"kind": "leaf", "value": 1}
            ]"#,
        )
        .unwrap();
        assert_eq!(nodes[0], split(0, 1.5, 1, 2));
        assert_eq!(nodes[2], leaf(1.0));
    }
}
