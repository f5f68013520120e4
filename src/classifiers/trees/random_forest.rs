use crate::classifiers::{Classifier, DecisionTree, InvalidModel};

/// Majority vote over decision trees that share one input width.
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    number_of_features: usize,
}

impl RandomForest {
    pub fn new(trees: Vec<DecisionTree>) -> Result<Self, InvalidModel> {
        let Some(first) = trees.first() else {
            return Err(InvalidModel("random forest has no trees".into()));
        };
        let number_of_features = first.number_of_features();

        if let Some(i) = trees
            .iter()
            .position(|t| t.number_of_features() != number_of_features)
        {
            return Err(InvalidModel(format!(
                "tree {i} expects {} features, tree 0 expects {number_of_features}",
                trees[i].number_of_features()
            )));
        }

        Ok(Self {
            trees,
            number_of_features,
        })
    }

    pub fn number_of_trees(&self) -> usize {
        self.trees.len()
    }
}

impl Classifier for RandomForest {
    fn number_of_features(&self) -> usize {
        self.number_of_features
    }

    /// Ties go to the smaller label.
    fn predict_row(&self, row: &[f64]) -> f64 {
        let mut votes: Vec<(f64, usize)> = Vec::new();
        for tree in &self.trees {
            let label = tree.predict_row(row);
            match votes.iter_mut().find(|(l, _)| *l == label) {
                Some((_, count)) => *count += 1,
                None => votes.push((label, 1)),
            }
        }

        votes
            .into_iter()
            .max_by(|(la, ca), (lb, cb)| ca.cmp(cb).then(lb.total_cmp(la)))
            .map(|(label, _)| label)
            .unwrap_or(f64::NAN)
    }
}
