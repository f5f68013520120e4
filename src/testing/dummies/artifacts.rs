use serde_json::json;

/// Logistic regression over the eleven wine features that only looks at
/// alcohol: good above 11% vol, bad at or below.
pub fn logistic_wine_model_json() -> String {
    let mut coefficients = vec![0.0; 11];
    coefficients[10] = 1.0;
    json!({
        "type": "logistic-regression",
        "params": { "coefficients": coefficients, "intercept": -11.0 }
    })
    .to_string()
}

/// Single-leaf tree that always answers `label`, whatever the sample.
pub fn constant_tree_json(label: f64) -> String {
    json!({
        "type": "decision-tree",
        "params": {
            "number_of_features": 11,
            "nodes": [ { "kind": "leaf", "value": label } ]
        }
    })
    .to_string()
}
