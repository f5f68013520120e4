use anyhow::Result;

pub trait PromptDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool>;
    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64>;
}

/// Why `x` is not an acceptable answer, if it is not.
pub fn range_violation(x: f64, min: Option<f64>, max: Option<f64>) -> Option<String> {
    if !x.is_finite() {
        return Some("Must be a finite number".into());
    }
    match (min, max) {
        (Some(lo), Some(hi)) if x < lo || x > hi => Some(format!("Must be between {lo} and {hi}")),
        (Some(lo), None) if x < lo => Some(format!("Must be ≥ {lo}")),
        (None, Some(hi)) if x > hi => Some(format!("Must be ≤ {hi}")),
        _ => None,
    }
}
