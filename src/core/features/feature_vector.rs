use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Number of measurements the wine classifier was trained on.
pub const FEATURE_COUNT: usize = 11;

/// Positional schema of a wine sample. The classifier only sees positions,
/// so this order must match the order the model was trained with.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "fixed_acidity",
    "volatile_acidity",
    "citric_acid",
    "residual_sugar",
    "chlorides",
    "free_sulfur_dioxide",
    "total_sulfur_dioxide",
    "density",
    "ph",
    "sulphates",
    "alcohol",
];

#[derive(Debug, Error, PartialEq)]
pub enum FeatureParseError {
    #[error("no feature values given")]
    Empty,

    #[error("value #{position} ({value:?}) is not a number")]
    InvalidNumber { position: usize, value: String },
}

/// Ordered measurements for a single prediction request.
///
/// The vector is not checked against [`FEATURE_COUNT`]: a wrongly sized
/// vector is handed to the classifier as-is and rejected there.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Single-row batch, the input shape classifiers expect.
    pub fn to_batch(&self) -> Vec<Vec<f64>> {
        vec![self.values.clone()]
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl FromStr for FeatureVector {
    type Err = FeatureParseError;

    /// Parses comma separated numbers, e.g. `"7.0, 0.3, 0.3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(FeatureParseError::Empty);
        }

        let values = s
            .split(',')
            .map(str::trim)
            .enumerate()
            .map(|(i, raw)| {
                raw.parse::<f64>()
                    .map_err(|_| FeatureParseError::InvalidNumber {
                        position: i + 1,
                        value: raw.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(values))
    }
}

impl Display for FeatureVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
