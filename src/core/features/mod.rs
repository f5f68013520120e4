mod feature_vector;
mod wine_sample;

pub use feature_vector::{FEATURE_COUNT, FEATURE_NAMES, FeatureParseError, FeatureVector};
pub use wine_sample::WineSample;
