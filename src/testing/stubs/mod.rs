pub mod counting_source;
pub mod fixed_output_classifier;
pub mod scripted_driver;

pub use counting_source::CountingSource;
pub use fixed_output_classifier::FixedOutputClassifier;
pub use scripted_driver::{Answer, ScriptedDriver};
