pub mod classifiers;
pub mod config;
pub mod core;
pub mod model;
pub mod prediction;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
