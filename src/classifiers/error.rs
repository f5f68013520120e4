use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ClassifierError {
    #[error("expected {expected} features per sample, got {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("sample {row} has a non-finite value in column {column}")]
    NonFiniteInput { row: usize, column: usize },
}

/// Raised when model parameters cannot form a usable classifier.
#[derive(Debug, Error, PartialEq)]
#[error("invalid model: {0}")]
pub struct InvalidModel(pub String);
