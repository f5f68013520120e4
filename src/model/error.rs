use crate::classifiers::InvalidModel;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("cannot read model from {origin}")]
    Read {
        origin: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot deserialize model from {origin}")]
    Deserialize {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("model from {origin} is unusable")]
    Invalid {
        origin: String,
        #[source]
        source: InvalidModel,
    },
}
