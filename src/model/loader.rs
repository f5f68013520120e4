use crate::classifiers::Classifier;
use crate::core::features::FEATURE_COUNT;
use crate::model::{FileSource, ModelArtifact, ModelLoadError, ModelSource, build_classifier};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use strum::EnumMessage;
use tracing::{debug, info, warn};

/// Shared read-only handle to the loaded classifier.
pub type ClassifierHandle = Arc<dyn Classifier>;

/// Lazily loads a classifier once and hands out the cached handle afterwards.
///
/// A failed load is not cached: the next call reads the source again, so a
/// broken artifact keeps failing until it is fixed.
pub struct ModelLoader {
    source: Box<dyn ModelSource>,
    cached: OnceLock<ClassifierHandle>,
    init: Mutex<()>,
}

impl ModelLoader {
    pub fn new(source: Box<dyn ModelSource>) -> Self {
        Self {
            source,
            cached: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    pub fn from_path<P: Into<PathBuf>>(path: P) -> Self {
        Self::new(Box::new(FileSource::new(path)))
    }

    pub fn origin(&self) -> String {
        self.source.origin()
    }

    pub fn is_loaded(&self) -> bool {
        self.cached.get().is_some()
    }

    pub fn load(&self) -> Result<ClassifierHandle, ModelLoadError> {
        if let Some(handle) = self.cached.get() {
            return Ok(Arc::clone(handle));
        }

        // Serialize first loads; whoever waited here finds the cache filled.
        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = self.cached.get() {
            debug!("model loaded by another caller");
            return Ok(Arc::clone(handle));
        }

        let handle = self.read_and_build()?;
        Ok(Arc::clone(self.cached.get_or_init(|| handle)))
    }

    fn read_and_build(&self) -> Result<ClassifierHandle, ModelLoadError> {
        let origin = self.source.origin();
        info!(origin = %origin, "loading model");

        let bytes = self.source.read().map_err(|source| ModelLoadError::Read {
            origin: origin.clone(),
            source,
        })?;

        let artifact =
            ModelArtifact::from_slice(&bytes).map_err(|source| ModelLoadError::Deserialize {
                origin: origin.clone(),
                source,
            })?;
        let kind = artifact.kind();

        let handle = build_classifier(artifact).map_err(|source| ModelLoadError::Invalid {
            origin: origin.clone(),
            source,
        })?;

        let features = handle.number_of_features();
        if features != FEATURE_COUNT {
            warn!(
                origin = %origin,
                expected = FEATURE_COUNT,
                found = features,
                "model input width differs from the wine feature count"
            );
        }
        info!(
            origin = %origin,
            kind = kind.get_message().unwrap_or_default(),
            features,
            bytes = bytes.len(),
            "model loaded"
        );

        Ok(handle)
    }
}
