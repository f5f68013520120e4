use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Where serialized model bytes come from.
pub trait ModelSource: Send + Sync {
    /// Human readable location, used in errors and logs.
    fn origin(&self) -> String;

    fn read(&self) -> io::Result<Vec<u8>>;
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl ModelSource for FileSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }
}

impl<S: ModelSource + ?Sized> ModelSource for Arc<S> {
    fn origin(&self) -> String {
        (**self).origin()
    }

    fn read(&self) -> io::Result<Vec<u8>> {
        (**self).read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_file_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();

        let source = FileSource::new(file.path());
        assert_eq!(source.read().unwrap(), b"{}");
        assert_eq!(source.origin(), file.path().display().to_string());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("wine_model.json"));
        assert_eq!(source.read().unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
