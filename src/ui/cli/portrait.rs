use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Best-effort check for the optional portrait shown in the "About" block.
#[derive(Debug, Clone, PartialEq)]
pub enum Portrait {
    Found { path: PathBuf, bytes: u64 },
    Missing,
}

impl Portrait {
    pub fn probe(path: &Path) -> Self {
        let found = File::open(path)
            .and_then(|f| f.metadata())
            .ok()
            .filter(|m| m.is_file() && m.len() > 0);

        match found {
            Some(meta) => Portrait::Found {
                path: path.to_path_buf(),
                bytes: meta.len(),
            },
            None => {
                warn!(path = %path.display(), "portrait image unavailable");
                Portrait::Missing
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn existing_image_is_found() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

        assert_eq!(
            Portrait::probe(file.path()),
            Portrait::Found {
                path: file.path().to_path_buf(),
                bytes: 4
            }
        );
    }

    #[test]
    fn missing_empty_or_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Portrait::probe(&dir.path().join("prof.jpeg")), Portrait::Missing);
        assert_eq!(Portrait::probe(dir.path()), Portrait::Missing);

        let empty = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(Portrait::probe(empty.path()), Portrait::Missing);
    }
}
