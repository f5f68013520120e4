use crate::model::ModelSource;
use std::io::{Error, ErrorKind};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory model source that records how often it was read.
/// `None` behaves like a missing file.
pub struct CountingSource {
    bytes: Mutex<Option<Vec<u8>>>,
    reads: AtomicUsize,
}

impl CountingSource {
    pub fn new(bytes: Option<Vec<u8>>) -> Self {
        Self {
            bytes: Mutex::new(bytes),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn set_bytes(&self, bytes: Vec<u8>) {
        *self.bytes.lock().unwrap() = Some(bytes);
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ModelSource for CountingSource {
    fn origin(&self) -> String {
        "memory".to_string()
    }

    fn read(&self) -> Result<Vec<u8>, Error> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.bytes
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "no model bytes"))
    }
}
