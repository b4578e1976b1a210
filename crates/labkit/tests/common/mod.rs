//! Helpers shared by the logging tests.
//!
//! Each logging test lives in its own file because the global subscriber can
//! only be installed once per process.

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use labkit::DatasetCache;
use tempfile::NamedTempFile;
use tracing_subscriber::fmt::MakeWriter;

pub const LOAD_EVENT: &str = "loaded air-quality dataset";

/// In-memory log sink.
#[derive(Clone, Default)]
pub struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Buffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Buffer {
    type Writer = Buffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Loads a one-row dataset twice through a fresh cache.
pub fn load_sample_twice() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "state_name,county_name,aqi\nOhio,Belmont,5\n").unwrap();

    let cache = DatasetCache::new();
    cache.fetch_column("aqi", file.path()).unwrap();
    cache.fetch_column("state", file.path()).unwrap();
}
