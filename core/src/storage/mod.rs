//! Snapshot persistence.
//!
//! Each store replaces the whole document. The JSON sink writes a sibling
//! temporary file and renames it over the target, so a reader polling the
//! file only ever sees a complete snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use livefeed_types::Snapshot;
use serde::Serialize;

use crate::error::SinkError;

/// Durable destination for the current snapshot.
pub trait SnapshotSink {
    fn store(&mut self, snapshot: &Snapshot) -> Result<(), SinkError>;
}

impl<T: SnapshotSink + ?Sized> SnapshotSink for Box<T> {
    fn store(&mut self, snapshot: &Snapshot) -> Result<(), SinkError> {
        (**self).store(snapshot)
    }
}

/// Serialize a snapshot the way it is written to disk: pretty JSON with a
/// four-space indent.
pub fn render_snapshot(snapshot: &Snapshot) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    snapshot.serialize(&mut serializer)?;
    Ok(buf)
}

#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotSink for JsonFileSink {
    fn store(&mut self, snapshot: &Snapshot) -> Result<(), SinkError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| SinkError::CreateDir {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }

        let contents = render_snapshot(snapshot)?;
        let temp = self.temp_path();

        fs::write(&temp, contents).map_err(|e| SinkError::Write {
            path: temp.clone(),
            source: e,
        })?;
        fs::rename(&temp, &self.path).map_err(|e| SinkError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %self.path.display(), "Snapshot written");
        Ok(())
    }
}
