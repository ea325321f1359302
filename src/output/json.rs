//! JSON file export
//!
//! One file per entity type (`band.json`, `release.json`, ...) holding a single
//! JSON array, UTF-8, indented with four spaces. Records are buffered per type
//! and the file is written when the type is closed.

use crate::model::{EntityKind, Record};
use crate::output::{ExportSink, OutputError, OutputResult};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes each entity type to its own JSON array file
pub struct JsonExportSink {
    directory: PathBuf,
    buffers: HashMap<EntityKind, Vec<Record>>,
    written: HashMap<EntityKind, usize>,
}

impl JsonExportSink {
    /// Creates a sink writing into `directory`, created on open if missing
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            buffers: HashMap::new(),
            written: HashMap::new(),
        }
    }

    /// Path of the export file for `kind`
    pub fn path_for(&self, kind: EntityKind) -> PathBuf {
        export_path(&self.directory, kind)
    }

    /// Records written to the closed file of `kind`
    pub fn written(&self, kind: EntityKind) -> usize {
        self.written.get(&kind).copied().unwrap_or(0)
    }
}

/// `<directory>/<kind>.json`
pub fn export_path(directory: &Path, kind: EntityKind) -> PathBuf {
    directory.join(format!("{}.json", kind.as_str()))
}

impl ExportSink for JsonExportSink {
    fn open(&mut self, kind: EntityKind) -> OutputResult<()> {
        fs::create_dir_all(&self.directory)?;
        self.buffers.entry(kind).or_default();
        tracing::debug!("Opened {}", self.path_for(kind).display());
        Ok(())
    }

    fn write(&mut self, record: &Record) -> OutputResult<()> {
        let kind = record.kind();
        self.buffers
            .get_mut(&kind)
            .ok_or(OutputError::NotOpen(kind))?
            .push(record.clone());
        Ok(())
    }

    fn close(&mut self, kind: EntityKind) -> OutputResult<()> {
        let records = self.buffers.remove(&kind).ok_or(OutputError::NotOpen(kind))?;
        let path = self.path_for(kind);

        let mut writer = BufWriter::new(File::create(&path)?);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        records.serialize(&mut serializer)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        tracing::info!("Wrote {} {} records to {}", records.len(), kind, path.display());
        self.written.insert(kind, records.len());
        Ok(())
    }
}
