//! Export sink trait and errors
//!
//! A sink receives every emitted record. It is opened for each entity type
//! when the crawl starts and closed for each when the crawl ends, abort
//! included, so records emitted before an abort are still exported.

use crate::model::{EntityKind, Record};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sink for {0} records is not open")]
    NotOpen(EntityKind),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Destination of emitted records
///
/// Implementations are owned by the coordinator and called from one task
/// only; they need not be thread-safe.
pub trait ExportSink {
    /// Prepares to receive records of `kind`
    fn open(&mut self, kind: EntityKind) -> OutputResult<()>;

    /// Accepts one finished record. Called at most once per entity.
    fn write(&mut self, record: &Record) -> OutputResult<()>;

    /// Finishes the output for `kind`
    fn close(&mut self, kind: EntityKind) -> OutputResult<()>;
}

/// Opens the sink for every entity type
pub fn open_all(sink: &mut dyn ExportSink) -> OutputResult<()> {
    for kind in EntityKind::ALL {
        sink.open(kind)?;
    }
    Ok(())
}

/// Closes the sink for every entity type, reporting the first failure
///
/// Every kind is attempted even after one fails.
pub fn close_all(sink: &mut dyn ExportSink) -> OutputResult<()> {
    let mut first_error = None;
    for kind in EntityKind::ALL {
        if let Err(e) = sink.close(kind) {
            tracing::error!("Failed to close {} output: {}", kind, e);
            first_error.get_or_insert(e);
        }
    }
    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
