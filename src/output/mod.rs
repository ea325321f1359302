//! Output module for exporting records and reporting on the run
//!
//! This module handles:
//! - The export sink interface the coordinator writes records to
//! - JSON array files, one per entity type
//! - Run statistics

mod json;
pub mod stats;
mod traits;

pub use json::{export_path, JsonExportSink};
pub use stats::{print_statistics, CrawlStatistics};
pub use traits::{close_all, open_all, ExportSink, OutputError, OutputResult};
