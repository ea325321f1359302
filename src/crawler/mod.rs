//! Crawler module for fetching and assembling records
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with retry logic
//! - Typed requests and the continuations they carry
//! - Routing fetched documents to their builders
//! - Admission, deduplication and record completion
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod request;
mod router;
mod scheduler;

pub use coordinator::{AbortHandle, Coordinator};
pub use fetcher::{build_http_client, is_transient, user_agent, Fetch, HttpFetcher};
pub use request::{Continuation, FetchRequest};
pub use router::{route, Routed};
pub use scheduler::{Admission, Scheduler, SchedulerCounters, Settlement};

use crate::config::Config;
use crate::output::{CrawlStatistics, JsonExportSink};
use crate::CrawlError;
use std::sync::Arc;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP fetcher
/// 2. Open the JSON export files in the configured directory
/// 3. Crawl from the configured letter index until nothing is left to fetch
///    or `abort` fires
/// 4. Close the export files and return the run statistics
pub async fn crawl(config: &Config, abort: AbortHandle) -> Result<CrawlStatistics, CrawlError> {
    let fetcher = Arc::new(HttpFetcher::new(config)?);
    let sink = Box::new(JsonExportSink::new(&config.output.directory));
    let mut coordinator = Coordinator::with_abort_handle(config, fetcher, sink, abort)?;
    coordinator.run().await
}
