//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the main crawl loop that coordinates all aspects of
//! the crawling process, including:
//! - Spawning one task per admitted request, bounded by a semaphore
//! - Routing fetched documents to their builders
//! - Handing emitted records to the export sink
//! - Handling aborts and producing run statistics

use crate::config::Config;
use crate::crawler::router::{route, Routed};
use crate::crawler::{Continuation, Fetch, FetchRequest, Scheduler};
use crate::model::Record;
use crate::output::{close_all, open_all, CrawlStatistics, ExportSink};
use crate::url::Site;
use crate::CrawlError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Cooperative stop signal for a running crawl
///
/// Once aborted, no new fetch starts. Fetches already in flight finish and
/// their results are discarded.
#[derive(Debug, Clone, Default)]
pub struct AbortHandle(Arc<AtomicBool>);

impl AbortHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// How one task ended
#[derive(Debug)]
enum TaskOutcome {
    /// Fetched and routed; carries the record it completed, if any
    Done(Option<Record>),
    FetchFailed,
    ParseFailed,
    /// Skipped or thrown away because of an abort
    Discarded,
}

/// State shared by every task of a run
struct TaskContext {
    site: Site,
    fetcher: Arc<dyn Fetch>,
    scheduler: Arc<Scheduler>,
    semaphore: Arc<Semaphore>,
    abort: AbortHandle,
}

/// Main crawler coordinator structure
pub struct Coordinator {
    context: Arc<TaskContext>,
    start_url: String,
    sink: Box<dyn ExportSink + Send>,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    /// * `fetcher` - Where documents come from
    /// * `sink` - Where finished records go
    pub fn new(
        config: &Config,
        fetcher: Arc<dyn Fetch>,
        sink: Box<dyn ExportSink + Send>,
    ) -> Result<Self, CrawlError> {
        Self::with_abort_handle(config, fetcher, sink, AbortHandle::new())
    }

    /// Creates a coordinator that stops when `abort` fires
    pub fn with_abort_handle(
        config: &Config,
        fetcher: Arc<dyn Fetch>,
        sink: Box<dyn ExportSink + Send>,
        abort: AbortHandle,
    ) -> Result<Self, CrawlError> {
        let site = Site::new(&config.site.base_url, config.crawler.page_size)?;
        let context = TaskContext {
            site,
            fetcher,
            scheduler: Arc::new(Scheduler::new()),
            semaphore: Arc::new(Semaphore::new(config.crawler.max_concurrent_fetches as usize)),
            abort,
        };

        Ok(Self {
            context: Arc::new(context),
            start_url: config.site.start_url.clone(),
            sink,
        })
    }

    /// Handle that stops this coordinator's crawl
    pub fn abort_handle(&self) -> AbortHandle {
        self.context.abort.clone()
    }

    /// The scheduler of this run, for inspecting entity states
    pub fn scheduler(&self) -> Arc<Scheduler> {
        self.context.scheduler.clone()
    }

    /// Crawls the whole site from the configured letter index
    pub async fn run(&mut self) -> Result<CrawlStatistics, CrawlError> {
        let seed = FetchRequest::new(self.start_url.clone(), Continuation::LetterIndex);
        self.run_from(vec![seed]).await
    }

    /// Crawls everything reachable from `seeds`
    ///
    /// The sink is opened for every entity type before the first fetch and
    /// closed for every type afterwards, also when the crawl is aborted.
    pub async fn run_from(&mut self, seeds: Vec<FetchRequest>) -> Result<CrawlStatistics, CrawlError> {
        let mut stats = CrawlStatistics::start();
        tracing::info!("Starting crawl from {} seed(s)", seeds.len());

        open_all(&mut *self.sink)?;
        let crawled = self.crawl(seeds, &mut stats).await;
        let closed = close_all(&mut *self.sink);

        let scheduler = &self.context.scheduler;
        stats.scheduler = scheduler.counters();
        stats.unfinished = scheduler.unfinished().len() as u64;
        stats.aborted = self.context.abort.is_aborted();
        stats.finish();

        crawled?;
        closed?;

        tracing::info!(
            "Crawl finished: {} records written, {} fetches, {} unfinished entities",
            stats.total_records(),
            stats.fetched,
            stats.unfinished
        );
        Ok(stats)
    }

    async fn crawl(
        &mut self,
        seeds: Vec<FetchRequest>,
        stats: &mut CrawlStatistics,
    ) -> Result<(), CrawlError> {
        let context = self.context.clone();
        context.scheduler.admit_all(seeds);

        let mut tasks = JoinSet::new();
        let mut completed: u64 = 0;

        loop {
            if context.abort.is_aborted() {
                let dropped = context.scheduler.clear_frontier();
                if dropped > 0 {
                    tracing::info!("Abort requested; dropped {} queued requests", dropped);
                }
            } else {
                while let Some(request) = context.scheduler.next_request() {
                    tracing::debug!("Dispatching {}", request);
                    tasks.spawn(execute(context.clone(), request));
                }
            }

            let Some(joined) = tasks.join_next().await else {
                break;
            };

            let outcome = match joined {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("Crawl task failed: {}", e);
                    TaskOutcome::ParseFailed
                }
            };

            match outcome {
                TaskOutcome::Done(emitted) => {
                    stats.fetched += 1;
                    if let Some(record) = emitted {
                        self.sink.write(&record)?;
                        stats.record_emitted(record.kind());
                    }
                }
                TaskOutcome::FetchFailed => stats.fetch_failures += 1,
                TaskOutcome::ParseFailed => stats.parse_failures += 1,
                TaskOutcome::Discarded => stats.discarded += 1,
            }

            completed += 1;
            if completed % 100 == 0 {
                tracing::info!(
                    "Progress: {} requests done, {} in flight, {} queued, {} records written",
                    completed,
                    tasks.len(),
                    context.scheduler.frontier_size(),
                    stats.total_records()
                );
            }
        }

        Ok(())
    }
}

/// Fetches one request and settles its result
///
/// The fetch is the only suspension point. Parsing and building happen after
/// it, synchronously, so no parsed document is held across an `.await`.
async fn execute(context: Arc<TaskContext>, request: FetchRequest) -> TaskOutcome {
    let Ok(_permit) = context.semaphore.clone().acquire_owned().await else {
        return TaskOutcome::Discarded;
    };
    if context.abort.is_aborted() {
        return TaskOutcome::Discarded;
    }

    let document = match context.fetcher.fetch(&request.url).await {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!("Fetch failed for {}: {}", request, e);
            return TaskOutcome::FetchFailed;
        }
    };
    if context.abort.is_aborted() {
        return TaskOutcome::Discarded;
    }

    let FetchRequest { url, continuation } = request;
    match route(&document, continuation, &context.site) {
        Ok(Routed::Listing(requests)) => {
            let queued = context.scheduler.admit_all(requests);
            tracing::debug!("{} queued {} requests", url, queued);
            TaskOutcome::Done(None)
        }
        Ok(Routed::Entity { key, stage, build }) => {
            let settled = context.scheduler.settle(key, stage, build);
            TaskOutcome::Done(settled.emitted)
        }
        Err(e) => {
            tracing::warn!("Abandoning {}: {}", url, e);
            TaskOutcome::ParseFailed
        }
    }
}
