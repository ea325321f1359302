//! Run statistics
//!
//! Counters collected by the coordinator while the crawl runs, displayed when
//! it ends.

use crate::crawler::SchedulerCounters;
use crate::model::EntityKind;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Crawl statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,

    /// Documents fetched successfully
    pub fetched: u64,

    /// Requests whose fetch failed after retries
    pub fetch_failures: u64,

    /// Documents a builder could not read
    pub parse_failures: u64,

    /// Results thrown away because the crawl was aborted
    pub discarded: u64,

    /// Whether the crawl was aborted before its frontier drained
    pub aborted: bool,

    /// Records written, per entity type
    pub records: BTreeMap<EntityKind, u64>,

    /// Entities seeded but never exported
    pub unfinished: u64,

    /// Admission and completion totals
    pub scheduler: SchedulerCounters,
}

impl CrawlStatistics {
    /// Starts a statistics record stamped with the current time
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            fetched: 0,
            fetch_failures: 0,
            parse_failures: 0,
            discarded: 0,
            aborted: false,
            records: BTreeMap::new(),
            unfinished: 0,
            scheduler: SchedulerCounters::default(),
        }
    }

    pub fn record_emitted(&mut self, kind: EntityKind) {
        *self.records.entry(kind).or_insert(0) += 1;
    }

    /// Records of `kind` written so far
    pub fn emitted(&self, kind: EntityKind) -> u64 {
        self.records.get(&kind).copied().unwrap_or(0)
    }

    pub fn total_records(&self) -> u64 {
        self.records.values().sum()
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Run time in seconds, once finished
    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Run:");
    println!("  Started:  {}", stats.started_at.to_rfc3339());
    if let Some(finished) = stats.finished_at {
        println!("  Finished: {}", finished.to_rfc3339());
    }
    if let Some(seconds) = stats.duration_seconds() {
        println!("  Duration: {}s", seconds);
    }
    if stats.aborted {
        println!("  Aborted before the frontier drained");
    }
    println!();

    println!("Requests:");
    println!("  Admitted: {}", stats.scheduler.admitted);
    println!("  Suppressed duplicates: {}", stats.scheduler.suppressed);
    println!("  Fetched: {}", stats.fetched);
    println!("  Fetch failures: {}", stats.fetch_failures);
    println!("  Parse failures: {}", stats.parse_failures);
    if stats.discarded > 0 {
        println!("  Discarded after abort: {}", stats.discarded);
    }
    println!();

    println!("Records:");
    for kind in EntityKind::ALL {
        println!("  {}: {}", kind, stats.emitted(kind));
    }
    println!("  Unfinished entities: {}", stats.unfinished);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts() {
        let mut stats = CrawlStatistics::start();
        stats.record_emitted(EntityKind::Band);
        stats.record_emitted(EntityKind::Band);
        stats.record_emitted(EntityKind::Label);

        assert_eq!(stats.emitted(EntityKind::Band), 2);
        assert_eq!(stats.emitted(EntityKind::Member), 0);
        assert_eq!(stats.total_records(), 3);
    }

    #[test]
    fn test_duration_after_finish() {
        let mut stats = CrawlStatistics::start();
        assert!(stats.duration_seconds().is_none());
        stats.finish();
        assert!(stats.duration_seconds().unwrap() >= 0);
    }
}
