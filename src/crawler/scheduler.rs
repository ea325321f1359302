//! Scheduler for admission, the frontier and record completion
//!
//! This module handles:
//! - Deduplicating seed requests per (entity type, metallum id)
//! - The FIFO frontier of admitted requests
//! - Tracking which completion stages each entity has reported
//! - Releasing each record exactly once when its stages are all in
//!
//! Every operation takes the table lock once and never across an `.await`,
//! so concurrent tasks see each check-and-update as a single step.

use crate::builders::Build;
use crate::crawler::FetchRequest;
use crate::model::Record;
use crate::state::{EntityKey, EntityState, Stage};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Outcome of offering a request to the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The request joined the frontier
    Queued,

    /// The entity was already seeded in this run; nothing was queued
    Suppressed,
}

/// What settling one builder result produced
#[derive(Debug, Default)]
pub struct Settlement {
    /// The finished record, present exactly once per entity
    pub emitted: Option<Record>,

    /// Follow-ups that joined the frontier
    pub queued: usize,
}

/// Running totals kept by the scheduler
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchedulerCounters {
    pub admitted: u64,
    pub suppressed: u64,
    pub emitted: u64,
    /// Results that arrived for an entity already emitted
    pub duplicate_results: u64,
    /// Records a builder called complete while required stages were missing
    pub stalled: u64,
}

#[derive(Default)]
struct Tables {
    entities: HashMap<EntityKey, EntityState>,
    frontier: VecDeque<FetchRequest>,
    counters: SchedulerCounters,
}

impl Tables {
    fn admit(&mut self, request: FetchRequest) -> Admission {
        if request.is_seed() {
            if let Some(key) = request.key() {
                if self.entities.contains_key(&key) {
                    self.counters.suppressed += 1;
                    tracing::debug!("Suppressing duplicate request {}", request);
                    return Admission::Suppressed;
                }
                self.entities.insert(key, EntityState::Seeded);
            }
        }

        tracing::trace!("Queued {}", request);
        self.counters.admitted += 1;
        self.frontier.push_back(request);
        Admission::Queued
    }

    fn transition(&mut self, key: &EntityKey, next: EntityState) {
        let state = self
            .entities
            .entry(key.clone())
            .or_insert(EntityState::Seeded);
        if !state.can_transition_to(&next) {
            tracing::warn!("Unexpected transition of {}: {} -> {}", key, state, next);
        }
        *state = next;
    }

    fn settle(&mut self, key: EntityKey, stage: Option<Stage>, build: Build<Record>) -> Settlement {
        let current = self
            .entities
            .get(&key)
            .cloned()
            .unwrap_or(EntityState::Seeded);
        if !current.is_active() {
            self.counters.duplicate_results += 1;
            tracing::debug!("Dropping result for {} already {}", key, current);
            return Settlement::default();
        }

        let (record, followups, complete) = build.into_parts();
        let mut stages = current.stages();

        // A stage is finished once its page chain stops continuing itself
        if let Some(stage) = stage {
            let continued = followups
                .iter()
                .any(|f| f.stage() == Some(stage) && f.key().as_ref() == Some(&key));
            if !continued && !stages.insert(stage) {
                tracing::debug!("Stage {} of {} reported twice", stage, key);
            }
        }

        let queued = followups
            .into_iter()
            .map(|followup| self.admit(followup))
            .filter(|admission| *admission == Admission::Queued)
            .count();

        if !complete {
            self.transition(&key, EntityState::Partial(stages));
            return Settlement {
                emitted: None,
                queued,
            };
        }

        if !stages.covers(key.kind) {
            self.counters.stalled += 1;
            tracing::warn!(
                "{} finished with {} of {} stages; not exporting",
                key,
                stages.len(),
                Stage::required(key.kind).len()
            );
            self.transition(&key, EntityState::Partial(stages));
            return Settlement {
                emitted: None,
                queued,
            };
        }

        self.transition(&key, EntityState::Complete);
        self.transition(&key, EntityState::Emitted);
        self.counters.emitted += 1;
        tracing::debug!("Completed {}", key);

        Settlement {
            emitted: Some(record),
            queued,
        }
    }
}

/// Scheduler shared by every crawl task
#[derive(Default)]
pub struct Scheduler {
    tables: Mutex<Tables>,
}

impl Scheduler {
    /// Creates a scheduler with an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        // Updates are single assignments, so a poisoned table is still consistent
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Offers a request to the frontier
    ///
    /// Seed requests are checked against, and recorded in, the entity table in
    /// one step: of two concurrent seeds for the same entity exactly one is
    /// queued.
    pub fn admit(&self, request: FetchRequest) -> Admission {
        self.lock().admit(request)
    }

    /// Offers several requests; returns how many were queued
    pub fn admit_all(&self, requests: impl IntoIterator<Item = FetchRequest>) -> usize {
        let mut tables = self.lock();
        requests
            .into_iter()
            .map(|request| tables.admit(request))
            .filter(|admission| *admission == Admission::Queued)
            .count()
    }

    /// Applies a builder result to its entity and queues its follow-ups
    pub fn settle(&self, key: EntityKey, stage: Option<Stage>, build: Build<Record>) -> Settlement {
        self.lock().settle(key, stage, build)
    }

    /// Takes the oldest queued request
    pub fn next_request(&self) -> Option<FetchRequest> {
        self.lock().frontier.pop_front()
    }

    /// Number of queued requests
    pub fn frontier_size(&self) -> usize {
        self.lock().frontier.len()
    }

    /// Drops every queued request; returns how many were dropped
    pub fn clear_frontier(&self) -> usize {
        let mut tables = self.lock();
        let dropped = tables.frontier.len();
        tables.frontier.clear();
        dropped
    }

    /// Current state of an entity, if it was ever seeded
    pub fn state(&self, key: &EntityKey) -> Option<EntityState> {
        self.lock().entities.get(key).cloned()
    }

    pub fn counters(&self) -> SchedulerCounters {
        self.lock().counters.clone()
    }

    /// Entities seeded but never emitted, ordered by key
    pub fn unfinished(&self) -> Vec<(EntityKey, EntityState)> {
        let tables = self.lock();
        let mut unfinished: Vec<_> = tables
            .entities
            .iter()
            .filter(|(_, state)| !state.is_terminal())
            .map(|(key, state)| (key.clone(), state.clone()))
            .collect();
        unfinished.sort_by(|a, b| a.0.cmp(&b.0));
        unfinished
    }
}
