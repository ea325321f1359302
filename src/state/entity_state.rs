//! Entity lifecycle definitions for tracking record assembly
//!
//! This module defines the states an entity moves through between the first
//! request that mentions it and its export.

use crate::model::EntityKind;
use crate::state::StageSet;
use std::fmt;

/// Identity of an entity within a run
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKey {
    pub kind: EntityKind,
    pub metallum_id: String,
}

impl EntityKey {
    pub fn new(kind: EntityKind, metallum_id: impl Into<String>) -> Self {
        Self {
            kind,
            metallum_id: metallum_id.into(),
        }
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.metallum_id)
    }
}

/// Represents where an entity is in its assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityState {
    /// Seed request admitted; nothing has been built yet
    Seeded,

    /// Record started; the set holds the completion stages already reported
    Partial(StageSet),

    /// Every required stage reported; the record is waiting to be written
    Complete,

    /// Record handed to the export sink. Terminal.
    Emitted,
}

impl EntityState {
    /// Returns true if this is a terminal state (no further processing needed)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Emitted)
    }

    /// Returns true if the entity is still being assembled
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Seeded | Self::Partial(_))
    }

    /// Stages reported so far; empty for a seeded entity
    pub fn stages(&self) -> StageSet {
        match self {
            Self::Partial(stages) => stages.clone(),
            _ => StageSet::new(),
        }
    }

    /// Whether the state may move to `next`
    ///
    /// Seeded → Partial → Complete → Emitted, with Partial → Partial as stages
    /// report and Seeded → Complete for single-fetch entities.
    pub fn can_transition_to(&self, next: &EntityState) -> bool {
        matches!(
            (self, next),
            (Self::Seeded, Self::Partial(_))
                | (Self::Seeded, Self::Complete)
                | (Self::Partial(_), Self::Partial(_))
                | (Self::Partial(_), Self::Complete)
                | (Self::Complete, Self::Emitted)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seeded => "seeded",
            Self::Partial(_) => "partial",
            Self::Complete => "complete",
            Self::Emitted => "emitted",
        }
    }
}

impl fmt::Display for EntityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
