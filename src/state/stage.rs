use crate::model::EntityKind;
use std::collections::BTreeSet;
use std::fmt;

/// A completion stage: one sub-fetch (or chain of pages) a record waits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    /// Band discography table
    Discography,
    /// Band similar-artists table, including its "see more" expansion
    Recommendations,
    /// Release page with its lineup and label
    Lineup,
    /// Label past-bands roster
    PastBands,
    /// Label current-bands roster
    CurrentBands,
    /// Paginated band listing of a country
    Listing,
    /// Member page with its band history
    History,
}

impl Stage {
    /// Entity type the stage belongs to
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Discography | Self::Recommendations => EntityKind::Band,
            Self::Lineup => EntityKind::Release,
            Self::PastBands | Self::CurrentBands => EntityKind::Label,
            Self::Listing => EntityKind::Country,
            Self::History => EntityKind::Member,
        }
    }

    /// Stages that must all report before a record of `kind` is complete
    pub fn required(kind: EntityKind) -> &'static [Stage] {
        match kind {
            EntityKind::Band => &[Self::Discography, Self::Recommendations],
            EntityKind::Release => &[Self::Lineup],
            EntityKind::Label => &[Self::PastBands, Self::CurrentBands],
            EntityKind::Country => &[Self::Listing],
            EntityKind::Member => &[Self::History],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discography => "discography",
            Self::Recommendations => "recommendations",
            Self::Lineup => "lineup",
            Self::PastBands => "past_bands",
            Self::CurrentBands => "current_bands",
            Self::Listing => "listing",
            Self::History => "history",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The stages an entity has completed so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageSet(BTreeSet<Stage>);

impl StageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished stage; returns false if it had already finished
    pub fn insert(&mut self, stage: Stage) -> bool {
        self.0.insert(stage)
    }

    pub fn contains(&self, stage: Stage) -> bool {
        self.0.contains(&stage)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True once every stage required for `kind` has finished
    pub fn covers(&self, kind: EntityKind) -> bool {
        Stage::required(kind).iter().all(|stage| self.0.contains(stage))
    }
}
