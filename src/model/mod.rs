//! Records produced by the crawl
//!
//! One record type per entity of the site. Every record is identified by its
//! metallum id; names are not unique and never used as identity.

mod records;
mod refs;

pub use records::{Band, Country, Label, Member, Release};
pub use refs::{Lineup, LineupEntry, Membership, MemberBands, StubRef};

use serde::Serialize;
use std::fmt;

/// The five entity types of the crawl graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Band,
    Release,
    Label,
    Country,
    Member,
}

impl EntityKind {
    /// Every entity kind, in export order
    pub const ALL: [EntityKind; 5] = [
        Self::Band,
        Self::Release,
        Self::Label,
        Self::Country,
        Self::Member,
    ];

    /// Lowercase name, also the stem of the export file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Band => "band",
            Self::Release => "release",
            Self::Label => "label",
            Self::Country => "country",
            Self::Member => "member",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A completed record of any entity type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Band(Band),
    Release(Release),
    Label(Label),
    Country(Country),
    Member(Member),
}

impl Record {
    /// Entity type of the record
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Band(_) => EntityKind::Band,
            Self::Release(_) => EntityKind::Release,
            Self::Label(_) => EntityKind::Label,
            Self::Country(_) => EntityKind::Country,
            Self::Member(_) => EntityKind::Member,
        }
    }

    /// Metallum id of the record
    pub fn metallum_id(&self) -> &str {
        match self {
            Self::Band(r) => &r.metallum_id,
            Self::Release(r) => &r.metallum_id,
            Self::Label(r) => &r.metallum_id,
            Self::Country(r) => &r.metallum_id,
            Self::Member(r) => &r.metallum_id,
        }
    }
}

impl From<Band> for Record {
    fn from(band: Band) -> Self {
        Self::Band(band)
    }
}

impl From<Release> for Record {
    fn from(release: Release) -> Self {
        Self::Release(release)
    }
}

impl From<Label> for Record {
    fn from(label: Label) -> Self {
        Self::Label(label)
    }
}

impl From<Country> for Record {
    fn from(country: Country) -> Self {
        Self::Country(country)
    }
}

impl From<Member> for Record {
    fn from(member: Member) -> Self {
        Self::Member(member)
    }
}
