//! Fetch requests and the continuations they carry
//!
//! Every request names the builder that will consume its response and carries
//! the partially-built record that builder extends. The partial is owned by the
//! request; nothing about a record in progress lives outside the queue.

use crate::model::{Band, Country, Label, Release, StubRef};
use crate::state::{EntityKey, Stage};
use crate::url::Roster;
use crate::EntityKind;
use std::fmt;

/// What to do with the response to a request
#[derive(Debug, Clone, PartialEq)]
pub enum Continuation {
    /// Alphabetical index page; yields one listing per letter
    LetterIndex,
    /// One page of a letter's band listing
    BandListing,
    /// A band's own page
    Band { metallum_id: String },
    /// A band's discography table
    Discography(Box<Band>),
    /// A band's similar-artists table
    Recommendations(Box<Band>),
    /// A release page, seeded from the band's discography row
    Release(Box<Release>),
    /// A member's page
    Member { metallum_id: String },
    /// A label's page, known so far by the link that pointed at it
    Label(StubRef),
    /// One of a label's two band rosters
    LabelRoster { label: Box<Label>, roster: Roster },
    /// A country's page
    Country(StubRef),
    /// One page of a country's band listing
    CountryListing(Box<Country>),
}

impl Continuation {
    /// The entity this continuation works on and the completion stage it feeds
    ///
    /// Seed continuations feed no stage: they open an entity. Listing
    /// continuations belong to no entity at all.
    pub fn target(&self) -> Option<(EntityKey, Option<Stage>)> {
        let (kind, id, stage) = match self {
            Self::LetterIndex | Self::BandListing => return None,
            Self::Band { metallum_id } => (EntityKind::Band, metallum_id.as_str(), None),
            Self::Discography(band) => (
                EntityKind::Band,
                band.metallum_id.as_str(),
                Some(Stage::Discography),
            ),
            Self::Recommendations(band) => (
                EntityKind::Band,
                band.metallum_id.as_str(),
                Some(Stage::Recommendations),
            ),
            Self::Release(release) => (
                EntityKind::Release,
                release.metallum_id.as_str(),
                Some(Stage::Lineup),
            ),
            Self::Member { metallum_id } => (
                EntityKind::Member,
                metallum_id.as_str(),
                Some(Stage::History),
            ),
            Self::Label(stub) => (EntityKind::Label, stub.metallum_id.as_str(), None),
            Self::LabelRoster { label, roster } => (
                EntityKind::Label,
                label.metallum_id.as_str(),
                Some(match roster {
                    Roster::Past => Stage::PastBands,
                    Roster::Current => Stage::CurrentBands,
                }),
            ),
            Self::Country(stub) => (EntityKind::Country, stub.metallum_id.as_str(), None),
            Self::CountryListing(country) => (
                EntityKind::Country,
                country.metallum_id.as_str(),
                Some(Stage::Listing),
            ),
        };
        Some((EntityKey::new(kind, id), stage))
    }

    /// True for requests that open an entity and must pass the seen-set
    ///
    /// Releases and members are fetched once and built from that single page,
    /// so their one request is both the seed and the only stage.
    pub fn is_seed(&self) -> bool {
        matches!(
            self,
            Self::Band { .. }
                | Self::Label(_)
                | Self::Country(_)
                | Self::Release(_)
                | Self::Member { .. }
        )
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::LetterIndex => "letter_index",
            Self::BandListing => "band_listing",
            Self::Band { .. } => "band",
            Self::Discography(_) => "discography",
            Self::Recommendations(_) => "recommendations",
            Self::Release(_) => "release",
            Self::Member { .. } => "member",
            Self::Label(_) => "label",
            Self::LabelRoster { .. } => "label_roster",
            Self::Country(_) => "country",
            Self::CountryListing(_) => "country_listing",
        }
    }
}

/// A URL to fetch and the continuation that consumes it
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub url: String,
    pub continuation: Continuation,
}

impl FetchRequest {
    pub fn new(url: impl Into<String>, continuation: Continuation) -> Self {
        Self {
            url: url.into(),
            continuation,
        }
    }

    /// Entity the request works on, if any
    pub fn key(&self) -> Option<EntityKey> {
        self.continuation.target().map(|(key, _)| key)
    }

    /// Completion stage the request feeds, if any
    pub fn stage(&self) -> Option<Stage> {
        self.continuation.target().and_then(|(_, stage)| stage)
    }

    pub fn is_seed(&self) -> bool {
        self.continuation.is_seed()
    }
}

impl fmt::Display for FetchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.continuation.name(), self.url)
    }
}
