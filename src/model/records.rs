use crate::model::refs::{Lineup, MemberBands, StubRef};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Band {
    pub metallum_id: String,
    pub name: String,
    pub country: Option<StubRef>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub founding_year: Option<String>,
    pub genre: Option<String>,
    pub lyrical_themes: Option<String>,
    pub current_label: Option<StubRef>,
    pub releases: Vec<StubRef>,
    pub similar_artists: Vec<StubRef>,
    pub lineup: Lineup,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Release {
    pub metallum_id: String,
    pub name: String,
    /// Metallum id of the band, not an embedded record
    pub band: String,
    #[serde(rename = "type")]
    pub release_type: Option<String>,
    pub release_date: Option<String>,
    /// Average review score in percent
    pub reviews_avg: Option<u32>,
    pub reviews_count: Option<u32>,
    pub lineup: Lineup,
    pub label: Option<StubRef>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Label {
    pub metallum_id: String,
    pub name: String,
    pub country: Option<StubRef>,
    pub status: Option<String>,
    pub specialized_in: Option<String>,
    pub founding_year: Option<String>,
    pub current_bands: Vec<StubRef>,
    pub past_bands: Vec<StubRef>,
    /// Never populated by the crawl
    pub releases: Vec<StubRef>,
}

impl Label {
    /// A label known only by the link that pointed at it
    pub fn new(stub: StubRef) -> Self {
        Self {
            metallum_id: stub.metallum_id,
            name: stub.name,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Country {
    pub metallum_id: String,
    pub name: String,
    pub bands: Vec<StubRef>,
}

impl Country {
    /// A country with no bands collected yet
    pub fn new(stub: StubRef) -> Self {
        Self {
            metallum_id: stub.metallum_id,
            name: stub.name,
            bands: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Member {
    pub metallum_id: String,
    pub name: String,
    pub bands: MemberBands,
}
