//! Dispatch of fetched documents to their builders

use crate::builders::{
    band, country, discography, label, listing, member, recommendations, release, Build,
};
use crate::crawler::{Continuation, FetchRequest};
use crate::model::Record;
use crate::query::Document;
use crate::state::{EntityKey, Stage};
use crate::url::Site;
use crate::ParseResult;

/// What a fetched document turned into
#[derive(Debug)]
pub enum Routed {
    /// Requests only; listing pages build no record
    Listing(Vec<FetchRequest>),

    /// A record in progress, reported against the stage the request fed
    Entity {
        key: EntityKey,
        stage: Option<Stage>,
        build: Build<Record>,
    },
}

/// Runs the builder named by `continuation` on `doc`
pub fn route(doc: &Document, continuation: Continuation, site: &Site) -> ParseResult<Routed> {
    let stage = continuation.target().and_then(|(_, stage)| stage);

    let build = match continuation {
        Continuation::LetterIndex => return Ok(Routed::Listing(listing::letter_index(doc, site)?)),
        Continuation::BandListing => return Ok(Routed::Listing(listing::band_listing(doc, site)?)),
        Continuation::Band { metallum_id } => {
            band::build_band(doc, &metallum_id, site)?.into_record()
        }
        Continuation::Discography(partial) => {
            discography::build_discography(doc, *partial, site)?.into_record()
        }
        Continuation::Recommendations(partial) => {
            recommendations::build_recommendations(doc, *partial)?.into_record()
        }
        Continuation::Release(partial) => release::build_release(doc, *partial)?.into_record(),
        Continuation::Member { metallum_id } => {
            member::build_member(doc, &metallum_id)?.into_record()
        }
        Continuation::Label(stub) => label::build_label(doc, stub, site)?.into_record(),
        Continuation::LabelRoster { label: partial, roster } => {
            label::build_label_roster(doc, *partial, roster)?.into_record()
        }
        Continuation::Country(stub) => country::build_country(doc, stub, site)?.into_record(),
        Continuation::CountryListing(partial) => {
            country::build_country_listing(doc, *partial, site)?.into_record()
        }
    };

    // Builders keep the id they were handed, so the record names its entity
    let record = build.record();
    let key = EntityKey::new(record.kind(), record.metallum_id());
    Ok(Routed::Entity { key, stage, build })
}
