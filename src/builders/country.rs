use crate::builders::{stub_from_link, Build};
use crate::crawler::{Continuation, FetchRequest};
use crate::model::{Country, StubRef};
use crate::query::Document;
use crate::url::{next_page, Site};
use crate::ParseResult;

/// Starts a country and requests the first page of its band listing
///
/// The id and name come from the link the country was reached through. The
/// page heading stands in when that link had no text.
pub fn build_country(doc: &Document, stub: StubRef, site: &Site) -> ParseResult<Build<Country>> {
    let mut country = Country::new(stub);
    if country.name.is_empty() {
        if let Some(heading) = doc.html().text("h1.page_title") {
            country.name = heading;
        }
    }

    let listing = FetchRequest::new(
        site.country_listing(&country.metallum_id)?,
        Continuation::CountryListing(Box::new(country.clone())),
    );
    Ok(Build::partial(country, vec![listing]))
}

/// Appends one listing page to a country
///
/// An empty page ends the listing and completes the country; any other page
/// is followed by the next one.
pub fn build_country_listing(
    doc: &Document,
    mut country: Country,
    site: &Site,
) -> ParseResult<Build<Country>> {
    let page = doc.json()?;
    let rows = page.rows("/aaData", "aaData")?.len();

    if rows == 0 {
        return Ok(Build::complete(country, Vec::new()));
    }

    country.bands.extend(
        (0..rows)
            .filter_map(|row| page.link(&format!("/aaData/{}/0", row)))
            .filter_map(|link| stub_from_link(&link)),
    );

    let next = FetchRequest::new(
        next_page(page.url().as_str(), site.page_size())?,
        Continuation::CountryListing(Box::new(country.clone())),
    );
    Ok(Build::partial(country, vec![next]))
}
