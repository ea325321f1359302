//! Builders for the pages that only lead to other pages

use crate::crawler::{Continuation, FetchRequest};
use crate::query::Document;
use crate::url::{metallum_id, next_page, resolve_link, Site};
use crate::ParseResult;

/// Anchors of the alphabetical index on the browse-by-letter page
const LETTER_LINKS: &str = "body > div > div:nth-of-type(3) > div:nth-of-type(1) > ul > li > a";

/// Reads the alphabetical index and requests the first listing page of each letter
///
/// The letter is the last path segment of each index link (`.../letter/A`,
/// `.../letter/NBR`, `.../letter/~`).
pub fn letter_index(doc: &Document, site: &Site) -> ParseResult<Vec<FetchRequest>> {
    let page = doc.html();
    let mut requests: Vec<FetchRequest> = Vec::new();

    for node in page.select(LETTER_LINKS) {
        let Some(href) = node.own_attr("href") else {
            continue;
        };
        let Some(letter) = metallum_id(href) else {
            continue;
        };
        let url = site.letter_listing(&letter)?;
        if !requests.iter().any(|r| r.url == url) {
            requests.push(FetchRequest::new(url, Continuation::BandListing));
        }
    }

    if requests.is_empty() {
        tracing::warn!("No letter links found on {}", page.url());
    }
    Ok(requests)
}

/// Requests every band of one listing page, then the next page
///
/// An empty page ends the listing.
pub fn band_listing(doc: &Document, site: &Site) -> ParseResult<Vec<FetchRequest>> {
    let page = doc.json()?;
    let rows = page.rows("/aaData", "aaData")?.len();
    if rows == 0 {
        tracing::debug!("Listing exhausted at {}", page.url());
        return Ok(Vec::new());
    }

    let mut requests = Vec::with_capacity(rows + 1);
    for row in 0..rows {
        let Some(link) = page.link(&format!("/aaData/{}/0", row)) else {
            tracing::debug!("Listing row {} on {} has no band link", row, page.url());
            continue;
        };
        let Some(id) = metallum_id(&link.href) else {
            continue;
        };
        requests.push(FetchRequest::new(
            resolve_link(page.url(), &link.href)?,
            Continuation::Band { metallum_id: id },
        ));
    }

    requests.push(FetchRequest::new(
        next_page(page.url().as_str(), site.page_size())?,
        Continuation::BandListing,
    ));
    Ok(requests)
}
