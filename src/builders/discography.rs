use crate::builders::{stub_from_link, Build};
use crate::crawler::{Continuation, FetchRequest};
use crate::model::{Band, Release};
use crate::query::Document;
use crate::url::{resolve_link, Site};
use crate::ParseResult;
use regex::Regex;
use std::sync::OnceLock;

/// Parses a reviews cell such as `"5 (88%)"` into (count, average)
pub fn parse_reviews(text: &str) -> Option<(u32, u32)> {
    static REVIEWS: OnceLock<Regex> = OnceLock::new();
    let reviews =
        REVIEWS.get_or_init(|| Regex::new(r"(\d+) \((\d+)%\)").expect("reviews pattern is valid"));
    let caps = reviews.captures(text)?;
    let count = caps.get(1)?.as_str().parse().ok()?;
    let avg = caps.get(2)?.as_str().parse().ok()?;
    Some((count, avg))
}

/// Adds a band's releases from its discography table
///
/// Each linked row becomes a release stub on the band and a release request
/// seeded with what the row already tells (name, type, date, reviews). Rows
/// without a release link are skipped. The band then waits on its
/// recommendations.
pub fn build_discography(doc: &Document, mut band: Band, site: &Site) -> ParseResult<Build<Band>> {
    let page = doc.html();
    let mut followups = Vec::new();

    for row in page.select("table tbody tr") {
        let Some(link) = row.link("td:nth-of-type(1) a") else {
            continue;
        };
        let Some(stub) = stub_from_link(&link) else {
            tracing::debug!("Release link '{}' carries no id", link.href);
            continue;
        };
        let reviews = row.text("td:nth-of-type(4) a").and_then(|t| parse_reviews(&t));

        let release = Release {
            metallum_id: stub.metallum_id.clone(),
            name: stub.name.clone(),
            band: band.metallum_id.clone(),
            release_type: row.text("td:nth-of-type(2)"),
            release_date: row.text("td:nth-of-type(3)"),
            reviews_count: reviews.map(|(count, _)| count),
            reviews_avg: reviews.map(|(_, avg)| avg),
            ..Release::default()
        };
        followups.push(FetchRequest::new(
            resolve_link(page.url(), &link.href)?,
            Continuation::Release(Box::new(release)),
        ));
        band.releases.push(stub);
    }

    followups.push(FetchRequest::new(
        site.recommendations(&band.metallum_id)?,
        Continuation::Recommendations(Box::new(band.clone())),
    ));

    Ok(Build::partial(band, followups))
}
