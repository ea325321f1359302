use crate::builders::lineup::{resolve_lineup, BAND_ALL_MEMBERS};
use crate::builders::{stub_from_link, Build};
use crate::crawler::{Continuation, FetchRequest};
use crate::model::Band;
use crate::query::Document;
use crate::url::{resolve_link, Site};
use crate::{ParseError, ParseResult};

const STATS_LEFT: &str = "#band_stats > .float_left";
const STATS_RIGHT: &str = "#band_stats > .float_right";

/// Builds a band from its own page
///
/// The id comes from the link the band was reached through; the page itself
/// only supplies the name and header fields. The band then waits on its
/// discography, which in turn requests its recommendations.
pub fn build_band(doc: &Document, metallum_id: &str, site: &Site) -> ParseResult<Build<Band>> {
    let page = doc.html();

    let name = page
        .text("#band_info h1 a")
        .or_else(|| page.text("#band_info h1"))
        .ok_or_else(|| ParseError::MissingField {
            url: page.url().to_string(),
            field: "band name",
        })?;

    let field = |side: &str, n: usize| page.text(&format!("{} > dd:nth-of-type({})", side, n));
    let country = page
        .link(&format!("{} > dd:nth-of-type(1) a", STATS_LEFT))
        .and_then(|link| stub_from_link(&link).map(|stub| (link, stub)));
    let label = page
        .link(&format!("{} > dd:nth-of-type(3) a", STATS_RIGHT))
        .and_then(|link| stub_from_link(&link).map(|stub| (link, stub)));

    let (lineup, mut followups) = resolve_lineup(&page, BAND_ALL_MEMBERS)?;

    if let Some((link, stub)) = &label {
        followups.push(FetchRequest::new(
            resolve_link(page.url(), &link.href)?,
            Continuation::Label(stub.clone()),
        ));
    }
    if let Some((link, stub)) = &country {
        followups.push(FetchRequest::new(
            resolve_link(page.url(), &link.href)?,
            Continuation::Country(stub.clone()),
        ));
    }

    let band = Band {
        metallum_id: metallum_id.to_string(),
        name,
        country: country.map(|(_, stub)| stub),
        location: field(STATS_LEFT, 2),
        status: field(STATS_LEFT, 3),
        founding_year: field(STATS_LEFT, 4),
        genre: field(STATS_RIGHT, 1),
        lyrical_themes: field(STATS_RIGHT, 2),
        current_label: label.map(|(_, stub)| stub),
        lineup,
        ..Band::default()
    };

    followups.push(FetchRequest::new(
        site.discography(metallum_id)?,
        Continuation::Discography(Box::new(band.clone())),
    ));

    Ok(Build::partial(band, followups))
}
