use crate::builders::{stub_from_link, Build};
use crate::crawler::{Continuation, FetchRequest};
use crate::model::Band;
use crate::query::Document;
use crate::url::resolve_link;
use crate::{ParseError, ParseResult};

const SEE_MORE: &str = "see more";
const TOP_ONLY: &str = "show top 20 only";
const NO_ARTISTS: &str = "no_artists";
const EXPANDED: &str = "?showMoreSimilar=1";

/// Adds a band's similar artists and completes it
///
/// The table's last row is a control row when it reads "see more" (the full
/// list lives at the expanded endpoint, fetched instead of this page's rows),
/// "show top 20 only" (the expanded list's collapse link) or carries the
/// `no_artists` cell.
pub fn build_recommendations(doc: &Document, mut band: Band) -> ParseResult<Build<Band>> {
    let page = doc.html();
    let mut rows = page.select("table tbody tr");

    // The endpoint always serves at least an artist row or the no_artists row
    let Some(last) = rows.last().copied() else {
        return Err(ParseError::MissingField {
            url: page.url().to_string(),
            field: "recommendations table",
        });
    };
    let label = last.text("td a");
    let cell_id = last.attr("td", "id");

    if label.as_deref() == Some(SEE_MORE) {
        let expanded = resolve_link(page.url(), EXPANDED)?;
        if expanded != page.url().as_str() {
            return Ok(Build::partial(
                band.clone(),
                vec![FetchRequest::new(
                    expanded,
                    Continuation::Recommendations(Box::new(band)),
                )],
            ));
        }
        tracing::debug!("Expanded recommendations still offer more on {}", page.url());
        rows.pop();
    } else if label.as_deref() == Some(TOP_ONLY) || cell_id.as_deref() == Some(NO_ARTISTS) {
        rows.pop();
    }

    band.similar_artists.extend(
        rows.iter()
            .filter_map(|row| row.link("td:nth-of-type(1) a"))
            .filter_map(|link| stub_from_link(&link)),
    );

    Ok(Build::complete(band, Vec::new()))
}
