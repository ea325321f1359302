use crate::builders::{stub_from_link, Build};
use crate::crawler::{Continuation, FetchRequest};
use crate::model::{Label, StubRef};
use crate::query::Document;
use crate::url::{Roster, Site};
use crate::ParseResult;

const DETAILS: &str = "#label_info > dl:nth-of-type(2)";

/// Builds a label from its own page and requests its past-bands roster
pub fn build_label(doc: &Document, stub: StubRef, site: &Site) -> ParseResult<Build<Label>> {
    let page = doc.html();
    let mut label = Label::new(stub);

    label.status = page
        .text(&format!("{} > dd:nth-of-type(1) span", DETAILS))
        .or_else(|| page.text(&format!("{} > dd:nth-of-type(1)", DETAILS)));
    label.specialized_in = page.text(&format!("{} > dd:nth-of-type(2)", DETAILS));
    label.founding_year = page.text(&format!("{} > dd:nth-of-type(3)", DETAILS));
    label.country = page
        .link(r#"#label_info > dl:nth-of-type(1) a[href*="/lists/"]"#)
        .and_then(|link| stub_from_link(&link));

    let roster = FetchRequest::new(
        site.label_roster(&label.metallum_id, Roster::Past)?,
        Continuation::LabelRoster {
            label: Box::new(label.clone()),
            roster: Roster::Past,
        },
    );

    Ok(Build::partial(label, vec![roster]))
}

/// Appends one roster page to a label
///
/// Past bands are read first. Rewriting the past-roster URL into the current
/// one tells the two apart: a URL the rewrite leaves unchanged was already the
/// current roster, and the label is complete.
pub fn build_label_roster(doc: &Document, mut label: Label, roster: Roster) -> ParseResult<Build<Label>> {
    let page = doc.json()?;

    let rows = page.rows("/aaData", "aaData")?.len();
    let bands = (0..rows)
        .filter_map(|row| page.link(&format!("/aaData/{}/0", row)))
        .filter_map(|link| stub_from_link(&link));
    match roster {
        Roster::Past => label.past_bands.extend(bands),
        Roster::Current => label.current_bands.extend(bands),
    }

    let url = page.url().as_str();
    let current = Roster::swap_to_current(url);
    if current == url {
        return Ok(Build::complete(label, Vec::new()));
    }

    let next = FetchRequest::new(
        current,
        Continuation::LabelRoster {
            label: Box::new(label.clone()),
            roster: Roster::Current,
        },
    );
    Ok(Build::partial(label, vec![next]))
}
