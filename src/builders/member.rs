use crate::builders::lineup::resolve_band_history;
use crate::builders::Build;
use crate::model::Member;
use crate::query::Document;
use crate::{ParseError, ParseResult};

/// Builds a member from their page: name and band history
pub fn build_member(doc: &Document, metallum_id: &str) -> ParseResult<Build<Member>> {
    let page = doc.html();

    let name = page
        .text("#member_info > .float_left > dd:nth-of-type(1)")
        .ok_or_else(|| ParseError::MissingField {
            url: page.url().to_string(),
            field: "member name",
        })?;

    let member = Member {
        metallum_id: metallum_id.to_string(),
        name,
        bands: resolve_band_history(&page),
    };
    Ok(Build::complete(member, Vec::new()))
}
