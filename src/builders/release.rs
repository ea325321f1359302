use crate::builders::lineup::{resolve_lineup, RELEASE_ALL_MEMBERS};
use crate::builders::Build;
use crate::model::{Release, StubRef};
use crate::query::Document;
use crate::url::numeric_id;
use crate::ParseResult;

/// Completes a release from its own page
///
/// Name, type, date and reviews were filled in from the discography row; the
/// page adds the label and the lineup. Every lineup row also yields a member
/// request.
pub fn build_release(doc: &Document, mut release: Release) -> ParseResult<Build<Release>> {
    let page = doc.html();

    release.label = page
        .link("#album_info > dl:nth-of-type(2) > dd:nth-of-type(1) a")
        .and_then(|link| match numeric_id(&link.href) {
            Some(id) => Some(StubRef::new(id, link.text)),
            None => {
                tracing::debug!("Label link '{}' carries no numeric id", link.href);
                None
            }
        });

    let (lineup, members) = resolve_lineup(&page, RELEASE_ALL_MEMBERS)?;
    release.lineup = lineup;

    Ok(Build::complete(release, members))
}
