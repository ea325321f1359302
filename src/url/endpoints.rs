//! Endpoint templates of the crawled site

use crate::{ParseError, ParseResult};
use url::Url;

/// Path slug of a label's past-bands roster endpoint
pub const PAST_ROSTER_SLUG: &str = "ajax-bands-past";

/// Path slug of a label's current-bands roster endpoint
pub const CURRENT_ROSTER_SLUG: &str = "ajax-bands";

/// Which of a label's two band rosters a page belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Roster {
    Past,
    Current,
}

impl Roster {
    /// Endpoint slug serving this roster
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Past => PAST_ROSTER_SLUG,
            Self::Current => CURRENT_ROSTER_SLUG,
        }
    }

    /// Rewrites a past-bands roster URL into the current-bands one
    ///
    /// A URL that does not contain the past slug comes back unchanged, which is
    /// how the roster chain recognises that it has reached its last page.
    pub fn swap_to_current(url: &str) -> String {
        url.replace(PAST_ROSTER_SLUG, CURRENT_ROSTER_SLUG)
    }
}

/// The crawled site: its root URL and the listing page size
#[derive(Debug, Clone)]
pub struct Site {
    base: Url,
    page_size: u32,
}

impl Site {
    /// Creates a site rooted at `base_url`
    ///
    /// A missing trailing slash is added so that endpoint paths join beneath
    /// the base rather than replacing its last segment.
    pub fn new(base_url: &str, page_size: u32) -> Result<Self, url::ParseError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base, page_size })
    }

    /// Root URL of the site
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Offset increment of the paginated listings
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    fn endpoint(&self, path: &str) -> ParseResult<String> {
        Ok(self.base.join(path)?.to_string())
    }

    /// First page of the band listing for one letter of the index
    pub fn letter_listing(&self, letter: &str) -> ParseResult<String> {
        self.endpoint(&format!(
            "browse/ajax-letter/l/{}/json/1?sEcho=2&iColumns=4&sColumns=&iDisplayStart=0",
            letter
        ))
    }

    /// Full discography table of a band
    pub fn discography(&self, band_id: &str) -> ParseResult<String> {
        self.endpoint(&format!("band/discography/id/{}/tab/all", band_id))
    }

    /// Similar-artists table of a band
    pub fn recommendations(&self, band_id: &str) -> ParseResult<String> {
        self.endpoint(&format!("band/ajax-recommendations/id/{}", band_id))
    }

    /// First page of the band listing of a country
    pub fn country_listing(&self, country_id: &str) -> ParseResult<String> {
        self.endpoint(&format!(
            "browse/ajax-country/c/{}/json/1?sEcho=3&iColumns=4&sColumns=&iDisplayStart=0",
            country_id
        ))
    }

    /// One of the two band rosters of a label, served as a single page
    pub fn label_roster(&self, label_id: &str, roster: Roster) -> ParseResult<String> {
        self.endpoint(&format!(
            "label/{}/nbrPerPage/100000000/id/{}?sEcho=4&iColumns=3&sColumns=",
            roster.slug(),
            label_id
        ))
    }
}

/// Resolves a link found on the page at `page_url` into an absolute URL
pub fn resolve_link(page_url: &Url, href: &str) -> ParseResult<String> {
    page_url
        .join(href.trim())
        .map(|url| url.to_string())
        .map_err(|_| ParseError::BadLink {
            href: href.to_string(),
            base: page_url.to_string(),
        })
}
