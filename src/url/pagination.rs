//! Offset pagination for the site's JSON listing endpoints

use crate::{ParseError, ParseResult};
use regex::Regex;
use std::sync::OnceLock;

/// Rows per page served by the listing endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 500;

fn offset_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[?&]iDisplayStart=(\w+)").expect("offset pattern is valid"))
}

/// Computes the URL of the page following `url`
///
/// The listing URL must carry exactly one integer `iDisplayStart` parameter;
/// the returned URL is identical except that the offset is increased by
/// `page_size`.
///
/// # Errors
///
/// Returns `ParseError::MissingOffset` if the parameter is absent or not an
/// integer. Only listing URLs built from known endpoint templates should ever
/// reach this function.
///
/// # Example
///
/// ```
/// use metallum_crawler::url::next_page;
///
/// let url = "https://example.com/browse/ajax-letter/l/A/json/1?sEcho=2&iDisplayStart=0";
/// assert_eq!(
///     next_page(url, 500).unwrap(),
///     "https://example.com/browse/ajax-letter/l/A/json/1?sEcho=2&iDisplayStart=500"
/// );
/// ```
pub fn next_page(url: &str, page_size: u32) -> ParseResult<String> {
    let captures = offset_pattern()
        .captures(url)
        .ok_or_else(|| ParseError::MissingOffset(url.to_string()))?;
    let Some(value) = captures.get(1) else {
        return Err(ParseError::MissingOffset(url.to_string()));
    };

    let offset: u64 = value
        .as_str()
        .parse()
        .map_err(|_| ParseError::MissingOffset(url.to_string()))?;

    Ok(format!(
        "{}{}{}",
        &url[..value.start()],
        offset + u64::from(page_size),
        &url[value.end()..]
    ))
}
