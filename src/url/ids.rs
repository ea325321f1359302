use regex::Regex;
use std::sync::OnceLock;

/// Extracts the metallum id of a linked entity: the last path segment of the link
///
/// Query strings and fragments are not part of the id. Returns `None` when the
/// link has no usable segment.
///
/// ```
/// use metallum_crawler::url::metallum_id;
///
/// assert_eq!(metallum_id("https://www.metal-archives.com/bands/Darkthrone/146").as_deref(), Some("146"));
/// assert_eq!(metallum_id("https://www.metal-archives.com/lists/NO").as_deref(), Some("NO"));
/// ```
pub fn metallum_id(link: &str) -> Option<String> {
    let end = link.find(['?', '#']).unwrap_or(link.len());
    link[..end]
        .rsplit('/')
        .next()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// Extracts the first run of digits from the last raw segment of a link
///
/// Label links on release pages carry tab anchors (`.../labels/Name/2#label_tabs_albums`),
/// so their id has to be dug out of the segment rather than taken verbatim.
pub fn numeric_id(link: &str) -> Option<String> {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    let digits = DIGITS.get_or_init(|| Regex::new(r"\d+").expect("digit pattern is valid"));

    let segment = link.rsplit('/').next()?;
    digits.find(segment).map(|m| m.as_str().to_string())
}

/// Reads the band id out of a member page's `memberInBand_<id>` row id
pub fn member_band_id(row_id: &str) -> Option<String> {
    static ROW: OnceLock<Regex> = OnceLock::new();
    let row = ROW.get_or_init(|| Regex::new(r"^memberInBand_(\d+)").expect("row pattern is valid"));

    row.captures(row_id)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Role-group key of a roster container id: the token after the last underscore
///
/// `band_tab_members_current` → `current`, `artist_tab_active` → `active`.
pub fn group_key(element_id: &str) -> String {
    element_id
        .rsplit('_')
        .next()
        .unwrap_or(element_id)
        .trim()
        .to_string()
}
