//! URL handling module for Metallum-Crawler
//!
//! This module knows the shape of the site's URLs: the endpoint templates the
//! crawl follows, how a metallum id is read out of a link, and how an
//! offset-paginated listing URL advances to its next page.

mod endpoints;
mod ids;
mod pagination;

pub use endpoints::{resolve_link, Roster, Site, CURRENT_ROSTER_SLUG, PAST_ROSTER_SLUG};
pub use ids::{group_key, member_band_id, metallum_id, numeric_id};
pub use pagination::{next_page, DEFAULT_PAGE_SIZE};
