//! Lineup and band-history resolution
//!
//! Band, release and member pages list people (or bands) in rows grouped by
//! tab: current, past, live and so on. A row's group is the id of the nearest
//! ancestor carrying one, reduced to its last `_`-separated token. Each page
//! also has an "all members" tab repeating every other tab; its rows are
//! skipped so nobody is counted twice.

use crate::crawler::{Continuation, FetchRequest};
use crate::model::{Lineup, LineupEntry, MemberBands, Membership};
use crate::query::{HtmlPage, Node};
use crate::url::{group_key, member_band_id, metallum_id, resolve_link};
use crate::ParseResult;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Container of the band page tab that repeats every other lineup tab
pub const BAND_ALL_MEMBERS: &str = "band_tab_members_all";

/// Container of the release page tab that repeats every other lineup tab
pub const RELEASE_ALL_MEMBERS: &str = "album_all_members_lineup";

/// Band id used for history entries of bands without a page on the site
pub const NO_BAND_PAGE: &str = "N/A";

fn role_pattern() -> &'static Regex {
    static ROLE: OnceLock<Regex> = OnceLock::new();
    ROLE.get_or_init(|| Regex::new(r"[\d+a-zA-Z ]+(?: [\w+]+|[\w+]+)").expect("role pattern is valid"))
}

/// Replaces every parenthesized group with a separator
///
/// Unbalanced closing parentheses are dropped; an unclosed group swallows the
/// rest of the text.
fn strip_parenthesized(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => {
                if depth == 0 {
                    out.push(',');
                }
                depth += 1;
            }
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Splits a free-text role cell into roles
///
/// Date ranges and notes in parentheses never become roles. Order of first
/// appearance is kept and repeats are dropped.
///
/// ```
/// use metallum_crawler::builders::lineup::extract_roles;
///
/// assert_eq!(extract_roles("Vocals (1998-2001), Guitars"), vec!["Vocals", "Guitars"]);
/// ```
pub fn extract_roles(text: &str) -> Vec<String> {
    let cleaned = strip_parenthesized(text);
    let mut roles: Vec<String> = Vec::new();
    for found in role_pattern().find_iter(&cleaned) {
        let role = found.as_str().trim();
        if !role.is_empty() && !roles.iter().any(|r| r == role) {
            roles.push(role.to_string());
        }
    }
    roles
}

/// Rows matching `path`, each paired with its role-group key
///
/// Rows without an identified container cannot be grouped and are skipped,
/// as are rows whose container is one of `excluded`.
pub fn grouped_rows<'a>(
    page: &'a HtmlPage,
    path: &str,
    excluded: &[&str],
) -> Vec<(String, Node<'a>)> {
    page.select(path)
        .into_iter()
        .filter_map(|row| {
            let Some(container) = row.closest_id() else {
                tracing::debug!("Skipping ungrouped row on {}", page.url());
                return None;
            };
            if excluded.contains(&container) {
                return None;
            }
            Some((group_key(container), row))
        })
        .collect()
}

/// Reads the lineup rows of a band or release page
///
/// Returns the bucketed lineup and one member request per row, so every
/// listed person also gets a member record.
pub fn resolve_lineup(page: &HtmlPage, excluded: &str) -> ParseResult<(Lineup, Vec<FetchRequest>)> {
    let mut lineup = Lineup::new();
    let mut members = Vec::new();

    for (group, row) in grouped_rows(page, "tr.lineupRow", &[excluded]) {
        let Some(link) = row.link("td:nth-of-type(1) a") else {
            tracing::debug!("Lineup row without member link on {}", page.url());
            continue;
        };
        let Some(id) = metallum_id(&link.href) else {
            tracing::debug!("Member link '{}' carries no id", link.href);
            continue;
        };
        let roles = row
            .text("td:nth-of-type(2)")
            .map(|cell| extract_roles(&cell))
            .unwrap_or_default();

        members.push(FetchRequest::new(
            resolve_link(page.url(), &link.href)?,
            Continuation::Member {
                metallum_id: id.clone(),
            },
        ));
        lineup.entry(group).or_default().push(LineupEntry {
            metallum_id: id,
            name: link.text,
            roles,
        });
    }

    Ok((lineup, members))
}

/// Reads the band-history rows of a member page
pub fn resolve_band_history(page: &HtmlPage) -> MemberBands {
    let mut bands = MemberBands::new();

    for (group, row) in grouped_rows(page, r#"div[id^="memberInBand_"]"#, &[]) {
        bands.entry(group).or_default().push(membership(&row));
    }

    bands
}

fn membership(row: &Node<'_>) -> Membership {
    let band_id = row.own_attr("id").and_then(member_band_id);
    let (metallum_id, name) = match (band_id, row.link("h3 a")) {
        (Some(id), Some(link)) => (id, link.text),
        _ => (
            NO_BAND_PAGE.to_string(),
            row.text("h3").unwrap_or_default(),
        ),
    };

    // Per-release rows are more precise than the summary line when present
    let release_rows = row.select("table tr");
    let cells: Vec<String> = if release_rows.is_empty() {
        row.all("p strong")
    } else {
        release_rows
            .iter()
            .filter_map(|r| r.text("td:nth-of-type(3)"))
            .collect()
    };
    let roles: BTreeSet<String> = cells.iter().flat_map(|cell| extract_roles(cell)).collect();

    Membership {
        metallum_id,
        name,
        roles,
    }
}
