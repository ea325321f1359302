use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// A minimal pointer to another entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StubRef {
    pub metallum_id: String,
    pub name: String,
}

impl StubRef {
    pub fn new(metallum_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metallum_id: metallum_id.into(),
            name: name.into(),
        }
    }
}

/// One person of a band or release lineup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineupEntry {
    pub metallum_id: String,
    pub name: String,
    pub roles: Vec<String>,
}

/// One band of a member's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Membership {
    /// Band id, or `"N/A"` for bands without a page on the site
    pub metallum_id: String,
    pub name: String,
    pub roles: BTreeSet<String>,
}

/// Lineup rows bucketed by role-group (`current`, `past`, `live`, `lineup`, ...)
pub type Lineup = BTreeMap<String, Vec<LineupEntry>>;

/// Band-history rows bucketed by role-group (`active`, `past`, `live`, `guest`, ...)
pub type MemberBands = BTreeMap<String, Vec<Membership>>;
