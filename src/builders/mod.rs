//! Entity builders
//!
//! A builder takes one fetched document plus the partial record carried by its
//! request, extends the partial with what the page holds and returns it either
//! complete or still partial, together with the follow-up requests the page
//! points at. Builders are synchronous and never touch shared state; the
//! scheduler decides what happens to their results.
//!
//! Listing builders (the letter index, band and letter listings) produce
//! requests only.

pub mod band;
pub mod country;
pub mod discography;
pub mod label;
pub mod lineup;
pub mod listing;
pub mod member;
pub mod recommendations;
pub mod release;

use crate::crawler::FetchRequest;
use crate::model::{Record, StubRef};
use crate::query::Link;
use crate::url::metallum_id;

/// Result of running a builder on one page
#[derive(Debug, Clone, PartialEq)]
pub enum Build<T> {
    /// The record is finished from this builder's point of view
    Complete {
        record: T,
        followups: Vec<FetchRequest>,
    },

    /// The record still waits on follow-up pages
    Partial {
        partial: T,
        followups: Vec<FetchRequest>,
    },
}

impl<T> Build<T> {
    pub fn complete(record: T, followups: Vec<FetchRequest>) -> Self {
        Self::Complete { record, followups }
    }

    pub fn partial(partial: T, followups: Vec<FetchRequest>) -> Self {
        Self::Partial { partial, followups }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    /// The record as it stands, complete or not
    pub fn record(&self) -> &T {
        match self {
            Self::Complete { record, .. } => record,
            Self::Partial { partial, .. } => partial,
        }
    }

    pub fn followups(&self) -> &[FetchRequest] {
        match self {
            Self::Complete { followups, .. } | Self::Partial { followups, .. } => followups,
        }
    }

    /// Splits into (record, follow-ups, complete?)
    pub fn into_parts(self) -> (T, Vec<FetchRequest>, bool) {
        match self {
            Self::Complete { record, followups } => (record, followups, true),
            Self::Partial { partial, followups } => (partial, followups, false),
        }
    }

    /// Converts the carried record, keeping completeness and follow-ups
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Build<U> {
        match self {
            Self::Complete { record, followups } => Build::Complete {
                record: f(record),
                followups,
            },
            Self::Partial { partial, followups } => Build::Partial {
                partial: f(partial),
                followups,
            },
        }
    }
}

impl<T: Into<Record>> Build<T> {
    /// Erases the concrete record type
    pub fn into_record(self) -> Build<Record> {
        self.map(Into::into)
    }
}

/// Turns an anchor into a stub of the entity it links to
pub(crate) fn stub_from_link(link: &Link) -> Option<StubRef> {
    let id = metallum_id(&link.href)?;
    Some(StubRef::new(id, link.text.clone()))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Country;
    use crate::EntityKind;

    #[test]
    fn test_map_keeps_completeness() {
        let build = Build::partial(Country::new(StubRef::new("NO", "Norway")), Vec::new());
        let erased = build.into_record();
        assert!(!erased.is_complete());
        assert_eq!(erased.record().kind(), EntityKind::Country);
    }

    #[test]
    fn test_stub_from_link() {
        let link = Link {
            href: "https://www.metal-archives.com/labels/Peaceville_Records/87".to_string(),
            text: "Peaceville Records".to_string(),
        };
        assert_eq!(
            stub_from_link(&link),
            Some(StubRef::new("87", "Peaceville Records"))
        );
    }
}
