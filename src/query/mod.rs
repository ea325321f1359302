//! Query adapter over fetched documents
//!
//! A [`Document`] is what the fetch service hands back: the final URL and the
//! raw body. Builders view it either as an [`HtmlPage`] (CSS selector paths) or
//! as a [`JsonPage`] (JSON pointer paths). Both views expose the same three
//! lookups, `text`, `all` and `attr`, and all of them treat a missing node as
//! an ordinary `None`/empty result: labels, reviews and countries are
//! legitimately absent on many pages.

mod html;
mod json;

pub use html::{HtmlPage, Node};
pub use json::JsonPage;

use crate::ParseResult;
use url::Url;

/// A fetched page
#[derive(Debug, Clone)]
pub struct Document {
    url: Url,
    body: String,
}

impl Document {
    /// Wraps a response body fetched from `url`
    pub fn new(url: Url, body: impl Into<String>) -> Self {
        Self {
            url,
            body: body.into(),
        }
    }

    /// The URL the body was served from
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Raw response body
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the body as HTML. Never fails; broken markup is repaired by the parser.
    pub fn html(&self) -> HtmlPage {
        HtmlPage::parse(self.url.clone(), &self.body)
    }

    /// Parses the body as JSON
    pub fn json(&self) -> ParseResult<JsonPage> {
        JsonPage::parse(self.url.clone(), &self.body)
    }
}

/// An anchor found in a page: where it points and what it says
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub text: String,
}
