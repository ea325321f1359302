use crate::query::Link;
use crate::{ParseError, ParseResult};
use scraper::{Html, Selector};
use serde_json::Value;
use url::Url;

/// A parsed JSON payload, queried with JSON pointers (`/aaData/0/0`)
#[derive(Debug, Clone)]
pub struct JsonPage {
    url: Url,
    value: Value,
}

impl JsonPage {
    /// Parses a JSON body served from `url`
    pub fn parse(url: Url, body: &str) -> ParseResult<Self> {
        let value = serde_json::from_str(body).map_err(|source| ParseError::Json {
            url: url.to_string(),
            source,
        })?;
        Ok(Self { url, value })
    }

    /// The URL the payload was served from
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Scalar at `pointer` as a string; `None` for null, missing or blank values
    pub fn text(&self, pointer: &str) -> Option<String> {
        self.value.pointer(pointer).and_then(scalar)
    }

    /// Scalars of the array at `pointer`
    pub fn all(&self, pointer: &str) -> Vec<String> {
        self.value
            .pointer(pointer)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(scalar).collect())
            .unwrap_or_default()
    }

    /// Attribute `name` of the first element of the HTML fragment stored at `pointer`
    ///
    /// Listing endpoints return table cells as markup such as
    /// `<a href="https://…/bands/Name/1">Name</a>`.
    pub fn attr(&self, pointer: &str, name: &str) -> Option<String> {
        let markup = self.value.pointer(pointer)?.as_str()?;
        let fragment = Html::parse_fragment(markup);
        let selector = Selector::parse("*").ok()?;
        let value = fragment
            .root_element()
            .select(&selector)
            .find_map(|element| element.value().attr(name))
            .map(str::to_string);
        value
    }

    /// The anchor stored as markup at `pointer`
    pub fn link(&self, pointer: &str) -> Option<Link> {
        let markup = self.value.pointer(pointer)?.as_str()?;
        let fragment = Html::parse_fragment(markup);
        let selector = Selector::parse("a[href]").ok()?;
        let anchor = fragment.select(&selector).next()?;
        let href = anchor.value().attr("href")?.trim().to_string();
        let text = anchor.text().collect::<String>().trim().to_string();
        Some(Link { href, text })
    }

    /// Rows of the array at `pointer`
    ///
    /// Unlike the other queries this one is strict: a payload without the
    /// array is not an empty page but a `MissingField` named `field`.
    pub fn rows(&self, pointer: &str, field: &'static str) -> ParseResult<&[Value]> {
        self.value
            .pointer(pointer)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or_else(|| ParseError::MissingField {
                url: self.url.to_string(),
                field,
            })
    }
}

fn scalar(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
