use crate::query::Link;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Parses a selector path, logging and discarding invalid ones
fn selector(path: &str) -> Option<Selector> {
    match Selector::parse(path) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::warn!("Invalid selector '{}': {:?}", path, e);
            None
        }
    }
}

fn normalize_text(element: ElementRef<'_>) -> Option<String> {
    let text = element.text().collect::<String>();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// A parsed HTML page
pub struct HtmlPage {
    url: Url,
    html: Html,
}

impl HtmlPage {
    /// Parses an HTML document served from `url`
    pub fn parse(url: Url, body: &str) -> Self {
        Self {
            url,
            html: Html::parse_document(body),
        }
    }

    /// The URL the page was served from; relative links resolve against it
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The document element, the starting point for every query
    pub fn root(&self) -> Node<'_> {
        Node {
            element: self.html.root_element(),
        }
    }

    pub fn text(&self, path: &str) -> Option<String> {
        self.root().text(path)
    }

    pub fn all(&self, path: &str) -> Vec<String> {
        self.root().all(path)
    }

    pub fn attr(&self, path: &str, name: &str) -> Option<String> {
        self.root().attr(path, name)
    }

    pub fn select(&self, path: &str) -> Vec<Node<'_>> {
        self.root().select(path)
    }

    pub fn link(&self, path: &str) -> Option<Link> {
        self.root().link(path)
    }
}

/// An element of a parsed page; queries run over its descendants
#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    /// Trimmed text of the first element matching `path`; `None` when nothing
    /// matches or the text is blank
    pub fn text(&self, path: &str) -> Option<String> {
        self.first(path).and_then(|node| node.own_text())
    }

    /// Trimmed, non-blank texts of every element matching `path`
    pub fn all(&self, path: &str) -> Vec<String> {
        self.select(path)
            .into_iter()
            .filter_map(|node| node.own_text())
            .collect()
    }

    /// Attribute `name` of the first element matching `path`
    pub fn attr(&self, path: &str, name: &str) -> Option<String> {
        self.first(path)
            .and_then(|node| node.own_attr(name))
            .map(str::to_string)
    }

    /// Every element matching `path`, in document order
    pub fn select(&self, path: &str) -> Vec<Node<'a>> {
        let Some(selector) = selector(path) else {
            return Vec::new();
        };
        self.element
            .select(&selector)
            .map(|element| Node { element })
            .collect()
    }

    /// First element matching `path`
    pub fn first(&self, path: &str) -> Option<Node<'a>> {
        let selector = selector(path)?;
        self.element
            .select(&selector)
            .next()
            .map(|element| Node { element })
    }

    /// The first anchor matching `path` that carries an `href`
    pub fn link(&self, path: &str) -> Option<Link> {
        let anchor = self.first(path)?;
        let href = anchor.own_attr("href")?.trim();
        if href.is_empty() {
            return None;
        }
        Some(Link {
            href: href.to_string(),
            text: anchor.own_text().unwrap_or_default(),
        })
    }

    /// Attribute `name` of this element
    pub fn own_attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Trimmed text of this element and its descendants
    pub fn own_text(&self) -> Option<String> {
        normalize_text(self.element)
    }

    /// Id of the nearest ancestor element that has one
    pub fn closest_id(&self) -> Option<&'a str> {
        self.element
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find_map(|ancestor| ancestor.value().id())
    }
}
