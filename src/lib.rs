//! Metallum-Crawler: a link-following crawler for Encyclopaedia Metallum
//!
//! This crate walks the band listings of the site, follows the links between
//! bands, releases, labels, countries and members, assembles each record across
//! several fetches and exports one JSON file per entity type.

pub mod builders;
pub mod config;
pub mod crawler;
pub mod model;
pub mod output;
pub mod query;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Metallum-Crawler operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised by the fetch service for a single request
///
/// A fetch error never aborts the crawl: the stage that issued the request
/// simply never completes.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Network error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("Invalid URL {url}: {source}")]
    InvalidUrl { url: String, source: ::url::ParseError },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// Errors raised while turning a fetched document into records or requests
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("No iDisplayStart offset in listing URL: {0}")]
    MissingOffset(String),

    #[error("Missing {field} on {url}")]
    MissingField { url: String, field: &'static str },

    #[error("Malformed JSON from {url}: {source}")]
    Json {
        url: String,
        source: serde_json::Error,
    },

    #[error("Cannot resolve link '{href}' against {base}")]
    BadLink { href: String, base: String },

    #[error("Invalid endpoint URL: {0}")]
    Endpoint(#[from] ::url::ParseError),
}

/// Result type alias for Metallum-Crawler operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for builder and pagination operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;

// Re-export commonly used types
pub use config::Config;
pub use model::{EntityKind, Record};
pub use state::EntityState;
pub use url::next_page;
