//! Crawl settings read from a TOML file
//!
//! Four tables: `[crawler]` (concurrency, listing page size, timeouts and
//! retries), `[site]` (base URL and the letter index the crawl starts from),
//! `[user-agent]` and `[output]` (export directory). Keys are kebab-case.
//!
//! ```no_run
//! use metallum_crawler::config::load_config_with_hash;
//! use std::path::Path;
//!
//! let (config, hash) = load_config_with_hash(Path::new("config.toml")).unwrap();
//! println!("Crawl starts at {} (config {})", config.site.start_url, hash);
//! ```

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, content_hash, load_config, load_config_with_hash, parse_config};
pub use types::{Config, CrawlerConfig, OutputConfig, SiteConfig, UserAgentConfig};
