//! Metallum-Crawler main entry point
//!
//! This is the command-line interface for the Encyclopaedia Metallum crawler.

use anyhow::Context;
use clap::Parser;
use metallum_crawler::config::{load_config_with_hash, Config};
use metallum_crawler::crawler::{crawl, user_agent, AbortHandle};
use metallum_crawler::output::{export_path, print_statistics};
use metallum_crawler::EntityKind;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Metallum-Crawler: exports Encyclopaedia Metallum as JSON
///
/// Walks the alphabetical band listings, follows every band to its releases,
/// labels, country and members, and writes one JSON array per entity type.
#[derive(Parser, Debug)]
#[command(name = "metallum-crawler")]
#[command(version)]
#[command(about = "Crawls Encyclopaedia Metallum into JSON files", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    if cli.dry_run {
        handle_dry_run(&config, &hash);
        return Ok(());
    }

    handle_crawl(&config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("metallum_crawler=info,warn"),
            1 => EnvFilter::new("metallum_crawler=debug,info"),
            2 => EnvFilter::new("metallum_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the resolved configuration
fn handle_dry_run(config: &Config, hash: &str) {
    println!("=== Metallum-Crawler Dry Run ===\n");

    println!("Crawler Configuration:");
    println!(
        "  Max concurrent fetches: {}",
        config.crawler.max_concurrent_fetches
    );
    println!("  Listing page size: {}", config.crawler.page_size);
    println!("  Request timeout: {}s", config.crawler.request_timeout_secs);
    println!(
        "  Retries: {} ({}ms apart)",
        config.crawler.max_retries, config.crawler.retry_delay_ms
    );

    println!("\nSite:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  Start URL: {}", config.site.start_url);

    println!("\nUser Agent:");
    println!("  {}", user_agent(&config.user_agent));

    println!("\nOutput:");
    let directory = Path::new(&config.output.directory);
    for kind in EntityKind::ALL {
        println!("  {}", export_path(directory, kind).display());
    }

    println!("\n✓ Configuration is valid (hash: {})", hash);
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Starting crawl at {}", config.site.start_url);

    // First Ctrl-C stops new fetches; the run still writes what it finished
    let abort = AbortHandle::new();
    let on_signal = abort.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received; finishing in-flight fetches");
            on_signal.abort();
        }
    });

    let stats = crawl(config, abort).await.context("Crawl failed")?;

    println!();
    print_statistics(&stats);
    Ok(())
}
