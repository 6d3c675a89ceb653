//! Crawler module for web page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - The download-or-cache page store
//! - HTML link extraction
//! - The once-only visited set
//! - The recursive, concurrency-bounded crawl itself

mod coordinator;
mod fetcher;
mod parser;
mod visited;

pub use coordinator::Crawler;
pub use fetcher::{build_http_client, download_and_save, fetch_or_cache};
pub use parser::extract_links;
pub use visited::VisitedSet;

use crate::config::{validate, Config};
use crate::CrawlError;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Runs a complete crawl described by `config`.
///
/// This is the entry point used by the binary: it validates the
/// configuration, builds the HTTP client, and runs the crawl to completion
/// or cancellation, returning the visited-URL list.
///
/// # Arguments
///
/// * `config` - The resolved crawler configuration
/// * `cancel` - Token observed cooperatively; cancelling it stops new
///   fetches and aborts in-flight ones
pub async fn crawl(config: &Config, cancel: CancellationToken) -> Result<Vec<String>, CrawlError> {
    validate(config)?;

    let client = build_http_client(&config.http)?;

    let crawler = Arc::new(Crawler::new(
        client,
        config.storage.destination_dir.as_str(),
        config.crawler.max_concurrent_fetches as usize,
        cancel,
    )?);

    Ok(crawler
        .start(&config.crawler.start_url, config.crawler.max_depth)
        .await)
}
