//! Crawl orchestration: the recursive, depth- and concurrency-bounded
//! traversal that ties fetching, extraction, and admission together.

use crate::crawler::fetcher::fetch_or_cache;
use crate::crawler::parser::extract_links;
use crate::crawler::visited::VisitedSet;
use crate::CrawlError;
use reqwest::Client;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use url::Url;

/// A concurrent web crawler that downloads pages, extracts same-host links,
/// and follows them to a configured depth.
///
/// Pages are cached under the destination directory, so a rerun resumes
/// where the previous run stopped. The visited set lives on the instance
/// and is scoped to a single [`start`](Crawler::start) call; calling
/// `start` twice on one instance (sequentially or concurrently) is
/// unsupported.
pub struct Crawler {
    client: Client,
    destination_dir: PathBuf,
    visited: VisitedSet,
    gate: Semaphore,
    cancel: CancellationToken,
}

impl Crawler {
    /// Creates a crawler, creating the destination directory if absent.
    pub fn new(
        client: Client,
        destination_dir: impl Into<PathBuf>,
        max_concurrent_fetches: usize,
        cancel: CancellationToken,
    ) -> Result<Self, CrawlError> {
        let destination_dir = destination_dir.into();
        std::fs::create_dir_all(&destination_dir)?;

        Ok(Self {
            client,
            destination_dir,
            visited: VisitedSet::new(),
            gate: Semaphore::new(max_concurrent_fetches),
            cancel,
        })
    }

    /// Crawls from `start_url` down to `depth` levels and returns every URL
    /// admitted during the run, whether or not its fetch succeeded.
    ///
    /// Returns partial results when the run is cancelled; pages already
    /// written to the cache stay valid for a resumed run.
    pub async fn start(self: Arc<Self>, start_url: &str, depth: u32) -> Vec<String> {
        Arc::clone(&self).branch(start_url.to_string(), depth).await;

        self.visited.snapshot()
    }

    /// One branch of the traversal: a single target and its descendants.
    ///
    /// A branch stops silently when no depth remains, the target
    /// was already admitted by another branch, or the run is cancelled.
    /// Fetch failures terminate the branch alone; siblings and ancestors
    /// are unaffected.
    fn branch(
        self: Arc<Self>,
        url: String,
        depth: u32,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        Box::pin(async move {
            if depth == 0 {
                return;
            }

            if !self.visited.try_admit(&url) {
                return;
            }

            if self.cancel.is_cancelled() {
                return;
            }

            let links = match self.fetch(&url).await {
                Ok(links) => links,
                Err(CrawlError::Cancelled) => return,
                Err(err) => {
                    tracing::warn!("failed to fetch {}: {}", url, err);
                    return;
                }
            };

            tracing::info!("{}: found {} link(s)", url, links.len());

            let mut branches = JoinSet::new();

            for link in links {
                branches.spawn(Arc::clone(&self).branch(link, depth - 1));
            }

            // A branch returns only after its whole subtree has, so the
            // root call joins every transitive descendant.
            while branches.join_next().await.is_some() {}
        })
    }

    /// Fetches one page through the cache and extracts its outbound links.
    ///
    /// The concurrency gate is held across the fetch and the extraction,
    /// then released before any child branch runs; holding it across the
    /// transitive join would deadlock chains deeper than the permit count.
    async fn fetch(&self, raw_url: &str) -> Result<Vec<String>, CrawlError> {
        let base = Url::parse(raw_url).map_err(|source| CrawlError::UrlParse {
            url: raw_url.to_string(),
            source,
        })?;

        let _permit = match self.gate.acquire().await {
            Ok(permit) => permit,
            // The gate only closes on shutdown, which reads as cancellation.
            Err(_) => return Err(CrawlError::Cancelled),
        };

        let body =
            fetch_or_cache(&self.client, &self.destination_dir, raw_url, &self.cancel).await?;

        Ok(extract_links(&base, &body))
    }
}
