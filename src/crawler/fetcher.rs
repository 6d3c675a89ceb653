//! Page store: disk cache plus HTTP download
//!
//! Resolving a URL to content first consults the destination directory;
//! a cache miss performs a GET and persists the body while buffering it,
//! which is what makes an interrupted run resumable.

use crate::config::HttpConfig;
use crate::url::cache_filename;
use crate::CrawlError;
use reqwest::{Client, StatusCode};
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio_util::sync::CancellationToken;

/// Builds the HTTP client used for every download in a crawl run.
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Resolves `raw_url` to its content, reading the cache when possible.
///
/// A missing cache file triggers a download; any other read failure is an
/// I/O error for this fetch.
pub async fn fetch_or_cache(
    client: &Client,
    destination_dir: &Path,
    raw_url: &str,
    cancel: &CancellationToken,
) -> Result<Vec<u8>, CrawlError> {
    let path = destination_dir.join(cache_filename(raw_url));

    match tokio::fs::read(&path).await {
        Ok(contents) => {
            tracing::debug!("cache hit for {}", raw_url);
            return Ok(contents);
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(CrawlError::Io(err)),
    }

    download_and_save(client, raw_url, &path, cancel).await
}

/// Downloads `url`, persisting the body to `path` and returning it.
///
/// The body is streamed once into two sinks, the destination file and an
/// in-memory buffer, so the returned bytes and the cache file are
/// identical. 404 maps to [`CrawlError::NotFound`], any other non-200
/// status to [`CrawlError::UnexpectedStatus`]; neither creates a file.
pub async fn download_and_save(
    client: &Client,
    url: &str,
    path: &Path,
    cancel: &CancellationToken,
) -> Result<Vec<u8>, CrawlError> {
    let response = tokio::select! {
        _ = cancel.cancelled() => return Err(CrawlError::Cancelled),
        result = client.get(url).send() => result?,
    };

    match response.status() {
        StatusCode::OK => {}
        StatusCode::NOT_FOUND => return Err(CrawlError::NotFound),
        status => return Err(CrawlError::UnexpectedStatus(status.as_u16())),
    }

    match copy_body_to_file(response, path, cancel).await {
        Ok(buffer) => Ok(buffer),
        Err(err) => {
            // A half-written file must not read as a cached page next run.
            let _ = tokio::fs::remove_file(path).await;
            Err(err)
        }
    }
}

async fn copy_body_to_file(
    mut response: reqwest::Response,
    path: &Path,
    cancel: &CancellationToken,
) -> Result<Vec<u8>, CrawlError> {
    let mut file = File::create(path).await?;
    let mut buffer = Vec::new();

    loop {
        let chunk = tokio::select! {
            _ = cancel.cancelled() => return Err(CrawlError::Cancelled),
            chunk = response.chunk() => chunk?,
        };

        let Some(bytes) = chunk else { break };
        file.write_all(&bytes).await?;
        buffer.extend_from_slice(&bytes);
    }

    file.flush().await?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let config = HttpConfig::default();
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn test_build_http_client_with_custom_settings() {
        let config = HttpConfig {
            user_agent: "TestCrawler/1.0".to_string(),
            request_timeout_secs: 5,
        };
        assert!(build_http_client(&config).is_ok());
    }

    // Download and cache behavior is exercised end-to-end against mock
    // servers in tests/crawl_tests.rs.
}
