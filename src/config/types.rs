use serde::Deserialize;

/// Main configuration structure for sitegrab
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// URL the crawl starts from
    #[serde(rename = "start-url", default)]
    pub start_url: String,

    /// Maximum number of link hops to follow from the start URL
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: u32,

    /// Maximum number of branches allowed to fetch at once
    #[serde(
        rename = "max-concurrent-fetches",
        default = "default_max_concurrent_fetches"
    )]
    pub max_concurrent_fetches: u32,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            start_url: String::new(),
            max_depth: default_max_depth(),
            max_concurrent_fetches: default_max_concurrent_fetches(),
        }
    }
}

/// Page cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory downloaded pages are written to and reread from
    #[serde(rename = "destination-dir", default = "default_destination_dir")]
    pub destination_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            destination_dir: default_destination_dir(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// User agent sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(
        rename = "request-timeout-secs",
        default = "default_request_timeout_secs"
    )]
    pub request_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_max_depth() -> u32 {
    3
}

fn default_max_concurrent_fetches() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get().min(64) as u32)
        .unwrap_or(4)
}

fn default_destination_dir() -> String {
    "storage".to_string()
}

fn default_user_agent() -> String {
    concat!("sitegrab/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}
