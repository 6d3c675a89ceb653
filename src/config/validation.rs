use crate::config::types::{Config, CrawlerConfig, HttpConfig, StorageConfig};
use crate::ConfigError;
use url::Url;

/// Validates a fully resolved configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_storage_config(&config.storage)?;
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.start_url.is_empty() {
        return Err(ConfigError::Validation(
            "start-url is required (set it in the config file or pass --url)".to_string(),
        ));
    }

    let url = Url::parse(&config.start_url).map_err(|e| {
        ConfigError::InvalidUrl(format!("invalid start-url '{}': {}", config.start_url, e))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "start-url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "start-url '{}' has no host",
            config.start_url
        )));
    }

    if config.max_concurrent_fetches < 1 || config.max_concurrent_fetches > 100 {
        return Err(ConfigError::Validation(format!(
            "max-concurrent-fetches must be between 1 and 100, got {}",
            config.max_concurrent_fetches
        )));
    }

    Ok(())
}

/// Validates page cache configuration
fn validate_storage_config(config: &StorageConfig) -> Result<(), ConfigError> {
    if config.destination_dir.is_empty() {
        return Err(ConfigError::Validation(
            "destination-dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.crawler.start_url = "https://example.com".to_string();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_missing_start_url_rejected() {
        let config = Config::default();
        let result = validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_malformed_start_url_rejected() {
        let mut config = valid_config();
        config.crawler.start_url = "not a url".to_string();
        let result = validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let mut config = valid_config();
        config.crawler.start_url = "ftp://example.com".to_string();
        let result = validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let mut config = valid_config();
        config.crawler.max_concurrent_fetches = 0;
        let result = validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_excessive_concurrency_rejected() {
        let mut config = valid_config();
        config.crawler.max_concurrent_fetches = 1000;
        let result = validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_empty_destination_dir_rejected() {
        let mut config = valid_config();
        config.storage.destination_dir = String::new();
        let result = validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = valid_config();
        config.http.request_timeout_secs = 0;
        let result = validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }
}
