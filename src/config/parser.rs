use crate::config::types::Config;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path.
///
/// The result is not yet validated: command-line flags may still override
/// individual values, so [`validate`](crate::config::validate) runs on the
/// fully resolved configuration instead.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use sitegrab::config::load_config;
///
/// let config = load_config(Path::new("crawl.toml")).unwrap();
/// println!("Max depth: {}", config.crawler.max_depth);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)?;

    Ok(config)
}
