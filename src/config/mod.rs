//! Configuration module for sitegrab
//!
//! This module handles loading TOML configuration files and validating the
//! resolved configuration. Every value has a default except the start URL,
//! which must come from either the file or the command line.
//!
//! # Example
//!
//! ```no_run
//! use sitegrab::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawl.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, HttpConfig, StorageConfig};

// Re-export parser and validation functions
pub use parser::load_config;
pub use validation::validate;
