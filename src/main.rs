//! Sitegrab main entry point
//!
//! This is the command-line interface for the sitegrab crawler.

use clap::Parser;
use sitegrab::config::{load_config, Config};
use sitegrab::crawler::crawl;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// Exit code reported when a crawl was interrupted by a signal.
const EXIT_INTERRUPTED: i32 = 130;

/// Sitegrab: a depth-bounded, resumable web crawler
///
/// Downloads the starting page, extracts its same-host links, and follows
/// them recursively up to the configured depth. Pages are cached on disk,
/// so an interrupted crawl picks up where it left off when rerun.
#[derive(Parser, Debug)]
#[command(name = "sitegrab")]
#[command(version)]
#[command(about = "A depth-bounded, resumable web crawler", long_about = None)]
struct Cli {
    /// Starting URL to crawl (required unless the config file sets start-url)
    #[arg(short, long)]
    url: Option<String>,

    /// Destination directory for downloaded pages
    #[arg(short, long)]
    dir: Option<String>,

    /// Maximum crawl depth
    #[arg(long)]
    depth: Option<u32>,

    /// Maximum number of concurrent fetches
    #[arg(long)]
    concurrency: Option<u32>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    let cancel = CancellationToken::new();
    spawn_signal_handler(cancel.clone());

    tracing::info!("starting crawl of {}", config.crawler.start_url);
    tracing::info!("destination directory: {}", config.storage.destination_dir);
    tracing::info!("max depth: {}", config.crawler.max_depth);

    let visited = crawl(&config, cancel.clone()).await?;

    println!("Visited {} page(s)", visited.len());
    println!("Pages saved to: {}", config.storage.destination_dir);

    if cancel.is_cancelled() {
        println!("Crawl was interrupted. Resume by running the same command again.");
        std::process::exit(EXIT_INTERRUPTED);
    }

    Ok(())
}

/// Builds the effective configuration from the optional config file and the
/// command-line overrides. Flags win over file values.
fn resolve_config(cli: &Cli) -> Result<Config, sitegrab::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("loading configuration from {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    if let Some(url) = &cli.url {
        config.crawler.start_url = url.clone();
    }
    if let Some(dir) = &cli.dir {
        config.storage.destination_dir = dir.clone();
    }
    if let Some(depth) = cli.depth {
        config.crawler.max_depth = depth;
    }
    if let Some(concurrency) = cli.concurrency {
        config.crawler.max_concurrent_fetches = concurrency;
    }

    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitegrab=info,warn"),
            1 => EnvFilter::new("sitegrab=debug,info"),
            2 => EnvFilter::new("sitegrab=trace,debug"),
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

/// Cancels the token on the first SIGINT or SIGTERM.
fn spawn_signal_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        wait_for_signal().await;
        eprintln!("\nReceived shutdown signal, finishing in-flight work...");
        cancel.cancel();
    });
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(err) => {
            tracing::error!("failed to install SIGTERM handler: {}", err);
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = sigterm.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
