//! Logging via `tracing` and `tracing-subscriber`.
//!
//! Verbosity flags pick the level; `RUST_LOG` takes over when no flag is
//! given.

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Configuration for CLI logging.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level filter derived from the verbosity flags.
    pub level_filter: LevelFilter,
    /// Whether `RUST_LOG` overrides the level filter.
    pub use_env_filter: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::INFO,
            use_env_filter: true,
        }
    }
}

/// Install the global subscriber.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = if config.use_env_filter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level_filter.to_string()))
    } else {
        EnvFilter::new(config.level_filter.to_string())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!(error))?;
    Ok(())
}
